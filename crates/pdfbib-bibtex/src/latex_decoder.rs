//! LaTeX text normalization
//!
//! Maps the LaTeX escapes found in ADS records to plain Unicode text. This is
//! a fixed substitution table, not a TeX interpreter.
//!
//! Rules run in table order. An escape must come before every escape it is a
//! prefix of (`\lambda` and `\lt` before `\l`, `\~{n}` before `\~`), and the
//! stray-character pass runs last so that a specific escape is never reduced
//! to its bare letter first. Every rule pattern contains a backslash and no
//! replacement produces a stray character, so normalizing twice is the same as
//! normalizing once.

/// Ordered escape → text rules
static LATEX_RULES: &[(&str, &str)] = &[
    // Ligatures and special letters
    ("\\ss", "ß"),
    ("\\ae", "æ"),
    ("\\AE", "Æ"),
    ("\\oe", "œ"),
    ("\\OE", "Œ"),
    ("\\aa", "å"),
    ("\\AA", "Å"),
    // Math symbols
    ("\\times", "✕"),
    ("\\alpha", "α"),
    ("\\beta", "β"),
    ("\\gamma", "γ"),
    ("\\delta", "δ"),
    ("\\lambda", "λ"),
    ("\\mu", "μ"),
    ("\\nu", "ν"),
    ("\\sigma", "σ"),
    ("\\omega", "ω"),
    ("\\Omega", "Ω"),
    ("\\odot", "⊙"),
    ("\\sun", "☉"),
    ("\\pm", "±"),
    ("\\simeq", "≃"),
    ("\\sim", "∼"),
    ("\\lesssim", "≲"),
    ("\\gtrsim", "≳"),
    ("\\leq", "≤"),
    ("\\geq", "≥"),
    ("\\gt", ">"),
    ("\\lt", "<"),
    // Tilde accents before the bare tilde
    ("\\~{n}", "ñ"),
    ("\\~n", "ñ"),
    ("\\~{N}", "Ñ"),
    ("\\~N", "Ñ"),
    ("\\~{a}", "ã"),
    ("\\~a", "ã"),
    ("\\~{o}", "õ"),
    ("\\~o", "õ"),
    // Stroked letters
    ("\\l", "ł"),
    ("\\L", "Ł"),
    ("\\o", "ø"),
    ("\\O", "Ø"),
    // Caron
    ("\\v{c}", "č"),
    ("\\v c", "č"),
    ("\\v{C}", "Č"),
    ("\\v C", "Č"),
    ("\\v{s}", "š"),
    ("\\v s", "š"),
    ("\\v{S}", "Š"),
    ("\\v S", "Š"),
    ("\\v{z}", "ž"),
    ("\\v z", "ž"),
    ("\\v{Z}", "Ž"),
    ("\\v Z", "Ž"),
    ("\\v{r}", "ř"),
    ("\\v r", "ř"),
    ("\\v{e}", "ě"),
    ("\\v e", "ě"),
    // Cedilla
    ("\\c{c}", "ç"),
    ("\\c c", "ç"),
    ("\\c{s}", "ş"),
    ("\\c s", "ş"),
    // Tilde and dash commands
    ("\\~", "~"),
    ("\\tilde", "~"),
    ("\\ndash", "-"),
    ("\\&", "&"),
    // Acute accent
    ("\\'{\\i}", "í"),
    ("\\'a", "á"),
    ("\\'A", "Á"),
    ("\\'c", "ć"),
    ("\\'e", "é"),
    ("\\'E", "É"),
    ("\\'i", "í"),
    ("\\'n", "ń"),
    ("\\'o", "ó"),
    ("\\'O", "Ó"),
    ("\\'s", "ś"),
    ("\\'u", "ú"),
    ("\\'y", "ý"),
    ("\\'z", "ź"),
    // Grave accent
    ("\\`a", "à"),
    ("\\`e", "è"),
    ("\\`i", "ì"),
    ("\\`o", "ò"),
    ("\\`u", "ù"),
    // Circumflex
    ("\\^a", "â"),
    ("\\^e", "ê"),
    ("\\^i", "î"),
    ("\\^o", "ô"),
    ("\\^u", "û"),
    // Umlaut
    ("\\\"a", "ä"),
    ("\\\"A", "Ä"),
    ("\\\"e", "ë"),
    ("\\\"i", "ï"),
    ("\\\"o", "ö"),
    ("\\\"O", "Ö"),
    ("\\\"u", "ü"),
    ("\\\"U", "Ü"),
    // Dotless i
    ("\\i", "ı"),
];

/// Characters left over once the specific escapes are gone, removed in order
static STRAY_CHARACTERS: &[&str] = &[
    "\\\"", "\\'", "'", "`", "{", "}", "$", "^", "_", "\\",
];

/// Normalize LaTeX escapes in `input` to plain text
pub fn normalize_latex(input: &str) -> String {
    let mut result = input.to_string();

    for (pattern, replacement) in LATEX_RULES {
        if result.contains(pattern) {
            result = result.replace(pattern, replacement);
        }
    }

    for pattern in STRAY_CHARACTERS {
        if result.contains(pattern) {
            result = result.replace(pattern, "");
        }
    }

    result
}
