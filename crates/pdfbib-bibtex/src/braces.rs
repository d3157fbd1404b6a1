//! Balanced-brace scanning
//!
//! One depth tracker serves both record segmentation (where a block ends
//! once its outermost group closes) and value unwrapping (where a value is a
//! single `{...}` group only if its first brace closes at the last
//! character). A backslash escapes the character after it.

/// Tracks brace depth over a stream of characters
#[derive(Debug, Default, Clone)]
pub struct BraceDepth {
    depth: u32,
    escaped: bool,
}

impl BraceDepth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one character. Returns `true` when it closes the outermost group.
    pub fn feed(&mut self, c: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return false;
        }
        match c {
            '\\' => self.escaped = true,
            '{' => self.depth += 1,
            '}' if self.depth > 0 => {
                self.depth -= 1;
                return self.depth == 0;
            }
            _ => {}
        }
        false
    }

    /// Feed a whole string, returning `true` if any character closed the
    /// outermost group.
    pub fn feed_str(&mut self, text: &str) -> bool {
        let mut closed = false;
        for c in text.chars() {
            closed |= self.feed(c);
        }
        closed
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Byte index of the brace that closes the group opened by the first
/// character of `text`, if `text` starts with `{` and the group closes.
pub fn closing_brace(text: &str) -> Option<usize> {
    if !text.starts_with('{') {
        return None;
    }
    let mut tracker = BraceDepth::new();
    text.char_indices()
        .find(|&(_, c)| tracker.feed(c))
        .map(|(i, _)| i)
}

/// Whether `text` is exactly one balanced `{...}` group
pub fn is_wrapped(text: &str) -> bool {
    closing_brace(text).is_some_and(|end| end + 1 == text.len())
}

/// A run of lines holding one balanced record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-based line number of the first line in the block
    pub first_line: u32,
    pub lines: Vec<&'a str>,
}

/// Split text into balanced-brace blocks.
///
/// Blank lines are dropped, and so are lines outside any block that open no
/// brace. A block starts on the first line that opens a brace and ends on the
/// line where brace depth returns to zero. An unterminated block is still
/// returned so the caller can report it.
pub fn split_blocks(text: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut tracker = BraceDepth::new();
    let mut current: Vec<&str> = Vec::new();
    let mut first_line = 0u32;
    let mut opened = false;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if !opened && !line.contains('{') {
            continue;
        }
        if current.is_empty() {
            first_line = index as u32 + 1;
        }
        current.push(line);
        opened = true;
        let closed = tracker.feed_str(line);
        tracker.feed('\n');

        if closed && tracker.depth() == 0 {
            blocks.push(Block {
                first_line,
                lines: std::mem::take(&mut current),
            });
            opened = false;
        }
    }

    if opened {
        blocks.push(Block {
            first_line,
            lines: current,
        });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_brace_nested() {
        assert_eq!(closing_brace("{Ivezi{\\'c}}, Z."), Some(11));
        assert_eq!(closing_brace("{a}{b}"), Some(2));
        assert_eq!(closing_brace("a{b}"), None);
        assert_eq!(closing_brace("{open"), None);
    }

    #[test]
    fn test_is_wrapped() {
        assert!(is_wrapped("{A {B}ook}"));
        assert!(!is_wrapped("{A} and {B}"));
        assert!(!is_wrapped("{"));
        assert!(!is_wrapped("plain"));
    }

    #[test]
    fn test_escaped_braces_do_not_count() {
        assert!(is_wrapped("{50\\% \\{sic\\}}"));
        assert_eq!(closing_brace("{\\}}"), Some(3));
    }

    #[test]
    fn test_split_blocks() {
        let text = "@article{A,\n  title = {One},\n}\n\n\n@book{B,\n  title = {Two {x}}}\n";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].first_line, 1);
        assert_eq!(blocks[0].lines.len(), 3);
        assert_eq!(blocks[1].first_line, 6);
        assert_eq!(blocks[1].lines, vec!["@book{B,", "  title = {Two {x}}}"]);
    }

    #[test]
    fn test_block_starts_at_opening_line() {
        let text = "Query Results from the ADS Database\n\nRetrieved 1 abstracts\n@article{A,\n}\ntrailer\n@book{B,\n}\n";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].first_line, 4);
        assert_eq!(blocks[0].lines, vec!["@article{A,", "}"]);
        assert_eq!(blocks[1].first_line, 7);
        assert_eq!(blocks[1].lines, vec!["@book{B,", "}"]);
    }

    #[test]
    fn test_split_blocks_keeps_unterminated_tail() {
        let blocks = split_blocks("@article{A,\n title = {x},\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines.len(), 2);

        assert!(split_blocks("just a comment\n").is_empty());
    }
}
