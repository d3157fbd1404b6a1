//! ADS BibTeX query responses
//!
//! The query page starts with a short banner ("Query Results from the ADS
//! Database", a count of retrieved abstracts) followed by the record itself.

use pdfbib_bibtex::braces::split_blocks;
use pdfbib_bibtex::parser::header_type;

/// Lines of the first record in a response page, from its header line on
pub fn record_lines(body: &str) -> Option<Vec<&str>> {
    split_blocks(body).into_iter().find_map(|block| {
        let start = block
            .lines
            .iter()
            .position(|line| header_type(line).is_some())?;
        Some(block.lines[start..].to_vec())
    })
}
