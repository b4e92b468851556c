//! Delimiter sniffing for files that no explicit delimiter could parse.

use masto_model::Delimiter;

use crate::error::ParseFailure;

/// Candidate delimiters in preference order.
pub const SNIFF_CANDIDATES: [Delimiter; 6] = [
    Delimiter::Comma,
    Delimiter::Tab,
    Delimiter::Semicolon,
    Delimiter::Pipe,
    Delimiter::Colon,
    Delimiter::Space,
];

/// Number of non-blank lines inspected.
pub const SNIFF_SAMPLE_LINES: usize = 20;

/// Counts `delimiter` occurrences in `line`, ignoring double-quoted sections.
fn count_unquoted(line: &[u8], delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0usize;
    for &byte in line {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

fn sample_lines(contents: &[u8]) -> Vec<&[u8]> {
    contents
        .split(|&byte| byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
        .take(SNIFF_SAMPLE_LINES)
        .collect()
}

/// Infers the field delimiter from the header line of `contents`.
///
/// The first candidate present on the header line wins, provided no later
/// sampled line has more unquoted occurrences of it than the header. Later
/// lines may have fewer, since short records are padded on load.
pub fn sniff_delimiter(contents: &[u8]) -> Result<Delimiter, ParseFailure> {
    let lines = sample_lines(contents);
    let no_match = ParseFailure::NoConsistentDelimiter {
        candidates: SNIFF_CANDIDATES.len(),
    };
    let Some((header, rest)) = lines.split_first() else {
        return Err(no_match);
    };
    SNIFF_CANDIDATES
        .into_iter()
        .find(|candidate| {
            let byte = candidate.as_byte();
            let fields = count_unquoted(header, byte);
            fields > 0 && rest.iter().all(|line| count_unquoted(line, byte) <= fields)
        })
        .ok_or(no_match)
}
