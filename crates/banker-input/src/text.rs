//! Tokenizers for the text input format.
//!
//! Values are whitespace-separated; matrix rows are comma-separated:
//! `"0 1 0, 2 0 0, 3 0 2"`.

use banker_core::errors::ParseError;

/// Whitespace-separated non-negative labels, e.g. `"0 1 2 3"`.
pub fn parse_labels(field: &'static str, text: &str) -> Result<Vec<u32>, ParseError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|_| ParseError::InvalidInteger {
                field,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Whitespace-separated integers. Signs are accepted here and rejected by the
/// model so the error can name the offending position.
pub fn parse_vector(field: &'static str, text: &str) -> Result<Vec<i64>, ParseError> {
    text.split_whitespace()
        .map(|token| parse_integer(field, token))
        .collect()
}

/// Comma-separated rows of whitespace-separated integers.
///
/// Blank text is zero rows. A blank row between commas is a row with no
/// entries, which later fails the shape check.
pub fn parse_matrix(field: &'static str, text: &str) -> Result<Vec<Vec<i64>>, ParseError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',').map(|row| parse_vector(field, row)).collect()
}

fn parse_integer(field: &'static str, token: &str) -> Result<i64, ParseError> {
    token.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
        field,
        token: token.to_string(),
    })
}
