use thiserror::Error;

/// The default input as text.
pub const TEST_NUMBERS: &str = "43 96 69 13 21 7 66 69 99 1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("token {index} ({token:?}) is not a valid i32")]
    InvalidToken { index: usize, token: String },
}

/// Parse whitespace separated integers.
///
/// Runs of whitespace count as a single separator. Empty input gives an empty vec.
pub fn parse_ints(text: &str) -> Result<Vec<i32>, ParseError> {
    text.split_ascii_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse().map_err(|_| ParseError::InvalidToken {
                index,
                token: token.to_owned(),
            })
        })
        .collect()
}
