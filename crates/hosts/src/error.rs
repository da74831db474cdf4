use std::str::Utf8Error;
use thiserror::Error;

/// Error type for decoding the hosts CSV.
///
/// Every variant is fatal for the run: there is no partial decode.
#[derive(Error, Debug)]
pub enum CsvError {
    /// The input bytes are not UTF-8 text.
    #[error("hosts CSV is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    /// A data row does not have exactly six columns.
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A numeric column failed to parse under [`NumericPolicy::Strict`].
    ///
    /// [`NumericPolicy::Strict`]: crate::NumericPolicy::Strict
    #[error("line {line}: invalid {column} {value:?}")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },
}
