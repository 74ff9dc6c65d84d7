use thiserror::Error;

/// Errors returned by the line-format parsers.
///
/// # Examples
/// ```
/// use netdb_core::ParseError;
///
/// let err = ParseError::Format {
///     line: 3,
///     field: "protocol number",
///     value: "666".to_string(),
/// };
/// assert_eq!(err.to_string(), "line 3: invalid protocol number '666'");
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying stream failed; no records are returned.
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),
    /// A numeric field the format treats as mandatory could not be parsed.
    #[error("line {line}: invalid {field} '{value}'")]
    Format {
        line: usize,
        field: &'static str,
        value: String,
    },
}
