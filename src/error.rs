/// Error raised while coercing an inbound candidate or job record.
///
/// Missing fields never error (they coerce to defaults); only a present
/// value of the wrong shape is a contract violation, which the calling
/// layer translates into its own error response.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record must be a JSON object")]
    NotAnObject,
    #[error("field '{field}' expected {expected}, got {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}
