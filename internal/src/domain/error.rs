use thiserror::Error;

/// Decode-time failures. Both stay with the caller of the decode, a rejected
/// payload never turns into a partial command.
#[derive(Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("Unknown command kind: {0}")]
    UnknownCommandKind(String),
    #[error("Malformed arguments: {0}")]
    MalformedArguments(String),
}
