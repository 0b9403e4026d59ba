use thiserror::Error;

/// Raised when a requested style name matches none of the known styles.
///
/// Carries the offending name verbatim so adapters can report it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid case name: {0}")]
pub struct InvalidStyleError(pub String);
