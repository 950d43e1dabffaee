use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,

    #[error("Invalid version syntax: {0}")]
    InvalidSyntax(String),

    #[error("Version component out of range: {0}")]
    ComponentOutOfRange(String),
}
