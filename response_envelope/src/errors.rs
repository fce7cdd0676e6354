//! Error types for envelope configuration.

/// Errors returned by the envelope configuration operations.
///
/// All variants are local precondition failures. None of them are transient,
/// so retrying the same call with the same arguments fails the same way.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The envelope is in a state where the operation makes no sense: the
    /// data is not a sequence, or paging was never enabled.
    #[error("Invalid state: {0}")]
    InvalidState(String),
    /// A numeric or string argument is outside the accepted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
