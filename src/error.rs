//! Error types for the host seams.

use thiserror::Error;

/// Failures raised by the storage and document collaborators.
///
/// None of these reach the page: the runtime logs them and carries on, the
/// same way a plain script would leave a failed storage write unnoticed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DarkModeError {
    /// The host exposes no persistent storage (disabled or sandboxed).
    #[error("persistent storage is unavailable")]
    StorageUnavailable,

    /// A storage read or write raised.
    #[error("storage access failed: {0}")]
    Storage(String),

    /// The marker target element does not exist yet.
    #[error("marker target element is missing")]
    MissingRoot,

    /// A class-list or event-listener call raised.
    #[error("DOM call failed: {0}")]
    Dom(String),

    /// The config document failed to parse or validate.
    #[error("config invalid: {0}")]
    Config(String),
}
