/// Error returned by a persistence sink when a record could not be stored.
///
/// Always recoverable: the caller keeps the draft and may try again.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The store answered but refused the record.
    #[error("store rejected the record ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Transport or backend-specific failure.
    #[error("backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl PersistenceError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Create a rejection with the store's status code and message.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}
