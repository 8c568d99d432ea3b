use marvel_client::StoreError;
use marvel_core::error::CoreError;

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The store could not be reached or rejected the request.
    #[error(transparent)]
    Network(#[from] StoreError),

    /// Client-side validation or lookup failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The session was torn down while the request was in flight.
    #[error("Request cancelled")]
    Cancelled,

    /// Submit was requested with no form open.
    #[error("No form is open")]
    FormClosed,
}

impl SessionError {
    /// Transport failures and server-side rejections alike. Server
    /// validation errors carry no distinct schema, so they land here too.
    pub fn is_network(&self) -> bool {
        matches!(self, SessionError::Network(_))
    }

    /// Client-side required-field or range failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::Core(CoreError::Validation(_)))
    }
}
