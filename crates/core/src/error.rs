/// Domain-level error shared by the store, the HTTP service and the client.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Displays the bare message so it can be shown to the visitor as is.
    #[error("{0}")]
    Unauthorized(String),
}
