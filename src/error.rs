/// Represent errors in the application
///
/// All `ServiceError`s can be surfaced to the user as a notification.
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// Record store failure, with a source tag and the underlying cause.
    Storage(&'static str, String),
    /// Terminal input or output failure.
    Io(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Storage(source, cause) => write!(f, "{source}: {cause}"),
            ServiceError::Io(cause) => write!(f, "IO error: {cause}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Helper for `ServiceError` result
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<sqlx::Error> for ServiceError {
    fn from(error: sqlx::Error) -> Self {
        ServiceError::Storage("Database error", format!("{error}"))
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(error: std::io::Error) -> Self {
        ServiceError::Io(format!("{error}"))
    }
}
