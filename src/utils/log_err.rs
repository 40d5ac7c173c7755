use axum::http::StatusCode;

/// Extension trait for logging handler errors and converting them to the
/// status code the caller sees.
pub trait LogErr<T> {
    /// Log the error with context and return INTERNAL_SERVER_ERROR.
    fn log_500(self, context: &str) -> Result<T, StatusCode>;

    /// Log the error with context and return a custom StatusCode.
    fn log_status(self, context: &str, status: StatusCode) -> Result<T, StatusCode>;
}

impl<T, E: std::fmt::Display> LogErr<T> for Result<T, E> {
    fn log_500(self, context: &str) -> Result<T, StatusCode> {
        self.log_status(context, StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn log_status(self, context: &str, status: StatusCode) -> Result<T, StatusCode> {
        self.map_err(|e| {
            tracing::error!("{}: {}", context, e);
            status
        })
    }
}
