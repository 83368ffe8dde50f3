//! Application-wide error types.
//!
//! Library modules carry their own specific errors
//! ([`LookupError`](crate::lookup::LookupError), `sqlx::Error`); this enum
//! aggregates the ones that can end the process, and `main` wraps it in
//! `anyhow` for reporting.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort startup or serving.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Listener or server I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store initialization error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_source() {
        let err = Error::Io(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "port taken",
        ));
        assert!(err.to_string().contains("port taken"));
    }
}
