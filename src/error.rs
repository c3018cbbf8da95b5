//! Error types for the semsearch crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Query text never appears in error messages.

/// Errors that can occur during a search pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A search provider call failed entirely (network, parsing, blocking).
    /// Recovered at the aggregation boundary — hits from other providers
    /// are still returned.
    #[error("provider error: {0}")]
    Provider(String),

    /// An HTTP request or client construction failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The embedding backend failed. Not recoverable within a request:
    /// without embeddings no ordering can be produced.
    #[error("ranking error: {0}")]
    Ranking(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for semsearch results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_provider() {
        let err = SearchError::Provider("DuckDuckGo unreachable".into());
        assert_eq!(err.to_string(), "provider error: DuckDuckGo unreachable");
    }

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_ranking() {
        let err = SearchError::Ranking("backend returned 0 vectors".into());
        assert_eq!(err.to_string(), "ranking error: backend returned 0 vectors");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("max_results must be > 0".into());
        assert_eq!(err.to_string(), "config error: max_results must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
