use std::fmt;

/// Failure modes of an upstream dataset fetch. Neither variant is retried;
/// the request that triggered the fetch answers with a 500.
#[derive(Debug)]
pub enum FetchError {
    Network(String),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
