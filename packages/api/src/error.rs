use thiserror::Error;

/// Failure of a single API call.
///
/// `Server` carries the message text returned with a non-2xx status (or a
/// per-operation fallback when the body is empty). `Network` covers
/// connection and body-parse failures. Neither is retried; callers surface
/// the message and return the view to its pre-action state.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Server(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
