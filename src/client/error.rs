use thiserror::Error;

/// Client-side errors for a registration request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status
    #[error("Registration rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    /// The request never got a response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint URL could not be built from the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
