use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::client::error::ClientError;

pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

const WAITLIST_PATH: &str = "/api/waitlist";

/// Result of one submission, reduced to what the page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

impl From<Result<(), ClientError>> for Outcome {
    fn from(result: Result<(), ClientError>) -> Self {
        match result {
            Ok(()) => Outcome::Success,
            Err(ClientError::Rejected {
                message: Some(message),
                ..
            }) => Outcome::Failure(message),
            Err(_) => Outcome::Failure(FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the registration endpoint.
///
/// No retries and no request timeout: a hung connection keeps the call pending.
#[derive(Clone)]
pub struct WaitlistClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl WaitlistClient {
    pub fn new(base_url: Url) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder().build()?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Send one registration request.
    ///
    /// Any 2xx is a success. Otherwise the server's `error` string is kept when
    /// the body carries one.
    pub async fn register(&self, email: &str) -> Result<(), ClientError> {
        let url = self.base_url.join(WAITLIST_PATH)?;

        let response = self
            .http_client
            .post(url)
            .json(&json!({ "email": email }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message: body.error.filter(|m| !m.trim().is_empty()),
        })
    }

    /// Like [`register`](Self::register), reduced to a displayable outcome.
    pub async fn submit(&self, email: &str) -> Outcome {
        let result = self.register(email).await;
        if let Err(err) = &result {
            tracing::debug!(error = %err, "Waitlist submission failed");
        }
        result.into()
    }
}
