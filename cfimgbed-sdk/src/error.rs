// ABOUTME: Custom error types for the CF-Imgbed SDK with user-friendly messages
// ABOUTME: Separates fatal setup errors from contained per-image failure modes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImgbedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Failed to parse server response (HTTP {status})")]
    MalformedResponse { status: u16, body: String },

    #[error("Upload rejected: {message}")]
    Rejected { message: String },

    #[error("Unexpected server response (HTTP {status})")]
    UnexpectedResponse {
        status: u16,
        message: Option<String>,
        body: String,
    },

    #[error("Failed to encode image: {0}")]
    Encode(String),
}

impl ImgbedError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            ImgbedError::Config(_) => {
                Some("Run `cfimgbed configure` to set the API endpoint and API key")
            }
            ImgbedError::Network(_) => Some("Check your internet connection and try again"),
            ImgbedError::Timeout => Some("Try again or check your network connection"),
            ImgbedError::UnexpectedResponse { .. } => {
                Some("Check that the endpoint points at a CF-Imgbed deployment")
            }
            _ => None,
        }
    }

    /// Setup errors abort the whole batch before any network call.
    /// Everything else is contained at the per-image boundary.
    pub fn is_setup(&self) -> bool {
        matches!(self, ImgbedError::Config(_))
    }

    /// Short body for the failure notification shown to the user.
    pub fn notification_body(&self, file_name: &str) -> String {
        match self {
            ImgbedError::MalformedResponse { status, .. } => {
                format!("{file_name}: HTTP {status} - unparseable server response")
            }
            ImgbedError::Rejected { message } => format!("{file_name}: {message}"),
            ImgbedError::UnexpectedResponse {
                status, message, ..
            } => format!(
                "{file_name}: HTTP {status} - {}",
                message.as_deref().unwrap_or("Unknown error")
            ),
            other => format!("{file_name}: {other}"),
        }
    }
}

impl From<reqwest::Error> for ImgbedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ImgbedError::Timeout
        } else {
            ImgbedError::Network(err.to_string())
        }
    }
}
