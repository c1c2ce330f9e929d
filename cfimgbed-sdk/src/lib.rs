// ABOUTME: CF-Imgbed SDK library providing the upload client and batch adapter
// ABOUTME: Includes wire types, error taxonomy, and injected observability capabilities

use http::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

pub mod builder;
pub mod constants;
pub mod error;
pub mod observe;
#[cfg(test)]
mod test_helpers;
pub mod types;
pub mod uploader;

pub use builder::ImgbedClientConfig;
pub use error::ImgbedError;
pub use observe::{LogSink, Logger, Notification, NotificationLog, Notifier, NullNotifier};
pub use types::{
    ImageItem, UploadConfig, UploadRequest, UploadResponse, UploadFailure, UploadedFile,
};
pub use uploader::Uploader;

pub type Result<T> = std::result::Result<T, ImgbedError>;

const DEFAULT_USER_AGENT: &str = concat!("cfimgbed-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP client for one CF-Imgbed deployment.
///
/// Holds the normalized upload URL and a reqwest client carrying the
/// `X-API-Key` header on every request.
pub struct ImgbedClient {
    client: reqwest::Client,
    upload_url: String,
}

impl ImgbedClient {
    pub fn new(api_endpoint: &str, api_key: SecretString) -> Result<Self> {
        Self::builder()
            .api_endpoint(api_endpoint.to_string())
            .api_key(api_key)
            .build()
    }

    pub(crate) fn from_config(config: ImgbedClientConfig) -> Result<Self> {
        let endpoint = Self::normalize_endpoint(&config.api_endpoint)?;

        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|_| ImgbedError::Config("API key contains invalid characters".to_string()))?;
        headers.insert(constants::api::API_KEY_HEADER, api_key);

        let user_agent = config
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|_| ImgbedError::Config("invalid user agent".to_string()))?,
        );

        let mut client = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            client = client.timeout(timeout);
        }
        let client = client
            .build()
            .map_err(|e| ImgbedError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            upload_url: format!("{endpoint}{}", constants::api::UPLOAD_PATH),
        })
    }

    /// Validate the endpoint and strip any trailing slash so the upload
    /// path can be appended without doubling separators.
    fn normalize_endpoint(endpoint: &str) -> Result<String> {
        let parsed = Url::parse(endpoint)
            .map_err(|e| ImgbedError::Config(format!("invalid API endpoint: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ImgbedError::Config(format!(
                "API endpoint must use http or https, got {}",
                parsed.scheme()
            )));
        }
        Ok(endpoint.trim_end_matches('/').to_string())
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// POST one data-URL-encoded image and classify the response.
    ///
    /// The request body is list-shaped on the wire but always carries
    /// exactly one entry; the service's per-item result maps back 1:1.
    pub async fn upload_data_url(
        &self,
        data_url: String,
        upload_directory: Option<&str>,
    ) -> Result<UploadedFile> {
        let request = UploadRequest::single(data_url, upload_directory);

        log::debug!("POST {}", self.upload_url);
        let response = self.client.post(&self.upload_url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: UploadResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) => {
                return Err(ImgbedError::MalformedResponse {
                    status: status.as_u16(),
                    body,
                });
            }
        };

        if status == StatusCode::OK && parsed.success {
            if let Some(uploaded) = parsed.data.and_then(|mut data| {
                if data.is_empty() {
                    None
                } else {
                    Some(data.remove(0))
                }
            }) {
                return Ok(uploaded);
            }
            // success flag without data falls through to the unstructured case
            return Err(ImgbedError::UnexpectedResponse {
                status: status.as_u16(),
                message: parsed.message,
                body,
            });
        }

        if status == StatusCode::OK && !parsed.success {
            if let Some(failure) = parsed.results.and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            }) {
                return Err(ImgbedError::Rejected {
                    message: failure
                        .message
                        .unwrap_or_else(|| "Unknown error from API".to_string()),
                });
            }
        }

        Err(ImgbedError::UnexpectedResponse {
            status: status.as_u16(),
            message: parsed.message,
            body,
        })
    }
}
