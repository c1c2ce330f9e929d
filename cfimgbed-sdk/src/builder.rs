// ABOUTME: Builder pattern implementation for ImgbedClient configuration
// ABOUTME: Provides type-safe construction with endpoint validation at build time

use crate::ImgbedClient;
use crate::error::ImgbedError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<ImgbedClient, ImgbedError>))]
pub struct ImgbedClientConfig {
    pub api_endpoint: String,

    pub api_key: SecretString,

    /// No timeout by default: the adapter relies on the transport's own
    /// limits unless the caller opts into one.
    #[builder(default = None)]
    pub timeout: Option<Duration>,

    #[builder(default = None)]
    pub user_agent: Option<String>,
}

impl From<ImgbedClientConfig> for Result<ImgbedClient, ImgbedError> {
    fn from(config: ImgbedClientConfig) -> Self {
        ImgbedClient::from_config(config)
    }
}

impl ImgbedClient {
    pub fn builder() -> ImgbedClientConfigBuilder<((), (), (), ())> {
        ImgbedClientConfig::builder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use std::time::Duration;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into_boxed_str())
    }

    #[test]
    fn test_builder_with_minimal_config() {
        let client_result = ImgbedClient::builder()
            .api_endpoint("https://img.example.com".to_string())
            .api_key(secret("test-api-key"))
            .build();

        assert!(client_result.is_ok());
    }

    #[test]
    fn test_builder_with_all_options() {
        let client_result = ImgbedClient::builder()
            .api_endpoint("https://img.example.com".to_string())
            .api_key(secret("test-api-key"))
            .timeout(Some(Duration::from_secs(60)))
            .user_agent(Some("cfimgbed-cli/0.1.0".to_string()))
            .build();

        assert!(client_result.is_ok());
    }

    #[test]
    fn test_builder_rejects_invalid_endpoint() {
        let client_result = ImgbedClient::builder()
            .api_endpoint("not-a-url".to_string())
            .api_key(secret("test-api-key"))
            .build();

        assert!(matches!(client_result, Err(ImgbedError::Config(_))));
    }

    #[test]
    fn test_builder_rejects_non_http_scheme() {
        let client_result = ImgbedClient::builder()
            .api_endpoint("ftp://img.example.com".to_string())
            .api_key(secret("test-api-key"))
            .build();

        assert!(matches!(client_result, Err(ImgbedError::Config(_))));
    }

    #[test]
    fn test_config_uses_secrecy_for_sensitive_data() {
        let api_key = secret("test-api-key");
        let debug_str = format!("{:?}", api_key);
        assert!(!debug_str.contains("test-api-key"));
    }
}
