// ABOUTME: Batch upload adapter mapping host image records onto the CF-Imgbed API
// ABOUTME: Sequential per-image processing with contained failures and in-place mutation

use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;

use crate::ImgbedClient;
use crate::constants::{mime, notifications};
use crate::error::ImgbedError;
use crate::observe::{LogSink, Logger, Notifier, NullNotifier};
use crate::types::{ImageItem, UploadConfig};

/// The uploader backend: validates configuration at invocation time, then
/// uploads each image in input order, one request in flight at a time.
///
/// Failures on individual images are reported through the injected
/// [`Logger`] and [`Notifier`] and never abort the rest of the batch; only
/// configuration errors escape before any network call is made.
pub struct Uploader {
    config: UploadConfig,
    timeout: Option<Duration>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
}

impl Uploader {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            timeout: None,
            notifier: Arc::new(NullNotifier),
            logger: Arc::new(LogSink),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Upload a batch, using each item itself as its mime-type source.
    pub async fn upload(&self, images: Vec<ImageItem>) -> Result<Vec<ImageItem>, ImgbedError> {
        let sources = images.clone();
        self.upload_from(images, &sources).await
    }

    /// Upload a batch with an explicit source list. `sources` mirrors the
    /// batch as originally read and supplies the positional mime-type
    /// fallback for items whose own mime type was lost in transformation.
    ///
    /// Returns the subsequence of items that uploaded successfully, in
    /// input order. Items that failed are excluded; they were never
    /// assigned a URL.
    pub async fn upload_from(
        &self,
        mut images: Vec<ImageItem>,
        sources: &[ImageItem],
    ) -> Result<Vec<ImageItem>, ImgbedError> {
        let client = self.client().inspect_err(|err| {
            self.notifier.notify(
                notifications::CONFIG_ERROR_TITLE,
                "Check that the API key and API endpoint are configured",
            );
            self.logger.error(&format!("[CF-Imgbed] {err}"));
        })?;

        let total = images.len();
        let mut uploaded = 0usize;

        for (index, image) in images.iter_mut().enumerate() {
            let source_mime = sources.get(index).and_then(|s| s.mime_type.as_deref());
            match self.upload_one(&client, image, source_mime).await {
                Ok(()) => uploaded += 1,
                Err(err) => self.report_failure(&image.file_name, &err),
            }
        }

        self.logger
            .info(&format!("[CF-Imgbed] Uploaded {uploaded}/{total} images"));

        Ok(images.into_iter().filter(ImageItem::is_uploaded).collect())
    }

    /// Invocation-time configuration check. Missing endpoint or key is the
    /// fatal case; everything past this point is contained per image.
    fn client(&self) -> Result<ImgbedClient, ImgbedError> {
        let endpoint = self
            .config
            .api_endpoint
            .as_deref()
            .filter(|s| !s.is_empty());
        let key = self.config.api_key.as_deref().filter(|s| !s.is_empty());

        let (endpoint, key) = match (endpoint, key) {
            (Some(endpoint), Some(key)) => (endpoint, key),
            _ => {
                return Err(ImgbedError::Config(
                    "API Key or API Endpoint is missing".to_string(),
                ));
            }
        };

        ImgbedClient::builder()
            .api_endpoint(endpoint.to_string())
            .api_key(SecretString::new(key.to_string().into_boxed_str()))
            .timeout(self.timeout)
            .build()
    }

    async fn upload_one(
        &self,
        client: &ImgbedClient,
        image: &mut ImageItem,
        source_mime: Option<&str>,
    ) -> Result<(), ImgbedError> {
        let mime_type = resolve_mime(image, source_mime);
        let data_url = image.data_url(mime_type)?;

        let result = client
            .upload_data_url(data_url, self.config.directory())
            .await?;
        image.record_upload(result);

        self.logger.info(&format!(
            "[CF-Imgbed] Uploaded {} to {}",
            image.file_name,
            image.img_url.as_deref().unwrap_or_default()
        ));
        Ok(())
    }

    fn report_failure(&self, file_name: &str, err: &ImgbedError) {
        let body = err.notification_body(file_name);
        match err {
            ImgbedError::MalformedResponse { status, body: raw } => {
                self.logger.error(&format!(
                    "[CF-Imgbed] Failed to parse JSON response. Status: {status}, Response: {raw}"
                ));
                self.notifier
                    .notify(notifications::UPLOAD_FAILED_TITLE, &body);
            }
            ImgbedError::Rejected { message } => {
                self.logger.error(&format!(
                    "[CF-Imgbed] Failed to upload {file_name}: {message}"
                ));
                self.notifier
                    .notify(notifications::UPLOAD_FAILED_TITLE, &body);
            }
            ImgbedError::UnexpectedResponse {
                status, body: raw, ..
            } => {
                self.logger.error(&format!(
                    "[CF-Imgbed] Failed to upload {file_name}. Status: {status}, Body: {raw}"
                ));
                self.notifier
                    .notify(notifications::UPLOAD_FAILED_TITLE, &body);
            }
            other => {
                self.logger
                    .error(&format!("[CF-Imgbed] Error uploading {file_name}: {other}"));
                self.notifier
                    .notify(notifications::UPLOAD_ERROR_TITLE, &body);
            }
        }
    }
}

/// Fallback order: the item's own mime type, then the positional source
/// entry's, then the default.
fn resolve_mime<'a>(image: &'a ImageItem, source_mime: Option<&'a str>) -> &'a str {
    image
        .mime_type
        .as_deref()
        .or(source_mime)
        .unwrap_or(mime::DEFAULT_IMAGE_MIME)
}
