// ABOUTME: Data model and wire types for the CF-Imgbed upload protocol
// ABOUTME: Host-shaped image records plus request/response bodies in camelCase

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::error::ImgbedError;

/// Raw uploader settings as stored by the host under `picBed.cfimgbed`.
///
/// All fields are optional at the parse layer; presence of the endpoint and
/// key is enforced when an upload run starts, not when settings are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub upload_directory: Option<String>,
}

impl UploadConfig {
    pub fn new(api_endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_endpoint: Some(api_endpoint.into()),
            api_key: Some(api_key.into()),
            upload_directory: None,
        }
    }

    pub fn with_upload_directory(mut self, directory: impl Into<String>) -> Self {
        self.upload_directory = Some(directory.into());
        self
    }

    /// Directory to attach to request bodies, if configured and non-empty.
    pub fn directory(&self) -> Option<&str> {
        self.upload_directory.as_deref().filter(|d| !d.is_empty())
    }
}

/// One image handed over by the host for uploading.
///
/// The adapter enriches this record in place on success; items that still
/// lack `img_url` after a run are treated as failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub file_name: String,

    /// Raw image bytes. Skipped when serializing results back to the host.
    #[serde(default, skip_serializing)]
    pub buffer: Option<Vec<u8>>,

    /// Pre-computed base64 payload, preferred over `buffer` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r2_key: Option<String>,
}

impl ImageItem {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            buffer: Some(bytes),
            ..Default::default()
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// The base64 payload for this image: the pre-computed field if present,
    /// otherwise the encoded raw buffer.
    pub fn payload(&self) -> Result<String, ImgbedError> {
        if let Some(b64) = &self.base64_image {
            return Ok(b64.clone());
        }
        match &self.buffer {
            Some(bytes) => Ok(BASE64.encode(bytes)),
            None => Err(ImgbedError::Encode(format!(
                "{} has neither raw bytes nor a base64 payload",
                self.file_name
            ))),
        }
    }

    /// Render this image as a `data:<mime>;base64,<payload>` URL.
    pub fn data_url(&self, mime_type: &str) -> Result<String, ImgbedError> {
        Ok(format!("data:{};base64,{}", mime_type, self.payload()?))
    }

    /// Write the service's result onto this item. All result fields are
    /// assigned together so a partially-updated item cannot be observed.
    pub fn record_upload(&mut self, uploaded: UploadedFile) {
        self.img_url = Some(uploaded.url.clone());
        self.url = Some(uploaded.url);
        self.id = Some(uploaded.id);
        self.r2_key = Some(uploaded.r2_key);
    }

    pub fn is_uploaded(&self) -> bool {
        self.img_url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// Request body for `POST /api/upload`. The list shape is multi-image
/// capable on the wire but the adapter always sends exactly one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_directory: Option<String>,
}

impl UploadRequest {
    pub fn single(data_url: String, upload_directory: Option<&str>) -> Self {
        Self {
            list: vec![data_url],
            upload_directory: upload_directory.map(str::to_string),
        }
    }
}

/// Response body for `POST /api/upload`, permissive over both wire shapes:
/// `{ success: true, data: [...] }` and `{ success: false, results: [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<UploadedFile>>,
    #[serde(default)]
    pub results: Option<Vec<UploadFailure>>,
    /// Some error shapes carry a top-level message instead of `results`.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub url: String,
    pub id: String,
    pub r2_key: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFailure {
    #[serde(default)]
    pub message: Option<String>,
}
