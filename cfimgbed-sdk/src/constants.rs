// ABOUTME: Centralized constants for the CF-Imgbed SDK
// ABOUTME: Contains wire protocol paths, headers, defaults, and notification titles

/// Wire protocol constants
pub mod api {
    /// Fixed upload path appended to the configured endpoint
    pub const UPLOAD_PATH: &str = "/api/upload";

    /// Header carrying the API key
    pub const API_KEY_HEADER: &str = "X-API-Key";
}

/// MIME type defaults
pub mod mime {
    /// Fallback MIME type when neither the item nor its source carries one
    pub const DEFAULT_IMAGE_MIME: &str = "image/png";
}

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Suggested timeout for callers that opt into one. The client itself
    /// imposes no timeout by default; the transport's own limits apply.
    pub const SUGGESTED_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Uploader identity
pub mod identity {
    /// Identifier the uploader registers under
    pub const UPLOADER_ID: &str = "cfimgbed";

    /// Human-readable uploader name
    pub const UPLOADER_NAME: &str = "CF-Imgbed";
}

/// Notification titles for the three user-visible failure classes
pub mod notifications {
    /// Missing or incomplete configuration
    pub const CONFIG_ERROR_TITLE: &str = "CF-Imgbed configuration error";

    /// Upload rejected or malformed response
    pub const UPLOAD_FAILED_TITLE: &str = "CF-Imgbed upload failed";

    /// Unexpected per-image error (encoding, network)
    pub const UPLOAD_ERROR_TITLE: &str = "CF-Imgbed upload error";
}
