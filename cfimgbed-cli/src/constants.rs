// ABOUTME: Centralized constants for the CF-Imgbed CLI
// ABOUTME: Contains environment variable names, config file locations, and URLs

/// Environment variables
pub mod env {
    /// API key override, takes precedence over the stored configuration
    pub const API_KEY: &str = "CFIMGBED_API_KEY";

    /// Suppresses the upload progress indicator when set
    pub const QUIET: &str = "CFIMGBED_QUIET";
}

/// Configuration file locations
pub mod files {
    /// Project-local config file name, highest precedence
    pub const PROJECT_CONFIG: &str = "cfimgbed.toml";

    /// Directory under the user config root, named after the uploader id
    pub const CONFIG_DIR: &str = cfimgbed_sdk::constants::identity::UPLOADER_ID;

    /// Config file name inside the user config directory
    pub const CONFIG_FILE: &str = "config.toml";
}

/// External URLs
pub mod urls {
    /// Project documentation, shown by the `docs` command
    pub const DOCS_URL: &str = "https://github.com/twiify/cfimgbed-cli";
}
