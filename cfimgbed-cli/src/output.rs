// ABOUTME: This module handles output formatting for the CF-Imgbed CLI
// ABOUTME: It provides table formatting with color support and JSON output

use anyhow::Result;
use cfimgbed_sdk::ImageItem;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub trait OutputFormat {
    fn format_uploads(&self, items: &[ImageItem]) -> Result<String>;
}

pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn truncate(value: &str, max_len: usize) -> String {
        if value.len() <= max_len {
            value.to_string()
        } else {
            format!("{}...", &value[..max_len - 3])
        }
    }

    fn format_url(&self, url: &str) -> String {
        if self.use_color {
            url.cyan().to_string()
        } else {
            url.to_string()
        }
    }
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "URL")]
    url: String,
    #[tabled(rename = "Id")]
    id: String,
}

impl OutputFormat for TableFormatter {
    fn format_uploads(&self, items: &[ImageItem]) -> Result<String> {
        let rows: Vec<TableRow> = items
            .iter()
            .map(|item| TableRow {
                file: Self::truncate(&item.file_name, 40),
                url: self.format_url(item.img_url.as_deref().unwrap_or_default()),
                id: item.id.clone().unwrap_or_default(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        Ok(table.to_string())
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormat for JsonFormatter {
    fn format_uploads(&self, items: &[ImageItem]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(items)?)
        } else {
            Ok(serde_json::to_string(items)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfimgbed_sdk::UploadedFile;

    fn uploaded_item(name: &str, url: &str) -> ImageItem {
        let mut item = ImageItem::from_bytes(name, vec![1, 2, 3]);
        item.record_upload(UploadedFile {
            url: url.to_string(),
            id: "42".to_string(),
            r2_key: "key-42".to_string(),
        });
        item
    }

    #[test]
    fn test_table_contains_file_and_url() {
        let items = vec![uploaded_item("a.png", "https://x/a.png")];
        let output = TableFormatter::new(false).format_uploads(&items).unwrap();

        assert!(output.contains("a.png"));
        assert!(output.contains("https://x/a.png"));
        assert!(output.contains("42"));
    }

    #[test]
    fn test_truncate_long_file_names() {
        let long_name = "a".repeat(60);
        let items = vec![uploaded_item(&long_name, "https://x/a.png")];
        let output = TableFormatter::new(false).format_uploads(&items).unwrap();

        assert!(output.contains("..."));
        assert!(!output.contains(&long_name));
    }

    #[test]
    fn test_json_output_is_host_shaped() {
        let items = vec![uploaded_item("a.png", "https://x/a.png")];
        let output = JsonFormatter::new(false).format_uploads(&items).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["fileName"], "a.png");
        assert_eq!(parsed[0]["imgUrl"], "https://x/a.png");
        assert_eq!(parsed[0]["r2Key"], "key-42");
    }

    #[test]
    fn test_json_pretty_output() {
        let items = vec![uploaded_item("a.png", "https://x/a.png")];
        let output = JsonFormatter::new(true).format_uploads(&items).unwrap();
        assert!(output.contains('\n'));
    }
}
