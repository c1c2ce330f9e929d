// ABOUTME: Loads image files from disk into host-shaped upload records
// ABOUTME: Detects MIME types by content sniffing with an extension fallback

use anyhow::{Context, Result};
use cfimgbed_sdk::ImageItem;
use image::ImageFormat;
use std::path::Path;

/// Read one image file into an [`ImageItem`]. The MIME type is sniffed from
/// the bytes; files the sniffer does not recognize fall back to their
/// extension, and items with neither carry no MIME type at all (the
/// adapter defaults those to `image/png`).
pub fn load_image(path: &Path) -> Result<ImageItem> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let mime_type = sniff_mime(&bytes).or_else(|| mime_from_extension(path));

    let mut item = ImageItem::from_bytes(file_name, bytes);
    if let Some(mime_type) = mime_type {
        item = item.with_mime_type(mime_type);
    }
    Ok(item)
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Tiff => Some("image/tiff"),
        ImageFormat::Bmp => Some("image/bmp"),
        _ => None,
    }
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "tif" | "tiff" => Some("image/tiff"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];

    #[test]
    fn test_sniff_png() {
        assert_eq!(sniff_mime(PNG_MAGIC), Some("image/png"));
    }

    #[test]
    fn test_sniff_jpeg() {
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
    }

    #[test]
    fn test_sniff_unknown_bytes() {
        assert_eq!(sniff_mime(b"definitely not an image"), None);
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(
            mime_from_extension(Path::new("photo.JPG")),
            Some("image/jpeg")
        );
        assert_eq!(
            mime_from_extension(Path::new("icon.svg")),
            Some("image/svg+xml")
        );
        assert_eq!(mime_from_extension(Path::new("notes.txt")), None);
        assert_eq!(mime_from_extension(Path::new("no_extension")), None);
    }

    #[test]
    fn test_load_image_sniffs_content() {
        let mut file = NamedTempFile::with_suffix(".bin").unwrap();
        file.write_all(PNG_MAGIC).unwrap();

        let item = load_image(file.path()).unwrap();
        assert_eq!(item.mime_type.as_deref(), Some("image/png"));
        assert_eq!(item.buffer.as_deref(), Some(PNG_MAGIC));
        assert!(item.file_name.ends_with(".bin"));
        assert!(!item.is_uploaded());
    }

    #[test]
    fn test_load_image_falls_back_to_extension() {
        let mut file = NamedTempFile::with_suffix(".webp").unwrap();
        file.write_all(b"unrecognized bytes").unwrap();

        let item = load_image(file.path()).unwrap();
        assert_eq!(item.mime_type.as_deref(), Some("image/webp"));
    }

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(Path::new("/nonexistent/missing.png"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read image file")
        );
    }
}
