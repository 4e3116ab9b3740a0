use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fmt;
use std::path::Path;

/// Splits comma-separated free text into trimmed ingredient names.
/// Empty segments are dropped; order and duplicates are preserved.
pub fn parse_ingredient_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Image types accepted by the recognition endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    /// Sniffs the format from file magic bytes. Anything that is not
    /// JPEG, PNG, or WEBP is rejected before any network traffic.
    pub fn detect(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(ImageFormat::Webp)
        } else {
            None
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "JPEG"),
            ImageFormat::Png => write!(f, "PNG"),
            ImageFormat::Webp => write!(f, "WEBP"),
        }
    }
}

/// Reads an image file, validates its type, and returns the detected
/// format together with the base64 payload for the recognition request.
pub async fn load_ingredient_image(path: &Path) -> Result<(ImageFormat, String)> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image file '{}'", path.display()))?;

    let Some(format) = ImageFormat::detect(&bytes) else {
        bail!("Please upload a JPEG, PNG, or WEBP image");
    };

    Ok((format, BASE64.encode(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_ingredient_list_example() {
        let ingredients = parse_ingredient_list("chicken, tomatoes, garlic, onions");
        assert_eq!(ingredients, vec!["chicken", "tomatoes", "garlic", "onions"]);
        assert_eq!(ingredients.len(), 4);
    }

    #[test]
    fn test_parse_ingredient_list_drops_empty_segments() {
        let ingredients = parse_ingredient_list("  rice ,, beans ,   , corn,");
        assert_eq!(ingredients, vec!["rice", "beans", "corn"]);
    }

    #[test]
    fn test_parse_ingredient_list_keeps_duplicates_and_order() {
        let ingredients = parse_ingredient_list("egg, flour, egg");
        assert_eq!(ingredients, vec!["egg", "flour", "egg"]);
    }

    #[test]
    fn test_parse_ingredient_list_empty_input() {
        assert!(parse_ingredient_list("").is_empty());
        assert!(parse_ingredient_list("  ,  , ").is_empty());
    }

    #[test]
    fn test_detect_known_formats() {
        assert_eq!(
            ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::detect(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00]),
            Some(ImageFormat::Png)
        );
        let mut webp = Vec::new();
        webp.extend_from_slice(b"RIFF");
        webp.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        webp.extend_from_slice(b"WEBP");
        assert_eq!(ImageFormat::detect(&webp), Some(ImageFormat::Webp));
    }

    #[test]
    fn test_detect_rejects_other_types() {
        assert_eq!(ImageFormat::detect(b"GIF89a..."), None);
        assert_eq!(ImageFormat::detect(b"%PDF-1.4"), None);
        assert_eq!(ImageFormat::detect(b""), None);
        // RIFF container that is not WEBP (e.g. WAVE audio)
        let mut wave = Vec::new();
        wave.extend_from_slice(b"RIFF");
        wave.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
        wave.extend_from_slice(b"WAVE");
        assert_eq!(ImageFormat::detect(&wave), None);
    }

    #[tokio::test]
    async fn test_load_ingredient_image_rejects_bad_type_without_reading_further() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"GIF89a not an accepted image").unwrap();
        file.flush().unwrap();

        let result = load_ingredient_image(file.path()).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("JPEG, PNG, or WEBP"));
    }

    #[tokio::test]
    async fn test_load_ingredient_image_encodes_jpeg() {
        let payload = [0xFF, 0xD8, 0xFF, 0xE0, 0x01, 0x02, 0x03];
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&payload).unwrap();
        file.flush().unwrap();

        let (format, encoded) = load_ingredient_image(file.path()).await.unwrap();
        assert_eq!(format, ImageFormat::Jpeg);
        assert_eq!(encoded, BASE64.encode(payload));
    }

    #[tokio::test]
    async fn test_load_ingredient_image_missing_file() {
        let result = load_ingredient_image(Path::new("this_file_does_not_exist.jpg")).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read image file"));
    }
}
