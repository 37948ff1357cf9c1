// SPDX-License-Identifier: MPL-2.0
//! Image decoding from various formats (PNG, JPEG, GIF, WebP, SVG, etc.).

use crate::catalog::{Fetcher, Source};
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    #[must_use]
    pub fn size(&self) -> iced::Size {
        iced::Size::new(self.width as f32, self.height as f32)
    }
}

/// Whether the data looks like an SVG document, by location or content.
#[must_use]
pub fn looks_like_svg(location: &str, bytes: &[u8]) -> bool {
    let path = location.split(['?', '#']).next().unwrap_or(location);
    if path.to_ascii_lowercase().ends_with(".svg") {
        return true;
    }
    let head = &bytes[..bytes.len().min(256)];
    let head = String::from_utf8_lossy(head);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
}

/// Decodes encoded image bytes.
///
/// SVG documents are rasterized with resvg at their intrinsic size.
///
/// # Errors
///
/// Returns [`Error::Image`] if the format is unsupported, the data is
/// corrupted, or an SVG has empty dimensions.
pub fn decode(location: &str, bytes: &[u8]) -> Result<ImageData> {
    if looks_like_svg(location, bytes) {
        return rasterize_svg(bytes);
    }

    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Image(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Image("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Image("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
}

/// Reads and decodes the image at `location`. Decoding runs on the
/// blocking thread pool.
pub async fn load(fetcher: Fetcher, location: String) -> Result<ImageData> {
    load_within(fetcher, location, None).await
}

/// Like [`load`], with an explicit deadline for reading the bytes.
pub async fn load_within(
    fetcher: Fetcher,
    location: String,
    deadline: Option<Duration>,
) -> Result<ImageData> {
    let source = Source::parse(&location)?;
    let bytes = match deadline {
        Some(deadline) => fetcher.read_bytes_within(&source, deadline).await?,
        None => fetcher.read_bytes(&source).await?,
    };

    tokio::task::spawn_blocking(move || decode(&location, &bytes))
        .await
        .map_err(|e| Error::Image(format!("decoder task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let data = decode("sample.png", &png_bytes(4, 2)).expect("png should decode");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn decode_svg_rasterizes_successfully() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>"#;
        let data = decode("logo.svg", svg.as_bytes()).expect("svg should decode");
        assert_eq!((data.width, data.height), (6, 3));
    }

    #[test]
    fn svg_detected_from_content_without_extension() {
        let svg = br#"<?xml version="1.0"?><svg xmlns="http://www.w3.org/2000/svg" width="2" height="2"></svg>"#;
        assert!(looks_like_svg("https://example.com/logo", svg));
        assert!(!looks_like_svg("photo.png", &png_bytes(1, 1)));
    }

    #[test]
    fn decode_invalid_bytes_returns_image_error() {
        match decode("invalid.png", b"not a png") {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn decode_svg_with_zero_dimensions_errors() {
        let svg = r"<svg xmlns='http://www.w3.org/2000/svg' width='0' height='10'></svg>";
        assert!(matches!(decode("zero.svg", svg.as_bytes()), Err(Error::Image(_))));
    }

    #[tokio::test]
    async fn load_reads_local_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("thumb_back.png");
        std::fs::write(&path, png_bytes(3, 5)).expect("write png");

        let data = load(Fetcher::new(), path.display().to_string())
            .await
            .expect("image should load");
        assert_eq!((data.width, data.height), (3, 5));
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("missing.png").display().to_string();
        assert!(matches!(load(Fetcher::new(), missing).await, Err(Error::Io(_))));
    }
}
