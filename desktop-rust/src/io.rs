use anyhow::{Context, Result};
use eframe::egui;
use neural_detect::ImageFile;
use std::path::Path;

const PREVIEW_MAX_WIDTH: u32 = 960;
const PREVIEW_MAX_HEIGHT: u32 = 512;

pub fn open_image(path: &Path) -> Result<ImageFile> {
    ImageFile::open(path).with_context(|| format!("open {}", path.display()))
}

pub fn decode_preview(bytes: &[u8]) -> Result<egui::ColorImage> {
    let image = image::load_from_memory(bytes).context("decode image")?;
    let thumb = if image.width() > PREVIEW_MAX_WIDTH || image.height() > PREVIEW_MAX_HEIGHT {
        image.thumbnail(PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT)
    } else {
        image
    };
    let size = [thumb.width() as usize, thumb.height() as usize];
    let pixels = thumb.to_rgba8().into_raw();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
        let mut buf = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .expect("encode failed");
        buf
    }

    #[test]
    fn test_decode_small_preview_keeps_size() {
        let preview = decode_preview(&png_bytes(4, 2)).expect("decode failed");
        assert_eq!(preview.size, [4, 2]);
    }

    #[test]
    fn test_decode_large_preview_is_shrunk() {
        let preview = decode_preview(&png_bytes(2000, 1000)).expect("decode failed");
        assert!(preview.size[0] <= PREVIEW_MAX_WIDTH as usize);
        assert!(preview.size[1] <= PREVIEW_MAX_HEIGHT as usize);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        assert!(decode_preview(b"not an image").is_err());
    }

    #[test]
    fn test_open_missing_image() {
        let err = open_image(Path::new("/nonexistent/parcel.png")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/parcel.png"));
    }
}
