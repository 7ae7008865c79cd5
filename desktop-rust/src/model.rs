use eframe::egui;
use neural_detect::ImageFile;
use neural_detect_common::ImageSource;

use crate::io::decode_preview;

/// テクスチャでプレビューするローカル画像
///
/// TextureHandleはDropでGPU側の領域も解放される
pub struct DesktopImage {
    file: ImageFile,
    ctx: egui::Context,
}

impl DesktopImage {
    pub fn new(file: ImageFile, ctx: egui::Context) -> Self {
        Self { file, ctx }
    }

    pub fn file(&self) -> &ImageFile {
        &self.file
    }
}

impl ImageSource for DesktopImage {
    type Preview = egui::TextureHandle;

    fn file_name(&self) -> String {
        self.file.file_name()
    }

    fn media_type(&self) -> String {
        self.file.media_type()
    }

    fn create_preview(&self) -> Option<egui::TextureHandle> {
        match decode_preview(self.file.bytes()) {
            Ok(image) => Some(self.ctx.load_texture(
                self.file.file_name(),
                image,
                egui::TextureOptions::default(),
            )),
            Err(err) => {
                tracing::warn!("preview failed for {}: {err:#}", self.file.path().display());
                None
            }
        }
    }
}
