//! ローカルの画像ファイル

use crate::error::{NeuralDetectError, Result};
use neural_detect_common::{media_type_for_extension, ImageSource};
use std::path::{Path, PathBuf};

/// 読み込み済みのローカルファイル
#[derive(Debug, Clone)]
pub struct ImageFile {
    path: PathBuf,
    file_name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl ImageFile {
    /// ファイルを読み込む（メディアタイプは拡張子から推定）
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(NeuralDetectError::FileNotFound(path.display().to_string()));
        }

        let bytes = std::fs::read(path)?;
        let media_type = path
            .extension()
            .map(|ext| media_type_for_extension(&ext.to_string_lossy()))
            .unwrap_or_else(|| media_type_for_extension(""));

        Ok(Self::from_bytes(path.to_path_buf(), media_type, bytes))
    }

    pub fn from_bytes(path: PathBuf, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path,
            file_name,
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl ImageSource for ImageFile {
    /// CLIではファイルパスそのものをプレビュー参照とする
    type Preview = PathBuf;

    fn file_name(&self) -> String {
        self.file_name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn create_preview(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_png() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("parcel.PNG");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let file = ImageFile::open(&path).expect("open failed");
        assert_eq!(file.file_name(), "parcel.PNG");
        assert_eq!(file.media_type(), "image/png");
        assert!(file.is_image());
        assert_eq!(file.bytes().len(), 4);
        assert_eq!(file.create_preview(), Some(path));
    }

    #[test]
    fn test_open_non_image() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let file = ImageFile::open(&path).expect("open failed");
        assert_eq!(file.media_type(), "application/octet-stream");
        assert!(!file.is_image());
    }

    #[test]
    fn test_open_missing_file() {
        let err = ImageFile::open(Path::new("/nonexistent/parcel.jpg")).unwrap_err();
        assert!(matches!(err, NeuralDetectError::FileNotFound(_)));
    }
}
