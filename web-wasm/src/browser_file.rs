//! ブラウザのFileとObject URL

use neural_detect_common::ImageSource;
use web_sys::{Blob, File, Url};

/// ドロップまたはファイル選択で得たFile
#[derive(Debug, Clone)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self(file)
    }

    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl ImageSource for BrowserFile {
    type Preview = ObjectUrl;

    fn file_name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }

    fn create_preview(&self) -> Option<ObjectUrl> {
        ObjectUrl::for_blob(&self.0)
    }
}

/// `URL.createObjectURL` で作った参照
///
/// Dropで `URL.revokeObjectURL` する
#[derive(Debug)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn for_blob(blob: &Blob) -> Option<Self> {
        match Url::create_object_url_with_blob(blob) {
            Ok(url) => Some(Self(url)),
            Err(err) => {
                log::warn!("Object URLを作成できません: {:?}", err);
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if Url::revoke_object_url(&self.0).is_err() {
            log::warn!("Object URLを解放できません: {}", self.0);
        }
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(name: &str, media_type: &str) -> BrowserFile {
        let parts = js_sys::Array::of1(&JsValue::from_str("parcel"));
        let opts = FilePropertyBag::new();
        opts.set_type(media_type);
        let file = File::new_with_str_sequence_and_options(&parts, name, &opts)
            .expect("File creation failed");
        BrowserFile::new(file)
    }

    #[wasm_bindgen_test]
    fn wasm_browser_file_reports_name_and_type() {
        let file = make_file("box.png", "image/png");
        assert_eq!(file.file_name(), "box.png");
        assert_eq!(file.media_type(), "image/png");
        assert!(file.is_image());
        assert!(!make_file("notes.txt", "text/plain").is_image());
    }

    #[wasm_bindgen_test]
    fn wasm_preview_is_blob_url() {
        let preview = make_file("box.jpg", "image/jpeg")
            .create_preview()
            .expect("preview failed");
        assert!(preview.as_str().starts_with("blob:"));
    }
}
