//! アップロード対象の画像
//!
//! プラットフォームごとのファイル表現（ブラウザのFile、ローカルファイル等）を
//! `ImageSource` で抽象化する

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

/// 画像として扱うメディアタイプの接頭辞
const IMAGE_MEDIA_PREFIX: &str = "image/";

/// アップロード対象のファイル
pub trait ImageSource {
    /// ローカルプレビューの参照（ブラウザのObject URL、テクスチャ等）
    ///
    /// 参照の解放はDropで行う
    type Preview;

    fn file_name(&self) -> String;

    /// 宣言されたメディアタイプ（例: "image/png"）
    fn media_type(&self) -> String;

    /// プレビューを作成（作成できない場合はNone）
    fn create_preview(&self) -> Option<Self::Preview>;

    fn is_image(&self) -> bool {
        is_image_media_type(&self.media_type())
    }
}

/// メディアタイプが画像か判定
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// 拡張子からメディアタイプを推定
///
/// 不明な拡張子は "application/octet-stream"
pub fn media_type_for_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
