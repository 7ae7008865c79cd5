//! NeuralDetect Common Library
//!
//! ブラウザ(WASM)・CLI・デスクトップで共有される型と状態管理

pub mod types;
pub mod error;
pub mod parser;
pub mod upload;
pub mod transport;
pub mod session;

pub use types::{capitalize_first, Prediction, RawResponse, Verdict};
pub use error::{AnalyzeError, Result, ANALYZE_FAILED_MESSAGE, NO_FILE_MESSAGE, UNKNOWN_SERVER_ERROR};
pub use parser::{interpret_response, parse_prediction, server_error_message};
pub use upload::{is_image_media_type, media_type_for_extension, ImageSource, FILE_FIELD};
pub use transport::{PredictionTransport, DEFAULT_ENDPOINT};
pub use session::{Activity, Selection, Session, Stage};
