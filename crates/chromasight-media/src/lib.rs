//! Chromasight Media — image codecs and the upload/compare simulator flow.
//!
//! Decoding and encoding go through the `image` crate; all pixel math lives
//! in `chromasight-core`.

mod error;
pub mod loader;
pub mod session;

pub use error::MediaError;
pub use loader::{UploadFormat, decode_image, encode_png, load_image, validate_upload};
pub use session::{Comparison, SimulatorSession, SimulatorStage};
