// THEORY:
// This file is the main entry point for the `icon_recolor` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like the CLI driver in
// `main.rs`).
//
// The primary goal is to export the `RecolorPipeline` and its associated data
// structures (`RecolorConfig`, `Color`, etc.) as the clean, high-level
// interface for the entire recoloring engine. The internal modules
// (`core_modules`) are encapsulated behind it, providing a clean separation
// between "what a pixel is" and "how a whole icon gets recolored."
//
// The error taxonomy is deliberately minimal. A recolor run can fail in
// exactly three ways: a palette string that is not a valid color, an input
// that cannot be decoded into an RGBA pixel grid, and plain file I/O. There
// is no retry policy and no partial success; a run either recolors every
// pixel or fails before producing any output.

pub mod core_modules;
pub mod parallel_pipeline;
pub mod pipeline;

pub type RecolorResult<T> = Result<T, RecolorError>;

#[derive(thiserror::Error, Debug)]
pub enum RecolorError {
    /// A supplied color string did not parse to three 8-bit channel values.
    #[error("invalid color value '{0}': expected 6 hex digits")]
    InvalidColorValue(String),
    /// The input could not be decoded into a per-pixel RGBA grid.
    #[error("unsupported image format: {0}")]
    UnsupportedImageFormat(image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for RecolorError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(err) => RecolorError::Io(err),
            other => RecolorError::UnsupportedImageFormat(other),
        }
    }
}
