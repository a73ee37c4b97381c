// THEORY:
// The `pipeline` module is the final, top-level API for the recoloring
// engine. It encapsulates the full stack (classification mask + channel
// substitution) behind a single, easy-to-use interface. Its purpose is to
// provide a clean entry point for turning one decoded icon into one
// recolored icon.
//
// The transform is pure and stateless: output pixel (x, y) is a function of
// input pixel (x, y) and nothing else. The input is only ever borrowed; the
// caller always gets back an independent buffer of identical dimensions, in
// which every pixel carries exactly one of the two configured RGB values and
// its original alpha.

use crate::core_modules::mask;
use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};
use image::RgbaImage;

// Re-export key data structures for the public API.
pub use crate::core_modules::palette::{BOLD, Color, DEFAULT_VARIANTS, STEALTH, Variant};

/// Configuration for a recolor run: the two colors every pixel is mapped onto.
#[derive(Debug, Clone, Copy)]
pub struct RecolorConfig {
    pub foreground: Color,
    pub background: Color,
}

impl From<Variant> for RecolorConfig {
    fn from(variant: Variant) -> Self {
        RecolorConfig {
            foreground: variant.foreground,
            background: variant.background,
        }
    }
}

/// The main, top-level struct for the recoloring engine.
pub struct RecolorPipeline {
    config: RecolorConfig,
}

impl RecolorPipeline {
    pub fn new(config: RecolorConfig) -> Self {
        Self { config }
    }

    /// Recolors a raw RGBA buffer in a single pass, returning a new buffer.
    /// Alpha bytes are copied through unchanged.
    pub fn recolor_buffer(&self, buffer: &[u8]) -> Vec<u8> {
        // Stage 1: per-pixel classification.
        let mask = mask::classify(buffer);

        // Stage 2: channel substitution.
        let mut output = Vec::with_capacity(buffer.len());
        for (bytes, is_foreground) in buffer.chunks_exact(CHANNELS).zip(mask) {
            let color = if is_foreground {
                self.config.foreground
            } else {
                self.config.background
            };
            let pixel = Pixel::from_rgba(bytes).recolored(color);
            output.extend_from_slice(&[pixel.red, pixel.green, pixel.blue, pixel.alpha]);
        }
        output
    }

    /// Recolors a decoded image, producing a new image of identical
    /// dimensions. The input image is untouched.
    pub fn recolor_image(&self, image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let buffer = self.recolor_buffer(image.as_raw());
        RgbaImage::from_raw(width, height, buffer)
            .expect("recolored buffer has the same length as its input")
    }
}
