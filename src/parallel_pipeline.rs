use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};
use crate::pipeline::RecolorConfig;
use image::RgbaImage;
use rayon::prelude::*;

/// Data-parallel twin of `RecolorPipeline`. Every output pixel depends only
/// on its own input pixel, so the work partitions freely; the output is
/// byte-identical to the sequential pass.
pub struct ParallelRecolorPipeline {
    config: RecolorConfig,
}

impl ParallelRecolorPipeline {
    pub fn new(config: RecolorConfig) -> Self {
        Self { config }
    }

    pub fn recolor_buffer(&self, buffer: &[u8]) -> Vec<u8> {
        let mut output = vec![0u8; buffer.len()];

        output
            .par_chunks_exact_mut(CHANNELS)
            .zip(buffer.par_chunks_exact(CHANNELS))
            .for_each(|(out, src)| {
                let pixel = Pixel::from_rgba(src);
                let color = if pixel.is_foreground() {
                    self.config.foreground
                } else {
                    self.config.background
                };
                let pixel = pixel.recolored(color);
                out.copy_from_slice(&[pixel.red, pixel.green, pixel.blue, pixel.alpha]);
            });

        output
    }

    pub fn recolor_image(&self, image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        let buffer = self.recolor_buffer(image.as_raw());
        RgbaImage::from_raw(width, height, buffer)
            .expect("recolored buffer has the same length as its input")
    }
}
