// THEORY:
// The `mask` module is the bridge between a raw image buffer and the
// per-pixel foreground/background decision. It walks a flat RGBA byte buffer
// and collects each pixel's classification into a single, unified structure
// (a `Vec<bool>`), one entry per pixel.
//
// The mask is deliberately ephemeral: it is derived data, computed fresh for
// every invocation and discarded once the channel substitution has consumed
// it. It has no lifecycle or storage of its own, and no mask ever outlives
// the recolor call that produced it.

use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};

/// Classifies every pixel of a raw RGBA buffer: `true` for foreground,
/// `false` for background. The buffer length must be a multiple of four;
/// the image loader guarantees this for decoded images.
pub fn classify(buffer: &[u8]) -> Vec<bool> {
    debug_assert!(buffer.len() % CHANNELS == 0);

    buffer
        .chunks_exact(CHANNELS)
        .map(|bytes| Pixel::from_rgba(bytes).is_foreground())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_entry_per_pixel() {
        let buffer = [255u8; 4 * 6];
        assert_eq!(classify(&buffer).len(), 6);
    }

    #[test]
    fn classifies_mixed_buffer() {
        #[rustfmt::skip]
        let buffer = [
            255, 255, 255, 255, // white robot body
            10, 10, 10, 255,    // dark background
            201, 201, 201, 0,   // just above threshold
            200, 200, 200, 255, // exactly at threshold
            255, 255, 200, 255, // one channel too low
        ];
        assert_eq!(classify(&buffer), vec![true, false, true, false, false]);
    }

    #[test]
    fn empty_buffer_yields_empty_mask() {
        assert!(classify(&[]).is_empty());
    }
}
