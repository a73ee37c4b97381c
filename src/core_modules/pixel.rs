// THEORY:
// The `Pixel` module serves as the most fundamental building block of the
// recoloring engine. It is designed as a "dumb" data container, meaning its
// primary responsibility is to represent the raw RGBA data of a single pixel
// accurately and efficiently.
//
// Key architectural principles:
// 1.  **Data Purity**: It holds the raw `u8` channel values without any
//     interpretation.
// 2.  **Intrinsic Knowledge**: It contains methods (`is_foreground`,
//     `recolored`) that operate based *only* on the pixel's own internal data.
//     It knows nothing about other pixels; whole-image concerns live in the
//     `mask` module and the pipelines.
// 3.  **Efficiency**: By being a simple, transparent struct, it is fast to
//     create, copy, and store in large collections like `Vec<Pixel>`.
//
// The classification rule itself also lives here, because it is intrinsic
// knowledge: whether a pixel belongs to the light robot shape depends on
// nothing but its own three color channels.

pub mod pixel {
    use crate::core_modules::palette::Color;

    pub type Byte = u8;
    pub type Channel = Byte;

    pub const CHANNELS: usize = 4;

    /// The fixed brightness cutoff separating the light robot shape from the
    /// background. A pixel is foreground iff every color channel is strictly
    /// above this value. This is a documented design constant of the source
    /// icon, not a tunable.
    pub const FOREGROUND_THRESHOLD: Channel = 200;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Reads a pixel from the first four bytes of an RGBA slice.
        pub fn from_rgba(bytes: &[Byte]) -> Self {
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }

        /// True iff this pixel belongs to the light foreground shape: all
        /// three color channels strictly above `FOREGROUND_THRESHOLD`.
        /// Alpha is never consulted.
        pub fn is_foreground(&self) -> bool {
            self.red > FOREGROUND_THRESHOLD
                && self.green > FOREGROUND_THRESHOLD
                && self.blue > FOREGROUND_THRESHOLD
        }

        /// A copy of this pixel with its RGB channels replaced by `color`.
        /// Alpha is carried through untouched.
        pub fn recolored(&self, color: Color) -> Pixel {
            Pixel {
                red: color.red,
                green: color.green,
                blue: color.blue,
                alpha: self.alpha,
            }
        }
    }
}
