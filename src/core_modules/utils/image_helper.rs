pub mod image_helper {
    use crate::RecolorResult;
    use image::{ImageEncoder, RgbaImage};
    use std::path::Path;

    /// Decodes the image at `path` and normalizes it to RGBA8. Sources
    /// without an alpha channel come back fully opaque.
    pub fn load(path: &Path) -> RecolorResult<RgbaImage> {
        let image = image::open(path)?;
        Ok(image.to_rgba8())
    }

    /// Encodes a raw RGBA8 buffer as a PNG file at `path`.
    pub fn save(path: &Path, width: u32, height: u32, buffer: &[u8]) -> RecolorResult<()> {
        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(buffer, width, height, image::ExtendedColorType::Rgba8)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::image_helper::*;
    use crate::RecolorError;
    use std::io::Write;

    #[test]
    fn saved_buffer_loads_back_unchanged() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("roundtrip.png");

        // 3x2 image with a mix of channel values. PNG is lossless, so the
        // raw bytes must survive the trip exactly.
        let buffer: Vec<u8> = (0..24u32).map(|i| (i * 17 % 256) as u8).collect();

        save(&path, 3, 2, &buffer).expect("save png");
        let loaded = load(&path).expect("load png");

        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.as_raw(), &buffer);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, RecolorError::Io(_)));
    }

    #[test]
    fn undecodable_input_is_unsupported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("not_an_image.png");
        std::fs::File::create(&path)
            .expect("create file")
            .write_all(b"definitely not a png")
            .expect("write file");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, RecolorError::UnsupportedImageFormat(_)));
    }
}
