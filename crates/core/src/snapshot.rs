//! PNG export of a [`Raster`].
//!
//! Feature-gated behind `png` (default on) so builds without image output
//! do not pull in the `image` crate.

use crate::error::EngineError;
use crate::raster::Raster;
use std::path::Path;

/// Writes the raster as an RGBA PNG.
///
/// Returns `EngineError::InvalidDimensions` if the raster dimensions overflow
/// `u32`, or `EngineError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), EngineError> {
    let w = u32::try_from(raster.width()).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, raster.to_rgba8())
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))?;
    log::debug!("wrote {}x{} snapshot to {}", w, h, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::surface::{FillRect, PresentSurface};

    #[test]
    fn write_png_round_trip() {
        let mut raster = Raster::new(16, 8, Color::WHITE).unwrap();
        raster.fill_rect(&FillRect::square(1.0, 1.0, 3.0, Color::BLACK));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");

        write_png(&raster, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 8);
        assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(10, 5).0, [255, 255, 255, 255]);
    }

    #[test]
    fn write_png_to_missing_directory_is_io_error() {
        let raster = Raster::new(2, 2, Color::WHITE).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("frame.png");
        assert!(matches!(
            write_png(&raster, &path),
            Err(EngineError::Io(_))
        ));
    }
}
