use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::error::Result;

/// Decode the image at `path` into an 8-bit RGB pixel grid.
///
/// Accepts any format the `image` crate recognizes; an alpha channel, if
/// present, is discarded.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = image::open(path)?.to_rgb8();
    debug!("loaded {:?}: {}x{}", path, image.width(), image.height());
    Ok(image)
}

/// Encode `image` to `path`, format inferred from the extension.
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    image.save(path)?;
    debug!("saved {:?}: {}x{}", path, image.width(), image.height());
    Ok(())
}
