use image::RgbImage;
use image::imageops;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Axis, CornerReports, CropBox};

/// Reconcile the four corner reports into a single crop box.
///
/// Each boundary starts at the image edge and is pulled inward, never
/// outward, by the largest-inset evidence available from the two corners
/// bounding it: horizontal reports constrain `left`/`right`, vertical
/// reports constrain `top`/`bottom`, and `margin` extra pixels of border
/// are kept inside each detected boundary. A side with no evidence on the
/// relevant axis stays at the full image edge.
///
/// Boundaries are clamped into `[0, width]` / `[0, height]`; a range that
/// is empty or inverted after clamping fails with
/// [`Error::DegenerateCrop`] rather than slicing out of bounds.
pub fn resolve_crop_box(
    reports: &CornerReports,
    width: u32,
    height: u32,
    margin: u32,
) -> Result<CropBox> {
    let w = width as i64;
    let h = height as i64;
    let m = margin as i64;

    let mut left: i64 = 0;
    let mut right: i64 = w;
    let mut top: i64 = 0;
    let mut bottom: i64 = h;

    if reports.top_left.axis == Some(Axis::Horizontal) {
        left = reports.top_left.offset as i64 + m;
    }
    if reports.bottom_left.axis == Some(Axis::Horizontal) {
        left = left.max(reports.bottom_left.offset as i64 + m);
    }

    if reports.top_right.axis == Some(Axis::Horizontal) {
        right = w - reports.top_right.offset as i64 - m;
    }
    if reports.bottom_right.axis == Some(Axis::Horizontal) {
        right = right.min(w - reports.bottom_right.offset as i64 - m);
    }

    if reports.top_left.axis == Some(Axis::Vertical) {
        top = reports.top_left.offset as i64 + m;
    }
    if reports.top_right.axis == Some(Axis::Vertical) {
        top = top.max(reports.top_right.offset as i64 + m);
    }

    if reports.bottom_left.axis == Some(Axis::Vertical) {
        bottom = h - reports.bottom_left.offset as i64 - m;
    }
    if reports.bottom_right.axis == Some(Axis::Vertical) {
        bottom = bottom.min(h - reports.bottom_right.offset as i64 - m);
    }

    let clamped_left = left.clamp(0, w);
    let clamped_right = right.clamp(0, w);
    let clamped_top = top.clamp(0, h);
    let clamped_bottom = bottom.clamp(0, h);

    if clamped_left >= clamped_right || clamped_top >= clamped_bottom {
        // Report the pre-clamp values; they show how far the margin overshot
        return Err(Error::DegenerateCrop {
            left,
            right,
            top,
            bottom,
        });
    }

    let bbox = CropBox {
        left: clamped_left as u32,
        right: clamped_right as u32,
        top: clamped_top as u32,
        bottom: clamped_bottom as u32,
    };
    debug!("resolved crop box: {}", bbox);
    Ok(bbox)
}

/// Slice `image` to `bbox`. The input is left untouched.
pub fn crop_to_box(image: &RgbImage, bbox: &CropBox) -> RgbImage {
    imageops::crop_imm(image, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}
