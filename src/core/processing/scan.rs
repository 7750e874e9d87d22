use image::{Rgb, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Axis, Corner, CornerReport, CornerReports};

/// A pixel is background when every channel is at or below `tolerance`.
pub fn is_background(pixel: &Rgb<u8>, tolerance: u8) -> bool {
    pixel.0.iter().all(|&c| c <= tolerance)
}

/// Scan one corner inward and report the first non-background pixel.
///
/// At each step `i` the pixel on the row adjacent to the corner is checked
/// before the pixel on the adjacent column, so a simultaneous hit is
/// reported as `Horizontal`. The scan range is `0..min(width, height)`;
/// exhausting it yields the no-evidence report.
pub fn scan_corner(image: &RgbImage, corner: Corner, tolerance: u8) -> CornerReport {
    let (width, height) = image.dimensions();
    let depth = width.min(height);

    for i in 0..depth {
        // Adjacent row, column index measured inward from the corner's side
        let (hx, hy) = match corner {
            Corner::TopLeft => (i, 0),
            Corner::TopRight => (width - 1 - i, 0),
            Corner::BottomLeft => (i, height - 1),
            Corner::BottomRight => (width - 1 - i, height - 1),
        };
        if !is_background(image.get_pixel(hx, hy), tolerance) {
            return CornerReport::hit(i, Axis::Horizontal);
        }

        // Adjacent column, row index measured inward from the corner's side
        let (vx, vy) = match corner {
            Corner::TopLeft => (0, i),
            Corner::TopRight => (width - 1, i),
            Corner::BottomLeft => (0, height - 1 - i),
            Corner::BottomRight => (width - 1, height - 1 - i),
        };
        if !is_background(image.get_pixel(vx, vy), tolerance) {
            return CornerReport::hit(i, Axis::Vertical);
        }
    }

    CornerReport::no_evidence()
}

/// Scan all four corners of `image`.
///
/// Each corner is an independent, side-effect-free computation. Fails with
/// [`Error::InvalidImage`] on a zero-width or zero-height image instead of
/// scanning an empty range.
pub fn scan_corners(image: &RgbImage, tolerance: u8) -> Result<CornerReports> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidImage { width, height });
    }

    let reports = CornerReports {
        top_left: scan_corner(image, Corner::TopLeft, tolerance),
        top_right: scan_corner(image, Corner::TopRight, tolerance),
        bottom_left: scan_corner(image, Corner::BottomLeft, tolerance),
        bottom_right: scan_corner(image, Corner::BottomRight, tolerance),
    };
    debug!("corner scan: {}", reports);
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([200, 20, 20]);

    fn black(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([0, 0, 0]))
    }

    #[test]
    fn tolerance_bounds_background_predicate() {
        assert!(is_background(&Rgb([30, 30, 30]), 30));
        assert!(!is_background(&Rgb([31, 0, 0]), 30));
        assert!(!is_background(&Rgb([0, 0, 255]), 30));
        assert!(is_background(&Rgb([0, 0, 0]), 0));
    }

    #[test]
    fn all_background_image_reports_no_evidence() {
        let img = black(8, 8);
        let reports = scan_corners(&img, 30).unwrap();
        assert_eq!(reports.top_left, CornerReport::no_evidence());
        assert_eq!(reports.top_right, CornerReport::no_evidence());
        assert_eq!(reports.bottom_left, CornerReport::no_evidence());
        assert_eq!(reports.bottom_right, CornerReport::no_evidence());
    }

    #[test]
    fn top_row_content_reports_horizontal_offset() {
        // Top row background for the first 4 columns, left column all
        // background: top_left must report (4, horizontal).
        let mut img = black(10, 10);
        for x in 4..10 {
            img.put_pixel(x, 0, RED);
        }
        let report = scan_corner(&img, Corner::TopLeft, 30);
        assert_eq!(report, CornerReport::hit(4, Axis::Horizontal));
    }

    #[test]
    fn left_column_content_reports_vertical_offset() {
        let mut img = black(10, 10);
        for y in 3..8 {
            img.put_pixel(0, y, RED);
        }
        let report = scan_corner(&img, Corner::TopLeft, 30);
        assert_eq!(report, CornerReport::hit(3, Axis::Vertical));
    }

    #[test]
    fn simultaneous_hit_prefers_horizontal() {
        // First non-background pixel appears at index 3 on both the top
        // row and the left column; the horizontal check runs first.
        let mut img = black(10, 10);
        img.put_pixel(3, 0, RED);
        img.put_pixel(0, 3, RED);
        let report = scan_corner(&img, Corner::TopLeft, 30);
        assert_eq!(report, CornerReport::hit(3, Axis::Horizontal));
    }

    #[test]
    fn right_corners_measure_inward_from_right_edge() {
        let mut img = black(12, 10);
        img.put_pixel(9, 0, RED);
        let report = scan_corner(&img, Corner::TopRight, 30);
        assert_eq!(report, CornerReport::hit(2, Axis::Horizontal));
    }

    #[test]
    fn bottom_corners_scan_last_row_and_upward() {
        let mut img = black(10, 12);
        img.put_pixel(5, 11, RED);
        assert_eq!(
            scan_corner(&img, Corner::BottomLeft, 30),
            CornerReport::hit(5, Axis::Horizontal)
        );

        let mut img = black(10, 12);
        img.put_pixel(9, 7, RED);
        assert_eq!(
            scan_corner(&img, Corner::BottomRight, 30),
            CornerReport::hit(4, Axis::Vertical)
        );
    }

    #[test]
    fn scan_depth_is_limited_by_min_dimension() {
        // 10 wide, 3 tall: the scan stops after index 2, so content at
        // column 5 of the top row is never reached.
        let mut img = black(10, 3);
        img.put_pixel(5, 0, RED);
        let report = scan_corner(&img, Corner::TopLeft, 30);
        assert_eq!(report, CornerReport::no_evidence());
    }

    #[test]
    fn zero_sized_image_fails_fast() {
        let img = RgbImage::new(0, 5);
        assert!(matches!(
            scan_corners(&img, 30),
            Err(Error::InvalidImage { width: 0, height: 5 })
        ));

        let img = RgbImage::new(5, 0);
        assert!(matches!(
            scan_corners(&img, 30),
            Err(Error::InvalidImage { width: 5, height: 0 })
        ));
    }
}
