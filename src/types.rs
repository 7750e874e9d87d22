//! Shared types used across CELLCROP.
//! Includes the scan `Axis`, the four image `Corner`s, the per-corner scan
//! results (`CornerReport`, `CornerReports`), and the resolved `CropBox`.
use serde::{Deserialize, Serialize};

/// Scan direction along which a corner first met a non-background pixel.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Along the row adjacent to the corner (top or bottom edge)
    Horizontal,
    /// Along the column adjacent to the corner (left or right edge)
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomLeft => "bottom_left",
            Corner::BottomRight => "bottom_right",
        };
        write!(f, "{}", s)
    }
}

/// Result of scanning one corner inward.
///
/// `offset` is the distance in pixels from the corner, along `axis`, to the
/// first non-background pixel. `axis: None` means the scan exhausted its
/// range without evidence; `offset` is 0 in that case and the corner places
/// no constraint on the crop box.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CornerReport {
    pub offset: u32,
    pub axis: Option<Axis>,
}

impl CornerReport {
    pub fn hit(offset: u32, axis: Axis) -> Self {
        Self {
            offset,
            axis: Some(axis),
        }
    }

    /// Explicit "no evidence" sentinel for a fully-background scan range.
    pub fn no_evidence() -> Self {
        Self {
            offset: 0,
            axis: None,
        }
    }
}

impl std::fmt::Display for CornerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.axis {
            Some(axis) => write!(f, "({}, {})", self.offset, axis),
            None => write!(f, "({}, none)", self.offset),
        }
    }
}

/// The four corner reports produced by one scan pass over an image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CornerReports {
    pub top_left: CornerReport,
    pub top_right: CornerReport,
    pub bottom_left: CornerReport,
    pub bottom_right: CornerReport,
}

impl std::fmt::Display for CornerReports {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "top_left={}, top_right={}, bottom_left={}, bottom_right={}",
            self.top_left, self.top_right, self.bottom_left, self.bottom_right
        )
    }
}

/// Rectangular crop region in original-image pixel coordinates.
///
/// Constructed only by the resolver, which guarantees
/// `left < right <= width` and `top < bottom <= height`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl std::fmt::Display for CropBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "left={}, right={}, top={}, bottom={}",
            self.left, self.right, self.top, self.bottom
        )
    }
}
