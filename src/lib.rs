#![doc = r#"
CELLCROP — corner-scan border detection and cropping for raster images.

This crate locates the non-background content region of an image by
scanning inward from each of its four corners, reconciles the four scan
reports into a rectangular crop box, and persists the cropped result.
It is built for batch de-bordering of scanned or rendered grid/cell
images (table screenshots and similar) ahead of downstream processing,
and powers the `cellcrop` CLI.

How detection works
-------------------
A pixel is background when every channel sits at or below a tolerance
threshold. Each corner is scanned inward: at step `i` the pixel on the
adjacent row is checked before the pixel on the adjacent column, and the
first non-background pixel fixes that corner's report (offset and axis).
The resolver pulls each crop boundary inward by the largest inset the two
corners bounding it reported, keeps a safety margin of border pixels, and
fails on degenerate geometry instead of slicing out of range.

Add dependency
--------------
```toml
[dependencies]
cellcrop = "0.1"
```

Quick start: crop a file to a sibling output
--------------------------------------------
```rust,no_run
use std::path::Path;
use cellcrop::{CropParams, crop_image_to_path};

fn main() -> cellcrop::Result<()> {
    let report = crop_image_to_path(Path::new("scan.png"), None, &CropParams::default())?;
    println!("saved {:?} ({})", report.output, report.bbox);
    Ok(())
}
```

Crop in-memory to `CroppedImage`
--------------------------------
```rust
use cellcrop::{CropParams, crop_to_buffer};
use image::RgbImage;

fn crop(image: &RgbImage) -> cellcrop::Result<RgbImage> {
    let params = CropParams {
        tolerance: 30,
        margin: 5,
    };
    let cropped = crop_to_buffer(image, &params)?;

    // Inspect `cropped.reports` and `cropped.bbox` if needed.
    Ok(cropped.image)
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use cellcrop::{CropParams, crop_directory_to_path};

fn main() -> cellcrop::Result<()> {
    let report = crop_directory_to_path(
        Path::new("/data/scans"),
        Path::new("/out"),
        &CropParams::default(),
        true, // continue_on_error
    )?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `cellcrop::Result<T>`; match on
`cellcrop::Error` to handle specific cases, e.g. codec failures or
degenerate crop geometry.

```rust,no_run
use std::path::Path;
use cellcrop::{CropParams, Error, crop_image_to_path};

fn main() {
    match crop_image_to_path(Path::new("/bad/path.png"), None, &CropParams::default()) {
        Ok(report) => println!("saved {:?}", report.output),
        Err(Error::Image(e)) => eprintln!("Codec error: {e}"),
        Err(Error::DegenerateCrop { .. }) => eprintln!("Margin overshot the image"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`Axis`, `CornerReport`, `CropBox`).
- [`core`] — corner-scanner and crop-resolver primitives.
- [`io`] — raster decode/encode collaborators.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::CropParams;
pub use error::{Error, Result};
pub use types::{Axis, Corner, CornerReport, CornerReports, CropBox};

// Scanner and resolver primitives
pub use core::processing::resolve::{crop_to_box, resolve_crop_box};
pub use core::processing::scan::{is_background, scan_corner, scan_corners};

// High-level API re-exports
pub use api::{
    BatchReport, CropReport, CroppedImage, crop_directory_to_path, crop_image_to_path,
    crop_to_buffer, derive_output_path,
};
