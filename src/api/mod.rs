//! High-level, ergonomic library API: crop a decoded image in memory,
//! crop a file to a sibling output, and batch helpers for directories.
//! Prefer these entrypoints over the low-level processing modules when
//! integrating CELLCROP.
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::CropParams;
use crate::core::processing::resolve::{crop_to_box, resolve_crop_box};
use crate::core::processing::scan::scan_corners;
use crate::error::Result;
use crate::io::raster::{load_rgb, save_rgb};
use crate::types::{CornerReports, CropBox};

/// Result of in-memory cropping
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub image: RgbImage,
    pub reports: CornerReports,
    pub bbox: CropBox,
}

/// Serializable summary of one file run, consumed by the CLI output
#[derive(Debug, Clone, Serialize)]
pub struct CropReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub reports: CornerReports,
    pub bbox: CropBox,
}

/// Summary of a directory batch run
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Derive the output filename: `{basename}_cropped{ext}`, split at the
/// last extension separator. `"scan.png"` becomes `"scan_cropped.png"`,
/// extensionless `"scan"` becomes `"scan_cropped"`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    match (input.file_stem(), input.extension()) {
        (Some(stem), Some(ext)) => {
            let mut name = stem.to_os_string();
            name.push("_cropped.");
            name.push(ext);
            input.with_file_name(name)
        }
        _ => {
            let mut name = input
                .file_name()
                .map(std::ffi::OsStr::to_os_string)
                .unwrap_or_default();
            name.push("_cropped");
            input.with_file_name(name)
        }
    }
}

/// Scan, resolve, and crop a decoded image (no disk I/O).
///
/// Returns the cropped pixels together with the corner reports and the
/// resolved box so callers can inspect what was detected.
pub fn crop_to_buffer(image: &RgbImage, params: &CropParams) -> Result<CroppedImage> {
    let reports = scan_corners(image, params.tolerance)?;
    let bbox = resolve_crop_box(&reports, image.width(), image.height(), params.margin)?;
    let cropped = crop_to_box(image, &bbox);
    Ok(CroppedImage {
        image: cropped,
        reports,
        bbox,
    })
}

/// Full pipeline for one file: load, scan, resolve, crop, save.
///
/// When `output` is `None` the destination is derived next to the input
/// via [`derive_output_path`].
pub fn crop_image_to_path(
    input: &Path,
    output: Option<&Path>,
    params: &CropParams,
) -> Result<CropReport> {
    let image = load_rgb(input)?;
    let (width, height) = image.dimensions();

    let cropped = crop_to_buffer(&image, params)?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input),
    };
    save_rgb(&cropped.image, &output)?;
    info!("cropped {:?} -> {:?} ({})", input, output, cropped.bbox);

    Ok(CropReport {
        input: input.to_path_buf(),
        output,
        width,
        height,
        channels: 3,
        reports: cropped.reports,
        bbox: cropped.bbox,
    })
}

/// Crop every image file in `input_dir` into `output_dir`.
///
/// Entries that are not files, or whose extension no image codec claims,
/// are skipped. With `continue_on_error` per-file failures are logged and
/// counted instead of aborting the batch.
pub fn crop_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &CropParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || image::ImageFormat::from_path(&path).is_err() {
            info!("Skipping non-image entry: {:?}", path);
            report.skipped += 1;
            continue;
        }

        // Re-anchor the derived name under the output directory
        let output = match path.file_name() {
            Some(name) => output_dir.join(derive_output_path(Path::new(name))),
            None => {
                report.skipped += 1;
                continue;
            }
        };

        match crop_image_to_path(&path, Some(&output), params) {
            Ok(_) => {
                info!("Successfully processed: {:?}", path);
                report.processed += 1;
            }
            Err(e) if continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
