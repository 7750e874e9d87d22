use tracing::info;

use cellcrop::api::{crop_directory_to_path, crop_image_to_path};
use cellcrop::core::params::CropParams;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = CropParams {
        tolerance: args.tolerance,
        margin: args.margin,
    };

    if let Some(input_dir) = args.input_dir {
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;
        if !input_dir.exists() {
            return Err(AppError::FileNotFound { path: input_dir }.into());
        }

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = crop_directory_to_path(&input_dir, &output_dir, &params, true)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("Batch processing complete!");
            println!("Processed: {}", report.processed);
            println!("Skipped: {}", report.skipped);
            println!("Errors: {}", report.errors);
        }
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "<INPUT>".to_string(),
        })?;
        if !input.exists() {
            return Err(AppError::FileNotFound { path: input }.into());
        }

        let report = crop_image_to_path(&input, args.output.as_deref(), &params)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("Image dimensions: {}x{} pixels", report.width, report.height);
            println!("Image channels: {}", report.channels);
            println!("Non-background pixel detection results:");
            println!("{}", report.reports);
            println!("Cropping coordinates: {}", report.bbox);
            println!("Cropped image saved as {:?}", report.output);
        }
    }

    Ok(())
}
