use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cellcrop", version, about = "CELLCROP CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    pub input: Option<PathBuf>,

    /// Output filename; defaults to the input name with a `_cropped`
    /// suffix inserted before the extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input directory containing image files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Channel ceiling at or below which a pixel counts as background
    #[arg(long, default_value_t = 30)]
    pub tolerance: u8,

    /// Extra pixels retained inside the detected content boundary
    #[arg(long, default_value_t = 5)]
    pub margin: u32,

    /// Print the run report as JSON instead of plain text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
