//! I/O layer: raster decode/encode collaborators for the crop pipeline.
//! The core never touches the filesystem; these wrappers turn files into
//! pixel grids and back.
pub mod raster;
pub use raster::{load_rgb, save_rgb};
