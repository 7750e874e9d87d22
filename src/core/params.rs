use serde::{Deserialize, Serialize};

/// Crop tuning parameters suitable for config files and presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CropParams {
    /// Channel ceiling at or below which a pixel counts as background
    pub tolerance: u8,
    /// Extra pixels retained inside the detected content boundary
    pub margin: u32,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            tolerance: 30,
            margin: 5,
        }
    }
}
