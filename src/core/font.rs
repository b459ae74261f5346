//! Font metrics handle of an output buffer

use serde::{Deserialize, Serialize};

/// Font family classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Modern,
    Raster,
    TrueType,
}

/// The active font of an output buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontInfo {
    pub face_name: String,
    /// Cell width in pixels
    pub cell_width: u16,
    /// Cell height in pixels
    pub cell_height: u16,
    pub weight: u16,
    pub family: FontFamily,
}

impl Default for FontInfo {
    fn default() -> Self {
        Self {
            face_name: "monospace".to_string(),
            cell_width: 8,
            cell_height: 16,
            weight: 400,
            family: FontFamily::TrueType,
        }
    }
}
