use crate::utils::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Columns a row needs: id, x, y, z, name.
pub const REQUIRED_FIELDS: usize = 5;

/// One electrode row. Coordinates stay as the original text so the output
/// reproduces them byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectrodeRecord {
    pub id: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub name: String,
}

impl ElectrodeRecord {
    /// Positional extraction from a CSV row. Columns past the fifth are ignored.
    pub fn from_row(row: &csv::StringRecord) -> Result<Self> {
        if row.len() < REQUIRED_FIELDS {
            return Err(GeoError::MalformedRow {
                line: row.position().map(|p| p.line()).unwrap_or(0),
                fields: row.len(),
            });
        }

        Ok(Self {
            id: row[0].to_string(),
            x: row[1].to_string(),
            y: row[2].to_string(),
            z: row[3].to_string(),
            name: row[4].to_string(),
        })
    }
}

/// Display properties written into the closing block of the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStyle {
    pub view_name: String,
    pub point_type: u32,
    pub point_size: u32,
    pub line_type: u32,
    pub line_width: u32,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            view_name: String::new(),
            point_type: 1,
            point_size: 6,
            line_type: 1,
            line_width: 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Drop the first row instead of emitting it as an electrode.
    pub skip_header: bool,
    pub style: ViewStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows_written: usize,
    pub skipped_header: bool,
    pub output_path: PathBuf,
}
