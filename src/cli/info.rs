use crate::error::Result;
use crate::io::read_image;
use crate::pipeline::capacity;
use crate::pixel::diff_indices;
use crate::strategy::Placement;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Capacity and carrier summary for an image
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub image: String,
    pub rows: usize,
    pub cols: usize,
    pub pixels: usize,
    pub sequential_capacity: usize,
    pub spread_capacity: usize,
    /// Present when compared against an altered image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altered: Option<AlteredSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlteredSummary {
    pub image: String,
    pub changed_pixels: usize,
    /// Row-major position of the first and last changed pixel
    pub first_change: Option<(usize, usize)>,
    pub last_change: Option<(usize, usize)>,
}

/// Inspect an image, optionally diffing it against an altered copy
pub fn show_info(image_path: &Path, altered_path: Option<&Path>) -> Result<InfoReport> {
    let image = read_image(image_path)?;
    let pixels = image.len();

    let altered = match altered_path {
        Some(path) => {
            let other = read_image(path)?;
            let changed = diff_indices(&image, &other)?;
            Some(AlteredSummary {
                image: path.display().to_string(),
                changed_pixels: changed.len(),
                first_change: changed.first().map(|&i| image.coordinate(i)),
                last_change: changed.last().map(|&i| image.coordinate(i)),
            })
        }
        None => None,
    };

    Ok(InfoReport {
        image: image_path.display().to_string(),
        rows: image.rows(),
        cols: image.cols(),
        pixels,
        sequential_capacity: capacity(pixels, Placement::Sequential),
        spread_capacity: capacity(pixels, Placement::Spread),
        altered,
    })
}

impl InfoReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for InfoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pixelstash Image Information")?;
        writeln!(f, "============================\n")?;
        writeln!(f, "File: {}", self.image)?;
        writeln!(f, "Dimensions: {} rows x {} cols", self.rows, self.cols)?;
        writeln!(f, "Pixels: {}\n", self.pixels)?;

        writeln!(f, "Capacity (characters):")?;
        writeln!(f, "  seq: {}", self.sequential_capacity)?;
        writeln!(f, "  spread: {}", self.spread_capacity)?;

        if let Some(altered) = &self.altered {
            writeln!(f)?;
            writeln!(f, "Compared with: {}", altered.image)?;
            writeln!(f, "  Changed pixels: {}", altered.changed_pixels)?;
            if let (Some(first), Some(last)) = (altered.first_change, altered.last_change) {
                writeln!(f, "  First change: row {}, col {}", first.0, first.1)?;
                writeln!(f, "  Last change: row {}, col {}", last.0, last.1)?;
            }
        }
        Ok(())
    }
}
