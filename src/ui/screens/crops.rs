use super::percent;
use crate::models::{Crop, DEFAULT_MOISTURE_THRESHOLD};
use std::fmt;

/// Static crop threshold reference, printed by the `crops` subcommand.
pub struct CropTableScreen {
    pub decimals: usize,
}

impl CropTableScreen {
    pub fn new() -> Self {
        Self { decimals: 1 }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

impl Default for CropTableScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CropTableScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("{:<12} {}", "Crop", "Threshold (%)");
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.len()))?;

        for crop in Crop::all() {
            writeln!(
                f,
                "{:<12} {}",
                crop.as_str(),
                percent(crop.moisture_threshold(), self.decimals)
            )?;
        }

        writeln!(
            f,
            "{:<12} {}",
            "(other)",
            percent(DEFAULT_MOISTURE_THRESHOLD, self.decimals)
        )
    }
}
