/// Threshold used for any crop type not in the table.
pub const DEFAULT_MOISTURE_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crop {
    Wheat,
    Corn,
    Rice,
    Soybean,
    Cotton,
    Tomato,
    Potato,
}

impl Crop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Corn => "Corn",
            Crop::Rice => "Rice",
            Crop::Soybean => "Soybean",
            Crop::Cotton => "Cotton",
            Crop::Tomato => "Tomato",
            Crop::Potato => "Potato",
        }
    }

    /// Case-insensitive exact match; no aliases or partial names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wheat" => Some(Crop::Wheat),
            "corn" => Some(Crop::Corn),
            "rice" => Some(Crop::Rice),
            "soybean" => Some(Crop::Soybean),
            "cotton" => Some(Crop::Cotton),
            "tomato" => Some(Crop::Tomato),
            "potato" => Some(Crop::Potato),
            _ => None,
        }
    }

    /// Soil moisture percentage below which the crop needs water.
    pub fn moisture_threshold(&self) -> f64 {
        match self {
            Crop::Wheat => 40.0,
            Crop::Corn => 45.0,
            Crop::Rice => 60.0,
            Crop::Soybean => 35.0,
            Crop::Cotton => 30.0,
            Crop::Tomato => 50.0,
            Crop::Potato => 55.0,
        }
    }

    pub fn all() -> &'static [Crop] {
        &[
            Crop::Wheat,
            Crop::Corn,
            Crop::Rice,
            Crop::Soybean,
            Crop::Cotton,
            Crop::Tomato,
            Crop::Potato,
        ]
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up the moisture threshold for free-text crop input.
///
/// Unrecognized crops silently fall back to [`DEFAULT_MOISTURE_THRESHOLD`],
/// which is indistinguishable from an explicit "wheat" entry.
pub fn moisture_threshold_for(crop_type: &str) -> f64 {
    Crop::from_str(crop_type)
        .map(|crop| crop.moisture_threshold())
        .unwrap_or(DEFAULT_MOISTURE_THRESHOLD)
}
