use super::crop::moisture_threshold_for;
use crate::error::{InvalidIdReason, RegistryError};
use std::borrow::Borrow;

pub const MAX_FARM_ID_LEN: usize = 9;
pub const MAX_CROP_TYPE_LEN: usize = 19;
pub const MAX_WEATHER_LEN: usize = 9;

/// Validated farm identifier: 1-9 ASCII letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FarmId(String);

impl FarmId {
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        let len = raw.chars().count();
        if len == 0 || len > MAX_FARM_ID_LEN {
            return Err(RegistryError::InvalidId {
                id: raw.to_string(),
                reason: InvalidIdReason::Length,
            });
        }

        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RegistryError::InvalidId {
                id: raw.to_string(),
                reason: InvalidIdReason::Character,
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets the registry look records up by `&str` without allocating a FarmId.
impl Borrow<str> for FarmId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FarmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FarmRecord {
    pub farm_id: FarmId,
    pub crop_type: String,
    pub soil_moisture: f64,
    pub moisture_threshold: f64,
    pub weather_forecast: String,
    pub needs_irrigation: bool,
}

impl FarmRecord {
    /// The threshold is resolved here once and never recomputed.
    pub fn new(
        farm_id: FarmId,
        crop_type: &str,
        soil_moisture: f64,
        weather_forecast: &str,
    ) -> Self {
        let crop_type = truncate_chars(crop_type, MAX_CROP_TYPE_LEN);
        let weather_forecast = truncate_chars(weather_forecast, MAX_WEATHER_LEN);
        let moisture_threshold = moisture_threshold_for(&crop_type);

        Self {
            farm_id,
            crop_type,
            soil_moisture,
            moisture_threshold,
            weather_forecast,
            needs_irrigation: false,
        }
    }

    pub fn irrigation_label(&self) -> &'static str {
        if self.needs_irrigation {
            "NEEDED"
        } else {
            "Not Needed"
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
