use super::percent;
use crate::models::FarmRecord;
use std::fmt;

pub struct FarmDetailScreen<'a> {
    pub record: &'a FarmRecord,
    pub decimals: usize,
}

impl<'a> FarmDetailScreen<'a> {
    pub fn new(record: &'a FarmRecord) -> Self {
        Self {
            record,
            decimals: 1,
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

impl fmt::Display for FarmDetailScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        writeln!(f)?;
        writeln!(f, "--- Farm Found ---")?;
        writeln!(f, "Farm ID: {}", record.farm_id)?;
        writeln!(f, "Crop Type: {}", record.crop_type)?;
        writeln!(
            f,
            "Soil Moisture: {}",
            percent(record.soil_moisture, self.decimals)
        )?;
        writeln!(
            f,
            "Moisture Threshold: {}",
            percent(record.moisture_threshold, self.decimals)
        )?;
        writeln!(f, "Weather Forecast: {}", record.weather_forecast)?;
        writeln!(
            f,
            "Irrigation Needed: {}",
            if record.needs_irrigation { "YES" } else { "NO" }
        )
    }
}
