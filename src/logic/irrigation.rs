use crate::models::{FarmId, FarmRecord};

/// Forecast value (after lowercasing) that suppresses irrigation.
pub const RAIN_FORECAST: &str = "rain";

/// Irrigation rule
///
/// Conditions:
/// - Soil moisture strictly below the crop threshold
/// - Forecast is not exactly "rain" (case-insensitive)
///
/// Rain suppresses irrigation regardless of how dry the soil is.
pub fn needs_irrigation(
    soil_moisture: f64,
    moisture_threshold: f64,
    weather_forecast: &str,
) -> bool {
    soil_moisture < moisture_threshold && weather_forecast.to_lowercase() != RAIN_FORECAST
}

/// Outcome of the rule for a single farm.
#[derive(Debug, Clone, PartialEq)]
pub struct IrrigationDecision {
    pub farm_id: FarmId,
    pub crop_type: String,
    pub soil_moisture: f64,
    pub moisture_threshold: f64,
    pub needs_irrigation: bool,
}

impl IrrigationDecision {
    pub fn from_record(record: &FarmRecord) -> Self {
        Self {
            farm_id: record.farm_id.clone(),
            crop_type: record.crop_type.clone(),
            soil_moisture: record.soil_moisture,
            moisture_threshold: record.moisture_threshold,
            needs_irrigation: record.needs_irrigation,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrrigationReport {
    pub decisions: Vec<IrrigationDecision>,
    pub needing_irrigation: usize,
}

impl IrrigationReport {
    pub fn push(&mut self, decision: IrrigationDecision) {
        if decision.needs_irrigation {
            self.needing_irrigation += 1;
        }
        self.decisions.push(decision);
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}
