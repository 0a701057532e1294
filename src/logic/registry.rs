use super::irrigation::{needs_irrigation, IrrigationDecision, IrrigationReport};
use crate::error::RegistryError;
use crate::models::{FarmId, FarmRecord};
use indexmap::IndexMap;
use tracing::{debug, info};

/// Insertion-ordered set of farm records keyed by farm ID.
#[derive(Debug, Clone, Default)]
pub struct FarmRegistry {
    farms: IndexMap<FarmId, FarmRecord>,
}

impl FarmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the ID, reject duplicates, and append a new record.
    ///
    /// Rejections leave the registry untouched. The caller decides whether to
    /// ask again.
    pub fn insert(
        &mut self,
        farm_id: &str,
        crop_type: &str,
        soil_moisture: f64,
        weather_forecast: &str,
    ) -> Result<&FarmRecord, RegistryError> {
        let farm_id = FarmId::parse(farm_id)?;

        if self.farms.contains_key(&farm_id) {
            debug!(farm_id = %farm_id, "Rejected duplicate farm ID");
            return Err(RegistryError::DuplicateId(farm_id.to_string()));
        }

        let record = FarmRecord::new(
            farm_id.clone(),
            crop_type,
            soil_moisture,
            weather_forecast,
        );
        debug!(
            farm_id = %farm_id,
            crop_type = %record.crop_type,
            soil_moisture = record.soil_moisture,
            moisture_threshold = record.moisture_threshold,
            "Inserted farm"
        );

        let (index, _) = self.farms.insert_full(farm_id, record);
        Ok(&self.farms[index])
    }

    /// Remove a farm, keeping the relative order of the others.
    pub fn delete(&mut self, farm_id: &str) -> Result<FarmRecord, RegistryError> {
        let record = self
            .farms
            .shift_remove(farm_id)
            .ok_or_else(|| RegistryError::NotFound(farm_id.to_string()))?;
        debug!(farm_id = %farm_id, remaining = self.farms.len(), "Deleted farm");
        Ok(record)
    }

    pub fn find(&self, farm_id: &str) -> Result<&FarmRecord, RegistryError> {
        self.farms
            .get(farm_id)
            .ok_or_else(|| RegistryError::NotFound(farm_id.to_string()))
    }

    pub fn contains(&self, farm_id: &str) -> bool {
        self.farms.contains_key(farm_id)
    }

    pub fn list_all(&self) -> Vec<&FarmRecord> {
        self.farms.values().collect()
    }

    pub fn len(&self) -> usize {
        self.farms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.farms.is_empty()
    }

    /// Recompute `needs_irrigation` for every farm from scratch.
    pub fn evaluate_irrigation(&mut self) -> IrrigationReport {
        let mut report = IrrigationReport::default();

        for record in self.farms.values_mut() {
            record.needs_irrigation = needs_irrigation(
                record.soil_moisture,
                record.moisture_threshold,
                &record.weather_forecast,
            );
            report.push(IrrigationDecision::from_record(record));
        }

        info!(
            farms = self.len(),
            needing_irrigation = report.needing_irrigation,
            "Evaluated irrigation needs"
        );
        report
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        debug!(farms = self.farms.len(), "Clearing farm registry");
        self.farms.clear();
    }
}
