pub mod crops;
pub mod farm_detail;
pub mod farm_table;
pub mod irrigation;
pub mod menu;

pub use crops::CropTableScreen;
pub use farm_detail::FarmDetailScreen;
pub use farm_table::FarmTableScreen;
pub use irrigation::IrrigationScreen;
pub use menu::MenuScreen;

use crate::error::RegistryError;

pub const NO_FARMS: &str = "No farms in the system!";

pub fn percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// User-facing text for a rejected registry operation.
pub fn error_message(err: &RegistryError) -> String {
    match err {
        RegistryError::InvalidId { reason, .. } => reason.to_string(),
        RegistryError::DuplicateId(_) => "Error: Farm ID already exists!".to_string(),
        RegistryError::NotFound(id) => format!("Farm with ID '{}' not found!", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidIdReason;

    #[test]
    fn percent_respects_decimals() {
        assert_eq!(percent(30.0, 1), "30.0%");
        assert_eq!(percent(39.95, 2), "39.95%");
        assert_eq!(percent(42.4, 0), "42%");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            error_message(&RegistryError::InvalidId {
                id: "F-1".into(),
                reason: InvalidIdReason::Character,
            }),
            "Farm ID must contain only letters and numbers!"
        );
        assert_eq!(
            error_message(&RegistryError::DuplicateId("F1".into())),
            "Error: Farm ID already exists!"
        );
        assert_eq!(
            error_message(&RegistryError::NotFound("F9".into())),
            "Farm with ID 'F9' not found!"
        );
    }
}
