use super::{percent, NO_FARMS};
use crate::logic::IrrigationReport;
use std::fmt;

pub struct IrrigationScreen<'a> {
    pub report: &'a IrrigationReport,
    pub decimals: usize,
}

impl<'a> IrrigationScreen<'a> {
    pub fn new(report: &'a IrrigationReport) -> Self {
        Self {
            report,
            decimals: 1,
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

impl fmt::Display for IrrigationScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.report.is_empty() {
            return writeln!(f, "{}", NO_FARMS);
        }

        writeln!(f)?;
        writeln!(f, "--- Irrigation Check ---")?;

        for decision in &self.report.decisions {
            if decision.needs_irrigation {
                writeln!(
                    f,
                    "✓ Farm '{}' ({}) needs irrigation! (Moisture: {}, Threshold: {})",
                    decision.farm_id,
                    decision.crop_type,
                    percent(decision.soil_moisture, self.decimals),
                    percent(decision.moisture_threshold, self.decimals),
                )?;
            } else {
                writeln!(
                    f,
                    "  Farm '{}' ({}) - No irrigation needed",
                    decision.farm_id, decision.crop_type
                )?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Total farms needing irrigation: {}",
            self.report.needing_irrigation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::FarmRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_report_prints_notice() {
        let report = IrrigationReport::default();
        assert_eq!(
            IrrigationScreen::new(&report).to_string(),
            "No farms in the system!\n"
        );
    }

    #[test]
    fn report_lists_each_farm_and_total() {
        let mut registry = FarmRegistry::new();
        registry.insert("F1", "Wheat", 30.0, "Sunny").unwrap();
        registry.insert("F2", "Corn", 20.0, "rain").unwrap();
        let report = registry.evaluate_irrigation();

        let out = IrrigationScreen::new(&report).to_string();
        assert_eq!(
            out,
            "\n--- Irrigation Check ---\n\
             ✓ Farm 'F1' (Wheat) needs irrigation! (Moisture: 30.0%, Threshold: 40.0%)\n  \
             Farm 'F2' (Corn) - No irrigation needed\n\
             \n\
             Total farms needing irrigation: 1\n"
        );
    }
}
