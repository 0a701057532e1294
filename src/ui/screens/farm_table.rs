use super::{percent, NO_FARMS};
use crate::models::FarmRecord;
use std::fmt;

const HEADERS: [&str; 6] = [
    "Farm ID",
    "Crop Type",
    "Moisture (%)",
    "Threshold (%)",
    "Weather",
    "Irrigation",
];

pub struct FarmTableScreen<'a> {
    pub records: &'a [&'a FarmRecord],
    pub decimals: usize,
}

impl<'a> FarmTableScreen<'a> {
    pub fn new(records: &'a [&'a FarmRecord]) -> Self {
        Self {
            records,
            decimals: 1,
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    fn row(cells: [&str; 6]) -> String {
        format!(
            "{:<10} {:<19} {:<13} {:<14} {:<10} {}",
            cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
        )
    }
}

impl fmt::Display for FarmTableScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "{}", NO_FARMS);
        }

        let header = Self::row(HEADERS);
        writeln!(f)?;
        writeln!(f, "--- All Farms ---")?;
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.len()))?;

        for record in self.records {
            let moisture = percent(record.soil_moisture, self.decimals);
            let threshold = percent(record.moisture_threshold, self.decimals);
            writeln!(
                f,
                "{}",
                Self::row([
                    record.farm_id.as_str(),
                    &record.crop_type,
                    &moisture,
                    &threshold,
                    &record.weather_forecast,
                    record.irrigation_label(),
                ])
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FarmId;

    fn record(id: &str, crop: &str, moisture: f64, weather: &str) -> FarmRecord {
        FarmRecord::new(FarmId::parse(id).unwrap(), crop, moisture, weather)
    }

    #[test]
    fn empty_table_prints_notice() {
        let records: Vec<&FarmRecord> = Vec::new();
        let out = FarmTableScreen::new(&records).to_string();
        assert_eq!(out, "No farms in the system!\n");
    }

    #[test]
    fn table_lists_farms_in_order() {
        let wheat = record("F1", "Wheat", 30.0, "Sunny");
        let mut rice = record("F2", "Rice", 75.25, "Rain");
        rice.needs_irrigation = true;
        let records = vec![&wheat, &rice];

        let out = FarmTableScreen::new(&records).to_string();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[1], "--- All Farms ---");
        assert!(lines[2].starts_with("Farm ID    Crop Type"));
        assert!(lines[2].ends_with("Irrigation"));
        assert!(lines[3].chars().all(|c| c == '-'));
        assert_eq!(lines[3].len(), lines[2].len());
        assert!(lines[4].starts_with("F1         Wheat"));
        assert!(lines[4].contains("30.0%"));
        assert!(lines[4].contains("40.0%"));
        assert!(lines[4].ends_with("Not Needed"));
        assert!(lines[5].starts_with("F2         Rice"));
        assert!(lines[5].contains("75.2%") || lines[5].contains("75.3%"));
        assert!(lines[5].ends_with("NEEDED"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn columns_line_up() {
        let a = record("A", "Corn", 5.0, "Sunny");
        let b = record("LongFarm9", "Soybean", 100.0, "Cloudy");
        let records = vec![&a, &b];

        let out = FarmTableScreen::new(&records).with_decimals(2).to_string();
        let lines: Vec<&str> = out.lines().collect();
        let weather_col = lines[2].find("Weather").unwrap();
        assert_eq!(lines[4].find("Sunny"), Some(weather_col));
        assert_eq!(lines[5].find("Cloudy"), Some(weather_col));
        assert!(lines[5].contains("100.00%"));
        assert!(lines[5].contains("35.00%"));
    }
}
