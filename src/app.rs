use crate::config::Config;
use crate::error::RegistryError;
use crate::logic::FarmRegistry;
use crate::models::FarmId;
use crate::ui::screens::{
    error_message, FarmDetailScreen, FarmTableScreen, IrrigationScreen, NO_FARMS,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Delete,
    Display,
    Search,
    CheckIrrigation,
    Exit,
}

impl MenuChoice {
    pub fn from_key(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Insert),
            "2" => Some(MenuChoice::Delete),
            "3" => Some(MenuChoice::Display),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::CheckIrrigation),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            MenuChoice::Insert => '1',
            MenuChoice::Delete => '2',
            MenuChoice::Display => '3',
            MenuChoice::Search => '4',
            MenuChoice::CheckIrrigation => '5',
            MenuChoice::Exit => '6',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuChoice::Insert => "Insert New Farm",
            MenuChoice::Delete => "Delete Farm by ID",
            MenuChoice::Display => "Display All Farms",
            MenuChoice::Search => "Search Farm by ID",
            MenuChoice::CheckIrrigation => "Check Irrigation Needs",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::Insert,
            MenuChoice::Delete,
            MenuChoice::Display,
            MenuChoice::Search,
            MenuChoice::CheckIrrigation,
            MenuChoice::Exit,
        ]
    }
}

/// One interactive session: owns the registry for its whole lifetime.
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub registry: FarmRegistry,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            config,
            registry: FarmRegistry::new(),
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.registry.clear();
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn take_status(&mut self) -> Option<String> {
        self.status_message.take()
    }

    fn decimals(&self) -> usize {
        self.config.display.decimals
    }

    /// Duplicate check ahead of the remaining insert prompts.
    pub fn farm_id_available(&mut self, farm_id: &FarmId) -> bool {
        if self.registry.contains(farm_id.as_str()) {
            let err = RegistryError::DuplicateId(farm_id.to_string());
            self.set_status(&error_message(&err));
            return false;
        }
        true
    }

    pub fn insert_farm(
        &mut self,
        farm_id: &str,
        crop_type: &str,
        soil_moisture: f64,
        weather_forecast: &str,
    ) {
        let message = match self
            .registry
            .insert(farm_id, crop_type, soil_moisture, weather_forecast)
        {
            Ok(record) => format!("Farm '{}' added successfully!", record.farm_id),
            Err(e) => {
                debug!(error = %e, "Insert rejected");
                error_message(&e)
            }
        };
        self.set_status(&message);
    }

    pub fn delete_farm(&mut self, farm_id: &str) {
        let message = match self.registry.delete(farm_id) {
            Ok(record) => format!("Farm '{}' deleted successfully!", record.farm_id),
            Err(e) => error_message(&e),
        };
        self.set_status(&message);
    }

    pub fn farm_table(&self) -> String {
        let records = self.registry.list_all();
        FarmTableScreen::new(&records)
            .with_decimals(self.decimals())
            .to_string()
    }

    pub fn search_farm(&self, farm_id: &str) -> String {
        if self.registry.is_empty() {
            return format!("{}\n", NO_FARMS);
        }

        match self.registry.find(farm_id) {
            Ok(record) => FarmDetailScreen::new(record)
                .with_decimals(self.decimals())
                .to_string(),
            Err(e) => format!("{}\n", error_message(&e)),
        }
    }

    pub fn check_irrigation(&mut self) -> String {
        let report = self.registry.evaluate_irrigation();
        IrrigationScreen::new(&report)
            .with_decimals(self.decimals())
            .to_string()
    }
}
