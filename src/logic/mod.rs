pub mod irrigation;
pub mod registry;

pub use irrigation::IrrigationReport;
pub use registry::FarmRegistry;
