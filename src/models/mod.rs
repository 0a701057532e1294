pub mod crop;
pub mod farm;

pub use crop::*;
pub use farm::*;
