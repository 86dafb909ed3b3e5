//! Domain models: inputs, plant, price paths and results

pub mod plant;
pub mod result;
pub mod trajectory;
pub mod world_state;

// Re-exports
pub use plant::{EnergyOutputs, Plant, PlantDesign};
pub use result::{CashFlowSeries, ValuationResult};
pub use trajectory::{MarketPrices, PriceTrajectory};
pub use world_state::{Financials, PolicyRegime, PriceAssumptions, PriceModel, Strategy, WorldState};
