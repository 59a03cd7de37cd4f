pub mod calculator;
pub mod config;
pub mod input;

// Flat public surface for domain types and functions.
pub use calculator::{calculate, CalculationInput, CalculationResult};
pub use config::{YearConfig, DEFAULT_YEAR};
pub use input::parse_amount;
