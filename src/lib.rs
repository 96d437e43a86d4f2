//! Earnings Projection - Salary breakdown and long-run growth projections
//!
//! This library provides:
//! - Per-second through per-year earnings from an hourly rate and monthly hours
//! - Tax adjustment and resolution of hourly/monthly, gross/net inputs
//! - Flat, exponential and contribution-optimized growth projections
//! - Danish-style currency formatting and rate profile labels
//! - A parallel scenario runner for comparing projection settings

pub mod currency;
pub mod earnings;
pub mod error;
pub mod inputs;
pub mod profiles;
pub mod projection;
pub mod scenario;
pub mod tax;

// Re-export commonly used types
pub use currency::{format_currency, Currency};
pub use earnings::{derive_earnings, EarningsBreakdown};
pub use error::{InputError, ParseError};
pub use inputs::{EarningsCalculation, IncomeBasis, SalaryInputs, TaxTreatment};
pub use projection::{
    project, ContributionFrequency, ProjectionConfig, ProjectionEngine, ProjectionPoint,
    ProjectionSeries,
};
pub use scenario::ScenarioRunner;
pub use tax::apply_tax_percentage;
