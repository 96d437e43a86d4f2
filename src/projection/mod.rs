//! Growth projection for flat, exponential and optimized trajectories

mod config;
mod engine;
mod series;

pub use config::{ContributionFrequency, ProjectionConfig, TIME_RANGE_OPTIONS};
pub use engine::{project, ProjectionEngine};
pub use series::{ProjectionPoint, ProjectionSeries, ProjectionSummary};
