//! Projection configuration: horizon, rates and contribution frequency

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, ParseError};

/// Horizons offered by the time-range picker
pub const TIME_RANGE_OPTIONS: [u32; 8] = [5, 10, 15, 20, 25, 30, 40, 50];

/// How often the savings contribution is added to the compounding base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl ContributionFrequency {
    pub const ALL: [ContributionFrequency; 3] = [
        ContributionFrequency::Weekly,
        ContributionFrequency::Monthly,
        ContributionFrequency::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionFrequency::Weekly => "weekly",
            ContributionFrequency::Monthly => "monthly",
            ContributionFrequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContributionFrequency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(ContributionFrequency::Weekly),
            "monthly" => Ok(ContributionFrequency::Monthly),
            "yearly" => Ok(ContributionFrequency::Yearly),
            _ => Err(ParseError::UnknownFrequency(s.to_string())),
        }
    }
}

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of years to project
    pub horizon_years: u32,

    /// Annual growth rate in percent (5.0 = 5%)
    pub growth_rate_percent: f64,

    /// Share of monthly earnings added as savings, in percent
    pub savings_rate_percent: f64,

    pub frequency: ContributionFrequency,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: 10,
            growth_rate_percent: 5.0,
            savings_rate_percent: 10.0,
            frequency: ContributionFrequency::Monthly,
        }
    }
}

impl ProjectionConfig {
    /// Monthly growth rate as a decimal
    pub fn monthly_growth_rate(&self) -> f64 {
        self.growth_rate_percent / 12.0 / 100.0
    }

    /// Total number of months covered by the horizon
    pub fn total_months(&self) -> u64 {
        u64::from(self.horizon_years) * 12
    }

    /// Caller-side check for non-finite rates. The engine runs regardless.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.growth_rate_percent.is_finite() {
            return Err(InputError::InvalidRate {
                field: "growth rate",
                value: self.growth_rate_percent,
            });
        }
        if !self.savings_rate_percent.is_finite() {
            return Err(InputError::InvalidRate {
                field: "savings rate",
                value: self.savings_rate_percent,
            });
        }
        Ok(())
    }
}
