//! Core projection engine for multi-year earnings growth

use super::config::{ContributionFrequency, ProjectionConfig};
use super::series::{ProjectionPoint, ProjectionSeries};

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection for one monthly earnings baseline.
    ///
    /// The model is monthly but every trajectory is a closed form of the
    /// elapsed month count, so only the 12-month boundaries are evaluated.
    /// Skipped months would be discarded anyway.
    pub fn project(&self, monthly_earnings: f64) -> ProjectionSeries {
        let horizon = self.config.horizon_years;
        let mut series = ProjectionSeries::with_capacity(horizon as usize + 1);

        for year in 0..=horizon {
            let month = u64::from(year) * 12;
            series.push(self.calculate_month(monthly_earnings, month));
        }

        series
    }

    /// Evaluate all three trajectories at an elapsed month count
    fn calculate_month(&self, monthly_earnings: f64, month: u64) -> ProjectionPoint {
        let i = month as f64;
        let growth_factor = (1.0 + self.config.monthly_growth_rate()).powf(i);
        let monthly_savings = monthly_earnings * self.config.savings_rate_percent / 100.0;

        let flat = monthly_earnings * i;
        let exponential = monthly_earnings * i * growth_factor;

        let optimized = match self.config.frequency {
            ContributionFrequency::Weekly => {
                let weekly_contribution = monthly_savings / 4.0;
                (monthly_earnings * i + weekly_contribution * (i * 4.0)) * growth_factor
            }
            ContributionFrequency::Monthly => {
                (monthly_earnings + monthly_savings) * i * growth_factor
            }
            ContributionFrequency::Yearly => {
                let yearly_contribution = monthly_savings * 12.0;
                let completed_years = (month / 12) as f64;
                (monthly_earnings * i + yearly_contribution * completed_years) * growth_factor
            }
        };

        ProjectionPoint {
            // month is built from a u32 year, so this fits
            year: (month / 12) as u32,
            flat,
            exponential,
            optimized,
        }
    }
}

/// Project `monthly_earnings` over `horizon_years` with the given rates.
///
/// Returns `horizon_years + 1` points; point 0 is all zero. Rates are not
/// validated and non-finite inputs propagate into the series.
pub fn project(
    monthly_earnings: f64,
    horizon_years: u32,
    growth_rate_percent: f64,
    savings_rate_percent: f64,
    frequency: ContributionFrequency,
) -> ProjectionSeries {
    let config = ProjectionConfig {
        horizon_years,
        growth_rate_percent,
        savings_rate_percent,
        frequency,
    };
    ProjectionEngine::new(config).project(monthly_earnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_length_and_years() {
        for &years in &[1, 5, 10, 37, 50] {
            let series = project(22400.0, years, 5.0, 10.0, ContributionFrequency::Weekly);
            assert_eq!(series.len(), years as usize + 1);
            for (idx, point) in series.iter().enumerate() {
                assert_eq!(point.year, idx as u32);
            }
        }
    }

    #[test]
    fn test_zero_horizon_gives_only_origin() {
        let series = project(1000.0, 0, 5.0, 10.0, ContributionFrequency::Monthly);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_origin_is_zero() {
        for frequency in ContributionFrequency::ALL {
            let series = project(31234.5, 10, 12.0, 30.0, frequency);
            let origin = series.points[0];
            assert_eq!(origin.year, 0);
            assert_eq!(origin.flat, 0.0);
            assert_eq!(origin.exponential, 0.0);
            assert_eq!(origin.optimized, 0.0);
        }
    }

    #[test]
    fn test_zero_growth_exponential_equals_flat() {
        let series = project(1234.56, 20, 0.0, 10.0, ContributionFrequency::Yearly);
        for point in &series {
            assert_eq!(point.exponential, point.flat);
        }
    }

    #[test]
    fn test_monthly_without_savings_matches_exponential() {
        let series = project(22400.0, 30, 7.5, 0.0, ContributionFrequency::Monthly);
        for point in &series {
            assert_eq!(point.optimized, point.exponential);
        }
    }

    #[test]
    fn test_trajectories_non_decreasing() {
        for frequency in ContributionFrequency::ALL {
            let series = project(15000.0, 50, 4.0, 15.0, frequency);
            for pair in series.points.windows(2) {
                assert!(pair[1].flat >= pair[0].flat);
                assert!(pair[1].exponential >= pair[0].exponential);
                assert!(pair[1].optimized >= pair[0].optimized);
            }
        }
    }

    #[test]
    fn test_closed_form_at_horizon() {
        let series = project(22400.0, 10, 5.0, 10.0, ContributionFrequency::Monthly);
        let last = series.final_point().unwrap();

        let growth = (1.0 + 0.05 / 12.0_f64).powf(120.0);
        assert_eq!(last.year, 10);
        assert_relative_eq!(last.flat, 22400.0 * 120.0);
        assert_relative_eq!(last.exponential, 22400.0 * 120.0 * growth, max_relative = 1e-12);
        assert_relative_eq!(last.optimized, (22400.0 + 2240.0) * 120.0 * growth, max_relative = 1e-12);
    }

    #[test]
    fn test_frequency_formulas_at_year_boundary() {
        let monthly = 10_000.0;
        let growth = (1.0 + 0.06 / 12.0_f64).powf(60.0);

        let weekly = project(monthly, 5, 6.0, 20.0, ContributionFrequency::Weekly);
        let yearly = project(monthly, 5, 6.0, 20.0, ContributionFrequency::Yearly);

        // Weekly: (m*i + (s/4)*(4i)) * g
        let expected_weekly = (monthly * 60.0 + 500.0 * 240.0) * growth;
        // Yearly: (m*i + 12s*floor(i/12)) * g
        let expected_yearly = (monthly * 60.0 + 24_000.0 * 5.0) * growth;

        assert_relative_eq!(weekly.points[5].optimized, expected_weekly, max_relative = 1e-12);
        assert_relative_eq!(yearly.points[5].optimized, expected_yearly, max_relative = 1e-12);
    }

    #[test]
    fn test_sampled_points_match_monthly_evaluation() {
        let config = ProjectionConfig {
            horizon_years: 15,
            growth_rate_percent: 8.5,
            savings_rate_percent: 12.0,
            frequency: ContributionFrequency::Yearly,
        };
        let engine = ProjectionEngine::new(config);
        let series = engine.project(18_750.0);

        let reference: Vec<ProjectionPoint> = (0..=config.total_months())
            .filter(|m| m % 12 == 0)
            .map(|m| engine.calculate_month(18_750.0, m))
            .collect();

        assert_eq!(series.points, reference);
    }

    #[test]
    fn test_month_count_beyond_u32() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            horizon_years: u32::MAX,
            growth_rate_percent: 0.0,
            ..Default::default()
        });
        assert_eq!(engine.config().total_months(), u64::from(u32::MAX) * 12);

        let month = u64::from(u32::MAX) * 12;
        let point = engine.calculate_month(1.0, month);
        assert_eq!(point.year, u32::MAX);
        assert_eq!(point.flat, month as f64);
    }

    #[test]
    fn test_non_finite_baseline_propagates() {
        let series = project(f64::NAN, 2, 5.0, 10.0, ContributionFrequency::Monthly);
        assert!(series.points[1].flat.is_nan());
        assert!(series.points[2].optimized.is_nan());
    }
}
