//! Scenario runner for comparing projections of one earnings baseline
//!
//! Holds the monthly baseline once, then runs many projection configs
//! against it. Projections share no state, so batches run in parallel.

use rayon::prelude::*;

use crate::projection::{
    ContributionFrequency, ProjectionConfig, ProjectionEngine, ProjectionSeries, TIME_RANGE_OPTIONS,
};

/// Runs projections for a fixed monthly earnings baseline
///
/// # Example
/// ```
/// use earnings_projection::{ProjectionConfig, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(22_400.0);
/// let configs: Vec<_> = [3.0, 5.0, 7.0]
///     .iter()
///     .map(|&rate| ProjectionConfig { growth_rate_percent: rate, ..Default::default() })
///     .collect();
///
/// let results = runner.run_scenarios(&configs);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRunner {
    monthly_earnings: f64,
}

impl ScenarioRunner {
    pub fn new(monthly_earnings: f64) -> Self {
        Self { monthly_earnings }
    }

    pub fn monthly_earnings(&self) -> f64 {
        self.monthly_earnings
    }

    /// Run a single projection with the given config
    pub fn run(&self, config: &ProjectionConfig) -> ProjectionSeries {
        ProjectionEngine::new(*config).project(self.monthly_earnings)
    }

    /// Run multiple configs in parallel; results keep the input order
    pub fn run_scenarios(&self, configs: &[ProjectionConfig]) -> Vec<ProjectionSeries> {
        log::debug!(
            "running {} scenarios for monthly baseline {}",
            configs.len(),
            self.monthly_earnings
        );
        configs.par_iter().map(|config| self.run(config)).collect()
    }

    /// Same config under every contribution frequency
    pub fn compare_frequencies(
        &self,
        base: &ProjectionConfig,
    ) -> Vec<(ContributionFrequency, ProjectionSeries)> {
        let configs: Vec<ProjectionConfig> = ContributionFrequency::ALL
            .iter()
            .map(|&frequency| ProjectionConfig { frequency, ..*base })
            .collect();

        ContributionFrequency::ALL
            .into_iter()
            .zip(self.run_scenarios(&configs))
            .collect()
    }

    /// Same config over every selectable horizon
    pub fn run_time_ranges(&self, base: &ProjectionConfig) -> Vec<(u32, ProjectionSeries)> {
        let configs: Vec<ProjectionConfig> = TIME_RANGE_OPTIONS
            .iter()
            .map(|&horizon_years| ProjectionConfig { horizon_years, ..*base })
            .collect();

        TIME_RANGE_OPTIONS
            .into_iter()
            .zip(self.run_scenarios(&configs))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    #[test]
    fn test_scenario_runner_batch() {
        let runner = ScenarioRunner::new(22_400.0);

        let configs: Vec<_> = [3.0, 5.0, 7.0]
            .iter()
            .map(|&rate| ProjectionConfig {
                horizon_years: 20,
                growth_rate_percent: rate,
                ..Default::default()
            })
            .collect();

        let results = runner.run_scenarios(&configs);
        assert_eq!(results.len(), 3);

        // Higher growth rate should result in a higher final optimized value
        assert!(results[2].summary().final_optimized > results[0].summary().final_optimized);
    }

    #[test]
    fn test_parallel_matches_direct() {
        let runner = ScenarioRunner::new(18_000.0);
        let config = ProjectionConfig {
            horizon_years: 25,
            growth_rate_percent: 6.5,
            savings_rate_percent: 15.0,
            frequency: ContributionFrequency::Weekly,
        };

        let batched = runner.run_scenarios(&[config]);
        let direct = project(18_000.0, 25, 6.5, 15.0, ContributionFrequency::Weekly);
        assert_eq!(batched[0], direct);
    }

    #[test]
    fn test_compare_frequencies() {
        let runner = ScenarioRunner::new(10_000.0);
        let results = runner.compare_frequencies(&ProjectionConfig::default());

        let frequencies: Vec<_> = results.iter().map(|(f, _)| *f).collect();
        assert_eq!(frequencies, ContributionFrequency::ALL.to_vec());

        // At whole-year boundaries weekly and monthly contribute the same total
        let weekly = results[0].1.summary().final_optimized;
        let monthly = results[1].1.summary().final_optimized;
        assert!((weekly - monthly).abs() / monthly < 1e-12);
    }

    #[test]
    fn test_time_ranges() {
        let runner = ScenarioRunner::new(10_000.0);
        let results = runner.run_time_ranges(&ProjectionConfig::default());

        assert_eq!(results.len(), TIME_RANGE_OPTIONS.len());
        for (years, series) in &results {
            assert_eq!(series.len(), *years as usize + 1);
        }
    }
}
