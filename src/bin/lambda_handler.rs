//! AWS Lambda handler for earnings calculations
//!
//! Accepts salary inputs and projection settings as JSON and returns both
//! earnings breakdowns, the yearly projection series and formatted final values.

use earnings_projection::{
    currency::format_currency,
    profiles::{growth_rate_profile, savings_rate_profile},
    projection::ProjectionSummary,
    ContributionFrequency, Currency, EarningsCalculation, IncomeBasis, InputError,
    ProjectionConfig, ProjectionSeries, SalaryInputs, ScenarioRunner, TaxTreatment,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Input for one calculation
#[derive(Debug, Deserialize)]
pub struct CalculatorRequest {
    /// Gross hourly rate (takes precedence over monthly_income)
    #[serde(default)]
    pub hourly_rate: Option<f64>,

    /// Gross monthly income
    #[serde(default)]
    pub monthly_income: Option<f64>,

    /// Working hours per month
    pub hours_per_month: f64,

    /// Tax percentage (default: 0)
    #[serde(default)]
    pub tax_percentage: Option<f64>,

    /// Monthly amount after tax; overrides tax_percentage when present
    #[serde(default)]
    pub after_tax_amount: Option<f64>,

    /// Display currency (default: DKK)
    #[serde(default)]
    pub currency: Currency,

    /// Projection horizon in years (default: 10)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// Annual growth rate in percent (default: 5)
    #[serde(default = "default_growth_rate")]
    pub growth_rate_percent: f64,

    /// Savings rate in percent (default: 10)
    #[serde(default = "default_savings_rate")]
    pub savings_rate_percent: f64,

    /// Contribution frequency (default: monthly)
    #[serde(default)]
    pub frequency: ContributionFrequency,
}

fn default_horizon_years() -> u32 { ProjectionConfig::default().horizon_years }
fn default_growth_rate() -> f64 { ProjectionConfig::default().growth_rate_percent }
fn default_savings_rate() -> f64 { ProjectionConfig::default().savings_rate_percent }

/// Formatted final values of the projection
#[derive(Debug, Serialize)]
pub struct FormattedSummary {
    pub flat: String,
    pub exponential: String,
    pub optimized: String,
}

#[derive(Debug, Serialize)]
pub struct CalculatorResponse {
    pub calculation: EarningsCalculation,
    pub config: ProjectionConfig,
    pub growth_profile: &'static str,
    pub savings_profile: &'static str,
    pub series: ProjectionSeries,
    pub summary: ProjectionSummary,
    pub formatted: FormattedSummary,
}

impl CalculatorRequest {
    fn salary_inputs(&self) -> Result<SalaryInputs, InputError> {
        let basis = match (self.hourly_rate, self.monthly_income) {
            (Some(rate), _) => IncomeBasis::Hourly(rate),
            (None, Some(income)) => IncomeBasis::Monthly(income),
            (None, None) => return Err(InputError::MissingIncome),
        };
        let tax = match self.after_tax_amount {
            Some(amount) => TaxTreatment::AfterTaxAmount(amount),
            None => TaxTreatment::Percentage(self.tax_percentage.unwrap_or(0.0)),
        };

        Ok(SalaryInputs::new(basis, self.hours_per_month, tax).with_currency(self.currency))
    }

    fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            horizon_years: self.horizon_years,
            growth_rate_percent: self.growth_rate_percent,
            savings_rate_percent: self.savings_rate_percent,
            frequency: self.frequency,
        }
    }
}

fn calculate(request: &CalculatorRequest) -> Result<CalculatorResponse, InputError> {
    let calculation = request.salary_inputs()?.resolve()?;
    let config = request.projection_config();
    config.validate()?;

    let series = ScenarioRunner::new(calculation.monthly_after_tax).run(&config);
    let summary = series.summary();
    let currency = calculation.currency;

    Ok(CalculatorResponse {
        formatted: FormattedSummary {
            flat: format_currency(summary.final_flat, currency),
            exponential: format_currency(summary.final_exponential, currency),
            optimized: format_currency(summary.final_optimized, currency),
        },
        growth_profile: growth_rate_profile(config.growth_rate_percent),
        savings_profile: savings_rate_profile(config.savings_rate_percent),
        calculation,
        config,
        series,
        summary,
    })
}

async fn handler(event: LambdaEvent<CalculatorRequest>) -> Result<CalculatorResponse, Error> {
    let request = event.payload;
    log::info!(
        "calculation request: {} h/month, {} years, frequency {}",
        request.hours_per_month,
        request.horizon_years,
        request.frequency
    );

    let response = calculate(&request).map_err(|e| {
        log::warn!("rejected request: {}", e);
        e
    })?;

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
