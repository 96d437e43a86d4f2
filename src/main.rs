//! Earnings calculator CLI
//!
//! Command-line front end for the salary breakdown and growth projections

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use serde::Serialize;

use earnings_projection::currency::{format_currency, format_hours};
use earnings_projection::profiles::{growth_rate_profile, savings_rate_profile};
use earnings_projection::projection::ProjectionSummary;
use earnings_projection::{
    ContributionFrequency, Currency, EarningsBreakdown, EarningsCalculation, IncomeBasis, InputError,
    ProjectionConfig, ProjectionSeries, SalaryInputs, ScenarioRunner, TaxTreatment,
};

#[derive(Parser, Debug)]
#[command(name = "earnings-calc", version)]
#[command(about = "Calculate earnings from an hourly rate or monthly income and project their growth")]
#[command(allow_negative_numbers = true)]
#[command(group(ArgGroup::new("income").required(true).args(["hourly_rate", "monthly_income"])))]
#[command(group(ArgGroup::new("tax_mode").args(["tax", "after_tax"])))]
struct Cli {
    /// Gross hourly rate
    #[arg(long)]
    hourly_rate: Option<f64>,

    /// Gross monthly income
    #[arg(long)]
    monthly_income: Option<f64>,

    /// Working hours per month
    #[arg(long)]
    hours: f64,

    /// Tax percentage (defaults to 0 when no after-tax amount is given)
    #[arg(long)]
    tax: Option<f64>,

    /// Monthly amount after tax, instead of a percentage
    #[arg(long)]
    after_tax: Option<f64>,

    /// Display currency: DKK, USD or EUR
    #[arg(long, default_value = "DKK")]
    currency: Currency,

    /// Projection horizon in years
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Annual growth rate in percent
    #[arg(long, default_value_t = 5.0)]
    growth: f64,

    /// Savings rate in percent of monthly earnings
    #[arg(long, default_value_t = 10.0)]
    savings: f64,

    /// Contribution frequency: weekly, monthly or yearly
    #[arg(long, default_value = "monthly")]
    frequency: ContributionFrequency,

    /// Also show the final optimized value for every contribution frequency
    #[arg(long)]
    compare: bool,

    /// Print a JSON document instead of text
    #[arg(long)]
    json: bool,

    /// Write the yearly projection series to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl Cli {
    fn salary_inputs(&self) -> Result<SalaryInputs, InputError> {
        let basis = match (self.hourly_rate, self.monthly_income) {
            (Some(rate), _) => IncomeBasis::Hourly(rate),
            (None, Some(income)) => IncomeBasis::Monthly(income),
            (None, None) => return Err(InputError::MissingIncome),
        };
        let tax = match self.after_tax {
            Some(amount) => TaxTreatment::AfterTaxAmount(amount),
            None => TaxTreatment::Percentage(self.tax.unwrap_or(0.0)),
        };

        Ok(SalaryInputs::new(basis, self.hours, tax).with_currency(self.currency))
    }

    fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            horizon_years: self.years,
            growth_rate_percent: self.growth,
            savings_rate_percent: self.savings,
            frequency: self.frequency,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    calculation: &'a EarningsCalculation,
    config: &'a ProjectionConfig,
    growth_profile: &'static str,
    savings_profile: &'static str,
    series: &'a ProjectionSeries,
    summary: ProjectionSummary,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let calculation = cli
        .salary_inputs()
        .and_then(|inputs| inputs.resolve())
        .context("invalid salary inputs")?;
    let config = cli.projection_config();
    config.validate().context("invalid projection settings")?;

    log::info!(
        "projecting {} {} per month over {} years",
        calculation.monthly_after_tax,
        calculation.currency,
        config.horizon_years
    );

    let runner = ScenarioRunner::new(calculation.monthly_after_tax);
    let series = runner.run(&config);

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        series
            .write_csv(file)
            .with_context(|| format!("unable to write {}", path.display()))?;
        log::info!("projection series written to {}", path.display());
    }

    if cli.json {
        let report = Report {
            calculation: &calculation,
            config: &config,
            growth_profile: growth_rate_profile(config.growth_rate_percent),
            savings_profile: savings_rate_profile(config.savings_rate_percent),
            series: &series,
            summary: series.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let currency = calculation.currency;

    println!("Earnings Calculator");
    println!("===================\n");

    print_card("Before Tax Earnings", &calculation.before_tax, currency);
    print_card("After Tax Earnings", &calculation.after_tax, currency);

    println!("Earnings Projection ({} years, {}% growth, {}% savings, {} contributions)",
        config.horizon_years, config.growth_rate_percent, config.savings_rate_percent, config.frequency);
    println!("  {}", growth_rate_profile(config.growth_rate_percent));
    println!("  {}", savings_rate_profile(config.savings_rate_percent));
    println!();
    println!("{:>6} {:>22} {:>22} {:>22}", "Year", "Flat", "Exponential", "Optimized");
    println!("{}", "-".repeat(75));

    for point in &series {
        println!("{:>6} {:>22} {:>22} {:>22}",
            point.year,
            format_currency(point.flat, currency),
            format_currency(point.exponential, currency),
            format_currency(point.optimized, currency),
        );
    }

    let summary = series.summary();
    println!("\nProjected Earnings after {} years:", summary.horizon_years);
    println!("  Flat Growth:        {}", format_currency(summary.final_flat, currency));
    println!("  Exponential Growth: {}", format_currency(summary.final_exponential, currency));
    println!("  Optimized Growth:   {}", format_currency(summary.final_optimized, currency));

    if cli.compare {
        println!("\nOptimized Growth by contribution frequency:");
        for (frequency, series) in runner.compare_frequencies(&config) {
            println!("  {:<8} {}", frequency, format_currency(series.summary().final_optimized, currency));
        }
    }

    Ok(())
}

fn print_card(title: &str, earnings: &EarningsBreakdown, currency: Currency) {
    println!("{}", title);
    println!("{}", "-".repeat(title.len()));
    println!("  Per Hour:            {}", format_currency(earnings.per_hour, currency));
    println!("  Per Day:             {}", format_currency(earnings.per_day, currency));
    println!("  Per Week:            {}", format_currency(earnings.per_week, currency));
    println!("  Per Month:           {}", format_currency(earnings.per_month, currency));
    println!("  During Working Hours:");
    println!("    Per Second:        {}", format_currency(earnings.actual_working_second, currency));
    println!("    Per Minute:        {}", format_currency(earnings.actual_working_minute, currency));
    println!("    Per Hour:          {}", format_currency(earnings.per_hour, currency));
    println!("    Hours/Day:         {}", format_hours(earnings.working_hours_per_day));
    println!("  Calendar Time:");
    println!("    Per Second:        {}", format_currency(earnings.per_second, currency));
    println!("    Per Minute:        {}", format_currency(earnings.per_minute, currency));
    println!("  Yearly Income:       {}", format_currency(earnings.per_year, currency));
    println!();
}
