//! Resolution of raw salary inputs into before- and after-tax earnings
//!
//! This is the caller side of the engine: it accepts either an hourly rate
//! or a monthly income, and either a tax percentage or an explicit monthly
//! after-tax amount. It validates what the formulas themselves do not.

use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::earnings::{derive_earnings, EarningsBreakdown};
use crate::error::InputError;
use crate::tax::apply_tax_percentage;

/// What the gross income was entered as
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum IncomeBasis {
    /// Gross hourly rate
    Hourly(f64),
    /// Gross monthly income
    Monthly(f64),
}

/// How the after-tax figure is obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum TaxTreatment {
    /// Tax as a percentage of gross income
    Percentage(f64),
    /// Known monthly amount after tax
    AfterTaxAmount(f64),
}

/// Raw inputs for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryInputs {
    pub basis: IncomeBasis,
    pub hours_per_month: f64,
    pub tax: TaxTreatment,
    #[serde(default)]
    pub currency: Currency,
}

/// Before- and after-tax view of the same salary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsCalculation {
    pub currency: Currency,
    pub hours_per_month: f64,
    pub before_tax_rate: f64,
    pub after_tax_rate: f64,
    pub monthly_before_tax: f64,
    pub monthly_after_tax: f64,
    pub before_tax: EarningsBreakdown,
    pub after_tax: EarningsBreakdown,
}

impl SalaryInputs {
    pub fn new(basis: IncomeBasis, hours_per_month: f64, tax: TaxTreatment) -> Self {
        Self {
            basis,
            hours_per_month,
            tax,
            currency: Currency::default(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Check that every field is usable by the engine
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.hours_per_month.is_finite() || self.hours_per_month <= 0.0 {
            return Err(InputError::InvalidHours(self.hours_per_month));
        }

        match self.basis {
            IncomeBasis::Hourly(rate) => check_amount("hourly rate", rate)?,
            IncomeBasis::Monthly(income) => check_amount("monthly income", income)?,
        }

        match self.tax {
            TaxTreatment::Percentage(pct) => {
                if !pct.is_finite() {
                    return Err(InputError::InvalidTaxPercentage(pct));
                }
                if !(0.0..=100.0).contains(&pct) {
                    log::warn!("tax percentage {} is outside 0-100, applying as given", pct);
                }
            }
            TaxTreatment::AfterTaxAmount(amount) => check_amount("after-tax amount", amount)?,
        }

        Ok(())
    }

    /// Validate and derive both earnings breakdowns
    pub fn resolve(&self) -> Result<EarningsCalculation, InputError> {
        self.validate()?;

        let hours = self.hours_per_month;
        let before_tax_rate = match self.basis {
            IncomeBasis::Hourly(rate) => rate,
            IncomeBasis::Monthly(income) => income / hours,
        };
        let after_tax_rate = match self.tax {
            TaxTreatment::Percentage(pct) => apply_tax_percentage(before_tax_rate, pct),
            TaxTreatment::AfterTaxAmount(amount) => amount / hours,
        };

        log::debug!(
            "resolved rates: before tax {:.4}/h, after tax {:.4}/h over {} h",
            before_tax_rate,
            after_tax_rate,
            hours
        );

        Ok(EarningsCalculation {
            currency: self.currency,
            hours_per_month: hours,
            before_tax_rate,
            after_tax_rate,
            monthly_before_tax: before_tax_rate * hours,
            monthly_after_tax: after_tax_rate * hours,
            before_tax: derive_earnings(before_tax_rate, hours),
            after_tax: derive_earnings(after_tax_rate, hours),
        })
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::InvalidAmount { field, value })
    }
}
