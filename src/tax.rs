//! Tax adjustment helpers

/// Remove `tax_percentage` percent from `amount`.
///
/// The percentage is not clamped: a negative tax inflates the amount and
/// anything above 100 yields a negative amount.
pub fn apply_tax_percentage(amount: f64, tax_percentage: f64) -> f64 {
    amount * (1.0 - tax_percentage / 100.0)
}

pub fn yearly_income(monthly_income: f64) -> f64 {
    monthly_income * 12.0
}
