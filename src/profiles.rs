//! Descriptive labels for growth and savings rate settings
//!
//! Each classifier is an ordered list of `(upper_bound, label)` pairs. The
//! first pair with `rate <= upper_bound` wins; rates above every bound get
//! the fallback label.

const GROWTH_RATE_PROFILES: &[(f64, &str)] = &[
    (4.0, "Conservative investor (low-risk bonds and savings)"),
    (7.0, "Balanced investor (mix of stocks and bonds)"),
    (9.0, "Growth investor (stock market focus)"),
];
const GROWTH_RATE_FALLBACK: &str = "Aggressive investor (high-risk, high-reward strategy)";

const SAVINGS_RATE_PROFILES: &[(f64, &str)] = &[
    (10.0, "Minimal saver (building basic savings)"),
    (15.0, "Moderate saver (steady wealth building)"),
    (20.0, "Dedicated saver (focused on financial goals)"),
];
const SAVINGS_RATE_FALLBACK: &str = "Aggressive saver (maximizing wealth accumulation)";

fn classify(rate: f64, profiles: &[(f64, &'static str)], fallback: &'static str) -> &'static str {
    profiles
        .iter()
        .find(|(upper_bound, _)| rate <= *upper_bound)
        .map(|(_, label)| *label)
        .unwrap_or(fallback)
}

/// Investor profile for an annual growth rate in percent
pub fn growth_rate_profile(rate_percent: f64) -> &'static str {
    classify(rate_percent, GROWTH_RATE_PROFILES, GROWTH_RATE_FALLBACK)
}

/// Saver profile for a savings rate in percent
pub fn savings_rate_profile(rate_percent: f64) -> &'static str {
    classify(rate_percent, SAVINGS_RATE_PROFILES, SAVINGS_RATE_FALLBACK)
}
