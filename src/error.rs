//! Error types for caller-side validation and parsing
//!
//! The numeric engine itself never returns these; they belong to the layers
//! that collect raw inputs before calling it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("either an hourly rate or a monthly income is required")]
    MissingIncome,
    #[error("hours per month must be a finite number greater than zero (got {0})")]
    InvalidHours(f64),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("tax percentage must be a finite number (got {0})")]
    InvalidTaxPercentage(f64),
    #[error("{field} must be a finite number (got {value})")]
    InvalidRate { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown currency: {0} (expected DKK, USD or EUR)")]
    UnknownCurrency(String),
    #[error("unknown contribution frequency: {0} (expected weekly, monthly or yearly)")]
    UnknownFrequency(String),
}
