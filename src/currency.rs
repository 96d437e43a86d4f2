//! Currency labels and Danish-style number formatting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Display currency. Amounts are labeled, never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Dkk,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Dkk, Currency::Usd, Currency::Eur];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Dkk => "DKK",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Suffix appended to formatted amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Dkk => "kr",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// Static DKK-based reference rate.
    ///
    /// Nothing multiplies amounts by this; figures are shown in whatever
    /// currency the caller entered them in.
    pub fn reference_rate(&self) -> f64 {
        match self {
            Currency::Dkk => 1.0,
            Currency::Usd => 0.15,
            Currency::Eur => 0.13,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Currency {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DKK" => Ok(Currency::Dkk),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(ParseError::UnknownCurrency(s.to_string())),
        }
    }
}

const DECIMAL_SEPARATOR: char = ',';
const GROUPING_SEPARATOR: char = '.';

/// Format an amount the way the salary cards show it.
///
/// Whole amounts get no decimals; anything else is rounded to at most three
/// decimals and keeps at least one. Thousands are grouped with `.` and the
/// decimal mark is `,`, followed by a space and the currency symbol.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    format!("{} {}", format_amount(amount), currency.symbol())
}

/// Number part of [`format_currency`] without the symbol.
///
/// A negative zero keeps its sign (`-0`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let body = if amount % 1.0 == 0.0 {
        to_fixed(amount.abs(), 0)
    } else {
        let rounded = to_fixed(amount.abs(), 3);
        // Keep 1-3 fraction digits
        let trimmed = rounded.trim_end_matches('0');
        if trimmed.ends_with('.') {
            format!("{}0", trimmed)
        } else {
            trimmed.to_string()
        }
    };

    let grouped = localize(&body);
    if amount.is_sign_negative() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Compact label for chart axes: `1.5B`, `2.3M`, `450K`, `900`
pub fn format_axis_value(value: f64, currency: Currency) -> String {
    format!("{} {}", format_large_number(value), currency.symbol())
}

pub fn format_large_number(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{}B", to_fixed(value / 1_000_000_000.0, 1))
    } else if value >= 1_000_000.0 {
        format!("{}M", to_fixed(value / 1_000_000.0, 1))
    } else if value >= 1000.0 {
        format!("{}K", (value / 1000.0).round())
    } else {
        to_fixed(value, 0)
    }
}

pub fn format_hours(hours: f64) -> String {
    format!("{} hours", to_fixed(hours, 1))
}

/// Enough fraction digits to print any finite f64 exactly
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Fixed-point rendering with `digits` fraction digits, ties rounded away
/// from zero.
///
/// The tie is decided on the exact decimal expansion of `value`, so `0.0625`
/// becomes `0.063` and `2.5` becomes `3`. Negative zero prints as `0`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part.as_bytes().get(digits).map_or(false, |&d| d >= b'5');
    if round_up {
        carry_one(&mut kept);
    }

    let split = kept.len() - digits;
    let int_digits: String = kept[..split].iter().map(|&b| b as char).collect();
    let frac_digits: String = kept[split..].iter().map(|&b| b as char).collect();

    let sign = if value < 0.0 { "-" } else { "" };
    if digits == 0 {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

/// Add one unit in the last place of an ASCII digit string
fn carry_one(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Swap the decimal point for a comma and group the integer digits
fn localize(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (plain, None),
    };

    let grouped = group_digits(int_part);
    match frac_part {
        Some(frac) => format!("{}{}{}", grouped, DECIMAL_SEPARATOR, frac),
        None => grouped,
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, GROUPING_SEPARATOR);
        }
        grouped.insert(0, ch);
    }
    grouped
}
