use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// rupee amount held at paise precision for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal, rounded to paise
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// create from a computed f64; missing or non-finite values become zero
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Money::ZERO;
        }
        Decimal::from_f64(value)
            .map(Money::from_decimal)
            .unwrap_or(Money::ZERO)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

/// `en-IN` style grouping: last three digits, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.abs();
        let fixed = format!("{:.2}", abs);
        let (whole, paise) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}₹{}.{}", sign, group_indian(whole), paise)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<f64> for Money {
    fn from(v: f64) -> Self {
        Money::from_f64(v)
    }
}

/// format a rupee amount for display, e.g. `₹1,10,000.00`
pub fn format_inr(value: f64) -> String {
    Money::from_f64(value).to_string()
}
