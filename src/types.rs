use serde::{Deserialize, Serialize};
use std::fmt;

use crate::input::{coerce_days, coerce_finite, coerce_non_negative_finite};

/// how the span of days is split between simple and compound interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InterestMode {
    /// entire span accrues simple interest
    #[default]
    FullSimple,
    /// simple interest up to a threshold tenure, daily compounding after it
    Custom,
}

impl InterestMode {
    /// parse the form value; anything other than "full-simple" falls through to custom
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "full-simple" => InterestMode::FullSimple,
            _ => InterestMode::Custom,
        }
    }
}

/// a single interest calculation request
///
/// `rate` is rupees of interest per day per ₹1000 of principal, not an annual
/// percentage. Use [`InterestRequest::from_raw`] at input boundaries so the
/// coercion rules are applied uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRequest {
    pub principal: f64,
    pub rate: f64,
    pub days: u64,
    pub mode: InterestMode,
    pub simple_years: f64,
}

impl InterestRequest {
    pub fn new(principal: f64, rate: f64, days: u64, mode: InterestMode) -> Self {
        Self::from_raw(Some(principal), Some(rate), Some(days as f64), mode, None)
    }

    /// custom-mode request with a simple-interest window of `simple_years`
    pub fn custom(principal: f64, rate: f64, days: u64, simple_years: f64) -> Self {
        Self::from_raw(
            Some(principal),
            Some(rate),
            Some(days as f64),
            InterestMode::Custom,
            Some(simple_years),
        )
    }

    /// build from possibly missing or non-finite values
    pub fn from_raw(
        principal: Option<f64>,
        rate: Option<f64>,
        days: Option<f64>,
        mode: InterestMode,
        simple_years: Option<f64>,
    ) -> Self {
        Self {
            principal: coerce_finite(principal),
            rate: coerce_finite(rate),
            days: coerce_days(days),
            mode,
            simple_years: coerce_non_negative_finite(simple_years, 0.0),
        }
    }
}

/// interest calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct InterestResult {
    pub simple_interest: f64,
    pub compound_interest: f64,
    pub total: f64,
}

impl InterestResult {
    /// principal passed through untouched, no interest
    pub fn principal_only(principal: f64) -> Self {
        Self {
            simple_interest: 0.0,
            compound_interest: 0.0,
            total: principal,
        }
    }

    pub fn total_interest(&self) -> f64 {
        self.simple_interest + self.compound_interest
    }
}

/// day count split into 360-day years and 30-day months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct YearsMonthsDays {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl fmt::Display for YearsMonthsDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y : {}m : {}d", self.years, self.months, self.days)
    }
}

/// result of a 30/360 date difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCountResult {
    pub total_days: i64,
    pub breakdown: YearsMonthsDays,
}
