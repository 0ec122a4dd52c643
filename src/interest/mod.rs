pub mod accrual;
pub mod compound;

use tracing::debug;

use crate::calendar::DAYS_PER_YEAR;
use crate::input::{coerce_finite, coerce_non_negative_finite};
use crate::types::{InterestMode, InterestRequest, InterestResult};

pub use accrual::{simple_interest, SimpleAccrual};
pub use compound::{compound_daily, daily_rate, CompoundGrowth, DailyCompounding};

/// rate divisor: a rate of R means ₹R per day per ₹1000 of principal,
/// accrued as `P * R * days / 3000`
pub const RATE_BASIS: f64 = 3000.0;

/// interest over a span of days
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestCalculation {
    pub interest_amount: f64,
    pub principal_base: f64,
    pub days: u64,
}

impl InterestCalculation {
    pub fn final_amount(&self) -> f64 {
        self.principal_base + self.interest_amount
    }
}

/// trait for interest calculations over a whole number of days
pub trait InterestCalculator {
    fn calculate_interest(&self, principal: f64, rate: f64, days: u64) -> InterestCalculation;
}

/// capitalize accrued interest into principal
pub fn capitalize_interest(principal: f64, accrued_interest: f64) -> f64 {
    principal + accrued_interest
}

/// number of days covered by a simple-interest window of `simple_years`
pub fn simple_window_days(simple_years: f64) -> u64 {
    let years = coerce_non_negative_finite(Some(simple_years), 0.0);
    (years * DAYS_PER_YEAR as f64).floor() as u64
}

/// engine combining simple accrual and daily compounding
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestEngine {
    simple: SimpleAccrual,
    compounding: DailyCompounding,
}

impl InterestEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// compute simple interest, compound interest and total for a request
    ///
    /// Never fails. A principal that is not strictly positive, or a negative
    /// rate, yields no interest and passes the principal through unchanged.
    pub fn compute(&self, request: &InterestRequest) -> InterestResult {
        let principal = coerce_finite(Some(request.principal));
        let rate = coerce_finite(Some(request.rate));
        let days = request.days;

        if !(principal > 0.0 && rate >= 0.0) {
            debug!(principal, rate, days, "no interest accrues");
            return InterestResult::principal_only(principal);
        }

        match request.mode {
            InterestMode::FullSimple => self.all_simple(principal, rate, days),
            InterestMode::Custom => {
                let simple_days = simple_window_days(request.simple_years);
                if days <= simple_days {
                    debug!(days, simple_days, "span within simple window");
                    return self.all_simple(principal, rate, days);
                }
                self.simple_then_compound(principal, rate, days, simple_days)
            }
        }
    }

    fn all_simple(&self, principal: f64, rate: f64, days: u64) -> InterestResult {
        let accrued = self.simple.calculate_interest(principal, rate, days);
        debug!(principal, rate, days, interest = accrued.interest_amount, "simple interest");

        InterestResult {
            simple_interest: accrued.interest_amount,
            compound_interest: 0.0,
            total: accrued.final_amount(),
        }
    }

    fn simple_then_compound(
        &self,
        principal: f64,
        rate: f64,
        days: u64,
        simple_days: u64,
    ) -> InterestResult {
        let simple = self.simple.calculate_interest(principal, rate, simple_days);
        let new_principal = capitalize_interest(principal, simple.interest_amount);

        let compound_days = days - simple_days;
        let compound = self.compounding.calculate_interest(new_principal, rate, compound_days);

        debug!(
            principal,
            rate,
            simple_days,
            compound_days,
            simple_interest = simple.interest_amount,
            compound_interest = compound.interest_amount,
            "simple then daily compounding"
        );

        InterestResult {
            simple_interest: simple.interest_amount,
            compound_interest: compound.interest_amount,
            total: principal + simple.interest_amount + compound.interest_amount,
        }
    }
}
