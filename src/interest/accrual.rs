use crate::interest::{InterestCalculation, InterestCalculator, RATE_BASIS};

/// simple interest for `days` days at a paisa-style daily rate
pub fn simple_interest(principal: f64, rate: f64, days: u64) -> f64 {
    principal * rate * days as f64 / RATE_BASIS
}

/// simple (non-compounding) accrual
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAccrual;

impl SimpleAccrual {
    pub fn new() -> Self {
        Self
    }
}

impl InterestCalculator for SimpleAccrual {
    fn calculate_interest(&self, principal: f64, rate: f64, days: u64) -> InterestCalculation {
        InterestCalculation {
            interest_amount: simple_interest(principal, rate, days),
            principal_base: principal,
            days,
        }
    }
}
