use crate::interest::{InterestCalculation, InterestCalculator, RATE_BASIS};

/// daily compounding rate for a paisa-style rate
pub fn daily_rate(rate: f64) -> f64 {
    rate / RATE_BASIS
}

/// outcome of compounding a principal daily
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundGrowth {
    /// principal plus compounded interest
    pub amount: f64,
    pub interest: f64,
}

/// compound `principal` once per day for `days` days
pub fn compound_daily(principal: f64, rate: f64, days: u64) -> CompoundGrowth {
    let factor = (1.0 + daily_rate(rate)).powf(days as f64);
    let amount = principal * factor;
    CompoundGrowth {
        amount,
        interest: amount - principal,
    }
}

/// daily compounding engine
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyCompounding;

impl DailyCompounding {
    pub fn new() -> Self {
        Self
    }
}

impl InterestCalculator for DailyCompounding {
    fn calculate_interest(&self, principal: f64, rate: f64, days: u64) -> InterestCalculation {
        let growth = compound_daily(principal, rate, days);
        InterestCalculation {
            interest_amount: growth.interest,
            principal_base: principal,
            days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_rate() {
        assert_eq!(daily_rate(3.0), 0.001);
        assert_eq!(daily_rate(0.0), 0.0);
    }

    #[test]
    fn test_zero_days_no_growth() {
        let growth = compound_daily(5_000.0, 2.0, 0);
        assert_eq!(growth.amount, 5_000.0);
        assert_eq!(growth.interest, 0.0);
    }

    #[test]
    fn test_one_day_matches_simple() {
        let growth = compound_daily(100_000.0, 3.0, 1);
        assert!((growth.interest - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_compounding_beats_simple() {
        let engine = DailyCompounding::new();
        let calc = engine.calculate_interest(100_000.0, 3.0, 365);
        let simple = crate::interest::simple_interest(100_000.0, 3.0, 365);

        assert!(calc.interest_amount > simple);
        // (1.001)^365 is roughly 1.4402
        assert!(calc.final_amount() > 144_000.0);
        assert!(calc.final_amount() < 144_100.0);
    }
}
