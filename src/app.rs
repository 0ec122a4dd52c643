use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::calendar::{parse_date, DayCountCalendar};
use crate::config::AppConfig;
use crate::decimal::format_inr;
use crate::errors::Result;
use crate::history::records::{display_lines, EMPTY_INTEREST_HISTORY};
use crate::history::{
    BoundedHistoryStore, FileStore, InterestHistoryRecord, MemoryStore, SharedStore,
};
use crate::input::{coerce_finite, field_or_zero, parse_field};
use crate::interest::InterestEngine;
use crate::popup::PopupCalculator;
use crate::types::{DayCountResult, InterestMode, InterestRequest, InterestResult};

/// timestamp format used for history records
pub const HISTORY_DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// raw interest form fields as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestForm {
    pub principal: String,
    pub rate: String,
    pub days: String,
    pub mode: InterestMode,
    pub simple_years: String,
}

impl Default for InterestForm {
    fn default() -> Self {
        Self {
            principal: String::new(),
            rate: String::new(),
            days: String::new(),
            mode: InterestMode::FullSimple,
            simple_years: String::new(),
        }
    }
}

impl InterestForm {
    /// coerced request for the engine
    pub fn to_request(&self) -> InterestRequest {
        InterestRequest::from_raw(
            parse_field(&self.principal),
            parse_field(&self.rate),
            parse_field(&self.days),
            self.mode,
            parse_field(&self.simple_years),
        )
    }
}

/// amounts formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub simple_interest: String,
    pub compound_interest: String,
    pub total: String,
}

impl From<&InterestResult> for FormattedResult {
    fn from(result: &InterestResult) -> Self {
        Self {
            simple_interest: format_inr(result.simple_interest),
            compound_interest: format_inr(result.compound_interest),
            total: format_inr(result.total),
        }
    }
}

/// everything produced by one interest calculation
#[derive(Debug, Clone, PartialEq)]
pub struct InterestOutcome {
    pub result: InterestResult,
    pub formatted: FormattedResult,
    pub record: InterestHistoryRecord,
}

/// application context owning the engines, histories and form state
pub struct AppContext {
    pub config: AppConfig,
    pub form: InterestForm,
    engine: InterestEngine,
    calendar: DayCountCalendar,
    interest_history: BoundedHistoryStore<InterestHistoryRecord>,
    popup: PopupCalculator,
    time: SafeTimeProvider,
}

impl AppContext {
    /// create a context over an injected store
    pub fn new(config: AppConfig, store: SharedStore, time: SafeTimeProvider) -> Result<Self> {
        config.validate()?;

        let interest_history = BoundedHistoryStore::open(
            store.clone(),
            config.interest_history.key.clone(),
            config.interest_history.capacity,
        );
        let popup = PopupCalculator::new(
            store,
            &config.popup_history.key,
            config.popup_history.capacity,
        );

        info!(
            interest_entries = interest_history.len(),
            popup_entries = popup.history(config.popup_history.capacity).len(),
            "application context ready"
        );

        Ok(Self {
            config,
            form: InterestForm::default(),
            engine: InterestEngine::new(),
            calendar: DayCountCalendar::new(),
            interest_history,
            popup,
            time,
        })
    }

    /// create a context whose store follows `config.storage_path`
    pub fn from_config(config: AppConfig, time: SafeTimeProvider) -> Result<Self> {
        let store: SharedStore = match &config.storage_path {
            Some(path) => Arc::new(FileStore::new(path.clone())),
            None => Arc::new(MemoryStore::new()),
        };
        Self::new(config, store, time)
    }

    /// run the interest form after the configured delay and record it
    pub async fn calculate_interest(&mut self) -> Result<InterestOutcome> {
        let delay = chrono::Duration::milliseconds(self.config.calculation_delay_ms as i64);
        self.time.wait(delay).await;

        let request = self.form.to_request();
        let result = self.engine.compute(&request);

        let record = InterestHistoryRecord {
            date: self.time.now().format(HISTORY_DATE_FORMAT).to_string(),
            principal: field_or_zero(&self.form.principal),
            rate: field_or_zero(&self.form.rate),
            days: field_or_zero(&self.form.days),
            total: coerce_finite(Some(result.total)),
        };
        self.interest_history.prepend(record.clone())?;

        info!(total = result.total, days = request.days, "interest calculated");
        Ok(InterestOutcome {
            formatted: FormattedResult::from(&result),
            result,
            record,
        })
    }

    /// 30/360 difference between two `YYYY-MM-DD` dates
    ///
    /// On success the interest form's days field is filled with the total.
    pub fn calculate_dates(&mut self, start: &str, end: &str) -> Result<DayCountResult> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        let result = self.calendar.date_difference(start, end)?;

        self.form.days = result.total_days.to_string();
        info!(%start, %end, total_days = result.total_days, "date difference calculated");
        Ok(result)
    }

    /// clear principal and rate; days may have come from the date calculator
    pub fn reset_interest(&mut self) {
        self.form.principal.clear();
        self.form.rate.clear();
    }

    pub fn clear_interest_history(&mut self) -> Result<()> {
        self.interest_history.clear()
    }

    pub fn interest_history(&self) -> &[InterestHistoryRecord] {
        self.interest_history.renderable(self.config.interest_history.capacity)
    }

    pub fn interest_history_lines(&self) -> Vec<String> {
        display_lines(self.interest_history(), EMPTY_INTEREST_HISTORY, |record| {
            record.display_line()
        })
    }

    pub fn popup(&self) -> &PopupCalculator {
        &self.popup
    }

    pub fn popup_mut(&mut self) -> &mut PopupCalculator {
        &mut self.popup
    }

    pub fn time(&self) -> &SafeTimeProvider {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalculatorError;
    use crate::history::INTEREST_HISTORY_KEY;
    use chrono::{Duration, TimeZone, Utc};
    use hourglass_rs::TimeSource;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
        ))
    }

    fn context(store: Arc<MemoryStore>) -> AppContext {
        AppContext::new(AppConfig::default(), store, test_time()).unwrap()
    }

    fn fill(app: &mut AppContext, principal: &str, rate: &str, days: &str) {
        app.form.principal = principal.to_string();
        app.form.rate = rate.to_string();
        app.form.days = days.to_string();
    }

    #[tokio::test]
    async fn test_calculate_interest_records_history() {
        let store = MemoryStore::shared();
        let mut app = context(store.clone());
        fill(&mut app, "100000", "3", "100");

        let outcome = app.calculate_interest().await.unwrap();

        assert!((outcome.result.total - 110_000.0).abs() < 1e-6);
        assert_eq!(outcome.formatted.total, "₹1,10,000.00");
        assert_eq!(outcome.formatted.compound_interest, "₹0.00");
        assert_eq!(outcome.record.principal, 100_000.0);
        assert_eq!(app.interest_history().len(), 1);
        assert!(store.contains_key(INTEREST_HISTORY_KEY));
    }

    #[tokio::test]
    async fn test_calculation_waits_configured_delay() {
        let mut app = context(MemoryStore::shared());
        let control = app.time().test_control().unwrap();
        fill(&mut app, "5000", "1", "30");

        let outcome = app.calculate_interest().await.unwrap();

        assert_eq!(control.total_waited(), Duration::milliseconds(450));
        assert_eq!(outcome.record.date, "01/01/2024, 09:30:00");
    }

    #[tokio::test]
    async fn test_record_keeps_raw_values() {
        let mut app = context(MemoryStore::shared());
        fill(&mut app, "-250", "abc", "12.7");

        let outcome = app.calculate_interest().await.unwrap();

        assert_eq!(outcome.result, InterestResult::principal_only(-250.0));
        assert_eq!(outcome.record.principal, -250.0);
        assert_eq!(outcome.record.rate, 0.0);
        assert_eq!(outcome.record.days, 12.7);
    }

    #[tokio::test]
    async fn test_history_capped_and_persisted() {
        let store = MemoryStore::shared();
        let mut app = context(store.clone());

        for n in 1..=6 {
            fill(&mut app, &(n * 1000).to_string(), "1", "30");
            app.calculate_interest().await.unwrap();
        }

        let history = app.interest_history();
        assert_eq!(history.len(), 5);
        assert_eq!(history[0].principal, 6000.0);
        assert_eq!(history[4].principal, 2000.0);

        let reopened = context(store);
        assert_eq!(reopened.interest_history(), app.interest_history());
    }

    #[tokio::test]
    async fn test_clear_interest_history() {
        let store = MemoryStore::shared();
        let mut app = context(store.clone());
        fill(&mut app, "1000", "1", "1");
        app.calculate_interest().await.unwrap();

        app.clear_interest_history().unwrap();

        assert!(app.interest_history().is_empty());
        assert!(!store.contains_key(INTEREST_HISTORY_KEY));
        assert_eq!(app.interest_history_lines(), vec![EMPTY_INTEREST_HISTORY.to_string()]);
    }

    #[tokio::test]
    async fn test_custom_mode_through_form() {
        let mut app = context(MemoryStore::shared());
        fill(&mut app, "25000", "1.2", "730");
        app.form.mode = InterestMode::Custom;
        app.form.simple_years = "0".to_string();

        let outcome = app.calculate_interest().await.unwrap();
        let expected = 25_000.0 * (1.0_f64 + 1.2 / 3000.0).powf(730.0);
        assert!((outcome.result.total - expected).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_infinite_field_keeps_history_loadable() {
        let store = MemoryStore::shared();
        let mut app = context(store.clone());
        fill(&mut app, "1000", "1", "30");
        app.calculate_interest().await.unwrap();
        fill(&mut app, "2000", "1", "30");
        app.calculate_interest().await.unwrap();

        fill(&mut app, "Infinity", "1", "30");
        let outcome = app.calculate_interest().await.unwrap();
        assert_eq!(outcome.record.principal, 0.0);

        let reopened = context(store);
        assert_eq!(reopened.interest_history().len(), 3);
        assert_eq!(reopened.interest_history(), app.interest_history());
    }

    #[tokio::test]
    async fn test_overflowing_total_keeps_history_loadable() {
        let store = MemoryStore::shared();
        let mut app = context(store.clone());
        fill(&mut app, "5000", "2", "60");
        app.calculate_interest().await.unwrap();

        // daily rate of 1 doubles the balance every day
        fill(&mut app, "1000000", "3000", "2000");
        app.form.mode = InterestMode::Custom;
        app.form.simple_years = "0".to_string();
        let outcome = app.calculate_interest().await.unwrap();

        assert!(outcome.result.total.is_infinite());
        assert_eq!(outcome.record.total, 0.0);

        let reopened = context(store);
        assert_eq!(reopened.interest_history().len(), 2);
        assert_eq!(reopened.interest_history(), app.interest_history());
    }

    #[test]
    fn test_calculate_dates_fills_days() {
        let mut app = context(MemoryStore::shared());

        let result = app.calculate_dates("2020-01-01", "2023-06-15").unwrap();

        assert_eq!(result.total_days, 1244);
        assert_eq!(result.breakdown.to_string(), "3y : 5m : 14d");
        assert_eq!(app.form.days, "1244");
    }

    #[test]
    fn test_calculate_dates_refuses_bad_range() {
        let mut app = context(MemoryStore::shared());
        app.form.days = "10".to_string();

        let err = app.calculate_dates("2024-03-01", "2024-03-01").unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidDateRange { .. }));
        assert!(app.calculate_dates("", "2024-03-01").is_err());
        assert_eq!(app.form.days, "10");
    }

    #[test]
    fn test_reset_keeps_days() {
        let mut app = context(MemoryStore::shared());
        fill(&mut app, "1000", "2", "90");

        app.reset_interest();

        assert_eq!(app.form.principal, "");
        assert_eq!(app.form.rate, "");
        assert_eq!(app.form.days, "90");
    }

    #[test]
    fn test_histories_share_store_under_separate_keys() {
        let store = MemoryStore::shared();
        let mut app = context(store.clone());
        app.popup_mut().set_input("2 + 2");
        app.popup_mut().equals().unwrap();

        assert!(app.interest_history().is_empty());
        assert_eq!(app.popup().history(10), &["2 + 2 = 4".to_string()]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_from_config_with_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage_path = Some(dir.path().join("desk.json"));

        let mut app = AppContext::from_config(config.clone(), test_time()).unwrap();
        app.popup_mut().set_input("6 * 7");
        app.popup_mut().equals().unwrap();

        let reopened = AppContext::from_config(config, test_time()).unwrap();
        assert_eq!(reopened.popup().history(10), &["6 * 7 = 42".to_string()]);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.popup_history.capacity = 0;
        assert!(AppContext::new(config, MemoryStore::shared(), test_time()).is_err());
    }
}
