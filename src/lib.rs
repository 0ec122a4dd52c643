pub mod app;
pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod expression;
pub mod history;
pub mod input;
pub mod interest;
pub mod popup;
pub mod types;

// re-export key types
pub use app::{AppContext, FormattedResult, InterestForm, InterestOutcome};
pub use calendar::DayCountCalendar;
pub use config::AppConfig;
pub use decimal::{format_inr, Money};
pub use errors::{CalculatorError, Result};
pub use history::{
    BoundedHistoryStore, FileStore, InterestHistoryRecord, KeyValueStore, MemoryStore,
    PopupHistoryEntry, SharedStore,
};
pub use input::coerce_non_negative_finite;
pub use interest::{InterestCalculator, InterestEngine};
pub use popup::PopupCalculator;
pub use types::{DayCountResult, InterestMode, InterestRequest, InterestResult, YearsMonthsDays};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
