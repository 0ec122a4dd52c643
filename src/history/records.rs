use serde::{Deserialize, Deserializer, Serialize};

use crate::decimal::format_inr;

/// popup calculator entry, formatted as `"<expression> = <value>"`
pub type PopupHistoryEntry = String;

/// placeholder shown when the interest history is empty
pub const EMPTY_INTEREST_HISTORY: &str = "No calculations yet. Run a calculation to see it here.";
/// placeholder shown when the popup history is empty
pub const EMPTY_POPUP_HISTORY: &str = "No history yet. Perform a calculation.";

/// json `null` (how non-finite numbers are written) or a missing value reads as 0
fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// snapshot of one interest calculation
///
/// Field names on the wire are `date`, `P`, `R`, `D` and `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestHistoryRecord {
    pub date: String,
    #[serde(rename = "P", default, deserialize_with = "number_or_zero")]
    pub principal: f64,
    #[serde(rename = "R", default, deserialize_with = "number_or_zero")]
    pub rate: f64,
    #[serde(rename = "D", default, deserialize_with = "number_or_zero")]
    pub days: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total: f64,
}

impl InterestHistoryRecord {
    /// one display line, e.g. `"… • P=₹1,00,000.00 • R=3% • D=100 → Total ₹1,10,000.00"`
    pub fn display_line(&self) -> String {
        format!(
            "{} • P={} • R={}% • D={} → Total {}",
            self.date,
            format_inr(self.principal),
            self.rate,
            self.days,
            format_inr(self.total)
        )
    }
}

/// display lines for a history list, or the placeholder when it is empty
pub fn display_lines<T, F>(items: &[T], placeholder: &str, render: F) -> Vec<String>
where
    F: Fn(&T) -> String,
{
    if items.is_empty() {
        return vec![placeholder.to_string()];
    }
    items.iter().map(render).collect()
}
