use tracing::debug;

use crate::errors::Result;
use crate::expression::evaluate;
use crate::history::records::{display_lines, EMPTY_POPUP_HISTORY};
use crate::history::{BoundedHistoryStore, PopupHistoryEntry, SharedStore};

/// shortest round-trip rendering of a calculator result
///
/// Magnitudes of at least 1e21 or below 1e-6 switch to exponent form with an
/// explicit exponent sign (`1e+21`, `3.3e-7`), as a browser would print them.
pub fn format_number(value: f64) -> String {
    // normalise -0 so it renders as "0"
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let rendered = format!("{:e}", value);
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        };
    }
    format!("{}", value)
}

/// popup arithmetic calculator with its own bounded history
#[derive(Debug)]
pub struct PopupCalculator {
    input: String,
    history: BoundedHistoryStore<PopupHistoryEntry>,
}

impl PopupCalculator {
    pub fn new(store: SharedStore, key: &str, capacity: usize) -> Self {
        Self {
            input: String::new(),
            history: BoundedHistoryStore::open(store, key, capacity),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// append a digit or decimal point
    pub fn press_key(&mut self, key: &str) {
        self.input.push_str(key);
    }

    /// append an operator padded with spaces
    pub fn press_operator(&mut self, op: &str) {
        self.input.push(' ');
        self.input.push_str(op);
        self.input.push(' ');
    }

    pub fn paste(&mut self, text: &str) {
        self.input.push_str(text);
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// evaluate the current input
    ///
    /// On success the input is replaced with the result and
    /// `"<input> = <result>"` is recorded. On failure nothing changes.
    pub fn equals(&mut self) -> Result<f64> {
        let value = evaluate(self.input.trim())?;
        let rendered = format_number(value);
        let line = format!("{} = {}", self.input, rendered);
        debug!(%line, "popup calculation");

        self.input = rendered;
        self.history.prepend(line)?;
        Ok(value)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()
    }

    /// newest-first history limited to `limit` entries
    pub fn history(&self, limit: usize) -> &[PopupHistoryEntry] {
        self.history.renderable(limit)
    }

    /// display lines for the history panel
    pub fn history_lines(&self) -> Vec<String> {
        display_lines(
            self.history.renderable(self.history.capacity()),
            EMPTY_POPUP_HISTORY,
            |entry| entry.clone(),
        )
    }
}
