use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::CoreError;

/// Default trailing window for monthly trend views.
pub const DEFAULT_MONTH_WINDOW: u32 = 6;

/// Largest accepted trend window (10 years).
pub const MAX_MONTH_WINDOW: u32 = 120;

/// User-configurable settings, carried inside the ledger snapshot.
///
/// Missing fields fall back to defaults, so a partial JSON config such as
/// `{"currency": "USD"}` is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// ISO currency code shown next to amounts (e.g., "INR", "USD").
    pub currency: String,

    /// Number of months in the expense/income trend charts.
    pub month_window: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            month_window: DEFAULT_MONTH_WINDOW,
        }
    }
}

impl Settings {
    /// Normalize a currency code to three upper-case ASCII letters.
    pub fn parse_currency(raw: &str) -> Result<String, CoreError> {
        let code = raw.trim().to_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidCurrency(raw.to_string()));
        }
        Ok(code)
    }

    /// Accept a trend window of 1..=`MAX_MONTH_WINDOW` months.
    pub fn check_month_window(months: u32) -> Result<u32, CoreError> {
        if months == 0 || months > MAX_MONTH_WINDOW {
            return Err(CoreError::InvalidMonthWindow(months));
        }
        Ok(months)
    }

    /// Settings restored from outside the setters: invalid fields fall back
    /// to their defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();

        let currency = Self::parse_currency(&self.currency).unwrap_or_else(|err| {
            warn!(error = %err, fallback = %defaults.currency, "invalid currency in settings");
            defaults.currency.clone()
        });
        let month_window = Self::check_month_window(self.month_window).unwrap_or_else(|err| {
            warn!(error = %err, fallback = defaults.month_window, "invalid month window in settings");
            defaults.month_window
        });

        Self {
            currency,
            month_window,
        }
    }
}
