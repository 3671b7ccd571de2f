use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

use super::category::{Category, ExpenseCategory, IncomeCategory};

/// Kind of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money going out
    Expense,
    /// Money coming in
    Income,
    /// Any other tag found in imported data. Counted as neither.
    #[serde(other)]
    Other,
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryType::Expense => write!(f, "expense"),
            EntryType::Income => write!(f, "income"),
            EntryType::Other => write!(f, "other"),
        }
    }
}

/// A single recorded expense or income transaction.
///
/// Fields mirror the records the frontend store keeps. Deserialization is
/// lenient: older records without a `type` are expenses, a missing or garbage
/// `amount` is `None`, and `date` stays a raw string that is only parsed when
/// a view needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Opaque identifier (UUID string for entries created through the store)
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,

    /// `None` is treated as an expense
    #[serde(rename = "type", default, deserialize_with = "lenient_entry_type")]
    pub entry_type: Option<EntryType>,

    /// Free-text description
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    /// Amount in currency units; `None` contributes 0
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,

    /// Raw category key; unknown keys fold into `other`
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<String>,

    /// Raw ISO date string (e.g. "2024-01-15")
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
}

impl LedgerEntry {
    /// `Expense` or untyped.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        matches!(self.entry_type, None | Some(EntryType::Expense))
    }

    #[must_use]
    pub fn is_income(&self) -> bool {
        self.entry_type == Some(EntryType::Income)
    }

    /// The amount this entry contributes to any sum.
    #[must_use]
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_entry_date(&self.date)
    }

    #[must_use]
    pub fn expense_category(&self) -> ExpenseCategory {
        ExpenseCategory::from_key(self.category.as_deref())
    }

    #[must_use]
    pub fn income_category(&self) -> IncomeCategory {
        IncomeCategory::from_key(self.category.as_deref())
    }
}

/// Parse a stored entry date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times and naive `YYYY-MM-DDTHH:MM[:SS]`.
/// Date-times keep the calendar date as written (no timezone shift).
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// A validated-on-add entry coming from the entry form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub entry_type: EntryType,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl NewEntry {
    pub fn expense(
        description: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            entry_type: EntryType::Expense,
            description: description.into(),
            amount,
            category: category.key().to_string(),
            date,
        }
    }

    pub fn income(
        description: impl Into<String>,
        amount: f64,
        category: IncomeCategory,
        date: NaiveDate,
    ) -> Self {
        Self {
            entry_type: EntryType::Income,
            description: description.into(),
            amount,
            category: category.key().to_string(),
            date,
        }
    }

    /// Build from raw form input (amount and date as typed by the user).
    pub fn from_form(
        entry_type: EntryType,
        description: &str,
        amount: &str,
        category: &str,
        date: &str,
    ) -> Result<Self, CoreError> {
        if description.trim().is_empty() {
            return Err(CoreError::EmptyDescription);
        }
        let trimmed = amount.trim();
        let amount: f64 = trimmed
            .parse()
            .map_err(|_| CoreError::InvalidAmount(format!("'{trimmed}' is not a number")))?;
        let date = parse_entry_date(date).ok_or_else(|| CoreError::InvalidDate(date.to_string()))?;
        Ok(Self {
            entry_type,
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date,
        })
    }
}

// ── Lenient field deserializers ─────────────────────────────────────

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|a| a.is_finite()))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Absent or `null` stays `None` (an expense); any other non-string is `Other`.
fn lenient_entry_type<'de, D>(deserializer: D) -> Result<Option<EntryType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(match s.as_str() {
            "expense" => EntryType::Expense,
            "income" => EntryType::Income,
            _ => EntryType::Other,
        }),
        Some(_) => Some(EntryType::Other),
    })
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}
