use thiserror::Error;

/// Unified error type for the entire expense-tracker-core library.
///
/// Aggregation never fails. Only the ledger store, settings and the
/// JSON exchange boundary return `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Entry validation ────────────────────────────────────────────
    #[error("Please enter a description")]
    EmptyDescription,

    #[error("Enter a valid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Expense cannot exceed total income (income {income:.2}, projected expenses {projected_expenses:.2})")]
    ExpenseExceedsIncome {
        income: f64,
        projected_expenses: f64,
    },

    #[error("Unsupported entry type: {0} (expected expense or income)")]
    UnsupportedEntryType(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    // ── Settings ────────────────────────────────────────────────────
    #[error("Invalid currency code '{0}': must be exactly 3 ASCII letters (e.g., INR, USD, EUR)")]
    InvalidCurrency(String),

    #[error("Invalid month window {0}: must be between 1 and 120")]
    InvalidMonthWindow(u32),

    // ── Exchange ────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
