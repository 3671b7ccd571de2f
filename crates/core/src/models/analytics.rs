use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;

/// Headline numbers for the summary cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Sum of all income entries
    pub total_income: f64,

    /// Sum of all expense (and untyped) entries
    pub total_expenses: f64,

    /// total_income - total_expenses (may be negative)
    pub balance: f64,

    /// Biggest spending category, `None` when nothing was spent
    pub highest_expense_category: Option<HighestCategory>,

    /// Number of entries of any type
    pub entry_count: usize,
}

/// The expense category with the largest total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighestCategory {
    pub category: ExpenseCategory,

    /// Friendly label, e.g. "Food & Dining"
    pub label: String,

    pub amount: f64,
}
