use serde::{Deserialize, Serialize};

/// A fixed, ordered category enumeration.
///
/// Every total, chart and bucket function walks `ALL`, so key coverage
/// and display order are defined in exactly one place per entry type.
pub trait Category: Copy + Eq + std::fmt::Debug + 'static {
    /// All categories in display order. `Other` is always last.
    const ALL: &'static [Self];

    /// The fallback for unknown keys.
    const OTHER: Self;

    /// Lowercase storage key (e.g. "food").
    fn key(&self) -> &'static str;

    /// Friendly label for summary cards and forms (e.g. "Food & Dining").
    fn label(&self) -> &'static str;

    /// Exact key lookup. No case folding: "Food" is not "food".
    fn lookup(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// Resolve a raw category key, folding anything unrecognized into `OTHER`.
    fn from_key(key: Option<&str>) -> Self {
        key.and_then(Self::lookup).unwrap_or(Self::OTHER)
    }

    /// Chart name: the key with its first letter uppercased ("food" -> "Food").
    fn display_name(&self) -> String {
        capitalize(self.key())
    }
}

/// Uppercase the first character, leave the rest untouched.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Where the money went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Utilities,
    Health,
    Other,
}

impl Category for ExpenseCategory {
    const ALL: &'static [Self] = &[
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Utilities,
        ExpenseCategory::Health,
        ExpenseCategory::Other,
    ];

    const OTHER: Self = ExpenseCategory::Other;

    fn key(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Health => "health",
            ExpenseCategory::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food & Dining",
            ExpenseCategory::Transport => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Health => "Health & Medical",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Where the money came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Income,
    Investment,
    Trading,
    Business,
    Other,
}

impl Category for IncomeCategory {
    const ALL: &'static [Self] = &[
        IncomeCategory::Income,
        IncomeCategory::Investment,
        IncomeCategory::Trading,
        IncomeCategory::Business,
        IncomeCategory::Other,
    ];

    const OTHER: Self = IncomeCategory::Other;

    fn key(&self) -> &'static str {
        match self {
            IncomeCategory::Income => "income",
            IncomeCategory::Investment => "investment",
            IncomeCategory::Trading => "trading",
            IncomeCategory::Business => "business",
            IncomeCategory::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IncomeCategory::Income => "Income",
            IncomeCategory::Investment => "Investment",
            IncomeCategory::Trading => "Trading",
            IncomeCategory::Business => "Business",
            IncomeCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
