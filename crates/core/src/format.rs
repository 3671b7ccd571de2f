//! Presentation helpers shared by every frontend: currency and date strings,
//! category labels and color tokens.

use crate::models::category::{capitalize, Category, ExpenseCategory, IncomeCategory};
use crate::models::entry::parse_entry_date;

/// Color token used when a category key is unknown.
pub const NEUTRAL_TEXT_COLOR: &str = "text-gray-500";

/// Render an amount as Indian Rupees with two decimals and lakh/crore grouping.
///
/// `1234567.891` -> `"₹12,34,567.89"`, `-50.0` -> `"-₹50.00"`.
/// Non-finite values render as `"₹0.00"`.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (units, paise) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}₹{}.{paise}", group_indian(units))
}

/// Group an integer digit string the en-IN way: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Render a stored date as `"Mon D, YYYY"` (e.g. `"Jan 5, 2024"`).
///
/// Returns the input unchanged when it can't be parsed.
pub fn format_date(raw: &str) -> String {
    match parse_entry_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Text color token for a category key, `NEUTRAL_TEXT_COLOR` if unknown.
pub fn category_text_color(key: &str) -> &'static str {
    match key {
        "food" => "text-indigo-500",
        "transport" => "text-cyan-500",
        "entertainment" => "text-purple-500",
        "utilities" => "text-teal-500",
        "health" => "text-green-500",
        "shopping" => "text-orange-500",
        "other" => "text-slate-500",
        "income" => "text-green-600",
        "investment" => "text-emerald-600",
        "trading" => "text-lime-600",
        "business" => "text-blue-600",
        _ => NEUTRAL_TEXT_COLOR,
    }
}

/// Friendly label for a category key.
///
/// Known keys use their form label ("Food & Dining"), unknown keys are
/// capitalized, and a blank key reads "Other".
pub fn category_label(key: &str) -> String {
    if key.trim().is_empty() {
        return ExpenseCategory::Other.label().to_string();
    }
    ExpenseCategory::lookup(key)
        .map(|c| c.label().to_string())
        .or_else(|| IncomeCategory::lookup(key).map(|c| c.label().to_string()))
        .unwrap_or_else(|| capitalize(key))
}
