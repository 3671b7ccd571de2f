pub mod errors;
pub mod format;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use models::{
    analytics::LedgerSummary,
    category::{ExpenseCategory, IncomeCategory},
    chart::ChartSlice,
    entry::{EntryType, LedgerEntry, NewEntry},
    ledger::Ledger,
    settings::{Settings, MAX_MONTH_WINDOW},
    totals::{CategoryTotals, MonthlyTotals},
};
use services::{
    aggregation_service::AggregationService, chart_service::ChartService,
    ledger_service::LedgerService,
};
use tracing::debug;

use errors::CoreError;

/// Main entry point for the Expense Tracker core library.
/// Holds the current ledger snapshot and all services needed to operate on it.
#[must_use]
pub struct ExpenseTracker {
    ledger: Ledger,
    ledger_service: LedgerService,
    aggregation_service: AggregationService,
    chart_service: ChartService,
}

impl std::fmt::Debug for ExpenseTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTracker")
            .field("entries", &self.ledger.entries.len())
            .field("settings", &self.ledger.settings)
            .finish()
    }
}

impl ExpenseTracker {
    /// Create an empty ledger with default settings.
    pub fn new() -> Self {
        Self::build(Ledger::default())
    }

    /// Create an empty ledger with the given settings.
    /// Invalid fields fall back to their defaults.
    pub fn with_settings(settings: Settings) -> Self {
        Self::build(Ledger::new(settings.sanitized()))
    }

    /// Wrap a snapshot handed over by an external store.
    /// Entries are taken as-is, without validation.
    pub fn from_entries(entries: Vec<LedgerEntry>) -> Self {
        Self::build(Ledger {
            entries,
            settings: Settings::default(),
        })
    }

    /// Restore a full ledger (entries + settings) from its JSON form.
    /// Settings that the setters would reject fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let mut ledger: Ledger = serde_json::from_str(json)?;
        ledger.settings = ledger.settings.sanitized();
        Ok(Self::build(ledger))
    }

    // ── Entry Management ────────────────────────────────────────────

    /// Validate and add an entry. Returns the new entry's id.
    pub fn add_entry(&mut self, entry: NewEntry) -> Result<String, CoreError> {
        self.ledger_service.add_entry(&mut self.ledger, entry)
    }

    /// Add an expense. Fails if it would push expenses above income.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
    ) -> Result<String, CoreError> {
        self.add_entry(NewEntry::expense(description, amount, category, date))
    }

    /// Add an income entry.
    pub fn add_income(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: IncomeCategory,
        date: NaiveDate,
    ) -> Result<String, CoreError> {
        self.add_entry(NewEntry::income(description, amount, category, date))
    }

    /// Remove an entry by id, returning it.
    pub fn remove_entry(&mut self, id: &str) -> Result<LedgerEntry, CoreError> {
        self.ledger_service.remove_entry(&mut self.ledger, id)
    }

    #[must_use]
    pub fn get_entry(&self, id: &str) -> Option<&LedgerEntry> {
        self.ledger.entries.iter().find(|e| e.id == id)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.ledger.entries
    }

    /// All entries newest first, as the history table shows them.
    #[must_use]
    pub fn entries_newest_first(&self) -> Vec<&LedgerEntry> {
        self.ledger_service.entries_newest_first(&self.ledger)
    }

    /// Entries of one type (untyped entries count as expenses).
    #[must_use]
    pub fn entries_of_type(&self, entry_type: EntryType) -> Vec<&LedgerEntry> {
        self.ledger_service.entries_of_type(&self.ledger, entry_type)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.ledger.entries.len()
    }

    // ── Totals ──────────────────────────────────────────────────────

    #[must_use]
    pub fn total_expenses(&self) -> f64 {
        self.aggregation_service.total_expenses(&self.ledger.entries)
    }

    #[must_use]
    pub fn total_income(&self) -> f64 {
        self.aggregation_service.total_income(&self.ledger.entries)
    }

    /// Income minus expenses.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.aggregation_service.balance(&self.ledger.entries)
    }

    #[must_use]
    pub fn expenses_by_category(&self) -> CategoryTotals<ExpenseCategory> {
        self.aggregation_service
            .expenses_by_category(&self.ledger.entries)
    }

    #[must_use]
    pub fn income_by_category(&self) -> CategoryTotals<IncomeCategory> {
        self.aggregation_service
            .income_by_category(&self.ledger.entries)
    }

    /// Totals, balance, top spending category and entry count.
    #[must_use]
    pub fn summary(&self) -> LedgerSummary {
        self.aggregation_service.summary(&self.ledger.entries)
    }

    // ── Monthly Trends ──────────────────────────────────────────────

    /// Expense buckets for the last `num_months` months, ending this month.
    /// Reads the local clock on every call. Windows past `MAX_MONTH_WINDOW`
    /// are capped.
    #[must_use]
    pub fn expenses_by_month(&self, num_months: u32) -> MonthlyTotals {
        self.expenses_by_month_at(num_months, Self::today())
    }

    /// Income buckets for the last `num_months` months, ending this month.
    #[must_use]
    pub fn income_by_month(&self, num_months: u32) -> MonthlyTotals {
        self.income_by_month_at(num_months, Self::today())
    }

    /// Expense buckets ending at `anchor`'s month, capped at `MAX_MONTH_WINDOW`.
    #[must_use]
    pub fn expenses_by_month_at(&self, num_months: u32, anchor: NaiveDate) -> MonthlyTotals {
        self.aggregation_service.expenses_by_month(
            &self.ledger.entries,
            num_months.min(MAX_MONTH_WINDOW),
            anchor,
        )
    }

    /// Income buckets ending at `anchor`'s month, capped at `MAX_MONTH_WINDOW`.
    #[must_use]
    pub fn income_by_month_at(&self, num_months: u32, anchor: NaiveDate) -> MonthlyTotals {
        self.aggregation_service.income_by_month(
            &self.ledger.entries,
            num_months.min(MAX_MONTH_WINDOW),
            anchor,
        )
    }

    /// Expense trend over the configured window (`settings.month_window`).
    #[must_use]
    pub fn expense_trend(&self) -> MonthlyTotals {
        self.expenses_by_month(self.ledger.settings.month_window)
    }

    /// Income trend over the configured window (`settings.month_window`).
    #[must_use]
    pub fn income_trend(&self) -> MonthlyTotals {
        self.income_by_month(self.ledger.settings.month_window)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Pie slices for non-zero expense categories.
    #[must_use]
    pub fn expense_chart_data(&self) -> Vec<ChartSlice> {
        self.chart_service.expense_chart_data(&self.ledger.entries)
    }

    /// Pie slices for non-zero income categories.
    #[must_use]
    pub fn income_chart_data(&self) -> Vec<ChartSlice> {
        self.chart_service.income_chart_data(&self.ledger.entries)
    }

    /// Bar series for the expense trend over the configured window.
    #[must_use]
    pub fn expense_trend_chart(&self) -> Vec<ChartSlice> {
        self.chart_service.monthly_series(&self.expense_trend())
    }

    /// Bar series for the income trend over the configured window.
    #[must_use]
    pub fn income_trend_chart(&self) -> Vec<ChartSlice> {
        self.chart_service.monthly_series(&self.income_trend())
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.ledger.settings
    }

    /// Set the display currency (e.g., "INR", "USD").
    /// Currency code must be a 3-letter alphabetic string.
    pub fn set_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        self.ledger.settings.currency = Settings::parse_currency(currency)?;
        Ok(())
    }

    /// Set the number of months shown by the trend views (1..=120).
    pub fn set_month_window(&mut self, months: u32) -> Result<(), CoreError> {
        self.ledger.settings.month_window = Settings::check_month_window(months)?;
        Ok(())
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all entries as a JSON array.
    pub fn export_entries_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger.entries)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize entries to JSON: {e}")))
    }

    /// Import entry-shaped records from a JSON array and append them as-is.
    ///
    /// Records are not validated (they come from an existing store); records
    /// without an id get a fresh one so they can be removed later.
    /// Returns the number of entries imported.
    pub fn import_entries_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let mut entries: Vec<LedgerEntry> = serde_json::from_str(json)?;
        for entry in entries.iter_mut().filter(|e| e.id.trim().is_empty()) {
            entry.id = uuid::Uuid::new_v4().to_string();
        }
        let count = entries.len();
        self.ledger.entries.extend(entries);
        debug!(count, "imported ledger entries");
        Ok(count)
    }

    /// Export all entries as CSV.
    /// Columns: id, type, description, category, amount, date
    #[must_use]
    pub fn export_entries_to_csv(&self) -> String {
        let mut csv = String::from("id,type,description,category,amount,date\n");
        for entry in &self.ledger.entries {
            let entry_type = if entry.is_expense() {
                EntryType::Expense
            } else {
                entry.entry_type.unwrap_or(EntryType::Other)
            };
            let amount = entry.amount.map(|a| a.to_string()).unwrap_or_default();
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                escape_csv(&entry.id),
                entry_type,
                escape_csv(&entry.description),
                escape_csv(entry.category.as_deref().unwrap_or("")),
                amount,
                escape_csv(&entry.date),
            ));
        }
        csv
    }

    /// Full ledger (entries + settings) as JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn build(ledger: Ledger) -> Self {
        Self {
            ledger,
            ledger_service: LedgerService::new(),
            aggregation_service: AggregationService::new(),
            chart_service: ChartService::new(),
        }
    }
}

impl Default for ExpenseTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a CSV field if it contains a comma, quote or line break.
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
