use chrono::{Datelike, Months, NaiveDate};

use crate::models::analytics::{HighestCategory, LedgerSummary};
use crate::models::category::{Category, ExpenseCategory, IncomeCategory};
use crate::models::entry::LedgerEntry;
use crate::models::totals::{CategoryTotals, MonthBucket, MonthlyTotals};

/// Derives totals, category breakdowns and monthly trends from ledger entries.
///
/// Pure business logic: takes a borrowed snapshot, returns owned values,
/// keeps nothing between calls. Malformed entries (missing amount,
/// unparseable date, unknown category) contribute nothing instead of
/// failing the whole computation.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of expense amounts. Untyped entries count as expenses.
    pub fn total_expenses(&self, entries: &[LedgerEntry]) -> f64 {
        entries
            .iter()
            .filter(|e| e.is_expense())
            .map(LedgerEntry::amount_or_zero)
            .fold(0.0, |acc, a| acc + a)
    }

    /// Sum of income amounts.
    pub fn total_income(&self, entries: &[LedgerEntry]) -> f64 {
        entries
            .iter()
            .filter(|e| e.is_income())
            .map(LedgerEntry::amount_or_zero)
            .fold(0.0, |acc, a| acc + a)
    }

    /// total_income - total_expenses
    pub fn balance(&self, entries: &[LedgerEntry]) -> f64 {
        self.total_income(entries) - self.total_expenses(entries)
    }

    /// All seven expense categories, unknown keys folded into `other`.
    pub fn expenses_by_category(&self, entries: &[LedgerEntry]) -> CategoryTotals<ExpenseCategory> {
        let mut totals = CategoryTotals::zeroed();
        for entry in entries.iter().filter(|e| e.is_expense()) {
            totals.add(entry.expense_category(), entry.amount_or_zero());
        }
        totals
    }

    /// All five income categories, unknown keys folded into `other`.
    pub fn income_by_category(&self, entries: &[LedgerEntry]) -> CategoryTotals<IncomeCategory> {
        let mut totals = CategoryTotals::zeroed();
        for entry in entries.iter().filter(|e| e.is_income()) {
            totals.add(entry.income_category(), entry.amount_or_zero());
        }
        totals
    }

    /// Expense totals for the `num_months` months ending at `anchor`'s month.
    pub fn expenses_by_month(
        &self,
        entries: &[LedgerEntry],
        num_months: u32,
        anchor: NaiveDate,
    ) -> MonthlyTotals {
        Self::bucket_by_month(entries, num_months, anchor, LedgerEntry::is_expense)
    }

    /// Income totals for the `num_months` months ending at `anchor`'s month.
    pub fn income_by_month(
        &self,
        entries: &[LedgerEntry],
        num_months: u32,
        anchor: NaiveDate,
    ) -> MonthlyTotals {
        Self::bucket_by_month(entries, num_months, anchor, LedgerEntry::is_income)
    }

    /// Largest expense category; `None` if nothing was spent.
    pub fn highest_expense_category(&self, entries: &[LedgerEntry]) -> Option<HighestCategory> {
        self.expenses_by_category(entries)
            .highest()
            .map(|(category, amount)| HighestCategory {
                category,
                label: category.label().to_string(),
                amount,
            })
    }

    /// Everything the summary cards show.
    pub fn summary(&self, entries: &[LedgerEntry]) -> LedgerSummary {
        let total_income = self.total_income(entries);
        let total_expenses = self.total_expenses(entries);

        LedgerSummary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            highest_expense_category: self.highest_expense_category(entries),
            entry_count: entries.len(),
        }
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Build empty buckets oldest-first, then drop each qualifying entry into
    /// its month. Entries outside the window and unparseable dates are skipped.
    fn bucket_by_month(
        entries: &[LedgerEntry],
        num_months: u32,
        anchor: NaiveDate,
        qualifies: fn(&LedgerEntry) -> bool,
    ) -> MonthlyTotals {
        let mut totals = Self::empty_window(num_months, anchor);
        if totals.is_empty() {
            return totals;
        }

        for entry in entries.iter().filter(|e| qualifies(e)) {
            let Some(date) = entry.parsed_date() else {
                continue;
            };
            if let Some(bucket) = totals.bucket_mut(date.year(), date.month()) {
                bucket.amount += entry.amount_or_zero();
            }
        }

        totals
    }

    fn empty_window(num_months: u32, anchor: NaiveDate) -> MonthlyTotals {
        let first_of_month = anchor.with_day(1).unwrap_or(anchor);

        let buckets = (0..num_months)
            .rev()
            .filter_map(|back| first_of_month.checked_sub_months(Months::new(back)))
            .map(|month| MonthBucket {
                label: month.format("%b %Y").to_string(),
                year: month.year(),
                month: month.month(),
                amount: 0.0,
            })
            .collect();

        MonthlyTotals { buckets }
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
