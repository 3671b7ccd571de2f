use std::cmp::Ordering;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::category::{Category, ExpenseCategory, IncomeCategory};
use crate::models::entry::{EntryType, LedgerEntry, NewEntry};
use crate::models::ledger::Ledger;
use crate::services::aggregation_service::AggregationService;

/// Manages ledger entries: validated adds, removals and list views.
///
/// Pure business logic — no I/O. Easy to test.
pub struct LedgerService {
    aggregation_service: AggregationService,
}

impl LedgerService {
    pub fn new() -> Self {
        Self {
            aggregation_service: AggregationService::new(),
        }
    }

    /// Validate and append a new entry. Returns the generated id.
    pub fn add_entry(&self, ledger: &mut Ledger, new_entry: NewEntry) -> Result<String, CoreError> {
        if let Err(err) = self.validate_entry(ledger, &new_entry) {
            warn!(
                entry_type = %new_entry.entry_type,
                amount = new_entry.amount,
                error = %err,
                "rejected ledger entry"
            );
            return Err(err);
        }

        let entry = Self::build_entry(new_entry);
        let id = entry.id.clone();
        debug!(
            id = %id,
            entry_type = %entry.entry_type.unwrap_or(EntryType::Expense),
            amount = entry.amount_or_zero(),
            "added ledger entry"
        );
        ledger.entries.push(entry);
        Ok(id)
    }

    /// Remove an entry by id and hand it back.
    pub fn remove_entry(&self, ledger: &mut Ledger, id: &str) -> Result<LedgerEntry, CoreError> {
        let idx = ledger
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::EntryNotFound(id.to_string()))?;

        let removed = ledger.entries.remove(idx);
        debug!(id = %id, "removed ledger entry");
        Ok(removed)
    }

    /// All entries for the history table, newest date first.
    ///
    /// Entries with unparseable dates go last; equal dates keep insertion order.
    pub fn entries_newest_first<'a>(&self, ledger: &'a Ledger) -> Vec<&'a LedgerEntry> {
        let mut entries: Vec<&LedgerEntry> = ledger.entries.iter().collect();
        entries.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
            (Some(da), Some(db)) => db.cmp(&da),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        entries
    }

    /// Entries of one type. Untyped entries are listed as expenses.
    pub fn entries_of_type<'a>(
        &self,
        ledger: &'a Ledger,
        entry_type: EntryType,
    ) -> Vec<&'a LedgerEntry> {
        ledger
            .entries
            .iter()
            .filter(|e| match entry_type {
                EntryType::Expense => e.is_expense(),
                EntryType::Income => e.is_income(),
                EntryType::Other => e.entry_type == Some(EntryType::Other),
            })
            .collect()
    }

    /// Validate an entry before adding it to the ledger.
    ///
    /// Rules:
    /// - Type must be expense or income
    /// - Description must not be blank
    /// - Amount must be a positive number
    /// - An expense can't push total expenses above total income
    fn validate_entry(&self, ledger: &Ledger, entry: &NewEntry) -> Result<(), CoreError> {
        if entry.entry_type == EntryType::Other {
            return Err(CoreError::UnsupportedEntryType(entry.entry_type.to_string()));
        }

        if entry.description.trim().is_empty() {
            return Err(CoreError::EmptyDescription);
        }

        if !entry.amount.is_finite() || entry.amount <= 0.0 {
            return Err(CoreError::InvalidAmount(format!(
                "{} must be greater than zero",
                entry.amount
            )));
        }

        if entry.entry_type == EntryType::Expense {
            let income = self.aggregation_service.total_income(&ledger.entries);
            let projected_expenses =
                self.aggregation_service.total_expenses(&ledger.entries) + entry.amount;

            if income < projected_expenses {
                return Err(CoreError::ExpenseExceedsIncome {
                    income,
                    projected_expenses,
                });
            }
        }

        Ok(())
    }

    fn build_entry(new_entry: NewEntry) -> LedgerEntry {
        // Stored keys are always canonical
        let category = match new_entry.entry_type {
            EntryType::Income => IncomeCategory::from_key(Some(new_entry.category.as_str())).key(),
            _ => ExpenseCategory::from_key(Some(new_entry.category.as_str())).key(),
        };

        LedgerEntry {
            id: Uuid::new_v4().to_string(),
            entry_type: Some(new_entry.entry_type),
            description: new_entry.description.trim().to_string(),
            amount: Some(new_entry.amount),
            category: Some(category.to_string()),
            date: new_entry.date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
