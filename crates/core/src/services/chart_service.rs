use crate::models::category::Category;
use crate::models::chart::ChartSlice;
use crate::models::entry::LedgerEntry;
use crate::models::totals::{CategoryTotals, MonthlyTotals};
use crate::services::aggregation_service::AggregationService;

/// Generates chart-ready data sets from ledger entries.
///
/// The core computes all the numbers — the frontend only renders.
/// Chart data includes:
/// - Pie slices per expense / income category (zero slices dropped)
/// - Bar series per trailing month (empty months kept)
pub struct ChartService {
    aggregation_service: AggregationService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            aggregation_service: AggregationService::new(),
        }
    }

    /// Turn a category map into pie slices.
    ///
    /// Drops categories whose total is not positive, names each slice by its
    /// capitalized key, and keeps the enumeration order.
    pub fn chart_series<C: Category>(&self, totals: &CategoryTotals<C>) -> Vec<ChartSlice> {
        totals
            .iter()
            .filter(|(_, value)| *value > 0.0)
            .map(|(category, value)| ChartSlice::new(category.display_name(), value))
            .collect()
    }

    /// Expense pie chart.
    pub fn expense_chart_data(&self, entries: &[LedgerEntry]) -> Vec<ChartSlice> {
        self.chart_series(&self.aggregation_service.expenses_by_category(entries))
    }

    /// Income pie chart.
    pub fn income_chart_data(&self, entries: &[LedgerEntry]) -> Vec<ChartSlice> {
        self.chart_series(&self.aggregation_service.income_by_category(entries))
    }

    /// Bar series for a trend view, one slice per bucket including empty months.
    pub fn monthly_series(&self, totals: &MonthlyTotals) -> Vec<ChartSlice> {
        totals
            .buckets
            .iter()
            .map(|bucket| ChartSlice::new(bucket.label.clone(), bucket.amount))
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
