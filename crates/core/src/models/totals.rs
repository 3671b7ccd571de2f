use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::category::Category;

/// Per-category sums for one entry type.
///
/// Always holds every key of `C::ALL`, in enumeration order, including zeros.
/// Serializes as a JSON object (`{"food": 100.0, "transport": 0.0, ...}`).
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals<C: Category> {
    totals: Vec<(C, f64)>,
}

impl<C: Category> CategoryTotals<C> {
    /// All categories at zero.
    pub fn zeroed() -> Self {
        Self {
            totals: C::ALL.iter().map(|c| (*c, 0.0)).collect(),
        }
    }

    pub(crate) fn add(&mut self, category: C, amount: f64) {
        if let Some((_, total)) = self.totals.iter_mut().find(|(c, _)| *c == category) {
            *total += amount;
        }
    }

    #[must_use]
    pub fn get(&self, category: C) -> f64 {
        self.totals
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
            .unwrap_or(0.0)
    }

    /// Lookup by storage key. Unknown keys return `None` (no folding here).
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<f64> {
        C::lookup(key).map(|c| self.get(c))
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, f64)> + '_ {
        self.totals.iter().copied()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.totals.iter().map(|(c, _)| c.key()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum over all categories.
    #[must_use]
    pub fn total(&self) -> f64 {
        // `Sum for f64` starts at -0.0
        self.totals.iter().fold(0.0, |acc, (_, t)| acc + t)
    }

    /// The category with the strictly greatest positive total.
    /// Ties go to the earlier category in enumeration order.
    #[must_use]
    pub fn highest(&self) -> Option<(C, f64)> {
        let mut best: Option<(C, f64)> = None;
        for (category, total) in self.iter() {
            let current = best.map(|(_, t)| t).unwrap_or(0.0);
            if total > current {
                best = Some((category, total));
            }
        }
        best
    }
}

impl<C: Category> Default for CategoryTotals<C> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<C: Category> Serialize for CategoryTotals<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.totals.len()))?;
        for (category, total) in &self.totals {
            map.serialize_entry(category.key(), total)?;
        }
        map.end()
    }
}

/// One calendar month of a trend view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    /// "Mon YYYY", e.g. "Jan 2024"
    pub label: String,
    pub year: i32,
    /// 1-based month
    pub month: u32,
    pub amount: f64,
}

/// Trailing month buckets, oldest first.
///
/// Serializes as an ordered JSON object `label -> amount`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlyTotals {
    pub buckets: Vec<MonthBucket>,
}

impl MonthlyTotals {
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.buckets
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.amount)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.label.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.buckets.iter().fold(0.0, |acc, b| acc + b.amount)
    }

    /// Buckets are consecutive months, so the index is the offset from the first.
    pub(crate) fn bucket_mut(&mut self, year: i32, month: u32) -> Option<&mut MonthBucket> {
        let first = self.buckets.first()?;
        let offset = (i64::from(year) - i64::from(first.year)) * 12 + i64::from(month)
            - i64::from(first.month);
        let idx = usize::try_from(offset).ok()?;
        self.buckets.get_mut(idx)
    }
}

impl Serialize for MonthlyTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(&bucket.label, &bucket.amount)?;
        }
        map.end()
    }
}
