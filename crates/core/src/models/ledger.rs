use serde::{Deserialize, Serialize};

use super::entry::LedgerEntry;
use super::settings::Settings;

/// The main data container: the current snapshot of entries plus settings.
///
/// Entries are kept in insertion order. Views that need another order
/// (newest first, by month) derive it on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// All expense and income entries
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,

    /// User settings (currency, trend window)
    #[serde(default)]
    pub settings: Settings,
}

impl Ledger {
    pub fn new(settings: Settings) -> Self {
        Self {
            entries: Vec::new(),
            settings,
        }
    }
}
