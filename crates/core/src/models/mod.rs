pub mod analytics;
pub mod category;
pub mod chart;
pub mod entry;
pub mod ledger;
pub mod settings;
pub mod totals;
