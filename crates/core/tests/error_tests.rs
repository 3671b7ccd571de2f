// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use expense_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn empty_description() {
        assert_eq!(CoreError::EmptyDescription.to_string(), "Please enter a description");
    }

    #[test]
    fn invalid_amount() {
        let err = CoreError::InvalidAmount("-5 must be greater than zero".into());
        assert_eq!(err.to_string(), "Enter a valid amount: -5 must be greater than zero");
    }

    #[test]
    fn invalid_date() {
        let err = CoreError::InvalidDate("2024-13-01".into());
        assert_eq!(err.to_string(), "Invalid date '2024-13-01': expected YYYY-MM-DD");
    }

    #[test]
    fn expense_exceeds_income() {
        let err = CoreError::ExpenseExceedsIncome {
            income: 100.0,
            projected_expenses: 150.5,
        };
        assert_eq!(
            err.to_string(),
            "Expense cannot exceed total income (income 100.00, projected expenses 150.50)"
        );
    }

    #[test]
    fn unsupported_entry_type() {
        let err = CoreError::UnsupportedEntryType("other".into());
        assert_eq!(
            err.to_string(),
            "Unsupported entry type: other (expected expense or income)"
        );
    }

    #[test]
    fn entry_not_found() {
        let err = CoreError::EntryNotFound("abc".into());
        assert_eq!(err.to_string(), "Entry not found: abc");
    }

    #[test]
    fn invalid_currency() {
        let err = CoreError::InvalidCurrency("RUPEE".into());
        assert!(err.to_string().starts_with("Invalid currency code 'RUPEE'"));
    }

    #[test]
    fn invalid_month_window() {
        let err = CoreError::InvalidMonthWindow(0);
        assert_eq!(err.to_string(), "Invalid month window 0: must be between 1 and 120");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("boom".into());
        assert_eq!(err.to_string(), "Serialization error: boom");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
        assert!(err.to_string().starts_with("Deserialization error: "));
    }

    #[test]
    fn question_mark_propagates() {
        fn parse(json: &str) -> Result<Vec<u8>, CoreError> {
            Ok(serde_json::from_str(json)?)
        }
        assert!(parse("[1,2]").is_ok());
        assert!(matches!(parse("{"), Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CoreError>();
    }
}
