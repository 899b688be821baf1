//! # Monthly Ledger
//!
//! Twelve months of income and expense figures collected from the dashboard
//! form. The month set is fixed; the ledger is rebuilt from the raw input
//! text on every change and never persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// 0-based position, January = 0
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Month> {
        Month::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        }
    }

    /// DOM id of the input for this kind and month, e.g. `income-0`
    pub fn field_id(self, month: Month) -> String {
        let prefix = match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        };
        format!("{}-{}", prefix, month.index())
    }
}

/// Handling of input text that is not a usable amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Treat it as zero without telling the user
    #[default]
    CoerceToZero,
    /// Report it as an error
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{} amount for {} is not a valid non-negative number: '{}'", .kind.label(), .month.name(), .text)]
    InvalidAmount {
        month: Month,
        kind: EntryKind,
        text: String,
    },
}

impl LedgerError {
    pub fn field_id(&self) -> String {
        match self {
            LedgerError::InvalidAmount { month, kind, .. } => kind.field_id(*month),
        }
    }
}

/// Parse a single input value. Blank input is always zero.
///
/// Returns `None` when the text is not a finite number. Sign is not checked
/// here; [`MonthlyLedger::collect`] rejects negatives under `Strict` only.
pub fn parse_amount(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Raw text of the 24 dashboard inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerInputs {
    income: [String; 12],
    expense: [String; 12],
}

impl LedgerInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: EntryKind, month: Month) -> &str {
        match kind {
            EntryKind::Income => &self.income[month.index()],
            EntryKind::Expense => &self.expense[month.index()],
        }
    }

    pub fn set(&mut self, kind: EntryKind, month: Month, text: impl Into<String>) {
        let slot = match kind {
            EntryKind::Income => &mut self.income[month.index()],
            EntryKind::Expense => &mut self.expense[month.index()],
        };
        *slot = text.into();
    }
}

/// Income and expense amounts for each month, zero by default
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyLedger {
    income: [f64; 12],
    expense: [f64; 12],
}

impl MonthlyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every input and rebuild the ledger from scratch.
    ///
    /// Under `Strict` the first unparseable or negative field (calendar
    /// order, income before expense) is returned as an error. Under
    /// `CoerceToZero` unparseable text counts as zero and negatives are kept.
    pub fn collect(inputs: &LedgerInputs, policy: AmountPolicy) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for month in Month::ALL {
            for kind in [EntryKind::Income, EntryKind::Expense] {
                let text = inputs.get(kind, month);
                let amount = match (parse_amount(text), policy) {
                    (Some(value), AmountPolicy::Strict) if value < 0.0 => {
                        return Err(LedgerError::InvalidAmount {
                            month,
                            kind,
                            text: text.to_string(),
                        });
                    }
                    (Some(value), _) => value,
                    (None, AmountPolicy::CoerceToZero) => {
                        log::debug!("Coercing invalid {} input to 0: '{}'", kind.field_id(month), text);
                        0.0
                    }
                    (None, AmountPolicy::Strict) => {
                        return Err(LedgerError::InvalidAmount {
                            month,
                            kind,
                            text: text.to_string(),
                        });
                    }
                };
                ledger.set_amount(kind, month, amount);
            }
        }
        Ok(ledger)
    }

    pub fn amount(&self, kind: EntryKind, month: Month) -> f64 {
        match kind {
            EntryKind::Income => self.income[month.index()],
            EntryKind::Expense => self.expense[month.index()],
        }
    }

    pub fn set_amount(&mut self, kind: EntryKind, month: Month, amount: f64) {
        match kind {
            EntryKind::Income => self.income[month.index()] = amount,
            EntryKind::Expense => self.expense[month.index()] = amount,
        }
    }

    pub fn income_series(&self) -> Vec<f64> {
        self.income.to_vec()
    }

    pub fn expense_series(&self) -> Vec<f64> {
        self.expense.to_vec()
    }

    /// `(total income, total expense)` for the year
    pub fn totals(&self) -> (f64, f64) {
        (self.income.iter().sum(), self.expense.iter().sum())
    }

    pub fn is_empty(&self) -> bool {
        self.income.iter().chain(self.expense.iter()).all(|v| *v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_are_fixed_and_ordered() {
        assert_eq!(Month::ALL.len(), 12);
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(Month::from_index(i), Some(*month));
        }
        assert_eq!(Month::ALL[0].name(), "January");
        assert_eq!(Month::ALL[11].name(), "December");
        assert_eq!(Month::from_index(12), None);
    }

    #[test]
    fn test_field_ids_are_zero_indexed() {
        assert_eq!(EntryKind::Income.field_id(Month::January), "income-0");
        assert_eq!(EntryKind::Expense.field_id(Month::December), "expense-11");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), Some(0.0));
        assert_eq!(parse_amount("   "), Some(0.0));
        assert_eq!(parse_amount("1000.50"), Some(1000.5));
        assert_eq!(parse_amount(" 12 "), Some(12.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-5"), Some(-5.0));
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_january_income_only() {
        let mut inputs = LedgerInputs::new();
        inputs.set(EntryKind::Income, Month::January, "1000.50");
        let ledger = MonthlyLedger::collect(&inputs, AmountPolicy::CoerceToZero).unwrap();

        let mut expected_income = vec![1000.5];
        expected_income.extend(std::iter::repeat(0.0).take(11));
        assert_eq!(ledger.income_series(), expected_income);
        assert_eq!(ledger.expense_series(), vec![0.0; 12]);
    }

    #[test]
    fn test_garbage_is_coerced_to_zero() {
        let mut inputs = LedgerInputs::new();
        inputs.set(EntryKind::Expense, Month::March, "twelve");
        inputs.set(EntryKind::Expense, Month::April, "40");
        let ledger = MonthlyLedger::collect(&inputs, AmountPolicy::CoerceToZero).unwrap();
        assert_eq!(ledger.amount(EntryKind::Expense, Month::March), 0.0);
        assert_eq!(ledger.amount(EntryKind::Expense, Month::April), 40.0);
    }

    #[test]
    fn test_strict_policy_reports_first_bad_field() {
        let mut inputs = LedgerInputs::new();
        inputs.set(EntryKind::Expense, Month::February, "oops");
        inputs.set(EntryKind::Income, Month::May, "-1");
        let err = MonthlyLedger::collect(&inputs, AmountPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidAmount {
                month: Month::February,
                kind: EntryKind::Expense,
                text: "oops".to_string()
            }
        );
        assert_eq!(err.field_id(), "expense-1");
        assert_eq!(
            err.to_string(),
            "Expense amount for February is not a valid non-negative number: 'oops'"
        );
    }

    #[test]
    fn test_collection_is_idempotent() {
        let mut inputs = LedgerInputs::new();
        inputs.set(EntryKind::Income, Month::June, "250");
        inputs.set(EntryKind::Expense, Month::June, "99.99");
        inputs.set(EntryKind::Expense, Month::July, "junk");
        let first = MonthlyLedger::collect(&inputs, AmountPolicy::CoerceToZero).unwrap();
        let second = MonthlyLedger::collect(&inputs, AmountPolicy::CoerceToZero).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.income_series(), second.income_series());
        assert_eq!(first.expense_series(), second.expense_series());
    }

    #[test]
    fn test_negative_amount_is_kept_when_coercing() {
        let mut inputs = LedgerInputs::new();
        inputs.set(EntryKind::Expense, Month::January, "-5");
        let ledger = MonthlyLedger::collect(&inputs, AmountPolicy::CoerceToZero).unwrap();
        assert_eq!(ledger.amount(EntryKind::Expense, Month::January), -5.0);
        assert_eq!(ledger.expense_series()[0], -5.0);
    }

    #[test]
    fn test_negative_amount_is_rejected_when_strict() {
        let mut inputs = LedgerInputs::new();
        inputs.set(EntryKind::Income, Month::May, "-1");
        let err = MonthlyLedger::collect(&inputs, AmountPolicy::Strict).unwrap_err();
        assert_eq!(err.field_id(), "income-4");
    }

    #[test]
    fn test_totals() {
        let mut ledger = MonthlyLedger::new();
        assert!(ledger.is_empty());
        ledger.set_amount(EntryKind::Income, Month::January, 100.0);
        ledger.set_amount(EntryKind::Expense, Month::January, 30.0);
        ledger.set_amount(EntryKind::Expense, Month::February, 20.0);
        assert_eq!(ledger.totals(), (100.0, 50.0));
        assert!(!ledger.is_empty());
    }
}
