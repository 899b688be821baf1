use shared::{AmountPolicy, EntryKind, LedgerError, LedgerInputs, Month, MonthlyLedger};
use yew::prelude::*;

use crate::services::Logger;

pub struct UseLedgerResult {
    pub inputs: LedgerInputs,
    /// Last successfully collected ledger
    pub ledger: MonthlyLedger,
    /// Set only under the strict amount policy
    pub error: Option<LedgerError>,
    pub set_field: Callback<(EntryKind, Month, String)>,
}

/// Apply one edited field and re-collect the whole ledger from all inputs
pub fn apply_edit(
    inputs: &LedgerInputs,
    kind: EntryKind,
    month: Month,
    text: String,
    policy: AmountPolicy,
) -> (LedgerInputs, Result<MonthlyLedger, LedgerError>) {
    let mut inputs = inputs.clone();
    inputs.set(kind, month, text);
    let collected = MonthlyLedger::collect(&inputs, policy);
    (inputs, collected)
}

#[hook]
pub fn use_ledger(policy: AmountPolicy) -> UseLedgerResult {
    let inputs = use_state(LedgerInputs::new);
    let ledger = use_state(MonthlyLedger::new);
    let error = use_state(|| Option::<LedgerError>::None);

    let set_field = {
        let inputs = inputs.clone();
        let ledger = ledger.clone();
        let error = error.clone();

        Callback::from(move |(kind, month, text): (EntryKind, Month, String)| {
            let (updated, collected) = apply_edit(&inputs, kind, month, text, policy);
            inputs.set(updated);
            match collected {
                Ok(collected) => {
                    ledger.set(collected);
                    error.set(None);
                }
                Err(e) => {
                    Logger::debug_with_component("ledger", &e.to_string());
                    error.set(Some(e));
                }
            }
        })
    };

    UseLedgerResult {
        inputs: (*inputs).clone(),
        ledger: (*ledger).clone(),
        error: (*error).clone(),
        set_field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_recollects_every_field() {
        let mut inputs = LedgerInputs::new();
        inputs.set(EntryKind::Expense, Month::May, "75");

        let (inputs, collected) = apply_edit(
            &inputs,
            EntryKind::Income,
            Month::January,
            "1000.50".to_string(),
            AmountPolicy::CoerceToZero,
        );
        let ledger = collected.unwrap();
        assert_eq!(inputs.get(EntryKind::Income, Month::January), "1000.50");
        assert_eq!(ledger.amount(EntryKind::Income, Month::January), 1000.5);
        assert_eq!(ledger.amount(EntryKind::Expense, Month::May), 75.0);
    }

    #[test]
    fn test_strict_edit_keeps_the_text() {
        let (inputs, collected) = apply_edit(
            &LedgerInputs::new(),
            EntryKind::Income,
            Month::March,
            "12,5".to_string(),
            AmountPolicy::Strict,
        );
        assert_eq!(inputs.get(EntryKind::Income, Month::March), "12,5");
        assert_eq!(collected.unwrap_err().field_id(), "income-2");
    }
}
