use shared::{EntryKind, LedgerInputs, Month};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MonthInputsProps {
    pub inputs: LedgerInputs,
    /// Id of the field that failed strict parsing, if any
    #[prop_or_default]
    pub invalid_field: Option<String>,
    pub on_change: Callback<(EntryKind, Month, String)>,
}

/// One income/expense pair per month, in calendar order
#[function_component(MonthInputs)]
pub fn month_inputs(props: &MonthInputsProps) -> Html {
    let amount_input = |kind: EntryKind, month: Month| -> Html {
        let id = kind.field_id(month);
        let invalid = props.invalid_field.as_deref() == Some(id.as_str());
        let oninput = {
            let on_change = props.on_change.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit((kind, month, input.value()));
            })
        };

        html! {
            <div class={classes!("input-group", (kind == EntryKind::Income).then_some("mb-2"))}>
                <label for={id.clone()}>{format!("{}:", kind.label())}</label>
                <input
                    type="number"
                    class={classes!("form-control", invalid.then_some("is-invalid"))}
                    id={id}
                    placeholder="0.00"
                    min="0"
                    step="0.01"
                    value={props.inputs.get(kind, month).to_string()}
                    {oninput}
                />
            </div>
        }
    };

    html! {
        <div id="monthsContainer" class="row">
            {for Month::ALL.iter().map(|&month| html! {
                <div class="col-md-6 col-lg-4" key={month.name()}>
                    <div class="month-group">
                        <h6>{month.name()}</h6>
                        {amount_input(EntryKind::Income, month)}
                        {amount_input(EntryKind::Expense, month)}
                    </div>
                </div>
            })}
        </div>
    }
}
