pub mod export_button;
pub mod ledger_chart;
pub mod month_inputs;

use shared::session::{clear_session, SessionMarker};
use shared::{AppConfig, MonthlyLedger};
use yew::prelude::*;

use crate::hooks::use_ledger;
use crate::services::navigation::navigate_to;
use crate::services::BrowserStore;

use export_button::ExportButton;
use ledger_chart::LedgerChart;
use month_inputs::MonthInputs;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub config: AppConfig,
}

fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

fn empty_ledger_hint(ledger: &MonthlyLedger) -> Option<&'static str> {
    ledger.is_empty().then_some("No figures entered yet")
}

/// Owns the ledger state; the inputs and chart only receive it through props
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let ledger = use_ledger(props.config.amount_policy);
    let canvas_ref = use_node_ref();
    let username = use_memo((), |_| SessionMarker::load(&BrowserStore::new()).username);

    let on_logout = {
        let login_page = props.config.login_page.clone();
        Callback::from(move |_: MouseEvent| {
            clear_session(&mut BrowserStore::new());
            navigate_to(&login_page);
        })
    };

    let (total_income, total_expense) = ledger.ledger.totals();
    let invalid_field = ledger.error.as_ref().map(|e| e.field_id());

    html! {
        <main class="dashboard-page container">
            <header class="dashboard-header">
                <h1>{"Income & Expense Tracker"}</h1>
                {if let Some(name) = (*username).as_ref() {
                    html! {
                        <div class="session-info">
                            <span>{format!("Signed in as {}", name)}</span>
                            <button type="button" class="btn btn-link" onclick={on_logout}>{"Log out"}</button>
                        </div>
                    }
                } else { html! {} }}
            </header>

            <section class="ledger-section">
                <h2>{"Monthly figures"}</h2>
                {if let Some(error) = ledger.error.as_ref() {
                    html! { <div class="form-message error">{error.to_string()}</div> }
                } else { html! {} }}
                <MonthInputs
                    inputs={ledger.inputs}
                    {invalid_field}
                    on_change={ledger.set_field}
                />
            </section>

            <section class="chart-section">
                <div class="chart-summary">
                    {if let Some(hint) = empty_ledger_hint(&ledger.ledger) {
                        html! { <span class="summary-hint">{hint}</span> }
                    } else { html! {} }}
                    <span class="total income">{format!("Income: {}", format_currency(total_income))}</span>
                    <span class="total expense">{format!("Expense: {}", format_currency(total_expense))}</span>
                    <span class="total net">{format!("Net: {}", format_currency(total_income - total_expense))}</span>
                </div>
                <LedgerChart ledger={ledger.ledger} canvas_ref={canvas_ref.clone()} />
                <ExportButton {canvas_ref} />
            </section>
        </main>
    }
}
