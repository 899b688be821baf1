use shared::export_file_name;
use yew::prelude::*;

use super::ledger_chart::mounted_canvas;
use crate::services::export::{download_canvas_png, today};
use crate::services::Logger;

#[derive(Properties, PartialEq)]
pub struct ExportButtonProps {
    pub canvas_ref: NodeRef,
}

#[function_component(ExportButton)]
pub fn export_button(props: &ExportButtonProps) -> Html {
    let onclick = {
        let canvas_ref = props.canvas_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let canvas = match mounted_canvas(&canvas_ref) {
                Ok(canvas) => canvas,
                Err(e) => {
                    Logger::warn_with_component("chart-export", &e);
                    return;
                }
            };
            let Some(date) = today() else {
                Logger::warn_with_component("chart-export", "Browser clock returned an invalid date");
                return;
            };
            if let Err(e) = download_canvas_png(&canvas, export_file_name(date)) {
                Logger::error_with_component("chart-export", &e.to_string());
            }
        })
    };

    html! {
        <button id="downloadBtn" type="button" class="btn btn-outline-primary" {onclick}>
            {"⬇ Download Chart"}
        </button>
    }
}
