use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, HtmlCanvasElement, Url};

use super::logging::Logger;

fn js_error(context: &str, value: JsValue) -> anyhow::Error {
    anyhow!("{}: {:?}", context, value)
}

/// Today's date from the browser clock (UTC, like `toISOString`)
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_utc_full_year() as i32,
        now.get_utc_month() + 1,
        now.get_utc_date(),
    )
}

/// Encode the canvas as PNG and hand it to the browser as a download.
///
/// Encoding is asynchronous; failures after this returns are only logged.
pub fn download_canvas_png(canvas: &HtmlCanvasElement, file_name: String) -> Result<()> {
    let on_blob = Closure::once_into_js(move |blob: Option<Blob>| {
        let Some(blob) = blob else {
            Logger::warn_with_component("chart-export", "Canvas produced no image data");
            return;
        };
        match save_blob(&blob, &file_name) {
            Ok(()) => Logger::info_with_component("chart-export", &format!("Saved {}", file_name)),
            Err(e) => Logger::error_with_component("chart-export", &e.to_string()),
        }
    });

    canvas
        .to_blob_with_type(on_blob.unchecked_ref(), "image/png")
        .map_err(|e| js_error("toBlob failed", e))
}

fn save_blob(blob: &Blob, file_name: &str) -> Result<()> {
    let url = Url::create_object_url_with_blob(blob).map_err(|e| js_error("createObjectURL failed", e))?;

    let document = gloo::utils::document();
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error("createElement failed", e))?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not an anchor"))?;
    link.set_href(&url);
    link.set_download(file_name);

    let body = gloo::utils::body();
    body.append_child(&link).map_err(|e| js_error("appendChild failed", e))?;
    link.click();
    body.remove_child(&link).map_err(|e| js_error("removeChild failed", e))?;

    Url::revoke_object_url(&url).map_err(|e| js_error("revokeObjectURL failed", e))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_is_a_real_date() {
        let date = today().expect("browser clock should give a valid date");
        let name = shared::export_file_name(date);
        assert!(name.starts_with("income_expense_chart_"));
        assert!(name.ends_with(".png"));
    }
}
