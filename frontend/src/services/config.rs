use shared::AppConfig;

use super::logging::Logger;

/// Id of the optional `<script type="application/json">` block holding overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Read the page's configuration block, falling back to defaults
pub fn load() -> AppConfig {
    let text = gloo::utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    let Some(text) = text else {
        Logger::debug_with_component("config", "No #app-config block; using defaults");
        return AppConfig::default();
    };

    match AppConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("{}; using defaults", e));
            AppConfig::default()
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_block_falls_back_to_defaults() {
        if let Some(element) = gloo::utils::document().get_element_by_id(CONFIG_ELEMENT_ID) {
            element.remove();
        }
        assert_eq!(load(), AppConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_block_overrides_defaults() {
        let document = gloo::utils::document();
        let script = document.create_element("script").unwrap();
        script.set_id(CONFIG_ELEMENT_ID);
        script.set_text_content(Some(r#"{"redirect_delay_ms": 10}"#));
        document.body().unwrap().append_child(&script).unwrap();

        let config = load();
        script.remove();
        assert_eq!(config.redirect_delay_ms, 10);
        assert_eq!(config.main_page, "index.html");
    }
}
