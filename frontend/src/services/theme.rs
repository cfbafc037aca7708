use anyhow::{anyhow, Result};
use gloo::storage::{LocalStorage, Storage};
use shared::{Theme, THEME_STORAGE_KEY};

const DARK_CLASS: &str = "dark";

/// Saved choice first, then the OS colour scheme
pub fn initial_theme() -> Theme {
    let stored = LocalStorage::raw().get_item(THEME_STORAGE_KEY).ok().flatten();
    Theme::resolve(stored.as_deref(), prefers_dark())
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Toggle the `dark` class on `<html>` and remember the choice
pub fn apply_theme(theme: Theme) -> Result<()> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| anyhow!("document element is not available"))?;
    root.class_list()
        .toggle_with_force(DARK_CLASS, theme == Theme::Dark)
        .map_err(|e| anyhow!("failed to update theme class: {:?}", e))?;

    LocalStorage::raw()
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|e| anyhow!("failed to persist theme: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_applied_theme_is_restored() {
        apply_theme(Theme::Dark).unwrap();
        assert_eq!(initial_theme(), Theme::Dark);

        apply_theme(Theme::Light).unwrap();
        assert_eq!(initial_theme(), Theme::Light);
        assert_eq!(
            LocalStorage::raw().get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );
    }
}
