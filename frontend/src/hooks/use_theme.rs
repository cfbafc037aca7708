use shared::Theme;
use yew::prelude::*;

use crate::services::theme::{apply_theme, initial_theme};

pub struct UseThemeResult {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> UseThemeResult {
    let theme = use_state(initial_theme);

    use_effect_with(*theme, |&theme| {
        if let Err(e) = apply_theme(theme) {
            log::warn!("テーマの適用に失敗しました: {}", e);
        }
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        use_callback(*theme, move |_: (), current: &Theme| theme.set(current.toggled()))
    };

    UseThemeResult {
        theme: *theme,
        toggle,
    }
}
