use shared::Theme;
use yew::prelude::*;

use crate::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub page: Page,
    pub on_navigate: Callback<Page>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub on_sign_out: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_button = |page: Page, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let class = if props.page == page { "nav-link active" } else { "nav-link" };
        html! {
            <button class={class} onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(page))}>
                {label}
            </button>
        }
    };

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };
    let on_sign_out = {
        let on_sign_out = props.on_sign_out.clone();
        Callback::from(move |_: MouseEvent| on_sign_out.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"💰 Money Buddy"}</h1>
                <nav class="header-nav">
                    {nav_button(Page::Home, "ホーム")}
                    {nav_button(Page::Settings, "設定")}
                </nav>
                <div class="header-right">
                    <button class="theme-toggle" title="テーマ切り替え" onclick={on_toggle_theme}>
                        {props.theme.toggle_icon()}
                    </button>
                    <button class="btn btn-secondary" onclick={on_sign_out}>{"ログアウト"}</button>
                </div>
            </div>
        </header>
    }
}
