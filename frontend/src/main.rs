mod components;
mod hooks;
mod services;

use client::LOGIN_PATH;
use yew::prelude::*;

use components::forms::initial_setup_form::InitialSetupFormView;
use components::header::Header;
use components::home_page::HomePage;
use components::login_page::LoginPage;
use components::settings_page::SettingsPage;
use hooks::use_dashboard::use_dashboard;
use hooks::use_theme::use_theme;
use hooks::use_user::use_user;
use services::api::build_api_client;
use services::auth::{current_path, navigate, sign_in_redirect, sign_out};
use services::logging::ConsoleLogger;

/// Screens reachable from the header once the user is set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Settings,
}

#[function_component(App)]
fn app() -> Html {
    let on_login_page = use_memo((), |_| current_path() == LOGIN_PATH);
    let redirect = use_memo((), |_| sign_in_redirect());

    use_effect_with(redirect.clone(), |redirect| {
        if let Some(url) = (**redirect).as_deref() {
            if let Err(e) = navigate(url) {
                log::error!("ログイン画面への遷移に失敗しました: {}", e);
            }
        }
        || ()
    });

    if *on_login_page {
        html! { <LoginPage /> }
    } else if redirect.is_some() {
        html! {}
    } else {
        html! { <BudgetApp /> }
    }
}

#[function_component(BudgetApp)]
fn budget_app() -> Html {
    let api_client = use_memo((), |_| build_api_client());
    let user = use_user(&api_client);
    let dashboard = use_dashboard(&api_client, user.state.user.is_some());
    let theme = use_theme();
    let page = use_state(|| Page::Home);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let on_sign_out = Callback::from(|_| {
        sign_out();
        if let Err(e) = navigate(LOGIN_PATH) {
            log::error!("ログイン画面への遷移に失敗しました: {}", e);
        }
    });

    let content = if user.state.is_loading && user.state.user.is_none() {
        html! { <p class="loading">{"読み込み中..."}</p> }
    } else if user.state.needs_setup {
        html! {
            <main class="main">
                <div class="container">
                    <InitialSetupFormView
                        actions={user.actions.clone()}
                        is_submitting={user.state.is_submitting}
                        error={user.state.submit_error.clone()}
                    />
                </div>
            </main>
        }
    } else if let Some(error) = user.state.error.as_ref() {
        html! { <div class="form-message error">{error}</div> }
    } else {
        match *page {
            Page::Home => html! {
                <HomePage
                    api_client={(*api_client).clone()}
                    dashboard={dashboard.state.value.clone()}
                    dashboard_loading={dashboard.state.is_loading}
                    dashboard_error={dashboard.state.error.clone()}
                    dashboard_actions={dashboard.actions.clone()}
                />
            },
            Page::Settings => html! {
                <SettingsPage
                    api_client={(*api_client).clone()}
                    user={user.state.user.clone()}
                    user_actions={user.actions.clone()}
                    user_submitting={user.state.is_submitting}
                    user_error={user.state.submit_error.clone()}
                    dashboard_actions={dashboard.actions.clone()}
                />
            },
        }
    };

    html! {
        <>
            <Header
                page={*page}
                {on_navigate}
                theme={theme.theme}
                on_toggle_theme={theme.toggle.clone()}
                {on_sign_out}
            />
            {content}
        </>
    }
}

fn main() {
    ConsoleLogger::init();
    yew::Renderer::<App>::new().render();
}
