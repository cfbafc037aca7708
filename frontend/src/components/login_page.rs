use client::LoginReason;
use yew::prelude::*;

use super::forms::textarea_value;
use crate::services::auth::{current_query, navigate, post_sign_in_target, sign_in};

/// Sign-in screen. The identity provider's ID token is pasted in and kept
/// in the browser session.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let reason = use_memo((), |_| LoginReason::from_query(&current_query()));
    let token = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_token_input = {
        let token = token.clone();
        Callback::from(move |e: InputEvent| token.set(textarea_value(&e)))
    };

    let onsubmit = {
        let token = token.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let id_token = (*token).trim();
            if id_token.is_empty() {
                error.set(Some("IDトークンを入力してください".to_string()));
                return;
            }

            let result = sign_in(id_token).and_then(|_| navigate(&post_sign_in_target()));
            if let Err(e) = result {
                log::error!("ログインに失敗しました: {}", e);
                error.set(Some("ログインに失敗しました".to_string()));
            }
        })
    };

    html! {
        <main class="main login">
            <div class="container">
                <h1>{"💰 Money Buddy"}</h1>

                {if let Some(reason) = *reason {
                    html! { <div class="form-message info">{reason.message()}</div> }
                } else { html! {} }}

                {if let Some(message) = (*error).as_ref() {
                    html! { <div class="form-message error">{message}</div> }
                } else { html! {} }}

                <form class="login-form" {onsubmit}>
                    <div class="form-group">
                        <label for="id-token">{"IDトークン"}</label>
                        <textarea
                            id="id-token"
                            rows="4"
                            value={(*token).clone()}
                            oninput={on_token_input}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">{"ログイン"}</button>
                </form>
            </div>
        </main>
    }
}
