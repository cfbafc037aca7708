//! Browser side of the sign-in session.
//!
//! The identity provider hands the page an ID token; it is kept in session
//! storage for the lifetime of the tab and attached to every API call.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use client::{
    is_local_path, login_redirect_url, redirect_param, requires_sign_in, LoginReason, Session,
};
use gloo::storage::{SessionStorage, Storage};

const ID_TOKEN_KEY: &str = "money_buddy_id_token";

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

#[async_trait(?Send)]
impl Session for BrowserSession {
    async fn bearer_token(&self) -> Option<String> {
        stored_token()
    }

    fn expire(&self) {
        sign_out();
        if let Err(e) = navigate(&LoginReason::SessionExpired.login_url()) {
            log::error!("ログイン画面への遷移に失敗しました: {}", e);
        }
    }
}

pub fn stored_token() -> Option<String> {
    SessionStorage::raw()
        .get_item(ID_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn sign_in(id_token: &str) -> Result<()> {
    SessionStorage::raw()
        .set_item(ID_TOKEN_KEY, id_token)
        .map_err(|e| anyhow!("failed to store ID token: {:?}", e))
}

pub fn sign_out() {
    SessionStorage::delete(ID_TOKEN_KEY);
}

/// Full page navigation, which also drops every in-memory cache
pub fn navigate(url: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("window is not available"))?;
    window
        .location()
        .set_href(url)
        .map_err(|e| anyhow!("failed to navigate to {}: {:?}", url, e))
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Login URL for a visitor without a token, `None` when the page may load
pub fn sign_in_redirect() -> Option<String> {
    let path = current_path();
    if !requires_sign_in(&path, stored_token().is_some()) {
        return None;
    }
    let encoded = String::from(js_sys::encode_uri_component(&path));
    Some(login_redirect_url(&encoded))
}

/// Page to open once signed in: the `redirect` parameter, or the top page
pub fn post_sign_in_target() -> String {
    redirect_param(&current_query())
        .and_then(|raw| js_sys::decode_uri_component(raw).ok())
        .map(String::from)
        .filter(|path| is_local_path(path))
        .unwrap_or_else(|| "/".to_string())
}
