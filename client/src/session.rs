use async_trait::async_trait;

/// The client's view of the authentication provider.
#[async_trait(?Send)]
pub trait Session {
    /// Current ID token, or `None` when nobody is signed in
    async fn bearer_token(&self) -> Option<String>;

    /// The service rejected the token: sign out and send the user to the login page.
    fn expire(&self);
}

/// Path of the login page
pub const LOGIN_PATH: &str = "/login";

/// Why the user landed on the login page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginReason {
    SessionExpired,
}

impl LoginReason {
    pub fn as_str(self) -> &'static str {
        match self {
            LoginReason::SessionExpired => "session_expired",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            LoginReason::SessionExpired => "ログインの有効期限が切れました。再度ログインしてください",
        }
    }

    /// Redirect target carrying this reason, e.g. `/login?reason=session_expired`
    pub fn login_url(self) -> String {
        format!("{}?reason={}", LOGIN_PATH, self.as_str())
    }

    /// Read the `reason` parameter from a query string (with or without the `?`)
    pub fn from_query(query: &str) -> Option<Self> {
        match query_param(query, "reason")? {
            "session_expired" => Some(LoginReason::SessionExpired),
            _ => None,
        }
    }
}

/// Nothing but the login page may load without a token.
pub fn requires_sign_in(path: &str, has_token: bool) -> bool {
    !has_token && path != LOGIN_PATH
}

/// `/login?redirect=<path>`; `encoded_path` is already URI-component encoded.
pub fn login_redirect_url(encoded_path: &str) -> String {
    format!("{}?redirect={}", LOGIN_PATH, encoded_path)
}

/// Raw (still encoded) `redirect` parameter of the login page
pub fn redirect_param(query: &str) -> Option<&str> {
    query_param(query, "redirect").filter(|value| !value.is_empty())
}

/// Only paths on this site are followed after sign-in
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
