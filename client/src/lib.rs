//! Typed client for the Money Buddy budget service.
//!
//! [`ApiClient`] performs the HTTP calls through a pluggable [`HttpTransport`]
//! and [`Session`], and [`store`] holds the reducers the views cache results in.

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod transport;

#[cfg(test)]
mod testing;

pub use api::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Operation};
pub use session::{
    is_local_path, login_redirect_url, redirect_param, requires_sign_in, LoginReason, Session,
    LOGIN_PATH,
};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
