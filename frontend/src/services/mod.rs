pub mod api;
pub mod auth;
pub mod logging;
pub mod theme;
