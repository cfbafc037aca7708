use async_trait::async_trait;
use client::{
    ApiClient, ClientConfig, HttpRequest, HttpResponse, HttpTransport, Method, TransportError,
};
use gloo::net::http::Request;
use std::rc::Rc;

use super::auth::BrowserSession;

/// `HttpTransport` backed by the browser's fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse::new(status, body))
    }
}

/// Base URL baked in at build time, e.g. `MONEY_BUDDY_API_BASE_URL=https://api.example.com trunk build`
pub fn client_config() -> ClientConfig {
    ClientConfig::from_override(option_env!("MONEY_BUDDY_API_BASE_URL"))
}

/// API client wired to fetch and the browser session
pub fn build_api_client() -> ApiClient {
    ApiClient::new(
        client_config(),
        Rc::new(GlooTransport),
        Rc::new(BrowserSession),
    )
}
