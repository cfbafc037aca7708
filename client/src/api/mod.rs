//! Data-access functions for the budget service.
//!
//! One method per resource operation, each doing exactly one round trip through
//! the configured [`HttpTransport`]. Resource methods live in the submodules.

mod categories;
mod dashboard;
mod expenses;
mod fixed_costs;
mod setup;
mod users;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::error::{ApiError, Operation};
use crate::session::Session;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

/// API client for communicating with the budget service
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Rc<dyn HttpTransport>,
    session: Rc<dyn Session>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && Rc::ptr_eq(&self.transport, &other.transport)
            && Rc::ptr_eq(&self.session, &other.session)
    }
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        transport: Rc<dyn HttpTransport>,
        session: Rc<dyn Session>,
    ) -> Self {
        Self {
            config,
            transport,
            session,
        }
    }

    /// Send one request and classify the status. Only 2xx responses come back as `Ok`.
    async fn send(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(method, self.config.endpoint(path));
        if let Some(token) = self.session.bearer_token().await {
            request = request.with_header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.with_json_body(body);
        }

        log::debug!("{} {}", method, request.url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("{}: {}", operation.failure_message(), e);
                return Err(ApiError::transport(operation));
            }
        };

        if response.status == 401 {
            log::warn!("{} {} rejected with 401, expiring session", method, path);
            self.session.expire();
            return Err(ApiError::Unauthorized);
        }

        if response.status == 404 && operation == Operation::GetMe {
            return Err(ApiError::UserNotFound);
        }

        if !response.is_success() {
            log::error!(
                "{} status={} body={}",
                operation.failure_message(),
                response.status,
                response.body
            );
            return Err(ApiError::from_status(operation, response.status, &response.body));
        }

        Ok(response)
    }

    async fn send_json<B: Serialize>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| {
            log::error!("{}: failed to serialize request: {}", operation.failure_message(), e);
            ApiError::transport(operation)
        })?;
        self.send(operation, method, path, Some(body)).await
    }
}

/// Decode a 2xx body, treating any shape mismatch as a malformed response.
fn decode<T: DeserializeOwned>(operation: Operation, response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        log::warn!(
            "[Dev] {}: {} payload={}",
            operation.malformed_message(),
            e,
            response.body
        );
        ApiError::malformed(operation)
    })
}
