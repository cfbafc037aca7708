//! Test doubles for the transport and the session.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::session::Session;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Replays queued responses in order and records every request it receives.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no mock response queued".to_string())))
    }
}

/// Session with a fixed token that counts how often it was expired.
pub struct RecordingSession {
    token: Option<String>,
    expired: Cell<u32>,
}

impl RecordingSession {
    pub fn signed_in(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            expired: Cell::new(0),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            token: None,
            expired: Cell::new(0),
        }
    }

    pub fn expired_count(&self) -> u32 {
        self.expired.get()
    }
}

#[async_trait(?Send)]
impl Session for RecordingSession {
    async fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }

    fn expire(&self) {
        self.expired.set(self.expired.get() + 1);
    }
}

pub fn client_with(transport: &Rc<MockTransport>, session: &Rc<RecordingSession>) -> ApiClient {
    ApiClient::new(ClientConfig::default(), transport.clone(), session.clone())
}
