use shared::Dashboard;

use super::{decode, ApiClient};
use crate::error::{ApiError, Operation};
use crate::transport::Method;

impl ApiClient {
    /// Fetch the server-computed monthly summary
    pub async fn get_dashboard(&self) -> Result<Dashboard, ApiError> {
        let response = self
            .send(Operation::GetDashboard, Method::Get, "/dashboard", None)
            .await?;
        decode(Operation::GetDashboard, &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_with, MockTransport, RecordingSession};
    use std::rc::Rc;

    #[tokio::test]
    async fn test_get_dashboard() {
        let body = r#"{
            "income": 300000,
            "saving_goal": 50000,
            "fixed_costs": 92000,
            "variable_budget": 158000,
            "confirmed_expenses": 40000,
            "planned_expenses": 10000,
            "remaining": 118000
        }"#;
        let transport = Rc::new(MockTransport::new().respond(200, body));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let dashboard = client.get_dashboard().await.unwrap();

        assert_eq!(dashboard.variable_budget, 158000);
        assert_eq!(dashboard.remaining, 118000);
    }

    #[tokio::test]
    async fn test_get_dashboard_missing_field_is_malformed() {
        let transport = Rc::new(MockTransport::new().respond(200, r#"{"income": 1}"#));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let error = client.get_dashboard().await.unwrap_err();

        assert_eq!(error, ApiError::malformed(Operation::GetDashboard));
    }
}
