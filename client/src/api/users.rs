use shared::{UpdateUserInput, User};

use super::{decode, ApiClient};
use crate::error::{ApiError, Operation};
use crate::transport::Method;

impl ApiClient {
    /// Fetch the signed-in user. `ApiError::UserNotFound` means setup has not run yet.
    pub async fn get_me(&self) -> Result<User, ApiError> {
        let response = self
            .send(Operation::GetMe, Method::Get, "/user/me", None)
            .await?;
        decode(Operation::GetMe, &response)
    }

    /// Update income and saving goal
    pub async fn update_user(&self, input: &UpdateUserInput) -> Result<(), ApiError> {
        self.send_json(Operation::UpdateUser, Method::Put, "/user/me", input)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_with, MockTransport, RecordingSession};
    use std::rc::Rc;

    const USER_JSON: &str = r#"{
        "id": "firebase-uid",
        "income": 300000,
        "saving_goal": 50000,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z"
    }"#;

    #[tokio::test]
    async fn test_get_me_returns_user() {
        let transport = Rc::new(MockTransport::new().respond(200, USER_JSON));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let user = client.get_me().await.unwrap();

        assert_eq!(user.id, "firebase-uid");
        assert_eq!(user.income, 300000);
        assert_eq!(user.saving_goal, 50000);
        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "http://localhost:8080/user/me");
    }

    #[tokio::test]
    async fn test_get_me_not_found_signals_setup() {
        let transport = Rc::new(MockTransport::new().respond(404, r#"{"error":"user not found"}"#));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let error = client.get_me().await.unwrap_err();

        assert_eq!(error, ApiError::UserNotFound);
        assert_eq!(session.expired_count(), 0);
    }

    #[tokio::test]
    async fn test_get_me_malformed_body() {
        let transport = Rc::new(MockTransport::new().respond(200, r#"{"id": 5}"#));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let error = client.get_me().await.unwrap_err();

        assert_eq!(error.to_string(), "ユーザー情報のレスポンスが正しくありません");
    }

    #[tokio::test]
    async fn test_update_user_sends_put_with_json_body() {
        let transport = Rc::new(MockTransport::new().respond(200, ""));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        client
            .update_user(&UpdateUserInput { income: 320000, saving_goal: 60000 })
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"income": 320000, "saving_goal": 60000}));
    }

    #[tokio::test]
    async fn test_update_user_failure_carries_detail() {
        let transport = Rc::new(
            MockTransport::new().respond(400, r#"{"error":"income must be 10億 or less"}"#),
        );
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let error = client
            .update_user(&UpdateUserInput { income: 2_000_000_000, saving_goal: 0 })
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "ユーザー情報の更新に失敗しました: income must be 10億 or less (status: 400)"
        );
    }
}
