use shared::{
    CreateExpenseInput, Expense, ExpenseListResponse, ExpenseResponse, UpdateExpenseInput,
};

use super::{decode, ApiClient};
use crate::error::{ApiError, Operation};
use crate::transport::Method;

impl ApiClient {
    pub async fn get_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        let response = self
            .send(Operation::ListExpenses, Method::Get, "/expenses", None)
            .await?;
        let data: ExpenseListResponse = decode(Operation::ListExpenses, &response)?;
        Ok(data.expenses)
    }

    /// Create an expense and return the stored record echoed by the service
    pub async fn create_expense(&self, input: &CreateExpenseInput) -> Result<Expense, ApiError> {
        let response = self
            .send_json(Operation::CreateExpense, Method::Post, "/expenses", input)
            .await?;
        let data: ExpenseResponse = decode(Operation::CreateExpense, &response)?;
        Ok(data.expense)
    }

    pub async fn update_expense(
        &self,
        id: i64,
        input: &UpdateExpenseInput,
    ) -> Result<Expense, ApiError> {
        let path = format!("/expenses/{}", id);
        let response = self
            .send_json(Operation::UpdateExpense, Method::Put, &path, input)
            .await?;
        let data: ExpenseResponse = decode(Operation::UpdateExpense, &response)?;
        Ok(data.expense)
    }

    pub async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/expenses/{}", id);
        self.send(Operation::DeleteExpense, Method::Delete, &path, None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_with, MockTransport, RecordingSession};
    use shared::{CategoryRef, ExpenseStatus};
    use std::rc::Rc;

    fn commute_input() -> CreateExpenseInput {
        CreateExpenseInput {
            amount: 1200,
            category_id: 3,
            memo: Some("通勤".to_string()),
            spent_at: "2025-12-31".to_string(),
            status: None,
        }
    }

    fn commute_expense() -> Expense {
        Expense {
            id: 1,
            amount: 1200,
            category: CategoryRef {
                id: 3,
                name: "交通費".to_string(),
            },
            memo: Some("通勤".to_string()),
            spent_at: "2025-12-31".to_string(),
            status: ExpenseStatus::Confirmed,
        }
    }

    #[tokio::test]
    async fn test_create_expense_returns_echoed_expense() {
        let body = serde_json::json!({ "expense": commute_expense() }).to_string();
        let transport = Rc::new(MockTransport::new().respond(200, &body));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let expense = client.create_expense(&commute_input()).await.unwrap();

        assert_eq!(expense, commute_expense());
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://localhost:8080/expenses");
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
        let sent: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "amount": 1200,
                "category_id": 3,
                "memo": "通勤",
                "spent_at": "2025-12-31"
            })
        );
    }

    #[tokio::test]
    async fn test_create_expense_server_error() {
        let transport = Rc::new(MockTransport::new().respond(500, "internal error"));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let error = client.create_expense(&commute_input()).await.unwrap_err();

        assert_eq!(error.to_string(), "支出の作成に失敗しました");
        assert!(matches!(error, ApiError::Request { status: Some(500), .. }));
    }

    #[tokio::test]
    async fn test_create_expense_without_envelope_is_malformed() {
        let body = serde_json::to_string(&commute_expense()).unwrap();
        let transport = Rc::new(MockTransport::new().respond(200, &body));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let error = client.create_expense(&commute_input()).await.unwrap_err();

        assert_eq!(error.to_string(), "支出のレスポンスが正しくありません");
        assert!(matches!(error, ApiError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_get_expenses_requires_array() {
        let transport = Rc::new(
            MockTransport::new()
                .respond(200, r#"{"expenses": null}"#)
                .respond(200, r#"{"items": []}"#),
        );
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        assert!(matches!(
            client.get_expenses().await,
            Err(ApiError::MalformedResponse { .. })
        ));
        assert!(matches!(
            client.get_expenses().await,
            Err(ApiError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_and_delete_use_id_paths() {
        let mut updated = commute_expense();
        updated.amount = 1500;
        let body = serde_json::json!({ "expense": updated }).to_string();
        let transport = Rc::new(MockTransport::new().respond(200, &body).respond(204, ""));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let result = client.update_expense(1, &commute_input()).await.unwrap();
        assert_eq!(result.amount, 1500);
        client.delete_expense(1).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, "http://localhost:8080/expenses/1");
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].url, "http://localhost:8080/expenses/1");
        assert_eq!(requests[1].body, None);
    }

    #[tokio::test]
    async fn test_delete_failure_message() {
        let transport = Rc::new(MockTransport::new().respond(404, "not found"));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let error = client.delete_expense(99).await.unwrap_err();

        assert_eq!(error.to_string(), "支出の削除に失敗しました");
    }
}
