use shared::{Category, CategoryListResponse};

use super::{decode, ApiClient};
use crate::error::{ApiError, Operation};
use crate::transport::Method;

impl ApiClient {
    /// Fixed list of expense categories
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self
            .send(Operation::ListCategories, Method::Get, "/categories", None)
            .await?;
        let data: CategoryListResponse = decode(Operation::ListCategories, &response)?;
        Ok(data.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_with, MockTransport, RecordingSession};
    use std::rc::Rc;

    #[tokio::test]
    async fn test_get_categories() {
        let body = r#"{"categories":[{"id":1,"name":"食費"},{"id":3,"name":"交通費"}]}"#;
        let transport = Rc::new(MockTransport::new().respond(200, body));
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        let categories = client.get_categories().await.unwrap();

        assert_eq!(
            categories,
            vec![
                Category { id: 1, name: "食費".to_string() },
                Category { id: 3, name: "交通費".to_string() },
            ]
        );
    }

    #[tokio::test]
    async fn test_get_categories_errors() {
        let transport = Rc::new(
            MockTransport::new()
                .respond(503, "unavailable")
                .respond(200, r#"{"categories": {}}"#),
        );
        let session = Rc::new(RecordingSession::signed_in("t"));
        let client = client_with(&transport, &session);

        assert_eq!(
            client.get_categories().await.unwrap_err().to_string(),
            "カテゴリの取得に失敗しました"
        );
        assert_eq!(
            client.get_categories().await.unwrap_err().to_string(),
            "カテゴリのレスポンスが正しくありません"
        );
    }
}
