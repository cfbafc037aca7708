use shared::ErrorResponse;
use thiserror::Error;

/// Every call the client makes. Drives the user-facing failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetMe,
    UpdateUser,
    SubmitSetup,
    GetDashboard,
    ListExpenses,
    CreateExpense,
    UpdateExpense,
    DeleteExpense,
    ListCategories,
    ListFixedCosts,
    CreateFixedCost,
    UpdateFixedCost,
    DeleteFixedCost,
}

impl Operation {
    /// Message shown when the request fails or the service answers non-2xx
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::GetMe => "ユーザー情報の取得に失敗しました",
            Operation::UpdateUser => "ユーザー情報の更新に失敗しました",
            Operation::SubmitSetup => "初期設定の送信に失敗しました。時間をおいて再度お試しください。",
            Operation::GetDashboard => {
                "ダッシュボードの取得に失敗しました。時間をおいて再度お試しください。"
            }
            Operation::ListExpenses => "支出の取得に失敗しました",
            Operation::CreateExpense => "支出の作成に失敗しました",
            Operation::UpdateExpense => "支出の更新に失敗しました",
            Operation::DeleteExpense => "支出の削除に失敗しました",
            Operation::ListCategories => "カテゴリの取得に失敗しました",
            Operation::ListFixedCosts => "固定費の取得に失敗しました",
            Operation::CreateFixedCost => "固定費の作成に失敗しました",
            Operation::UpdateFixedCost => "固定費の更新に失敗しました",
            Operation::DeleteFixedCost => "固定費の削除に失敗しました",
        }
    }

    /// Message shown when a 2xx body does not have the expected shape
    pub fn malformed_message(self) -> &'static str {
        match self {
            Operation::GetMe | Operation::UpdateUser => "ユーザー情報のレスポンスが正しくありません",
            Operation::SubmitSetup => "初期設定のレスポンスが正しくありません",
            Operation::GetDashboard => "ダッシュボードのレスポンスが正しくありません",
            Operation::ListExpenses
            | Operation::CreateExpense
            | Operation::UpdateExpense
            | Operation::DeleteExpense => "支出のレスポンスが正しくありません",
            Operation::ListCategories => "カテゴリのレスポンスが正しくありません",
            Operation::ListFixedCosts
            | Operation::CreateFixedCost
            | Operation::UpdateFixedCost
            | Operation::DeleteFixedCost => "固定費のレスポンスが正しくありません",
        }
    }
}

/// Failure of a single API call. `Display` is the text the views render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure or non-2xx status
    #[error("{message}")]
    Request {
        operation: Operation,
        status: Option<u16>,
        message: String,
    },
    /// 2xx response whose body is not the expected JSON shape
    #[error("{message}")]
    MalformedResponse { operation: Operation, message: String },
    /// 401; the session has already been expired when this is returned
    #[error("ログインの有効期限が切れました。再度ログインしてください")]
    Unauthorized,
    /// `GET /user/me` answered 404: the user still needs the initial setup
    #[error("ユーザー情報が登録されていません")]
    UserNotFound,
}

impl ApiError {
    pub fn transport(operation: Operation) -> Self {
        ApiError::Request {
            operation,
            status: None,
            message: operation.failure_message().to_string(),
        }
    }

    pub fn malformed(operation: Operation) -> Self {
        ApiError::MalformedResponse {
            operation,
            message: operation.malformed_message().to_string(),
        }
    }

    /// Build the error for a non-2xx answer. The user endpoints surface the
    /// service's own `{"error": ...}` detail; everything else keeps the fixed text.
    pub fn from_status(operation: Operation, status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|response| response.error)
            .filter(|detail| !detail.is_empty());

        let message = match (operation, detail) {
            (Operation::GetMe, Some(detail)) => detail,
            (Operation::UpdateUser, Some(detail)) => format!(
                "{}: {} (status: {})",
                operation.failure_message(),
                detail,
                status
            ),
            (Operation::UpdateUser, None) => {
                format!("{} (status: {})", operation.failure_message(), status)
            }
            _ => operation.failure_message().to_string(),
        };

        ApiError::Request {
            operation,
            status: Some(status),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_localized_message() {
        let error = ApiError::from_status(Operation::CreateExpense, 500, "internal error");
        assert_eq!(error.to_string(), "支出の作成に失敗しました");
        assert_eq!(
            ApiError::malformed(Operation::ListCategories).to_string(),
            "カテゴリのレスポンスが正しくありません"
        );
    }

    #[test]
    fn test_update_user_includes_detail_and_status() {
        let error = ApiError::from_status(
            Operation::UpdateUser,
            400,
            r#"{"error":"income must be greater than 0"}"#,
        );
        assert_eq!(
            error.to_string(),
            "ユーザー情報の更新に失敗しました: income must be greater than 0 (status: 400)"
        );

        let error = ApiError::from_status(Operation::UpdateUser, 502, "<html>");
        assert_eq!(error.to_string(), "ユーザー情報の更新に失敗しました (status: 502)");
    }

    #[test]
    fn test_get_me_prefers_service_detail() {
        let error = ApiError::from_status(Operation::GetMe, 500, r#"{"error":"db unavailable"}"#);
        assert_eq!(error.to_string(), "db unavailable");
        let error = ApiError::from_status(Operation::GetMe, 500, "");
        assert_eq!(error.to_string(), "ユーザー情報の取得に失敗しました");
    }

    #[test]
    fn test_other_operations_ignore_detail() {
        let error = ApiError::from_status(
            Operation::CreateFixedCost,
            400,
            r#"{"error":"name too long"}"#,
        );
        assert_eq!(error.to_string(), "固定費の作成に失敗しました");
        match error {
            ApiError::Request { status, .. } => assert_eq!(status, Some(400)),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
