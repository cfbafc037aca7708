use serde::{Deserialize, Serialize};
use std::fmt;

/// The signed-in household member. Created by the initial setup flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Identifier issued by the authentication provider
    pub id: String,
    /// Monthly take-home income in whole yen
    pub income: i64,
    /// Monthly saving goal in whole yen
    pub saving_goal: i64,
    #[serde(default)]
    pub created_at: String, // RFC 3339 timestamp
    #[serde(default)]
    pub updated_at: String, // RFC 3339 timestamp
}

/// Request body for `PUT /user/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserInput {
    pub income: i64,
    pub saving_goal: i64,
}

/// A recurring monthly cost such as rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCost {
    pub id: i64,
    #[serde(default)]
    pub user_id: String,
    /// Display name (max 100 characters)
    pub name: String,
    /// Monthly amount in whole yen (1 to 1,000,000,000)
    pub amount: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Request body for creating or updating a fixed cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCostInput {
    pub name: String,
    pub amount: i64,
}

/// Sum shown above the fixed cost list
pub fn fixed_cost_total(fixed_costs: &[FixedCost]) -> i64 {
    fixed_costs.iter().map(|fc| fc.amount).sum()
}

/// Whether an expense is provisional or final
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    Planned,
    #[default]
    Confirmed,
}

impl ExpenseStatus {
    /// Confirmation is one-directional: a confirmed expense never goes back to planned.
    pub fn can_transition_to(self, next: ExpenseStatus) -> bool {
        !matches!((self, next), (ExpenseStatus::Confirmed, ExpenseStatus::Planned))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseStatus::Planned => "planned",
            ExpenseStatus::Confirmed => "confirmed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(ExpenseStatus::Planned),
            "confirmed" => Some(ExpenseStatus::Confirmed),
            _ => None,
        }
    }

    /// Badge text in the expense list
    pub fn label(self) -> &'static str {
        match self {
            ExpenseStatus::Planned => "予定",
            ExpenseStatus::Confirmed => "確定",
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category as embedded in an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

/// A discrete spending record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: i64,
    pub category: CategoryRef,
    #[serde(default)]
    pub memo: Option<String>,
    /// `YYYY-MM-DD`, or an RFC 3339 date-time from some server versions
    pub spent_at: String,
    #[serde(default)]
    pub status: ExpenseStatus,
}

impl Expense {
    /// Calendar date part of `spent_at`, suitable for a date input
    pub fn spent_on(&self) -> &str {
        self.spent_at.split('T').next().unwrap_or(&self.spent_at)
    }
}

/// Request body for `POST /expenses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseInput {
    pub amount: i64,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub spent_at: String, // YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ExpenseStatus>,
}

/// Request body for `PUT /expenses/{id}`; same shape as creation
pub type UpdateExpenseInput = CreateExpenseInput;

/// Expense category reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Monthly summary computed by the budget service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub income: i64,
    pub saving_goal: i64,
    /// Sum of all fixed costs
    pub fixed_costs: i64,
    /// income - saving_goal - fixed_costs
    pub variable_budget: i64,
    pub confirmed_expenses: i64,
    pub planned_expenses: i64,
    /// What is left to spend this month
    pub remaining: i64,
}

/// One fixed cost row of the initial setup request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupFixedCost {
    pub name: String,
    pub amount: i64,
}

/// Request body for `POST /setup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialSetupRequest {
    pub income: i64,
    pub saving_goal: i64,
    pub fixed_costs: Vec<SetupFixedCost>,
}

/// Response from `POST /setup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialSetupResponse {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub expense: Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCostResponse {
    pub fixed_cost: FixedCost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCostListResponse {
    pub fixed_costs: Vec<FixedCost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

/// Error body returned by the budget service on validation failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
