//! Controlled-input state for the entry forms.
//!
//! Each form keeps its fields as the raw strings the inputs hold, seeds them from
//! an optional entity (edit mode) and validates into the request type the budget
//! service expects. Nothing here touches the network; a form that fails
//! validation never produces a request.

use chrono::NaiveDate;

use crate::limits::BudgetLimits;
use crate::models::{
    Category, CreateExpenseInput, Expense, ExpenseStatus, FixedCost, FixedCostInput, InitialSetupRequest,
    SetupFixedCost, UpdateUserInput, User,
};

/// Whether a form creates a new entity or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Category preselected in a fresh expense form
pub const DEFAULT_CATEGORY_ID: &str = "1";

fn parse_whole_yen(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category_id: String,
    pub memo: String,
    pub spent_at: String,
    pub status: ExpenseStatus,
}

/// Field-level messages for the expense form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFormErrors {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub memo: Option<String>,
    pub spent_at: Option<String>,
    pub status: Option<String>,
}

impl ExpenseFormErrors {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.memo.is_none()
            && self.spent_at.is_none()
            && self.status.is_none()
    }
}

impl ExpenseForm {
    pub fn new(initial: Option<&Expense>) -> Self {
        match initial {
            Some(expense) => Self {
                amount: expense.amount.to_string(),
                category_id: expense.category.id.to_string(),
                memo: expense.memo.clone().unwrap_or_default(),
                spent_at: expense.spent_on().to_string(),
                status: expense.status,
            },
            None => Self {
                amount: String::new(),
                category_id: DEFAULT_CATEGORY_ID.to_string(),
                memo: String::new(),
                spent_at: String::new(),
                status: ExpenseStatus::Confirmed,
            },
        }
    }

    /// Clear the inputs after a successful create. The chosen status is kept.
    pub fn reset(&mut self) {
        let status = self.status;
        *self = Self::new(None);
        self.status = status;
    }

    /// Only a successful create clears the form; edits and failures keep the input.
    pub fn after_submit(&mut self, mode: FormMode, saved: bool) {
        if saved && mode == FormMode::Create {
            self.reset();
        }
    }

    pub fn has_known_category(&self, categories: &[Category]) -> bool {
        let selected = self.category_id.trim();
        categories.iter().any(|category| category.id.to_string() == selected)
    }

    /// Point the category at the first loaded one when the current id is not in the list
    pub fn settle_category(&mut self, categories: &[Category]) {
        if self.has_known_category(categories) {
            return;
        }
        if let Some(first) = categories.first() {
            self.category_id = first.id.to_string();
        }
    }

    /// The "planned" option is disabled when editing an already confirmed expense.
    pub fn planned_locked(mode: FormMode, initial: Option<&Expense>) -> bool {
        mode == FormMode::Edit
            && initial.map_or(false, |expense| expense.status == ExpenseStatus::Confirmed)
    }

    pub fn validate(
        &self,
        mode: FormMode,
        initial: Option<&Expense>,
        limits: &BudgetLimits,
    ) -> Result<CreateExpenseInput, ExpenseFormErrors> {
        let mut errors = ExpenseFormErrors::default();

        let amount = match parse_whole_yen(&self.amount) {
            Some(amount) if amount > 0 && amount <= limits.max_amount => Some(amount),
            Some(amount) if amount > limits.max_amount => {
                errors.amount = Some("金額は10億円以下で入力してください".to_string());
                None
            }
            _ => {
                errors.amount = Some("金額は0より大きい数値で入力してください".to_string());
                None
            }
        };

        let category_id = match self.category_id.trim().parse::<i64>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                errors.category = Some("カテゴリを選択してください".to_string());
                None
            }
        };

        let spent_at = self.spent_at.trim();
        if spent_at.is_empty() {
            errors.spent_at = Some("日付を入力してください".to_string());
        } else if NaiveDate::parse_from_str(spent_at, "%Y-%m-%d").is_err() {
            errors.spent_at = Some("日付はYYYY-MM-DD形式で入力してください".to_string());
        }

        if self.memo.chars().count() > limits.max_memo_length {
            errors.memo = Some(format!(
                "メモは{}文字以内で入力してください",
                limits.max_memo_length
            ));
        }

        if mode == FormMode::Edit {
            if let Some(initial) = initial {
                if !initial.status.can_transition_to(self.status) {
                    errors.status =
                        Some("確定済みの支出を予定に戻すことはできません".to_string());
                }
            }
        }

        match (amount, category_id) {
            (Some(amount), Some(category_id)) if errors.is_empty() => Ok(CreateExpenseInput {
                amount,
                category_id,
                memo: if self.memo.is_empty() { None } else { Some(self.memo.clone()) },
                spent_at: spent_at.to_string(),
                status: Some(self.status),
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedCostForm {
    pub name: String,
    pub amount: String,
}

impl FixedCostForm {
    pub fn new(initial: Option<&FixedCost>) -> Self {
        match initial {
            Some(fixed_cost) => Self {
                name: fixed_cost.name.clone(),
                amount: fixed_cost.amount.to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Same rule as the expense form: only a successful create clears the inputs
    pub fn after_submit(&mut self, mode: FormMode, saved: bool) {
        if saved && mode == FormMode::Create {
            self.reset();
        }
    }

    /// First failing rule wins; the form shows a single message.
    pub fn validate(&self, limits: &BudgetLimits) -> Result<FixedCostInput, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("固定費名を入力してください".to_string());
        }
        if name.chars().count() > limits.max_fixed_cost_name_length {
            return Err(format!(
                "固定費名は{}文字以内で入力してください",
                limits.max_fixed_cost_name_length
            ));
        }

        let amount = match parse_whole_yen(&self.amount) {
            Some(amount) if amount > 0 => amount,
            _ => return Err("金額は1円以上で入力してください".to_string()),
        };
        if amount > limits.max_amount {
            return Err("金額は10億円以下で入力してください".to_string());
        }

        Ok(FixedCostInput {
            name: name.to_string(),
            amount,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSettingsForm {
    pub income: String,
    pub saving_goal: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSettingsErrors {
    pub income: Option<String>,
    pub saving_goal: Option<String>,
}

impl UserSettingsForm {
    pub fn new(initial: Option<&User>) -> Self {
        match initial {
            Some(user) => Self {
                income: user.income.to_string(),
                saving_goal: user.saving_goal.to_string(),
            },
            None => Self {
                income: "0".to_string(),
                saving_goal: "0".to_string(),
            },
        }
    }

    pub fn validate(&self, limits: &BudgetLimits) -> Result<UpdateUserInput, UserSettingsErrors> {
        let mut errors = UserSettingsErrors::default();

        let income = match parse_whole_yen(&self.income) {
            Some(income) if income > limits.max_amount => {
                errors.income = Some("収入は10億円以下で入力してください".to_string());
                None
            }
            Some(income) if income >= 1 => Some(income),
            _ => {
                errors.income = Some("収入は1円以上で入力してください".to_string());
                None
            }
        };

        let saving_goal = match parse_whole_yen(&self.saving_goal) {
            Some(goal) if goal > limits.max_amount => {
                errors.saving_goal = Some("貯金目標は10億円以下で入力してください".to_string());
                None
            }
            Some(goal) if goal >= 0 => Some(goal),
            _ => {
                errors.saving_goal = Some("貯金目標は0円以上で入力してください".to_string());
                None
            }
        };

        match (income, saving_goal) {
            (Some(income), Some(saving_goal)) => Ok(UpdateUserInput { income, saving_goal }),
            _ => Err(errors),
        }
    }
}

/// One editable fixed cost row of the setup form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupRow {
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitialSetupForm {
    pub income: String,
    pub saving_goal: String,
    pub fixed_costs: Vec<SetupRow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitialSetupErrors {
    pub income: Option<String>,
    pub saving_goal: Option<String>,
    /// One slot per row, `None` when the row is valid
    pub fixed_costs: Vec<Option<String>>,
}

impl InitialSetupErrors {
    pub fn is_empty(&self) -> bool {
        self.income.is_none()
            && self.saving_goal.is_none()
            && self.fixed_costs.iter().all(Option::is_none)
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.fixed_costs.get(index).and_then(|e| e.as_deref())
    }
}

impl Default for InitialSetupForm {
    fn default() -> Self {
        Self {
            income: String::new(),
            saving_goal: String::new(),
            fixed_costs: vec![SetupRow::default()],
        }
    }
}

impl InitialSetupForm {
    pub fn add_row(&mut self) {
        self.fixed_costs.push(SetupRow::default());
    }

    pub fn remove_row(&mut self, index: usize) {
        if index < self.fixed_costs.len() {
            self.fixed_costs.remove(index);
        }
    }

    pub fn set_row_name(&mut self, index: usize, name: String) {
        if let Some(row) = self.fixed_costs.get_mut(index) {
            row.name = name;
        }
    }

    pub fn set_row_amount(&mut self, index: usize, amount: String) {
        if let Some(row) = self.fixed_costs.get_mut(index) {
            row.amount = amount;
        }
    }

    pub fn validate(&self, limits: &BudgetLimits) -> Result<InitialSetupRequest, InitialSetupErrors> {
        let mut errors = InitialSetupErrors::default();

        let income = parse_whole_yen(&self.income).filter(|income| *income >= 1);
        if income.is_none() {
            errors.income = Some("収入は1以上の数値で入力してください".to_string());
        }

        let saving_goal = parse_whole_yen(&self.saving_goal).filter(|goal| *goal >= 0);
        if saving_goal.is_none() {
            errors.saving_goal = Some("貯蓄目標は0以上の数値で入力してください".to_string());
        }

        let mut fixed_costs = Vec::with_capacity(self.fixed_costs.len());
        for row in &self.fixed_costs {
            let name = row.name.trim();
            let amount = parse_whole_yen(&row.amount).unwrap_or(0);

            let row_error = if name.is_empty() {
                Some("固定費の名前を入力してください".to_string())
            } else if name.chars().count() > limits.max_fixed_cost_name_length {
                Some(format!(
                    "固定費の名前は{}文字以内で入力してください",
                    limits.max_fixed_cost_name_length
                ))
            } else if amount < 1 {
                Some("金額は1以上で入力してください".to_string())
            } else if amount > limits.max_amount {
                Some("金額は10億円以下で入力してください".to_string())
            } else {
                fixed_costs.push(SetupFixedCost {
                    name: name.to_string(),
                    amount,
                });
                None
            };
            errors.fixed_costs.push(row_error);
        }

        match (income, saving_goal) {
            (Some(income), Some(saving_goal)) if errors.is_empty() => Ok(InitialSetupRequest {
                income,
                saving_goal,
                fixed_costs,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryRef;

    fn expense(status: ExpenseStatus) -> Expense {
        Expense {
            id: 7,
            amount: 1200,
            category: CategoryRef { id: 3, name: "交通費".to_string() },
            memo: Some("通勤".to_string()),
            spent_at: "2025-12-31".to_string(),
            status,
        }
    }

    fn filled_form() -> ExpenseForm {
        ExpenseForm {
            amount: "1200".to_string(),
            category_id: "3".to_string(),
            memo: "通勤".to_string(),
            spent_at: "2025-12-31".to_string(),
            status: ExpenseStatus::Confirmed,
        }
    }

    #[test]
    fn test_expense_form_create_defaults() {
        let form = ExpenseForm::new(None);
        assert_eq!(form.amount, "");
        assert_eq!(form.category_id, DEFAULT_CATEGORY_ID);
        assert_eq!(form.status, ExpenseStatus::Confirmed);
    }

    #[test]
    fn test_expense_form_seeds_from_initial() {
        let mut initial = expense(ExpenseStatus::Planned);
        initial.spent_at = "2025-12-31T00:00:00Z".to_string();
        let form = ExpenseForm::new(Some(&initial));
        assert_eq!(form.amount, "1200");
        assert_eq!(form.category_id, "3");
        assert_eq!(form.memo, "通勤");
        assert_eq!(form.spent_at, "2025-12-31");
        assert_eq!(form.status, ExpenseStatus::Planned);
    }

    #[test]
    fn test_expense_form_valid_input() {
        let input = filled_form()
            .validate(FormMode::Create, None, &BudgetLimits::default())
            .unwrap();
        assert_eq!(input.amount, 1200);
        assert_eq!(input.category_id, 3);
        assert_eq!(input.memo.as_deref(), Some("通勤"));
        assert_eq!(input.status, Some(ExpenseStatus::Confirmed));
    }

    #[test]
    fn test_expense_form_rejects_non_positive_amount() {
        for amount in ["0", "-5", "", "abc", "12.5"] {
            let form = ExpenseForm { amount: amount.to_string(), ..filled_form() };
            let errors = form
                .validate(FormMode::Create, None, &BudgetLimits::default())
                .unwrap_err();
            assert!(errors.amount.is_some(), "amount {:?} should be rejected", amount);
        }
    }

    #[test]
    fn test_expense_form_requires_date() {
        let form = ExpenseForm { spent_at: String::new(), ..filled_form() };
        let errors = form
            .validate(FormMode::Create, None, &BudgetLimits::default())
            .unwrap_err();
        assert_eq!(errors.spent_at.as_deref(), Some("日付を入力してください"));

        let form = ExpenseForm { spent_at: "31/12/2025".to_string(), ..filled_form() };
        assert!(form
            .validate(FormMode::Create, None, &BudgetLimits::default())
            .unwrap_err()
            .spent_at
            .is_some());
    }

    #[test]
    fn test_expense_form_empty_memo_is_omitted() {
        let form = ExpenseForm { memo: String::new(), ..filled_form() };
        let input = form.validate(FormMode::Create, None, &BudgetLimits::default()).unwrap();
        assert_eq!(input.memo, None);
    }

    #[test]
    fn test_expense_form_memo_length_limit() {
        let limits = BudgetLimits { max_memo_length: 3, ..BudgetLimits::default() };
        let form = ExpenseForm { memo: "あいうえ".to_string(), ..filled_form() };
        assert!(form.validate(FormMode::Create, None, &limits).unwrap_err().memo.is_some());
    }

    #[test]
    fn test_edit_cannot_revert_confirmed_to_planned() {
        let initial = expense(ExpenseStatus::Confirmed);
        let form = ExpenseForm { status: ExpenseStatus::Planned, ..ExpenseForm::new(Some(&initial)) };
        let errors = form
            .validate(FormMode::Edit, Some(&initial), &BudgetLimits::default())
            .unwrap_err();
        assert_eq!(
            errors.status.as_deref(),
            Some("確定済みの支出を予定に戻すことはできません")
        );
        assert!(ExpenseForm::planned_locked(FormMode::Edit, Some(&initial)));
    }

    #[test]
    fn test_edit_can_confirm_planned() {
        let initial = expense(ExpenseStatus::Planned);
        let form = ExpenseForm { status: ExpenseStatus::Confirmed, ..ExpenseForm::new(Some(&initial)) };
        let input = form
            .validate(FormMode::Edit, Some(&initial), &BudgetLimits::default())
            .unwrap();
        assert_eq!(input.status, Some(ExpenseStatus::Confirmed));
        assert!(!ExpenseForm::planned_locked(FormMode::Edit, Some(&initial)));
    }

    #[test]
    fn test_expense_reset_keeps_status() {
        let mut form = ExpenseForm { status: ExpenseStatus::Planned, ..filled_form() };
        form.reset();
        assert_eq!(form.amount, "");
        assert_eq!(form.spent_at, "");
        assert_eq!(form.category_id, DEFAULT_CATEGORY_ID);
        assert_eq!(form.status, ExpenseStatus::Planned);
    }

    #[test]
    fn test_expense_form_clears_only_after_successful_create() {
        let mut form = filled_form();
        form.after_submit(FormMode::Create, false);
        assert_eq!(form, filled_form());

        form.after_submit(FormMode::Create, true);
        assert_eq!(form, ExpenseForm::new(None));
    }

    #[test]
    fn test_expense_form_edit_keeps_fields_after_save() {
        let initial = expense(ExpenseStatus::Planned);
        let mut form = ExpenseForm { amount: "1500".to_string(), ..ExpenseForm::new(Some(&initial)) };
        let before = form.clone();

        form.after_submit(FormMode::Edit, true);
        assert_eq!(form, before);
        form.after_submit(FormMode::Edit, false);
        assert_eq!(form, before);
    }

    #[test]
    fn test_expense_form_reseeds_from_another_expense() {
        let first = expense(ExpenseStatus::Planned);
        let second = Expense {
            id: 8,
            amount: 300,
            category: CategoryRef { id: 5, name: "食費".to_string() },
            memo: None,
            ..first.clone()
        };

        let edited = ExpenseForm { amount: "9999".to_string(), ..ExpenseForm::new(Some(&first)) };
        let form = ExpenseForm::new(Some(&second));
        assert_ne!(form, edited);
        assert_eq!(form.amount, "300");
        assert_eq!(form.category_id, "5");
        assert_eq!(form.memo, "");
    }

    #[test]
    fn test_settle_category_falls_back_to_first_loaded() {
        let categories = vec![
            Category { id: 4, name: "食費".to_string() },
            Category { id: 9, name: "日用品".to_string() },
        ];

        let mut form = ExpenseForm::new(None);
        assert!(!form.has_known_category(&categories));
        form.settle_category(&categories);
        assert_eq!(form.category_id, "4");

        form.category_id = "9".to_string();
        form.settle_category(&categories);
        assert_eq!(form.category_id, "9");

        let mut form = ExpenseForm::new(None);
        form.settle_category(&[]);
        assert_eq!(form.category_id, DEFAULT_CATEGORY_ID);
    }

    #[test]
    fn test_fixed_cost_form_after_submit() {
        let filled = FixedCostForm { name: "家賃".to_string(), amount: "80000".to_string() };

        let mut form = filled.clone();
        form.after_submit(FormMode::Create, false);
        assert_eq!(form, filled);
        form.after_submit(FormMode::Edit, true);
        assert_eq!(form, filled);
        form.after_submit(FormMode::Create, true);
        assert_eq!(form, FixedCostForm::default());
    }

    #[test]
    fn test_fixed_cost_form_rules() {
        let limits = BudgetLimits::default();
        let form = |name: &str, amount: &str| FixedCostForm {
            name: name.to_string(),
            amount: amount.to_string(),
        };

        assert_eq!(form("  ", "1000").validate(&limits).unwrap_err(), "固定費名を入力してください");
        assert_eq!(
            form(&"a".repeat(101), "1000").validate(&limits).unwrap_err(),
            "固定費名は100文字以内で入力してください"
        );
        assert_eq!(form("家賃", "0").validate(&limits).unwrap_err(), "金額は1円以上で入力してください");
        assert_eq!(
            form("家賃", "1000000001").validate(&limits).unwrap_err(),
            "金額は10億円以下で入力してください"
        );

        let input = form("  家賃 ", "80000").validate(&limits).unwrap();
        assert_eq!(input, FixedCostInput { name: "家賃".to_string(), amount: 80000 });
        assert!(form(&"a".repeat(100), "1000000000").validate(&limits).is_ok());
    }

    #[test]
    fn test_user_settings_form_rules() {
        let limits = BudgetLimits::default();
        let form = |income: &str, goal: &str| UserSettingsForm {
            income: income.to_string(),
            saving_goal: goal.to_string(),
        };

        assert_eq!(
            form("300000", "0").validate(&limits).unwrap(),
            UpdateUserInput { income: 300000, saving_goal: 0 }
        );
        let errors = form("0", "-1").validate(&limits).unwrap_err();
        assert!(errors.income.is_some());
        assert!(errors.saving_goal.is_some());
        let errors = form("1000000001", "1").validate(&limits).unwrap_err();
        assert_eq!(errors.income.as_deref(), Some("収入は10億円以下で入力してください"));
        assert!(errors.saving_goal.is_none());
    }

    #[test]
    fn test_setup_form_rows() {
        let mut form = InitialSetupForm::default();
        assert_eq!(form.fixed_costs.len(), 1);
        form.add_row();
        form.set_row_name(1, "光熱費".to_string());
        form.set_row_amount(1, "12000".to_string());
        form.remove_row(0);
        form.remove_row(5);
        assert_eq!(
            form.fixed_costs,
            vec![SetupRow { name: "光熱費".to_string(), amount: "12000".to_string() }]
        );
    }

    #[test]
    fn test_setup_form_validation() {
        let limits = BudgetLimits::default();
        let mut form = InitialSetupForm {
            income: "300000".to_string(),
            saving_goal: "50000".to_string(),
            fixed_costs: vec![
                SetupRow { name: "家賃".to_string(), amount: "80000".to_string() },
                SetupRow { name: "".to_string(), amount: "100".to_string() },
                SetupRow { name: "ジム".to_string(), amount: "0".to_string() },
            ],
        };

        let errors = form.validate(&limits).unwrap_err();
        assert_eq!(errors.row(0), None);
        assert_eq!(errors.row(1), Some("固定費の名前を入力してください"));
        assert_eq!(errors.row(2), Some("金額は1以上で入力してください"));
        assert!(errors.income.is_none());

        form.remove_row(2);
        form.remove_row(1);
        let request = form.validate(&limits).unwrap();
        assert_eq!(request.income, 300000);
        assert_eq!(request.saving_goal, 50000);
        assert_eq!(request.fixed_costs.len(), 1);
    }

    #[test]
    fn test_setup_form_requires_income_and_goal() {
        let form = InitialSetupForm { fixed_costs: vec![], ..InitialSetupForm::default() };
        let errors = form.validate(&BudgetLimits::default()).unwrap_err();
        assert!(errors.income.is_some());
        assert!(errors.saving_goal.is_some());
    }
}
