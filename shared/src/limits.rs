use serde::{Deserialize, Serialize};

/// Upper bounds the budget service enforces; the forms check them first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLimits {
    /// Largest amount accepted anywhere (1 billion yen)
    pub max_amount: i64,
    pub max_fixed_cost_name_length: usize,
    pub max_memo_length: usize,
}

impl Default for BudgetLimits {
    fn default() -> Self {
        Self {
            max_amount: 1_000_000_000,
            max_fixed_cost_name_length: 100,
            max_memo_length: 5000,
        }
    }
}
