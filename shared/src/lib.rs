//! Types and rules shared by the budget client and the web frontend.

pub mod budget;
pub mod forms;
pub mod limits;
pub mod models;
pub mod theme;

pub use budget::{classify_remaining, format_yen, RemainingLevel};
pub use forms::{
    ExpenseForm, ExpenseFormErrors, FixedCostForm, FormMode, InitialSetupErrors, InitialSetupForm,
    SetupRow, UserSettingsErrors, UserSettingsForm,
};
pub use limits::BudgetLimits;
pub use models::*;
pub use theme::{Theme, THEME_STORAGE_KEY};
