pub mod store;
pub mod use_categories;
pub mod use_dashboard;
pub mod use_expenses;
pub mod use_fixed_costs;
pub mod use_theme;
pub mod use_user;
