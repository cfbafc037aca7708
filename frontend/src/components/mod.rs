pub mod dashboard;
pub mod expense_list;
pub mod fixed_cost_list;
pub mod forms;
pub mod header;
pub mod home_page;
pub mod login_page;
pub mod settings_page;

const DELETE_CONFIRM_MESSAGE: &str = "本当に削除しますか？";

/// Blocking browser confirm shown before any delete
fn confirm_delete() -> bool {
    gloo::dialogs::confirm(DELETE_CONFIRM_MESSAGE)
}
