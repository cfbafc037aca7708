pub mod expense_form;
pub mod fixed_cost_form;
pub mod initial_setup_form;
pub mod user_form;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub(crate) fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub(crate) fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub(crate) fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Inline message under a field
pub(crate) fn field_error(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{message.to_string()}</p> },
        None => html! {},
    }
}
