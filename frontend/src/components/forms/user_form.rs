use shared::{BudgetLimits, User, UserSettingsErrors, UserSettingsForm};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{field_error, input_value};
use crate::hooks::use_user::UseUserActions;

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    pub initial: Option<User>,
    pub actions: UseUserActions,
    pub is_submitting: bool,
    pub error: Option<String>,
    pub on_saved: Callback<()>,
}

/// Income and saving goal settings
#[function_component(UserFormView)]
pub fn user_form_view(props: &UserFormProps) -> Html {
    let form = use_state(|| UserSettingsForm::new(props.initial.as_ref()));
    let errors = use_state(UserSettingsErrors::default);
    let saved = use_state(|| false);

    {
        let form = form.clone();
        let errors = errors.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            form.set(UserSettingsForm::new(initial.as_ref()));
            errors.set(UserSettingsErrors::default());
            || ()
        });
    }

    let on_income_input = {
        let form = form.clone();
        let saved = saved.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.income = input_value(&e);
            form.set(next);
            saved.set(false);
        })
    };

    let on_saving_goal_input = {
        let form = form.clone();
        let saved = saved.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.saving_goal = input_value(&e);
            form.set(next);
            saved.set(false);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let saved = saved.clone();
        let actions = props.actions.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            saved.set(false);

            let input = match form.validate(&BudgetLimits::default()) {
                Ok(input) => input,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(UserSettingsErrors::default());

            let saved = saved.clone();
            let actions = actions.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                if actions.update(&input).await {
                    saved.set(true);
                    on_saved.emit(());
                }
            });
        })
    };

    html! {
        <section class="user-settings-section">
            <h2>{"⚙️ 収入と貯金目標"}</h2>

            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if *saved {
                html! { <div class="form-message success">{"保存しました"}</div> }
            } else { html! {} }}

            <form class="user-settings-form" {onsubmit}>
                <div class="form-group">
                    <label for="user-income">{"月の収入（円）"}</label>
                    <input
                        type="number"
                        id="user-income"
                        min="1"
                        step="1"
                        value={form.income.clone()}
                        oninput={on_income_input}
                        disabled={props.is_submitting}
                    />
                    {field_error(errors.income.as_deref())}
                </div>

                <div class="form-group">
                    <label for="user-saving-goal">{"月の貯金目標（円）"}</label>
                    <input
                        type="number"
                        id="user-saving-goal"
                        min="0"
                        step="1"
                        value={form.saving_goal.clone()}
                        oninput={on_saving_goal_input}
                        disabled={props.is_submitting}
                    />
                    {field_error(errors.saving_goal.as_deref())}
                </div>

                <button type="submit" class="btn btn-primary" disabled={props.is_submitting}>
                    {if props.is_submitting { "保存中..." } else { "保存する" }}
                </button>
            </form>
        </section>
    }
}
