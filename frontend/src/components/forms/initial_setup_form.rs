use shared::{BudgetLimits, InitialSetupErrors, InitialSetupForm};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{field_error, input_value};
use crate::hooks::use_user::UseUserActions;

#[derive(Properties, PartialEq)]
pub struct InitialSetupFormProps {
    pub actions: UseUserActions,
    pub is_submitting: bool,
    pub error: Option<String>,
}

fn edit(form: &UseStateHandle<InitialSetupForm>, change: impl FnOnce(&mut InitialSetupForm)) {
    let mut next = (**form).clone();
    change(&mut next);
    form.set(next);
}

/// First-run form: income, saving goal and any number of fixed costs
#[function_component(InitialSetupFormView)]
pub fn initial_setup_form_view(props: &InitialSetupFormProps) -> Html {
    let form = use_state(InitialSetupForm::default);
    let errors = use_state(InitialSetupErrors::default);

    let on_income_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            edit(&form, |next| next.income = value);
        })
    };

    let on_saving_goal_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            edit(&form, |next| next.saving_goal = value);
        })
    };

    let on_add_row = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| edit(&form, |next| next.add_row()))
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let actions = props.actions.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match form.validate(&BudgetLimits::default()) {
                Ok(request) => request,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(InitialSetupErrors::default());

            let actions = actions.clone();
            spawn_local(async move {
                if !actions.submit_setup(&request).await {
                    log::warn!("初期設定の送信に失敗しました");
                }
            });
        })
    };

    html! {
        <section class="initial-setup">
            <h2>{"👋 はじめに"}</h2>
            <p>{"毎月の収入・貯金目標・固定費を登録してください。"}</p>

            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form class="initial-setup-form" {onsubmit}>
                <div class="form-group">
                    <label for="setup-income">{"月の収入（円）"}</label>
                    <input
                        type="number"
                        id="setup-income"
                        min="1"
                        step="1"
                        value={form.income.clone()}
                        oninput={on_income_input}
                        disabled={props.is_submitting}
                    />
                    {field_error(errors.income.as_deref())}
                </div>

                <div class="form-group">
                    <label for="setup-saving-goal">{"月の貯金目標（円）"}</label>
                    <input
                        type="number"
                        id="setup-saving-goal"
                        min="0"
                        step="1"
                        value={form.saving_goal.clone()}
                        oninput={on_saving_goal_input}
                        disabled={props.is_submitting}
                    />
                    {field_error(errors.saving_goal.as_deref())}
                </div>

                <fieldset class="setup-fixed-costs">
                    <legend>{"固定費"}</legend>
                    {for form.fixed_costs.iter().enumerate().map(|(index, row)| {
                        let on_name_input = {
                            let form = form.clone();
                            Callback::from(move |e: InputEvent| {
                                let value = input_value(&e);
                                edit(&form, |next| next.set_row_name(index, value));
                            })
                        };
                        let on_amount_input = {
                            let form = form.clone();
                            Callback::from(move |e: InputEvent| {
                                let value = input_value(&e);
                                edit(&form, |next| next.set_row_amount(index, value));
                            })
                        };
                        let on_remove = {
                            let form = form.clone();
                            Callback::from(move |_: MouseEvent| {
                                edit(&form, |next| next.remove_row(index))
                            })
                        };

                        html! {
                            <div class="form-row">
                                <input
                                    type="text"
                                    placeholder="家賃、光熱費など"
                                    value={row.name.clone()}
                                    oninput={on_name_input}
                                    disabled={props.is_submitting}
                                />
                                <input
                                    type="number"
                                    min="1"
                                    step="1"
                                    placeholder="金額"
                                    value={row.amount.clone()}
                                    oninput={on_amount_input}
                                    disabled={props.is_submitting}
                                />
                                <button type="button" class="btn btn-secondary" onclick={on_remove} disabled={props.is_submitting}>
                                    {"削除"}
                                </button>
                                {field_error(errors.row(index))}
                            </div>
                        }
                    })}
                    <button type="button" class="btn btn-secondary" onclick={on_add_row} disabled={props.is_submitting}>
                        {"＋ 固定費を追加"}
                    </button>
                </fieldset>

                <button type="submit" class="btn btn-primary" disabled={props.is_submitting}>
                    {if props.is_submitting { "送信中..." } else { "はじめる" }}
                </button>
            </form>
        </section>
    }
}
