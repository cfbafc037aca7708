use client::ApiClient;
use shared::{BudgetLimits, Expense, ExpenseForm, ExpenseFormErrors, ExpenseStatus, FormMode};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{field_error, input_value, select_value, textarea_value};
use crate::hooks::use_categories::use_categories;
use crate::hooks::use_expenses::UseExpensesActions;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub api_client: ApiClient,
    pub mode: FormMode,
    /// Expense being edited; `None` in create mode
    pub initial: Option<Expense>,
    pub actions: UseExpensesActions,
    pub is_submitting: bool,
    /// Failure of the last save, from the expenses hook
    pub error: Option<String>,
    pub on_saved: Callback<()>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component(ExpenseFormView)]
pub fn expense_form_view(props: &ExpenseFormProps) -> Html {
    let categories = use_categories(&props.api_client);
    let form = use_state(|| ExpenseForm::new(props.initial.as_ref()));
    let errors = use_state(ExpenseFormErrors::default);

    // Re-seed whenever a different expense is selected for editing
    {
        let form = form.clone();
        let errors = errors.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            form.set(ExpenseForm::new(initial.as_ref()));
            errors.set(ExpenseFormErrors::default());
            || ()
        });
    }

    {
        let form = form.clone();
        let mode = props.mode;
        use_effect_with(categories.items.clone(), move |items| {
            if mode == FormMode::Create {
                let mut next = (*form).clone();
                next.settle_category(items);
                if next != *form {
                    form.set(next);
                }
            }
            || ()
        });
    }

    let planned_locked = ExpenseForm::planned_locked(props.mode, props.initial.as_ref());

    let on_amount_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.amount = input_value(&e);
            form.set(next);
        })
    };

    let on_category_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.category_id = select_value(&e);
            form.set(next);
        })
    };

    let on_spent_at_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.spent_at = input_value(&e);
            form.set(next);
        })
    };

    let on_memo_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.memo = textarea_value(&e);
            form.set(next);
        })
    };

    let on_status_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(status) = ExpenseStatus::parse(&select_value(&e)) {
                let mut next = (*form).clone();
                next.status = status;
                form.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let actions = props.actions.clone();
        let mode = props.mode;
        let initial = props.initial.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = match form.validate(mode, initial.as_ref(), &BudgetLimits::default()) {
                Ok(input) => input,
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            errors.set(ExpenseFormErrors::default());

            let form = form.clone();
            let actions = actions.clone();
            let initial = initial.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let saved = match (mode, initial.as_ref()) {
                    (FormMode::Edit, Some(expense)) => actions.update(expense.id, &input).await,
                    _ => actions.create(&input).await,
                };
                let mut next = (*form).clone();
                next.after_submit(mode, saved);
                if next != *form {
                    form.set(next);
                }
                if saved {
                    on_saved.emit(());
                }
            });
        })
    };

    let on_cancel = props.on_cancel.clone().map(|on_cancel| {
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    });

    let title = match props.mode {
        FormMode::Create => "✏️ 支出を記録",
        FormMode::Edit => "✏️ 支出を編集",
    };

    html! {
        <section class="expense-form-section">
            <h2>{title}</h2>

            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form class="expense-form" {onsubmit}>
                <div class="form-group">
                    <label for="expense-amount">{"金額（円）"}</label>
                    <input
                        type="number"
                        id="expense-amount"
                        min="1"
                        step="1"
                        placeholder="1200"
                        value={form.amount.clone()}
                        oninput={on_amount_input}
                        disabled={props.is_submitting}
                    />
                    {field_error(errors.amount.as_deref())}
                </div>

                <div class="form-group">
                    <label for="expense-category">{"カテゴリ"}</label>
                    <select
                        id="expense-category"
                        onchange={on_category_change}
                        disabled={props.is_submitting || categories.is_loading}
                    >
                        <option value="" selected={!form.has_known_category(&categories.items)}>
                            {"カテゴリを選択"}
                        </option>
                        {for categories.items.iter().map(|category| {
                            let value = category.id.to_string();
                            let selected = value == form.category_id;
                            html! {
                                <option key={category.id} {value} {selected}>{&category.name}</option>
                            }
                        })}
                    </select>
                    {field_error(errors.category.as_deref())}
                    {field_error(categories.error.as_deref())}
                </div>

                <div class="form-group">
                    <label for="expense-spent-at">{"日付"}</label>
                    <input
                        type="date"
                        id="expense-spent-at"
                        value={form.spent_at.clone()}
                        oninput={on_spent_at_input}
                        disabled={props.is_submitting}
                    />
                    {field_error(errors.spent_at.as_deref())}
                </div>

                <div class="form-group">
                    <label for="expense-status">{"状態"}</label>
                    <select
                        id="expense-status"
                        onchange={on_status_change}
                        disabled={props.is_submitting}
                    >
                        <option
                            value={ExpenseStatus::Planned.as_str()}
                            selected={form.status == ExpenseStatus::Planned}
                            disabled={planned_locked}
                        >
                            {ExpenseStatus::Planned.label()}
                        </option>
                        <option
                            value={ExpenseStatus::Confirmed.as_str()}
                            selected={form.status == ExpenseStatus::Confirmed}
                        >
                            {ExpenseStatus::Confirmed.label()}
                        </option>
                    </select>
                    {field_error(errors.status.as_deref())}
                </div>

                <div class="form-group">
                    <label for="expense-memo">{"メモ"}</label>
                    <textarea
                        id="expense-memo"
                        placeholder="任意"
                        value={form.memo.clone()}
                        oninput={on_memo_input}
                        disabled={props.is_submitting}
                    />
                    {field_error(errors.memo.as_deref())}
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={props.is_submitting}>
                        {match (props.is_submitting, props.mode) {
                            (true, _) => "保存中...",
                            (false, FormMode::Create) => "記録する",
                            (false, FormMode::Edit) => "更新する",
                        }}
                    </button>
                    {if let Some(on_cancel) = on_cancel {
                        html! {
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                                {"キャンセル"}
                            </button>
                        }
                    } else { html! {} }}
                </div>
            </form>
        </section>
    }
}
