use shared::{BudgetLimits, FixedCost, FixedCostForm, FormMode};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::input_value;
use crate::hooks::use_fixed_costs::UseFixedCostsActions;

#[derive(Properties, PartialEq)]
pub struct FixedCostFormProps {
    pub mode: FormMode,
    pub initial: Option<FixedCost>,
    pub actions: UseFixedCostsActions,
    pub is_submitting: bool,
    pub error: Option<String>,
    pub on_saved: Callback<()>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component(FixedCostFormView)]
pub fn fixed_cost_form_view(props: &FixedCostFormProps) -> Html {
    let form = use_state(|| FixedCostForm::new(props.initial.as_ref()));
    let validation_error = use_state(|| None::<String>);

    {
        let form = form.clone();
        let validation_error = validation_error.clone();
        use_effect_with(props.initial.clone(), move |initial| {
            form.set(FixedCostForm::new(initial.as_ref()));
            validation_error.set(None);
            || ()
        });
    }

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.name = input_value(&e);
            form.set(next);
        })
    };

    let on_amount_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.amount = input_value(&e);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let validation_error = validation_error.clone();
        let actions = props.actions.clone();
        let mode = props.mode;
        let initial = props.initial.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = match form.validate(&BudgetLimits::default()) {
                Ok(input) => input,
                Err(message) => {
                    validation_error.set(Some(message));
                    return;
                }
            };
            validation_error.set(None);

            let form = form.clone();
            let actions = actions.clone();
            let initial = initial.clone();
            let on_saved = on_saved.clone();

            spawn_local(async move {
                let saved = match (mode, initial.as_ref()) {
                    (FormMode::Edit, Some(fixed_cost)) => {
                        actions.update(fixed_cost.id, &input).await
                    }
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

    let message = (*validation_error).clone().or_else(|| props.error.clone());

    html! {
        <form class="fixed-cost-form" {onsubmit}>
            {if let Some(message) = message {
                html! { <div class="form-message error">{message}</div> }
            } else { html! {} }}

            <div class="form-row">
                <input
                    type="text"
                    placeholder="家賃、光熱費など"
                    value={form.name.clone()}
                    oninput={on_name_input}
                    disabled={props.is_submitting}
                />
                <input
                    type="number"
                    min="1"
                    step="1"
                    placeholder="金額"
                    value={form.amount.clone()}
                    oninput={on_amount_input}
                    disabled={props.is_submitting}
                />
                <button type="submit" class="btn btn-primary" disabled={props.is_submitting}>
                    {match (props.is_submitting, props.mode) {
                        (true, _) => "保存中...",
                        (false, FormMode::Create) => "追加",
                        (false, FormMode::Edit) => "更新",
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
    }
}
