use shared::{format_yen, FixedCost};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FixedCostListProps {
    pub fixed_costs: Vec<FixedCost>,
    pub total: i64,
    pub is_loading: bool,
    pub is_submitting: bool,
    pub on_edit: Callback<FixedCost>,
    pub on_delete: Callback<i64>,
}

#[function_component(FixedCostList)]
pub fn fixed_cost_list(props: &FixedCostListProps) -> Html {
    if props.is_loading && props.fixed_costs.is_empty() {
        return html! { <p class="loading">{"読み込み中..."}</p> };
    }

    if props.fixed_costs.is_empty() {
        return html! { <p class="empty-message">{"固定費が登録されていません"}</p> };
    }

    html! {
        <div class="fixed-cost-list">
            <ul>
                {for props.fixed_costs.iter().map(|fixed_cost| {
                    let on_edit = {
                        let on_edit = props.on_edit.clone();
                        let fixed_cost = fixed_cost.clone();
                        Callback::from(move |_: MouseEvent| on_edit.emit(fixed_cost.clone()))
                    };
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        let id = fixed_cost.id;
                        Callback::from(move |_: MouseEvent| {
                            if super::confirm_delete() {
                                on_delete.emit(id);
                            }
                        })
                    };

                    html! {
                        <li key={fixed_cost.id} class="fixed-cost-item">
                            <span class="fixed-cost-name">{&fixed_cost.name}</span>
                            <span class="amount">{format_yen(fixed_cost.amount)}</span>
                            <button class="btn btn-secondary" onclick={on_edit} disabled={props.is_submitting}>
                                {"編集"}
                            </button>
                            <button class="btn btn-danger" onclick={on_delete} disabled={props.is_submitting}>
                                {"削除"}
                            </button>
                        </li>
                    }
                })}
            </ul>
            <div class="fixed-cost-total">
                <span>{"合計"}</span>
                <span class="amount">{format_yen(props.total)}</span>
            </div>
        </div>
    }
}
