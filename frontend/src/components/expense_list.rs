use shared::{format_yen, Expense, ExpenseStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub expenses: Vec<Expense>,
    pub is_loading: bool,
    pub is_submitting: bool,
    pub on_edit: Callback<Expense>,
    /// Receives the id after the user confirmed the dialog
    pub on_delete: Callback<i64>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    if props.is_loading && props.expenses.is_empty() {
        return html! { <p class="loading">{"読み込み中..."}</p> };
    }

    if props.expenses.is_empty() {
        return html! { <p class="empty-message">{"支出が登録されていません"}</p> };
    }

    html! {
        <table class="expense-table">
            <thead>
                <tr>
                    <th>{"日付"}</th>
                    <th>{"カテゴリ"}</th>
                    <th>{"メモ"}</th>
                    <th>{"金額"}</th>
                    <th>{"状態"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {for props.expenses.iter().map(|expense| {
                    let on_edit = {
                        let on_edit = props.on_edit.clone();
                        let expense = expense.clone();
                        Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
                    };
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        let id = expense.id;
                        Callback::from(move |_: MouseEvent| {
                            if super::confirm_delete() {
                                on_delete.emit(id);
                            }
                        })
                    };
                    let status_class = match expense.status {
                        ExpenseStatus::Planned => "status-badge planned",
                        ExpenseStatus::Confirmed => "status-badge confirmed",
                    };

                    html! {
                        <tr key={expense.id}>
                            <td>{expense.spent_on()}</td>
                            <td>{&expense.category.name}</td>
                            <td>{expense.memo.clone().unwrap_or_default()}</td>
                            <td class="amount">{format_yen(expense.amount)}</td>
                            <td><span class={status_class}>{expense.status.label()}</span></td>
                            <td class="row-actions">
                                <button class="btn btn-secondary" onclick={on_edit} disabled={props.is_submitting}>
                                    {"編集"}
                                </button>
                                <button class="btn btn-danger" onclick={on_delete} disabled={props.is_submitting}>
                                    {"削除"}
                                </button>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
