use client::ApiClient;
use shared::{Dashboard, Expense, FormMode};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::dashboard::DashboardView;
use super::expense_list::ExpenseList;
use super::forms::expense_form::ExpenseFormView;
use crate::hooks::use_dashboard::UseDashboardActions;
use crate::hooks::use_expenses::use_expenses;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub api_client: ApiClient,
    pub dashboard: Option<Dashboard>,
    pub dashboard_loading: bool,
    pub dashboard_error: Option<String>,
    pub dashboard_actions: UseDashboardActions,
}

/// Dashboard summary plus expense entry and history
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let expenses = use_expenses(&props.api_client);
    let editing = use_state(|| None::<Expense>);

    let on_saved = {
        let editing = editing.clone();
        let dashboard_actions = props.dashboard_actions.clone();
        Callback::from(move |_| {
            editing.set(None);
            dashboard_actions.refresh();
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |expense: Expense| editing.set(Some(expense)))
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_delete = {
        let editing = editing.clone();
        let actions = expenses.actions.clone();
        let dashboard_actions = props.dashboard_actions.clone();
        Callback::from(move |id: i64| {
            let editing = editing.clone();
            let actions = actions.clone();
            let dashboard_actions = dashboard_actions.clone();
            spawn_local(async move {
                if actions.delete(id).await {
                    if (*editing).as_ref().map_or(false, |expense| expense.id == id) {
                        editing.set(None);
                    }
                    dashboard_actions.refresh();
                }
            });
        })
    };

    let (mode, on_cancel) = match (*editing).as_ref() {
        Some(_) => (FormMode::Edit, Some(on_cancel_edit)),
        None => (FormMode::Create, None),
    };

    html! {
        <main class="main">
            <div class="container">
                <DashboardView
                    dashboard={props.dashboard.clone()}
                    is_loading={props.dashboard_loading}
                    error={props.dashboard_error.clone()}
                />

                <ExpenseFormView
                    api_client={props.api_client.clone()}
                    {mode}
                    initial={(*editing).clone()}
                    actions={expenses.actions.clone()}
                    is_submitting={expenses.state.is_submitting}
                    error={expenses.state.error.clone()}
                    {on_saved}
                    {on_cancel}
                />

                <section class="expense-history">
                    <h2>{"🧾 支出一覧"}</h2>
                    <ExpenseList
                        expenses={expenses.state.items.clone()}
                        is_loading={expenses.state.is_loading}
                        is_submitting={expenses.state.is_submitting}
                        {on_edit}
                        {on_delete}
                    />
                </section>
            </div>
        </main>
    }
}
