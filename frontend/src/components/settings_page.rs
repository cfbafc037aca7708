use client::ApiClient;
use shared::{FixedCost, FormMode, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::fixed_cost_list::FixedCostList;
use super::forms::fixed_cost_form::FixedCostFormView;
use super::forms::user_form::UserFormView;
use crate::hooks::use_dashboard::UseDashboardActions;
use crate::hooks::use_fixed_costs::use_fixed_costs;
use crate::hooks::use_user::UseUserActions;

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    pub api_client: ApiClient,
    pub user: Option<User>,
    pub user_actions: UseUserActions,
    pub user_submitting: bool,
    pub user_error: Option<String>,
    pub dashboard_actions: UseDashboardActions,
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let fixed_costs = use_fixed_costs(&props.api_client);
    let editing = use_state(|| None::<FixedCost>);

    let refresh_dashboard = {
        let dashboard_actions = props.dashboard_actions.clone();
        Callback::from(move |_| dashboard_actions.refresh())
    };

    let on_fixed_cost_saved = {
        let editing = editing.clone();
        let dashboard_actions = props.dashboard_actions.clone();
        Callback::from(move |_| {
            editing.set(None);
            dashboard_actions.refresh();
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |fixed_cost: FixedCost| editing.set(Some(fixed_cost)))
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_delete = {
        let editing = editing.clone();
        let actions = fixed_costs.actions.clone();
        let dashboard_actions = props.dashboard_actions.clone();
        Callback::from(move |id: i64| {
            let editing = editing.clone();
            let actions = actions.clone();
            let dashboard_actions = dashboard_actions.clone();
            spawn_local(async move {
                if actions.delete(id).await {
                    if (*editing).as_ref().map_or(false, |fixed_cost| fixed_cost.id == id) {
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
                <UserFormView
                    initial={props.user.clone()}
                    actions={props.user_actions.clone()}
                    is_submitting={props.user_submitting}
                    error={props.user_error.clone()}
                    on_saved={refresh_dashboard}
                />

                <section class="fixed-costs-section">
                    <h2>{"🏠 固定費"}</h2>
                    <FixedCostFormView
                        {mode}
                        initial={(*editing).clone()}
                        actions={fixed_costs.actions.clone()}
                        is_submitting={fixed_costs.state.is_submitting}
                        error={fixed_costs.state.error.clone()}
                        on_saved={on_fixed_cost_saved}
                        {on_cancel}
                    />
                    <FixedCostList
                        fixed_costs={fixed_costs.state.items.clone()}
                        total={fixed_costs.total}
                        is_loading={fixed_costs.state.is_loading}
                        is_submitting={fixed_costs.state.is_submitting}
                        {on_edit}
                        {on_delete}
                    />
                </section>
            </div>
        </main>
    }
}
