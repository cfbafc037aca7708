use shared::{classify_remaining, format_yen, Dashboard};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub dashboard: Option<Dashboard>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    if let Some(error) = props.error.as_ref() {
        return html! {
            <section class="dashboard">
                <div class="form-message error">{error}</div>
            </section>
        };
    }

    let Some(dashboard) = props.dashboard.as_ref() else {
        return html! {
            <section class="dashboard">
                <p class="loading">
                    {if props.is_loading { "読み込み中..." } else { "データがありません" }}
                </p>
            </section>
        };
    };

    let level = classify_remaining(dashboard.remaining, dashboard.variable_budget);

    html! {
        <section class="dashboard">
            <h2>{"📊 今月の予算"}</h2>
            <div class="remaining-card">
                <span class="remaining-label">{"残り使える金額"}</span>
                <span class={classes!("remaining-amount", level.css_class())}>
                    {format_yen(dashboard.remaining)}
                </span>
            </div>
            <dl class="dashboard-breakdown">
                <dt>{"収入"}</dt>
                <dd>{format_yen(dashboard.income)}</dd>
                <dt>{"貯金目標"}</dt>
                <dd>{format_yen(dashboard.saving_goal)}</dd>
                <dt>{"固定費"}</dt>
                <dd>{format_yen(dashboard.fixed_costs)}</dd>
                <dt>{"変動費予算"}</dt>
                <dd>{format_yen(dashboard.variable_budget)}</dd>
                <dt>{"確定済み支出"}</dt>
                <dd>{format_yen(dashboard.confirmed_expenses)}</dd>
                <dt>{"予定支出"}</dt>
                <dd>{format_yen(dashboard.planned_expenses)}</dd>
            </dl>
        </section>
    }
}
