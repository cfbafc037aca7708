use client::store::{load_value, ValueState};
use client::ApiClient;
use shared::Dashboard;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::store::{sink, Store};

pub struct UseDashboardResult {
    pub state: ValueState<Dashboard>,
    pub actions: UseDashboardActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDashboardActions {
    api_client: ApiClient,
    dispatcher: UseReducerDispatcher<Store<ValueState<Dashboard>>>,
}

impl UseDashboardActions {
    pub async fn refetch(&self) {
        load_value(&sink(&self.dispatcher), self.api_client.get_dashboard()).await;
    }

    /// Fire-and-forget refetch for event handlers
    pub fn refresh(&self) {
        let actions = self.clone();
        spawn_local(async move { actions.refetch().await });
    }
}

/// Dashboard summary. Nothing is fetched while `enabled` is false, e.g. before the
/// user has finished the initial setup.
#[hook]
pub fn use_dashboard(api_client: &ApiClient, enabled: bool) -> UseDashboardResult {
    let store = use_reducer(Store::<ValueState<Dashboard>>::default);

    let actions = UseDashboardActions {
        api_client: api_client.clone(),
        dispatcher: store.dispatcher(),
    };

    use_effect_with(enabled, {
        let actions = actions.clone();
        move |&enabled| {
            if enabled {
                actions.refresh();
            }
            || ()
        }
    });

    UseDashboardResult {
        state: store.0.clone(),
        actions,
    }
}
