use client::store::{load_collection, run_mutation, CollectionAction, CollectionState};
use client::ApiClient;
use shared::{fixed_cost_total, FixedCost, FixedCostInput};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::store::{sink, Store};

pub struct UseFixedCostsResult {
    pub state: CollectionState<FixedCost>,
    /// Sum of the cached amounts, shown under the list
    pub total: i64,
    pub actions: UseFixedCostsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFixedCostsActions {
    api_client: ApiClient,
    dispatcher: UseReducerDispatcher<Store<CollectionState<FixedCost>>>,
}

impl UseFixedCostsActions {
    pub async fn refetch(&self) {
        load_collection(&sink(&self.dispatcher), self.api_client.get_fixed_costs()).await;
    }

    pub async fn create(&self, input: &FixedCostInput) -> bool {
        run_mutation(
            &sink(&self.dispatcher),
            self.api_client.create_fixed_cost(input),
            CollectionAction::Created,
        )
        .await
    }

    pub async fn update(&self, id: i64, input: &FixedCostInput) -> bool {
        run_mutation(
            &sink(&self.dispatcher),
            self.api_client.update_fixed_cost(id, input),
            CollectionAction::Updated,
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> bool {
        run_mutation(
            &sink(&self.dispatcher),
            self.api_client.delete_fixed_cost(id),
            move |_| CollectionAction::Deleted(id),
        )
        .await
    }
}

#[hook]
pub fn use_fixed_costs(api_client: &ApiClient) -> UseFixedCostsResult {
    let store = use_reducer(Store::<CollectionState<FixedCost>>::default);

    let actions = UseFixedCostsActions {
        api_client: api_client.clone(),
        dispatcher: store.dispatcher(),
    };

    use_effect_with((), {
        let actions = actions.clone();
        move |_| {
            spawn_local(async move { actions.refetch().await });
            || ()
        }
    });

    let state = store.0.clone();
    let total = fixed_cost_total(&state.items);

    UseFixedCostsResult {
        state,
        total,
        actions,
    }
}
