use client::store::{load_collection, run_mutation, CollectionAction, CollectionState};
use client::ApiClient;
use shared::{CreateExpenseInput, Expense, UpdateExpenseInput};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::store::{sink, Store};

pub struct UseExpensesResult {
    pub state: CollectionState<Expense>,
    pub actions: UseExpensesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpensesActions {
    api_client: ApiClient,
    dispatcher: UseReducerDispatcher<Store<CollectionState<Expense>>>,
}

impl UseExpensesActions {
    pub async fn refetch(&self) {
        load_collection(&sink(&self.dispatcher), self.api_client.get_expenses()).await;
    }

    pub async fn create(&self, input: &CreateExpenseInput) -> bool {
        run_mutation(
            &sink(&self.dispatcher),
            self.api_client.create_expense(input),
            CollectionAction::Created,
        )
        .await
    }

    pub async fn update(&self, id: i64, input: &UpdateExpenseInput) -> bool {
        run_mutation(
            &sink(&self.dispatcher),
            self.api_client.update_expense(id, input),
            CollectionAction::Updated,
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> bool {
        run_mutation(
            &sink(&self.dispatcher),
            self.api_client.delete_expense(id),
            move |_| CollectionAction::Deleted(id),
        )
        .await
    }
}

#[hook]
pub fn use_expenses(api_client: &ApiClient) -> UseExpensesResult {
    let store = use_reducer(Store::<CollectionState<Expense>>::default);

    let actions = UseExpensesActions {
        api_client: api_client.clone(),
        dispatcher: store.dispatcher(),
    };

    // Load expenses on mount
    use_effect_with((), {
        let actions = actions.clone();
        move |_| {
            spawn_local(async move { actions.refetch().await });
            || ()
        }
    });

    UseExpensesResult {
        state: store.0.clone(),
        actions,
    }
}
