use client::store::{load_user, submit_user, UserState};
use client::ApiClient;
use shared::{InitialSetupRequest, UpdateUserInput};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::store::{sink, Store};

pub struct UseUserResult {
    pub state: UserState,
    pub actions: UseUserActions,
}

#[derive(Clone, PartialEq)]
pub struct UseUserActions {
    api_client: ApiClient,
    dispatcher: UseReducerDispatcher<Store<UserState>>,
}

impl UseUserActions {
    pub async fn refetch(&self) {
        load_user(&sink(&self.dispatcher), self.api_client.get_me()).await;
    }

    /// Save income and saving goal, then reload the user on success
    pub async fn update(&self, input: &UpdateUserInput) -> bool {
        let ok = submit_user(&sink(&self.dispatcher), self.api_client.update_user(input)).await;
        if ok {
            self.refetch().await;
        }
        ok
    }

    /// Create the user with its first fixed costs. The reload clears `needs_setup`.
    pub async fn submit_setup(&self, request: &InitialSetupRequest) -> bool {
        let ok = submit_user(
            &sink(&self.dispatcher),
            self.api_client.submit_initial_setup(request),
        )
        .await;
        if ok {
            self.refetch().await;
        }
        ok
    }
}

#[hook]
pub fn use_user(api_client: &ApiClient) -> UseUserResult {
    let store = use_reducer(Store::<UserState>::default);

    let actions = UseUserActions {
        api_client: api_client.clone(),
        dispatcher: store.dispatcher(),
    };

    // Load the signed-in user on mount
    use_effect_with((), {
        let actions = actions.clone();
        move |_| {
            spawn_local(async move { actions.refetch().await });
            || ()
        }
    });

    UseUserResult {
        state: store.0.clone(),
        actions,
    }
}
