use client::store::{load_collection, CollectionState};
use client::ApiClient;
use shared::Category;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::store::{sink, Store};

/// Category list, fetched once per mount
#[hook]
pub fn use_categories(api_client: &ApiClient) -> CollectionState<Category> {
    let store = use_reducer(Store::<CollectionState<Category>>::default);

    {
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                load_collection(&sink(&dispatcher), api_client.get_categories()).await;
            });
            || ()
        });
    }

    store.0.clone()
}
