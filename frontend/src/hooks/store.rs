use client::store::Reduce;
use std::rc::Rc;
use yew::prelude::*;

/// Adapts the client-side reducers to `use_reducer`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Store<S>(pub S);

impl<S: Reduce + Clone> Reducible for Store<S> {
    type Action = S::Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Store(state))
    }
}

/// Turn a dispatcher into the closure the async store helpers accept
pub fn sink<S>(dispatcher: &UseReducerDispatcher<Store<S>>) -> impl Fn(S::Action)
where
    S: Reduce + Clone + 'static,
{
    let dispatcher = dispatcher.clone();
    move |action| dispatcher.dispatch(action)
}
