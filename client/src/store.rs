//! Client-side caches behind the view hooks.
//!
//! The states are plain reducers: every change arrives as an action, so the same
//! code runs under Yew's `use_reducer` and in unit tests. The async helpers at the
//! bottom wrap one API call in the matching start/finish actions.

use std::fmt;
use std::future::Future;

use shared::{Category, Expense, FixedCost, User};

use crate::error::ApiError;

/// Entities cached in a collection are matched by identifier
pub trait Keyed {
    type Key: PartialEq + Clone + fmt::Debug;

    fn key(&self) -> Self::Key;
}

impl Keyed for Expense {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for FixedCost {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Category {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

/// State driven by a stream of actions
pub trait Reduce {
    type Action;

    fn apply(&mut self, action: Self::Action);

    fn reduce(mut self, action: Self::Action) -> Self
    where
        Self: Sized,
    {
        self.apply(action);
        self
    }
}

/// Receives reducer actions. Closures qualify, so a hook can pass
/// `|action| dispatcher.dispatch(action)`.
pub trait Dispatch<A> {
    fn dispatch(&self, action: A);
}

impl<A, F: Fn(A)> Dispatch<A> for F {
    fn dispatch(&self, action: A) {
        self(action)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    /// Only set during a full fetch
    pub is_loading: bool,
    /// Set during any create, update or delete
    pub is_submitting: bool,
    /// Last failure, cleared when the next attempt starts
    pub error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            is_submitting: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionAction<T: Keyed> {
    LoadStarted,
    Loaded(Vec<T>),
    LoadFailed(String),
    SubmitStarted,
    Created(T),
    Updated(T),
    Deleted(T::Key),
    SubmitFailed(String),
}

impl<T: Keyed> Reduce for CollectionState<T> {
    type Action = CollectionAction<T>;

    fn apply(&mut self, action: CollectionAction<T>) {
        match action {
            CollectionAction::LoadStarted => {
                self.is_loading = true;
                self.error = None;
            }
            CollectionAction::Loaded(items) => {
                self.items = items;
                self.is_loading = false;
            }
            CollectionAction::LoadFailed(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            CollectionAction::SubmitStarted => {
                self.is_submitting = true;
                self.error = None;
            }
            CollectionAction::Created(item) => {
                self.items.push(item);
                self.is_submitting = false;
            }
            CollectionAction::Updated(item) => {
                let key = item.key();
                if let Some(slot) = self.items.iter_mut().find(|existing| existing.key() == key) {
                    *slot = item;
                }
                self.is_submitting = false;
            }
            CollectionAction::Deleted(key) => {
                self.items.retain(|existing| existing.key() != key);
                self.is_submitting = false;
            }
            CollectionAction::SubmitFailed(message) => {
                self.is_submitting = false;
                self.error = Some(message);
            }
        }
    }
}

/// Cached server value such as the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ValueState<T> {
    pub value: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ValueState<T> {
    fn default() -> Self {
        Self {
            value: None,
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueAction<T> {
    LoadStarted,
    Loaded(T),
    LoadFailed(String),
}

impl<T> Reduce for ValueState<T> {
    type Action = ValueAction<T>;

    fn apply(&mut self, action: ValueAction<T>) {
        match action {
            ValueAction::LoadStarted => {
                self.is_loading = true;
                self.error = None;
            }
            ValueAction::Loaded(value) => {
                self.value = Some(value);
                self.is_loading = false;
            }
            ValueAction::LoadFailed(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
        }
    }
}

/// The signed-in user plus the "needs initial setup" flag
#[derive(Debug, Clone, PartialEq)]
pub struct UserState {
    pub user: Option<User>,
    pub needs_setup: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_submitting: bool,
    /// Failure of the last settings update or setup submission
    pub submit_error: Option<String>,
}

impl Default for UserState {
    /// Nothing can render before the first fetch, so a fresh state is loading.
    fn default() -> Self {
        Self {
            user: None,
            needs_setup: false,
            is_loading: true,
            error: None,
            is_submitting: false,
            submit_error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    LoadStarted,
    Loaded(User),
    NeedsSetup,
    LoadFailed(String),
    SubmitStarted,
    Submitted,
    SubmitFailed(String),
}

impl Reduce for UserState {
    type Action = UserAction;

    fn apply(&mut self, action: UserAction) {
        match action {
            UserAction::LoadStarted => {
                self.is_loading = true;
                self.error = None;
            }
            UserAction::Loaded(user) => {
                self.user = Some(user);
                self.needs_setup = false;
                self.is_loading = false;
            }
            UserAction::NeedsSetup => {
                self.user = None;
                self.needs_setup = true;
                self.is_loading = false;
            }
            UserAction::LoadFailed(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
            UserAction::SubmitStarted => {
                self.is_submitting = true;
                self.submit_error = None;
            }
            UserAction::Submitted => {
                self.is_submitting = false;
            }
            UserAction::SubmitFailed(message) => {
                self.is_submitting = false;
                self.submit_error = Some(message);
            }
        }
    }
}

/// Replace a whole collection with a fresh fetch
pub async fn load_collection<T, D, F>(sink: &D, fetch: F)
where
    T: Keyed,
    D: Dispatch<CollectionAction<T>>,
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    sink.dispatch(CollectionAction::LoadStarted);
    match fetch.await {
        Ok(items) => sink.dispatch(CollectionAction::Loaded(items)),
        Err(e) => sink.dispatch(CollectionAction::LoadFailed(e.to_string())),
    }
}

/// Run one create/update/delete call and apply its result locally.
/// Returns whether the call succeeded so callers can chain follow-up UI work.
pub async fn run_mutation<T, R, D, F, M>(sink: &D, call: F, on_success: M) -> bool
where
    T: Keyed,
    D: Dispatch<CollectionAction<T>>,
    F: Future<Output = Result<R, ApiError>>,
    M: FnOnce(R) -> CollectionAction<T>,
{
    sink.dispatch(CollectionAction::SubmitStarted);
    match call.await {
        Ok(result) => {
            sink.dispatch(on_success(result));
            true
        }
        Err(e) => {
            sink.dispatch(CollectionAction::SubmitFailed(e.to_string()));
            false
        }
    }
}

pub async fn load_value<T, D, F>(sink: &D, fetch: F)
where
    D: Dispatch<ValueAction<T>>,
    F: Future<Output = Result<T, ApiError>>,
{
    sink.dispatch(ValueAction::LoadStarted);
    match fetch.await {
        Ok(value) => sink.dispatch(ValueAction::Loaded(value)),
        Err(e) => sink.dispatch(ValueAction::LoadFailed(e.to_string())),
    }
}

/// Fetch the user; a missing user switches the state into setup mode instead of an error.
pub async fn load_user<D, F>(sink: &D, fetch: F)
where
    D: Dispatch<UserAction>,
    F: Future<Output = Result<User, ApiError>>,
{
    sink.dispatch(UserAction::LoadStarted);
    match fetch.await {
        Ok(user) => sink.dispatch(UserAction::Loaded(user)),
        Err(ApiError::UserNotFound) => sink.dispatch(UserAction::NeedsSetup),
        Err(e) => sink.dispatch(UserAction::LoadFailed(e.to_string())),
    }
}

/// Settings update or setup submission against the user state
pub async fn submit_user<R, D, F>(sink: &D, call: F) -> bool
where
    D: Dispatch<UserAction>,
    F: Future<Output = Result<R, ApiError>>,
{
    sink.dispatch(UserAction::SubmitStarted);
    match call.await {
        Ok(_) => {
            sink.dispatch(UserAction::Submitted);
            true
        }
        Err(e) => {
            sink.dispatch(UserAction::SubmitFailed(e.to_string()));
            false
        }
    }
}
