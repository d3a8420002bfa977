//! Redux-like state container holding the root state of an application.

use derive_builder::Builder;
use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::{
    action::Action,
    combine::CombinedReducer,
    error::{Result, StoreError},
    state::State,
};

/// Gets application state
pub trait StateGetter {
    /// Returns the current root state
    fn get_state(&self) -> State;
}

/// Dispatches actions to update application state
pub trait Dispatcher<A: Action> {
    /// Reduces `action` into the current state and notifies subscribers.
    /// Returns the dispatched action.
    fn dispatch(&self, action: A) -> Result<A>;
}

/// Registers callbacks invoked after every dispatch
pub trait SubscriptionProvider {
    /// Adds `listener` and returns the capability to remove it again
    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription;
}

/// Options applied when creating a [`Store`]
#[derive(Debug, Clone, Default, Builder)]
#[builder(default)]
pub struct StoreConfig {
    /// State to start from instead of the reducers' initial values.
    /// Registered slices it lacks are seeded with their initial value.
    #[builder(setter(into, strip_option))]
    pub preloaded_state: Option<State>,
    /// Log every processed action at debug level
    pub log_actions: bool,
}

impl StoreConfig {
    /// Returns a new instance of StoreConfigBuilder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Handle returned by [`SubscriptionProvider::subscribe`].
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Subscription {
    /// Removes the listener from its store. Calling this more than once, or
    /// after the store has been dropped, does nothing.
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Centralized state container
///
/// A store is created once, owned by the application and passed to whatever
/// needs it. It is single threaded: all dispatches run to completion on the
/// calling thread before the next one is accepted.
pub struct Store<A: Action> {
    state: RefCell<State>,
    reducer: CombinedReducer<A>,
    listeners: Rc<RefCell<Listeners>>,
    dispatching: Cell<bool>,
    log_actions: bool,
}

impl<A: Action> Store<A> {
    /// Creates a store starting from the reducer's initial state
    pub fn new(reducer: CombinedReducer<A>) -> Result<Self> {
        Self::create(reducer, StoreConfig::default())
    }

    /// Creates a store with the given configuration
    pub fn create(
        reducer: CombinedReducer<A>,
        config: StoreConfig,
    ) -> Result<Self> {
        if reducer.is_empty() {
            return Err(StoreError::NoReducers);
        }

        let state = match config.preloaded_state {
            Some(preloaded) => reducer.initialize(&preloaded)?,
            None => reducer.initial_state(),
        };

        log::debug!(
            "created store with slices: {:?}",
            reducer.slice_names().collect::<Vec<_>>()
        );

        Ok(Self {
            state: RefCell::new(state),
            reducer,
            listeners: Rc::default(),
            dispatching: Cell::new(false),
            log_actions: config.log_actions,
        })
    }

    /// Returns true while an action is being reduced or subscribers are being
    /// notified
    pub fn is_dispatching(&self) -> bool {
        self.dispatching.get()
    }

    /// Registers a closure as a listener. See [`SubscriptionProvider`].
    pub fn subscribe_fn<F: Fn() + 'static>(&self, f: F) -> Subscription {
        self.subscribe(Box::new(f))
    }

    fn notify(&self) {
        // listeners added or removed while notifying take effect next dispatch
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        for listener in snapshot {
            listener();
        }
    }
}

impl<A: Action> StateGetter for Store<A> {
    fn get_state(&self) -> State {
        self.state.borrow().clone()
    }
}

impl<A: Action> Dispatcher<A> for Store<A> {
    fn dispatch(&self, action: A) -> Result<A> {
        if self.dispatching.get() {
            log::error!("rejected nested dispatch of {}", action.name());
            return Err(StoreError::ReentrantDispatch {
                action: action.name(),
            });
        }

        self.dispatching.set(true);
        let _guard = scopeguard::guard(&self.dispatching, |d| d.set(false));

        if self.log_actions {
            log::debug!("processing action: {}({:?})", action.name(), action);
        }

        let current = self.get_state();
        let next = self.reducer.reduce(&current, &action)?;
        *self.state.borrow_mut() = next;

        self.notify();

        Ok(action)
    }
}

impl<A: Action> SubscriptionProvider for Store<A> {
    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::from(listener)));

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
