//! Library package for composing independent slice reducers into a single
//! synchronous state store
//!
//! A [`combine::CombinedReducer`] owns one [`reducer::Reducer`] per named
//! slice and turns them into a single root transition. A [`store::Store`]
//! holds the current [`state::State`], reduces dispatched actions into it and
//! notifies subscribers afterwards.
//!
//! # Examples
//!
//! ```
//! use r_storelib::{
//!     action::Action,
//!     combine::CombinedReducer,
//!     reducer::reducer_fn,
//!     store::{Dispatcher, StateGetter, Store},
//! };
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! impl Action for CounterAction {
//!     fn name(&self) -> &'static str {
//!         match self {
//!             CounterAction::Increment => "Increment",
//!             CounterAction::Reset => "Reset",
//!         }
//!     }
//! }
//!
//! let counter = reducer_fn(0i64, |count: &i64, action: &CounterAction| {
//!     match action {
//!         CounterAction::Increment => Some(count + 1),
//!         _ => None,
//!     }
//! });
//!
//! let reducer = CombinedReducer::new().with_slice("counter", counter)?;
//! let store = Store::new(reducer)?;
//!
//! store.dispatch(CounterAction::Increment)?;
//! store.dispatch(CounterAction::Increment)?;
//!
//! assert_eq!(store.get_state().get::<i64>("counter"), Some(&2));
//! # Ok::<(), r_storelib::error::StoreError>(())
//! ```
//!
//! ## Applications
//!
//! The `r-storeapp` crate in this workspace wires slices for a counter store
//! and a todo list and ships runnable examples:
//!
//! ```bash
//! cargo run --example counter -p r-storeapp
//! cargo run --example todos -p r-storeapp
//! ```

#![deny(missing_docs)]
pub mod action;
pub mod combine;
pub mod error;
pub mod reducer;
pub mod state;
pub mod store;
