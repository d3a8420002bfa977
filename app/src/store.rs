//! Store setup for the application.

use r_storelib::{
    combine::CombinedReducer,
    error::Result,
    store::{Store, StoreConfig},
};

use crate::store::{
    action::CounterAction,
    reducer::reducers::counter::CounterReducer, state::COUNTER_SLICE,
};

pub mod action;
pub mod derived;
pub mod reducer;
pub mod state;

/// Creates the counter store with action logging enabled.
pub fn configure_store() -> Result<Store<CounterAction>> {
    let reducer =
        CombinedReducer::new().with_slice(COUNTER_SLICE, CounterReducer)?;

    let config = StoreConfig::builder().log_actions(true).build()?;

    Store::create(reducer, config)
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
