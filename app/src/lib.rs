//! Application state for the web front end: slice reducers, actions,
//! selectors and the store setups built from them.
//!
//! Two independent setups are provided:
//!
//! - [`store::configure_store`] creates the counter store directly.
//! - [`store::reducer::root_reducer`] combines the `todos` and
//!   `visibility_filter` slices without creating a store.
//!
//! # Examples
//!
//! ```bash
//! cargo run --example counter -p r-storeapp
//! cargo run --example todos -p r-storeapp
//! ```

pub mod store;
