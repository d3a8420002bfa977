//! Reducers for each slice of application state.

pub mod counter;
pub mod todos;
pub mod visibility_filter;
