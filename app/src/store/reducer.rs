//! Slice reducers and the root reducer for the todos setup.

use r_storelib::{combine::CombinedReducer, error::Result};

use super::{
    action::TodoAction,
    state::{TODOS_SLICE, VISIBILITY_FILTER_SLICE},
};

pub mod reducers;

/// Combines the `todos` and `visibility_filter` slices.
///
/// This only composes reducers; callers decide whether and how to build a
/// store from it.
pub fn root_reducer() -> Result<CombinedReducer<TodoAction>> {
    CombinedReducer::new()
        .with_slice(TODOS_SLICE, reducers::todos::TodosReducer)?
        .with_slice(
            VISIBILITY_FILTER_SLICE,
            reducers::visibility_filter::VisibilityFilterReducer,
        )
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
