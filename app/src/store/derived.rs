//! Derived state selectors for computed values.

use itertools::Itertools;
use r_storelib::state::State;

use super::state::{
    COUNTER_SLICE, CounterState, TODOS_SLICE, Todo, VISIBILITY_FILTER_SLICE,
    VisibilityFilter,
};

/// Returns the counter value, or 0 if the slice is absent.
pub fn select_count(state: &State) -> i64 {
    state
        .get::<CounterState>(COUNTER_SLICE)
        .map(|c| c.value)
        .unwrap_or_default()
}

/// Returns the current visibility filter.
pub fn select_visibility_filter(state: &State) -> VisibilityFilter {
    state
        .get::<VisibilityFilter>(VISIBILITY_FILTER_SLICE)
        .copied()
        .unwrap_or_default()
}

/// Returns todos matching the current visibility filter, in insertion order.
pub fn visible_todos(state: &State) -> Vec<Todo> {
    let filter = select_visibility_filter(state);

    state
        .get::<Vec<Todo>>(TODOS_SLICE)
        .map(|todos| todos.iter().filter(|t| filter.shows(t)).cloned().collect())
        .unwrap_or_default()
}

/// Returns the number of todos not yet completed.
pub fn active_todo_count(state: &State) -> usize {
    state
        .get::<Vec<Todo>>(TODOS_SLICE)
        .map(|todos| todos.iter().filter(|t| !t.completed).count())
        .unwrap_or_default()
}

/// Renders visible todos as one line each, e.g. `[x] 1: buy milk`.
pub fn render_visible_todos(state: &State) -> String {
    visible_todos(state)
        .iter()
        .map(|t| {
            let mark = if t.completed { "x" } else { " " };
            format!("[{mark}] {}: {}", t.id, t.text)
        })
        .join("\n")
}

#[cfg(test)]
#[path = "./derived_tests.rs"]
mod tests;
