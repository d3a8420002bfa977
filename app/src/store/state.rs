//! Slice value types and the names they are stored under.

use serde::Serialize;
use strum::{Display, EnumIter};

/// Slice name of the counter store's only slice
pub const COUNTER_SLICE: &str = "counter";
/// Slice name of the todo list
pub const TODOS_SLICE: &str = "todos";
/// Slice name of the todo list filter
pub const VISIBILITY_FILTER_SLICE: &str = "visibility_filter";

/// State of the counter slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CounterState {
    pub value: i64,
}

/// A single entry in the todo list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Which todos are shown.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowCompleted,
    ShowActive,
}

impl VisibilityFilter {
    /// Returns true if `todo` is visible under this filter
    pub fn shows(&self, todo: &Todo) -> bool {
        match self {
            VisibilityFilter::ShowAll => true,
            VisibilityFilter::ShowCompleted => todo.completed,
            VisibilityFilter::ShowActive => !todo.completed,
        }
    }
}
