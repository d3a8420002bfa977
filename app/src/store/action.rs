//! Action types for state transitions.

use r_storelib::action::Action;
use strum::IntoStaticStr;

use super::state::VisibilityFilter;

/// Actions handled by the counter store.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum CounterAction {
    Increment,
    Decrement,
    IncrementByAmount(i64),
}

impl Action for CounterAction {
    fn name(&self) -> &'static str {
        self.into()
    }
}

/// Actions handled by the todos root reducer.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum TodoAction {
    AddTodo { id: u64, text: String },
    ToggleTodo(u64),
    SetVisibilityFilter(VisibilityFilter),
}

impl Action for TodoAction {
    fn name(&self) -> &'static str {
        self.into()
    }
}
