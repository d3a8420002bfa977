//! Todo list slice reducer.

use r_storelib::reducer::Reducer;
use std::rc::Rc;

use crate::store::{action::TodoAction, state::Todo};

/// Owns the `todos` slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct TodosReducer;

/// Appends a new, uncompleted todo.
pub fn add_todo(todos: &[Todo], id: u64, text: &str) -> Vec<Todo> {
    let mut next = todos.to_vec();
    next.push(Todo {
        id,
        text: text.to_string(),
        completed: false,
    });
    next
}

/// Flips the completed flag of the todo with `id`. Returns `None` if no such
/// todo exists.
pub fn toggle_todo(todos: &[Todo], id: u64) -> Option<Vec<Todo>> {
    if !todos.iter().any(|t| t.id == id) {
        return None;
    }

    Some(
        todos
            .iter()
            .map(|t| {
                if t.id == id {
                    Todo {
                        completed: !t.completed,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect(),
    )
}

impl Reducer<TodoAction> for TodosReducer {
    type State = Vec<Todo>;

    fn initial_state(&self) -> Vec<Todo> {
        Vec::new()
    }

    fn reduce(
        &self,
        state: &Rc<Vec<Todo>>,
        action: &TodoAction,
    ) -> Rc<Vec<Todo>> {
        match action {
            TodoAction::AddTodo { id, text } => {
                Rc::new(add_todo(state, *id, text))
            }
            TodoAction::ToggleTodo(id) => match toggle_todo(state, *id) {
                Some(next) => Rc::new(next),
                None => {
                    log::warn!("cannot toggle unknown todo {id}");
                    Rc::clone(state)
                }
            },
            _ => Rc::clone(state),
        }
    }
}
