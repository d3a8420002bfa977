//! Visibility filter slice reducer.

use r_storelib::reducer::Reducer;
use std::rc::Rc;

use crate::store::{action::TodoAction, state::VisibilityFilter};

/// Owns the `visibility_filter` slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisibilityFilterReducer;

impl Reducer<TodoAction> for VisibilityFilterReducer {
    type State = VisibilityFilter;

    fn initial_state(&self) -> VisibilityFilter {
        VisibilityFilter::default()
    }

    fn reduce(
        &self,
        state: &Rc<VisibilityFilter>,
        action: &TodoAction,
    ) -> Rc<VisibilityFilter> {
        match action {
            TodoAction::SetVisibilityFilter(filter) if **state != *filter => {
                Rc::new(*filter)
            }
            _ => Rc::clone(state),
        }
    }
}
