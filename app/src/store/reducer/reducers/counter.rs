//! Counter slice reducer.

use r_storelib::reducer::Reducer;
use std::rc::Rc;

use crate::store::{action::CounterAction, state::CounterState};

/// Owns the `counter` slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct CounterReducer;

/// Adds `amount` to the counter, or `None` if the sum overflows.
pub fn increment_by(
    state: &CounterState,
    amount: i64,
) -> Option<CounterState> {
    state
        .value
        .checked_add(amount)
        .map(|value| CounterState { value })
}

impl Reducer<CounterAction> for CounterReducer {
    type State = CounterState;

    fn initial_state(&self) -> CounterState {
        CounterState::default()
    }

    fn reduce(
        &self,
        state: &Rc<CounterState>,
        action: &CounterAction,
    ) -> Rc<CounterState> {
        let amount = match action {
            CounterAction::Increment => 1,
            CounterAction::Decrement => -1,
            CounterAction::IncrementByAmount(amount) => *amount,
        };

        if amount == 0 {
            return Rc::clone(state);
        }

        match increment_by(state, amount) {
            Some(next) => Rc::new(next),
            None => {
                log::warn!(
                    "counter overflow adding {amount} to {}",
                    state.value
                );
                Rc::clone(state)
            }
        }
    }
}
