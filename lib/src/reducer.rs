//! Slice reducers: pure state transitions for a single named slice

#[cfg(test)]
use mockall::automock;

use std::{marker::PhantomData, rc::Rc};

use crate::{action::Action, state::SliceValue};

/// Computes the next value of one slice from its current value and an
/// action.
///
/// Implementations must be pure. For actions they do not handle they return
/// the `state` reference they were given (`Rc::clone(state)`); for handled
/// actions they return a newly allocated value. Subscribers rely on this to
/// detect changes with reference equality.
#[cfg_attr(test, automock(type State = i64;))]
pub trait Reducer<A: Action> {
    /// Value type of the slice this reducer owns
    type State: SliceValue;

    /// Value of the slice before any action has been processed
    fn initial_state(&self) -> Self::State;

    /// Applies `action` to the slice
    fn reduce(&self, state: &Rc<Self::State>, action: &A) -> Rc<Self::State>;
}

/// Reducer built from an initial value and a transition closure.
///
/// The closure returns `None` when the action leaves the slice unchanged, in
/// which case the previous reference is kept.
pub struct FnReducer<S, A, F> {
    initial: S,
    transition: F,
    _action: PhantomData<fn(&A)>,
}

/// Creates a [`FnReducer`] from an initial value and a transition closure.
pub fn reducer_fn<S, A, F>(initial: S, transition: F) -> FnReducer<S, A, F>
where
    S: SliceValue + Clone,
    A: Action,
    F: Fn(&S, &A) -> Option<S>,
{
    FnReducer {
        initial,
        transition,
        _action: PhantomData,
    }
}

impl<S, A, F> Reducer<A> for FnReducer<S, A, F>
where
    S: SliceValue + Clone,
    A: Action,
    F: Fn(&S, &A) -> Option<S>,
{
    type State = S;

    fn initial_state(&self) -> S {
        self.initial.clone()
    }

    fn reduce(&self, state: &Rc<S>, action: &A) -> Rc<S> {
        match (self.transition)(state, action) {
            Some(next) => Rc::new(next),
            None => Rc::clone(state),
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
