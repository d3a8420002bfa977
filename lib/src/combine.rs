//! Composes named slice reducers into a single root reducer

use itertools::Itertools;
use std::{any::type_name, rc::Rc};

use crate::{
    action::Action,
    error::{Result, StoreError},
    reducer::Reducer,
    state::{Slice, State},
};

/// Type-erased view of a [`Reducer`] operating on [`Slice`] values.
trait SliceReducer<A> {
    fn initial_slice(&self) -> Slice;
    fn expected_type(&self) -> &'static str;
    fn check_slice(&self, name: &str, slice: &Slice) -> Result<()>;
    fn reduce_slice(&self, name: &str, slice: &Slice, action: &A)
    -> Result<Slice>;
}

impl<A, R> SliceReducer<A> for R
where
    A: Action,
    R: Reducer<A>,
{
    fn initial_slice(&self) -> Slice {
        Slice::new(self.initial_state())
    }

    fn expected_type(&self) -> &'static str {
        type_name::<R::State>()
    }

    fn check_slice(&self, name: &str, slice: &Slice) -> Result<()> {
        match slice.get::<R::State>() {
            Some(_) => Ok(()),
            None => Err(StoreError::SliceType {
                slice: name.to_string(),
                expected: self.expected_type(),
                found: slice.type_name(),
            }),
        }
    }

    fn reduce_slice(
        &self,
        name: &str,
        slice: &Slice,
        action: &A,
    ) -> Result<Slice> {
        let current =
            slice
                .downcast::<R::State>()
                .ok_or_else(|| StoreError::SliceType {
                    slice: name.to_string(),
                    expected: self.expected_type(),
                    found: slice.type_name(),
                })?;

        let next = self.reduce(&current, action);

        if Rc::ptr_eq(&current, &next) {
            return Ok(slice.clone());
        }

        log::trace!("slice {name} changed by {}", action.name());
        Ok(Slice::from_rc(next))
    }
}

/// Root reducer made of independently registered slice reducers.
///
/// Each slice reducer only ever sees the slice stored under its own name.
/// Slices present in state without a registered reducer pass through
/// untouched.
pub struct CombinedReducer<A> {
    reducers: Vec<(String, Box<dyn SliceReducer<A>>)>,
}

impl<A: Action> Default for CombinedReducer<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> CombinedReducer<A> {
    /// Creates a reducer with no slices registered
    pub fn new() -> Self {
        Self {
            reducers: Vec::new(),
        }
    }

    /// Registers `reducer` as the owner of slice `name`.
    pub fn with_slice<R>(
        mut self,
        name: impl Into<String>,
        reducer: R,
    ) -> Result<Self>
    where
        R: Reducer<A> + 'static,
    {
        let name = name.into();

        if self.reducers.iter().any(|(n, _)| *n == name) {
            return Err(StoreError::DuplicateSlice(name));
        }

        self.reducers.push((name, Box::new(reducer)));
        Ok(self)
    }

    /// Names of registered slices in registration order
    pub fn slice_names(&self) -> impl Iterator<Item = &str> {
        self.reducers.iter().map(|(n, _)| n.as_str())
    }

    /// Number of registered slices
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if no slices are registered
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }

    /// State holding every registered slice's initial value
    pub fn initial_state(&self) -> State {
        self.reducers
            .iter()
            .map(|(name, r)| (name.clone(), r.initial_slice()))
            .collect()
    }

    /// Prepares externally supplied state for use with this reducer.
    ///
    /// Registered slices missing from `state` are seeded with their initial
    /// value; present ones must hold the registered reducer's type.
    pub fn initialize(&self, state: &State) -> Result<State> {
        let mut next = state.clone();

        for (name, reducer) in self.reducers.iter() {
            match state.slice(name) {
                Some(slice) => reducer.check_slice(name, slice)?,
                None => {
                    next = next.with_slice(name.clone(), reducer.initial_slice())
                }
            }
        }

        Ok(next)
    }

    /// Applies `action` to every registered slice.
    ///
    /// Returns the very same `state` (see [`State::ptr_eq`]) when no slice
    /// reducer produced a new value.
    pub fn reduce(&self, state: &State, action: &A) -> Result<State> {
        if log::log_enabled!(log::Level::Debug) {
            let unregistered = state
                .names()
                .filter(|n| {
                    !self.reducers.iter().any(|(r, _)| r.as_str() == *n)
                })
                .join(", ");

            if !unregistered.is_empty() {
                log::debug!(
                    "passing through unregistered slices: {unregistered}"
                );
            }
        }

        let mut next = state.clone();
        let mut changed = false;

        for (name, reducer) in self.reducers.iter() {
            let (previous, seeded) = match state.slice(name) {
                Some(slice) => (slice.clone(), false),
                None => (reducer.initial_slice(), true),
            };

            let reduced = reducer.reduce_slice(name, &previous, action)?;

            if seeded || !reduced.ptr_eq(&previous) {
                next = next.with_slice(name.clone(), reduced);
                changed = true;
            }
        }

        if !changed {
            return Ok(state.clone());
        }

        Ok(next)
    }
}

#[cfg(test)]
#[path = "./combine_tests.rs"]
mod tests;
