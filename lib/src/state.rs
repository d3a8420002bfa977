//! Root state and the type-erased slice values it is made of

use std::{
    any::{Any, type_name},
    collections::BTreeMap,
    fmt::{self, Debug},
    rc::Rc,
};

use serde::Serialize;

use crate::error::Result;

/// A value that can be stored as a slice of the root [`State`].
///
/// Implemented for every `'static` type that is `Debug`, `PartialEq` and
/// `Serialize`; there is no need to implement it by hand.
pub trait SliceValue: Any + Debug {
    /// Borrows the value as [`Any`] for typed access
    fn as_any(&self) -> &dyn Any;
    /// Converts a shared value into a shared [`Any`] for typed downcasting
    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any>;
    /// Deep equality against another slice value of possibly different type
    fn dyn_eq(&self, other: &dyn SliceValue) -> bool;
    /// Name of the concrete type, used in error messages
    fn type_name(&self) -> &'static str;
    /// Serializes the value into JSON
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T> SliceValue for T
where
    T: Any + Debug + PartialEq + Serialize,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }

    fn dyn_eq(&self, other: &dyn SliceValue) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Shared, immutable value of a single named slice.
///
/// Cloning a slice clones the reference, not the value. Reducers hand back
/// the identical reference when nothing changed, so [`Slice::ptr_eq`] is a
/// cheap change-detection signal for subscribers.
#[derive(Clone)]
pub struct Slice(Rc<dyn SliceValue>);

impl Slice {
    /// Wraps an owned value
    pub fn new<T: SliceValue>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Wraps an already shared value without copying it
    pub fn from_rc<T: SliceValue>(value: Rc<T>) -> Self {
        Self(value)
    }

    /// Borrows the value if it is a `T`
    pub fn get<T: SliceValue>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Returns a shared handle to the value if it is a `T`
    pub fn downcast<T: SliceValue>(&self) -> Option<Rc<T>> {
        Rc::clone(&self.0).into_any_rc().downcast::<T>().ok()
    }

    /// Returns true if both slices point at the same allocation
    pub fn ptr_eq(&self, other: &Slice) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Name of the concrete type held by this slice
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Serializes the slice value into JSON
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(self.0.to_json()?)
    }
}

impl PartialEq for Slice {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.dyn_eq(&*other.0)
    }
}

impl Debug for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

/// Root application state: slice values keyed by slice name.
///
/// The map is shared and never mutated once handed out; every dispatch that
/// changes anything produces a new `State`.
#[derive(Clone, Default)]
pub struct State {
    slices: Rc<BTreeMap<String, Slice>>,
}

impl State {
    /// Creates an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this state with `name` set to `value`
    pub fn with<T: SliceValue>(self, name: impl Into<String>, value: T) -> Self {
        self.with_slice(name, Slice::new(value))
    }

    /// Returns a copy of this state with `name` set to `slice`
    pub fn with_slice(mut self, name: impl Into<String>, slice: Slice) -> Self {
        Rc::make_mut(&mut self.slices).insert(name.into(), slice);
        self
    }

    /// Borrows the value of slice `name` if present and of type `T`
    pub fn get<T: SliceValue>(&self, name: &str) -> Option<&T> {
        self.slices.get(name).and_then(|s| s.get::<T>())
    }

    /// Returns the raw slice stored under `name`
    pub fn slice(&self, name: &str) -> Option<&Slice> {
        self.slices.get(name)
    }

    /// Returns true if a slice is stored under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.slices.contains_key(name)
    }

    /// Iterates slice names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    /// Iterates slices in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Slice)> {
        self.slices.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of slices
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Returns true if no slices are stored
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Returns true if both states share the same underlying map
    pub fn ptr_eq(&self, other: &State) -> bool {
        Rc::ptr_eq(&self.slices, &other.slices)
    }

    /// Serializes the whole state into a JSON object keyed by slice name
    pub fn to_json(&self) -> Result<serde_json::Value> {
        let mut map = serde_json::Map::new();
        for (name, slice) in self.slices.iter() {
            map.insert(name.clone(), slice.to_json()?);
        }
        Ok(serde_json::Value::Object(map))
    }
}

impl FromIterator<(String, Slice)> for State {
    fn from_iter<I: IntoIterator<Item = (String, Slice)>>(iter: I) -> Self {
        Self {
            slices: Rc::new(iter.into_iter().collect()),
        }
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.slices == other.slices
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.slices.iter()).finish()
    }
}

#[cfg(test)]
#[path = "./state_tests.rs"]
mod tests;
