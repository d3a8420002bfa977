//! Trait implemented by every action type a store can process

use std::fmt::Debug;

/// An intent to change state, submitted to a store via dispatch.
///
/// Applications model their actions as a closed enum. Reducers match on the
/// variants they care about and fall through to an explicit default arm that
/// leaves their slice untouched.
pub trait Action: Debug + 'static {
    /// Static name of the action, used when logging dispatches and errors
    fn name(&self) -> &'static str;
}
