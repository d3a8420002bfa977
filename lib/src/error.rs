//! Custom Error and Result types for this library

use thiserror::Error;

use crate::store::StoreConfigBuilderError;

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum StoreError {
    /// An action was dispatched while another dispatch was still in flight,
    /// i.e. from inside a reducer or a subscriber
    #[error(
        "cannot dispatch {action} while another action is being processed"
    )]
    ReentrantDispatch {
        /// Name of the rejected action
        action: &'static str,
    },

    /// A slice holds a value its reducer does not own
    #[error(
        "slice \"{slice}\" holds {found} but its reducer expects {expected}"
    )]
    SliceType {
        /// The slice name
        slice: String,
        /// Type name the registered reducer works on
        expected: &'static str,
        /// Type name actually found in state
        found: &'static str,
    },

    /// Two reducers were registered under the same slice name
    #[error("a reducer is already registered for slice \"{_0}\"")]
    DuplicateSlice(String),

    /// A store was created from a reducer without any slices
    #[error("store requires at least one slice reducer")]
    NoReducers,

    /// Error resulting from failure to build store configuration
    #[error("failed to build store config: {_0}")]
    ConfigBuild(#[from] StoreConfigBuilderError),

    /// Error converting state into JSON
    #[error("failed to serialize state: {_0}")]
    Serialize(#[from] serde_json::Error),
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`StoreError`]
pub type Result<T> = std::result::Result<T, StoreError>;
