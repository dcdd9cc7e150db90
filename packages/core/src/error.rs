//! Error Types
//!
//! Failures reported by the view data consistency checks and by Trusted Types
//! policy creation.

use thiserror::Error;

/// A contract violation between compiler output and the runtime view data.
///
/// These are only produced by the checks in `render3::assert`; production
/// builds never construct them on the render path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewDataError {
    #[error("Index {index} is out of bounds of a view with {len} slots")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Expected {expected} at index {index}, but found {found}")]
    UnexpectedSlot {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Slot {index} already holds {existing}, it cannot be overwritten with {replacement}")]
    SlotKindChanged {
        index: usize,
        existing: &'static str,
        replacement: &'static str,
    },

    #[error("Node {index} of type {existing} cannot become a node of type {replacement}")]
    NodeTypeChanged {
        index: usize,
        existing: &'static str,
        replacement: &'static str,
    },

    #[error("Node {index} already owns an ICU or insert-before indices, it cannot be recreated")]
    PopulatedNodeReplaced { index: usize },

    #[error("Expected an ICU container at index {index}, but found a node of type {node_type}")]
    NotAnIcuContainer {
        index: usize,
        node_type: &'static str,
    },

    #[error("ICU container at index {index} does not own an ICU")]
    MissingIcu { index: usize },

    #[error("Malformed ICU at index {index}: {reason}")]
    InvalidIcu { index: usize, reason: String },

    #[error("Expected insertBeforeIndex of the node at index {index} to be unset")]
    InsertBeforeAlreadySet { index: usize },
}

pub type Result<T> = std::result::Result<T, ViewDataError>;

/// Failure to create a Trusted Types policy.
///
/// Never surfaced to sanitization callers: the handle records the policy as
/// unavailable and hands out plain strings instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyCreationError {
    #[error("Policy with name \"{0}\" already exists.")]
    Duplicate(String),

    #[error("\"{0}\" is not a valid Trusted Types policy name")]
    InvalidName(String),

    #[error("Trusted Types are not supported in this environment")]
    Unsupported,
}
