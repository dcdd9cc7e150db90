//! View Data Assertions
//!
//! Consistency checks between compiler output and the runtime slot table.
//!
//! The checks are plain functions returning `Result` so they can be run on
//! demand. On the render path they go through [`verify`], which is compiled
//! out entirely for [`ProdMode`] views.

use super::interfaces::i18n::TIcu;
use super::interfaces::node::{to_t_node_type_as_string, TNode};
use super::interfaces::view::TDataSlot;
use crate::error::{Result, ViewDataError};

/// Selects whether a view runs its consistency checks.
pub trait Verification {
    const ENABLED: bool;
}

/// Checks on. A violation halts with an `ASSERTION ERROR`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevMode;

/// Checks off. Well-formed compiler output is assumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProdMode;

impl Verification for DevMode {
    const ENABLED: bool = true;
}

impl Verification for ProdMode {
    const ENABLED: bool = false;
}

#[cfg(any(debug_assertions, feature = "dev-mode"))]
pub type DefaultMode = DevMode;

#[cfg(not(any(debug_assertions, feature = "dev-mode")))]
pub type DefaultMode = ProdMode;

/// Runs `check` when `V` has checks enabled and panics on a violation.
#[inline(always)]
pub fn verify<V: Verification>(check: impl FnOnce() -> Result<()>) {
    if V::ENABLED {
        if let Err(error) = check() {
            panic!("ASSERTION ERROR: {}", error);
        }
    }
}

pub fn check_index_in_range(data: &[TDataSlot], index: usize) -> Result<()> {
    if index >= data.len() {
        return Err(ViewDataError::IndexOutOfRange {
            index,
            len: data.len(),
        });
    }
    Ok(())
}

/// A slot keeps the kind of its first non-empty occupant.
///
/// The only node type change allowed is a placeholder resolving to an ICU
/// container. A node that already owns an ICU or insert-before indices is
/// never recreated.
pub fn check_slot_write(data: &[TDataSlot], index: usize, value: &TDataSlot) -> Result<()> {
    check_index_in_range(data, index)?;
    let existing = &data[index];
    if let (TDataSlot::Node(current), TDataSlot::Node(replacement)) = (existing, value) {
        let resolves_placeholder = current.is_placeholder() && replacement.is_icu_container();
        if current.node_type != replacement.node_type && !resolves_placeholder {
            return Err(ViewDataError::NodeTypeChanged {
                index,
                existing: to_t_node_type_as_string(current.node_type),
                replacement: to_t_node_type_as_string(replacement.node_type),
            });
        }
        if current.icu.is_some() || !current.insert_before_index.is_unset() {
            return Err(ViewDataError::PopulatedNodeReplaced { index });
        }
        return Ok(());
    }
    if !existing.is_empty() && existing.kind() != value.kind() {
        return Err(ViewDataError::SlotKindChanged {
            index,
            existing: existing.kind(),
            replacement: value.kind(),
        });
    }
    Ok(())
}

pub fn check_t_icu(icu: &TIcu, index: usize) -> Result<()> {
    if icu.cases.is_empty() {
        return Err(ViewDataError::InvalidIcu {
            index,
            reason: "an ICU must declare at least one case".to_string(),
        });
    }
    if let Some(selected) = icu.selected {
        if selected >= icu.cases.len() {
            return Err(ViewDataError::InvalidIcu {
                index,
                reason: format!(
                    "selected case {} is outside of the {} declared cases",
                    selected,
                    icu.cases.len()
                ),
            });
        }
    }
    Ok(())
}

pub fn check_icu_container(t_node: &TNode) -> Result<()> {
    if !t_node.is_icu_container() {
        return Err(ViewDataError::NotAnIcuContainer {
            index: t_node.index,
            node_type: to_t_node_type_as_string(t_node.node_type),
        });
    }
    Ok(())
}

/// An ICU container that has been read back must own its ICU.
pub fn check_icu_installed(t_node: &TNode) -> Result<()> {
    check_icu_container(t_node)?;
    if t_node.icu.is_none() {
        return Err(ViewDataError::MissingIcu {
            index: t_node.index,
        });
    }
    Ok(())
}

/// Slot must be able to receive an ICU: empty, a bare ICU or an ICU container.
pub fn check_icu_container_slot(data: &[TDataSlot], index: usize) -> Result<()> {
    check_index_in_range(data, index)?;
    match &data[index] {
        TDataSlot::Empty | TDataSlot::Icu(_) => Ok(()),
        TDataSlot::Node(t_node) => check_icu_container(t_node),
        other => Err(ViewDataError::UnexpectedSlot {
            index,
            expected: "an ICU or an ICU container",
            found: other.kind(),
        }),
    }
}

pub fn check_sibling_node(data: &[TDataSlot], index: usize) -> Result<()> {
    check_index_in_range(data, index)?;
    match &data[index] {
        TDataSlot::Node(_) => Ok(()),
        other => Err(ViewDataError::UnexpectedSlot {
            index,
            expected: "a node",
            found: other.kind(),
        }),
    }
}

pub fn check_insert_before_unset(t_node: &TNode) -> Result<()> {
    if !t_node.insert_before_index.is_unset() {
        return Err(ViewDataError::InsertBeforeAlreadySet {
            index: t_node.index,
        });
    }
    Ok(())
}
