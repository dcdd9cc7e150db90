//! View Interfaces
//!
//! The per-template slot table (`TData`) and the `TView` that owns it.

use super::i18n::TIcu;
use super::node::TNode;
use crate::render3::assert::{
    check_index_in_range, check_slot_write, verify, DefaultMode, Verification,
};
use std::marker::PhantomData;

/// A single slot of a view's table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TDataSlot {
    #[default]
    Empty,
    Text(String),
    /// A node descriptor. ICU containers additionally own their `TIcu`.
    Node(TNode),
    /// An ICU stored without a container node.
    Icu(TIcu),
}

static EMPTY_SLOT: TDataSlot = TDataSlot::Empty;

impl TDataSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, TDataSlot::Empty)
    }

    /// Description of the occupant kind, used in assertion messages.
    pub fn kind(&self) -> &'static str {
        match self {
            TDataSlot::Empty => "an empty slot",
            TDataSlot::Text(_) => "text",
            TDataSlot::Node(t_node) if t_node.is_icu_container() => "an ICU container",
            TDataSlot::Node(_) => "a node",
            TDataSlot::Icu(_) => "an ICU",
        }
    }

    pub fn as_node(&self) -> Option<&TNode> {
        match self {
            TDataSlot::Node(t_node) => Some(t_node),
            _ => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut TNode> {
        match self {
            TDataSlot::Node(t_node) => Some(t_node),
            _ => None,
        }
    }
}

pub type TData = Vec<TDataSlot>;

/// Static data of one compiled template.
///
/// The table is sized from the slot count reserved by the compiler and
/// filled in during the first render. `V` selects whether reads and writes
/// are checked against the compiler contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TView<V: Verification = DefaultMode> {
    data: TData,
    _verification: PhantomData<V>,
}

impl<V: Verification> TView<V> {
    pub fn new(slot_count: usize) -> Self {
        TView {
            data: vec![TDataSlot::Empty; slot_count],
            _verification: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[TDataSlot] {
        &self.data
    }

    pub fn read(&self, index: usize) -> &TDataSlot {
        verify::<V>(|| check_index_in_range(&self.data, index));
        self.data.get(index).unwrap_or(&EMPTY_SLOT)
    }

    pub(crate) fn read_mut(&mut self, index: usize) -> Option<&mut TDataSlot> {
        verify::<V>(|| check_index_in_range(&self.data, index));
        self.data.get_mut(index)
    }

    pub fn write(&mut self, index: usize, value: TDataSlot) {
        verify::<V>(|| check_slot_write(&self.data, index, &value));
        if let Some(slot) = self.data.get_mut(index) {
            *slot = value;
        }
    }

    pub fn node(&self, index: usize) -> Option<&TNode> {
        self.read(index).as_node()
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut TNode> {
        self.read_mut(index).and_then(TDataSlot::as_node_mut)
    }
}
