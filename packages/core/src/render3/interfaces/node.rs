//! Node Interfaces
//!
//! Static node descriptors shared by every instance of a compiled template.

use super::i18n::TIcu;
use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// The kind of render-tree location a `TNode` describes.
    ///
    /// Kept as flags so that callers can test against groups such as
    /// `ANY_CONTAINER` with a single mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TNodeType: u32 {
        const TEXT = 0b1;
        const ELEMENT = 0b10;
        const CONTAINER = 0b100;
        const ELEMENT_CONTAINER = 0b1000;
        const PROJECTION = 0b1_0000;
        /// Anchors an ICU expression and owns its `TIcu`.
        const ICU = 0b10_0000;
        /// Stands in for content whose concrete node is not known yet.
        const PLACEHOLDER = 0b100_0000;
        const LET_DECLARATION = 0b1000_0000;

        const ANY_RNODE = Self::TEXT.bits() | Self::ELEMENT.bits();
        const ANY_CONTAINER = Self::CONTAINER.bits() | Self::ELEMENT_CONTAINER.bits();
    }
}

/// Human readable name of a node type, used in assertion messages.
pub fn to_t_node_type_as_string(node_type: TNodeType) -> &'static str {
    if node_type == TNodeType::TEXT {
        "Text"
    } else if node_type == TNodeType::ELEMENT {
        "Element"
    } else if node_type == TNodeType::CONTAINER {
        "Container"
    } else if node_type == TNodeType::ELEMENT_CONTAINER {
        "ElementContainer"
    } else if node_type == TNodeType::PROJECTION {
        "Projection"
    } else if node_type == TNodeType::ICU {
        "IcuContainer"
    } else if node_type == TNodeType::PLACEHOLDER {
        "Placeholder"
    } else if node_type == TNodeType::LET_DECLARATION {
        "LetDeclaration"
    } else {
        "<unknown>"
    }
}

/// Where content discovered after a node must be inserted relative to it.
///
/// Registrations only ever move forward: `Unset -> Pending -> List`. Once a
/// second index is registered the field stays a list for the lifetime of the
/// view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InsertBeforeIndex {
    #[default]
    Unset,
    /// One registered index. `target` is filled in once the node it should be
    /// inserted in front of has been resolved.
    Pending { target: Option<usize>, index: usize },
    List {
        target: Option<usize>,
        indices: SmallVec<[usize; 4]>,
    },
}

impl InsertBeforeIndex {
    pub fn is_unset(&self) -> bool {
        matches!(self, InsertBeforeIndex::Unset)
    }

    /// Records `index` after every previously registered one.
    ///
    /// Returns `true` when this registration promoted the pending form to a list.
    pub fn push(&mut self, index: usize) -> bool {
        match *self {
            InsertBeforeIndex::Unset => {
                *self = InsertBeforeIndex::Pending {
                    target: None,
                    index,
                };
                false
            }
            InsertBeforeIndex::Pending {
                target,
                index: first,
            } => {
                let mut indices = SmallVec::new();
                indices.push(first);
                indices.push(index);
                *self = InsertBeforeIndex::List { target, indices };
                true
            }
            InsertBeforeIndex::List {
                ref mut indices, ..
            } => {
                indices.push(index);
                false
            }
        }
    }

    /// Registered indices in registration order. Duplicates are kept.
    pub fn indices(&self) -> &[usize] {
        match self {
            InsertBeforeIndex::Unset => &[],
            InsertBeforeIndex::Pending { index, .. } => std::slice::from_ref(index),
            InsertBeforeIndex::List { indices, .. } => indices.as_slice(),
        }
    }

    pub fn target(&self) -> Option<usize> {
        match self {
            InsertBeforeIndex::Unset => None,
            InsertBeforeIndex::Pending { target, .. } | InsertBeforeIndex::List { target, .. } => {
                *target
            }
        }
    }

    /// Fills in the node the registered content goes in front of.
    ///
    /// Has no effect while nothing is registered; returns whether the target was stored.
    pub fn set_target(&mut self, value: usize) -> bool {
        match self {
            InsertBeforeIndex::Unset => false,
            InsertBeforeIndex::Pending { target, .. } | InsertBeforeIndex::List { target, .. } => {
                *target = Some(value);
                true
            }
        }
    }
}

/// Compiler-known location in the render tree.
///
/// Created once on the first template pass and reused by every later render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TNode {
    /// Slot of this node in the owning view's table.
    pub index: usize,
    pub node_type: TNodeType,
    pub parent: Option<usize>,
    pub next: Option<usize>,
    pub insert_before_index: InsertBeforeIndex,
    /// Set only on ICU containers, once their ICU has been parsed.
    pub icu: Option<Box<TIcu>>,
}

impl TNode {
    pub fn new(index: usize, node_type: TNodeType, parent: Option<usize>) -> Self {
        TNode {
            index,
            node_type,
            parent,
            next: None,
            insert_before_index: InsertBeforeIndex::Unset,
            icu: None,
        }
    }

    pub fn is_icu_container(&self) -> bool {
        self.node_type == TNodeType::ICU
    }

    pub fn is_placeholder(&self) -> bool {
        self.node_type.contains(TNodeType::PLACEHOLDER)
    }
}
