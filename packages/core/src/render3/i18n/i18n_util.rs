//! I18n Utilities
//!
//! ICU storage in the view table and insert-before bookkeeping for nodes
//! whose final position is only known once later siblings are processed.

use crate::render3::assert::{
    check_icu_container_slot, check_icu_installed, check_insert_before_unset, check_sibling_node,
    check_t_icu, verify, Verification,
};
use crate::render3::interfaces::i18n::TIcu;
use crate::render3::interfaces::node::{TNode, TNodeType};
use crate::render3::interfaces::view::{TDataSlot, TView};
use crate::render3::tnode_manipulation::create_t_node_at_index;
use log::{debug, trace};

/// Returns the ICU installed at `index`, if any.
///
/// The ICU is stored either directly in the slot or inside the ICU container
/// `TNode` occupying it. Both forms resolve the same way.
pub fn get_t_icu<V: Verification>(tview: &TView<V>, index: usize) -> Option<&TIcu> {
    let t_icu = match tview.read(index) {
        TDataSlot::Empty | TDataSlot::Text(_) => return None,
        TDataSlot::Icu(t_icu) => t_icu,
        TDataSlot::Node(t_node) => {
            verify::<V>(|| check_icu_installed(t_node));
            t_node.icu.as_deref()?
        }
    };
    verify::<V>(|| check_t_icu(t_icu, index));
    Some(t_icu)
}

/// Mutable counterpart of [`get_t_icu`], used to switch the active case.
pub fn get_t_icu_mut<V: Verification>(tview: &mut TView<V>, index: usize) -> Option<&mut TIcu> {
    let t_icu = match tview.read_mut(index)? {
        TDataSlot::Empty | TDataSlot::Text(_) => return None,
        TDataSlot::Icu(t_icu) => t_icu,
        TDataSlot::Node(t_node) => {
            verify::<V>(|| check_icu_installed(t_node));
            t_node.icu.as_deref_mut()?
        }
    };
    verify::<V>(|| check_t_icu(t_icu, index));
    Some(t_icu)
}

/// Installs `t_icu` at `index`, replacing any previously installed ICU.
///
/// An empty slot receives the ICU directly. When the slot holds an ICU
/// container, the ICU is attached to that node and the slot keeps pointing at
/// the container.
pub fn set_t_icu<V: Verification>(tview: &mut TView<V>, index: usize, t_icu: TIcu) {
    verify::<V>(|| check_icu_container_slot(tview.data(), index));
    trace!("Installing {:?} ICU at index {}", t_icu.icu_type, index);
    match tview.read_mut(index) {
        Some(TDataSlot::Node(t_node)) => t_node.icu = Some(Box::new(t_icu)),
        Some(slot) => *slot = TDataSlot::Icu(t_icu),
        None => {}
    }
}

/// Records that content at `index` must be inserted before `t_node`'s
/// eventual target. Indices accumulate in registration order.
pub fn set_t_node_insert_before_index(t_node: &mut TNode, index: usize) {
    if t_node.insert_before_index.push(index) {
        debug!(
            "insertBeforeIndex of node {} promoted to a list: {:?}",
            t_node.index,
            t_node.insert_before_index.indices()
        );
    }
}

/// Fills in the node that content registered on `t_node` goes in front of.
pub fn resolve_insert_before_target(t_node: &mut TNode, target: usize) -> bool {
    t_node.insert_before_index.set_target(target)
}

/// Registers the node at `new_index` with every previous sibling, then adds
/// it to the sibling list.
pub fn add_t_node_and_update_insert_before_index<V: Verification>(
    tview: &mut TView<V>,
    previous_t_nodes: &mut Vec<usize>,
    new_index: usize,
) {
    verify::<V>(|| {
        check_sibling_node(tview.data(), new_index)?;
        tview.data()[new_index]
            .as_node()
            .map_or(Ok(()), check_insert_before_unset)
    });

    for &sibling in previous_t_nodes.iter() {
        verify::<V>(|| check_sibling_node(tview.data(), sibling));
        if let Some(t_node) = tview.node_mut(sibling) {
            set_t_node_insert_before_index(t_node, new_index);
        }
    }
    previous_t_nodes.push(new_index);
}

/// Creates a placeholder `TNode` at `index` for content that has no concrete
/// node yet, e.g. an ICU case that may never be instantiated.
///
/// The placeholder shares the parent of its siblings. Later the slot can be
/// turned into an ICU container through [`set_t_icu`].
pub fn create_t_node_placeholder<'a, V: Verification>(
    tview: &'a mut TView<V>,
    previous_t_nodes: &mut Vec<usize>,
    index: usize,
) -> Option<&'a TNode> {
    let parent = previous_t_nodes
        .first()
        .and_then(|&first| tview.data().get(first))
        .and_then(TDataSlot::as_node)
        .and_then(|sibling| sibling.parent);

    create_t_node_at_index(tview, index, TNodeType::PLACEHOLDER, parent)?;
    debug!(
        "Created placeholder at index {} after {} sibling(s)",
        index,
        previous_t_nodes.len()
    );
    add_t_node_and_update_insert_before_index(tview, previous_t_nodes, index);
    tview.node(index)
}
