//! TNode Manipulation
//!
//! Creation of node descriptors in reserved view slots.

use super::assert::Verification;
use super::interfaces::node::{TNode, TNodeType};
use super::interfaces::view::{TDataSlot, TView};

/// Writes a fresh `TNode` into slot `index` and returns it.
///
/// The slot must have been reserved by the compiler. Nothing is returned when
/// a production view is handed an index outside its table.
pub fn create_t_node_at_index<V: Verification>(
    tview: &mut TView<V>,
    index: usize,
    node_type: TNodeType,
    parent: Option<usize>,
) -> Option<&mut TNode> {
    tview.write(index, TDataSlot::Node(TNode::new(index, node_type, parent)));
    tview.node_mut(index)
}
