//! ICU Store Tests
//!
//! ICUs installed in a view slot directly or through an ICU container node.

use angular_core::render3::i18n::{get_t_icu, get_t_icu_mut, set_t_icu};
use angular_core::render3::tnode_manipulation::create_t_node_at_index;
use angular_core::render3::{DevMode, IcuType, ProdMode, TDataSlot, TIcu, TNode, TNodeType, TView};

fn icu(cases: &[&str], selected: Option<usize>, content_index: usize) -> TIcu {
    let mut icu = TIcu::new(
        IcuType::Select,
        cases.iter().map(|c| c.to_string()).collect(),
        content_index,
        0,
    );
    icu.selected = selected;
    icu
}

#[test]
fn should_round_trip_bare_icu() {
    let mut tview = TView::<DevMode>::new(4);
    let state = icu(&["a", "b"], Some(0), 3);

    set_t_icu(&mut tview, 2, state.clone());

    assert_eq!(get_t_icu(&tview, 2), Some(&state));
    assert!(matches!(tview.read(2), TDataSlot::Icu(_)));
}

#[test]
fn should_round_trip_icu_nested_in_container() {
    let mut tview = TView::<DevMode>::new(4);
    create_t_node_at_index(&mut tview, 1, TNodeType::ICU, None);
    let state = icu(&["one", "other"], None, 2);

    set_t_icu(&mut tview, 1, state.clone());

    assert_eq!(get_t_icu(&tview, 1), Some(&state));
    let container = tview.node(1).unwrap();
    assert_eq!(container.node_type, TNodeType::ICU);
    assert_eq!(container.icu.as_deref(), Some(&state));
}

#[test]
fn should_resolve_both_representations_identically() {
    let state = icu(&["male", "female", "other"], Some(2), 5);

    let mut bare = TView::<DevMode>::new(3);
    set_t_icu(&mut bare, 0, state.clone());

    let mut nested = TView::<DevMode>::new(3);
    create_t_node_at_index(&mut nested, 0, TNodeType::ICU, None);
    set_t_icu(&mut nested, 0, state);

    assert_eq!(get_t_icu(&bare, 0), get_t_icu(&nested, 0));
}

#[test]
fn should_replace_bare_icu_without_residue() {
    let mut tview = TView::<DevMode>::new(2);
    set_t_icu(&mut tview, 0, icu(&["a", "b"], Some(1), 1));
    let replacement = icu(&["x", "other"], None, 1);

    set_t_icu(&mut tview, 0, replacement.clone());

    assert_eq!(tview.read(0), &TDataSlot::Icu(replacement));
}

#[test]
fn should_replace_nested_icu_without_residue() {
    let mut tview = TView::<DevMode>::new(2);
    create_t_node_at_index(&mut tview, 0, TNodeType::ICU, Some(1));
    set_t_icu(&mut tview, 0, icu(&["a", "b"], Some(1), 1));
    let replacement = icu(&["x", "other"], None, 1);

    set_t_icu(&mut tview, 0, replacement.clone());

    let mut expected = TNode::new(0, TNodeType::ICU, Some(1));
    expected.icu = Some(Box::new(replacement));
    assert_eq!(tview.read(0), &TDataSlot::Node(expected));
}

#[test]
fn should_only_change_case_selection_across_renders() {
    let mut tview = TView::<DevMode>::new(4);
    set_t_icu(&mut tview, 2, icu(&["a", "b", "other"], Some(0), 3));

    for (value, expected) in [("b", "b"), ("a", "a"), ("c", "other")] {
        get_t_icu_mut(&mut tview, 2).unwrap().select_case(value);
        let current = get_t_icu(&tview, 2).unwrap();
        assert_eq!(current.selected_case(), Some(expected));
        assert_eq!(current.current_case_l_view_index, 3);
    }
}

#[test]
fn should_return_none_where_no_icu_is_installed() {
    let mut tview = TView::<DevMode>::new(3);
    tview.write(1, TDataSlot::Text("Hello".to_string()));

    assert_eq!(get_t_icu(&tview, 0), None);
    assert_eq!(get_t_icu(&tview, 1), None);
    assert!(get_t_icu_mut(&mut tview, 1).is_none());
}

#[test]
#[should_panic(expected = "ASSERTION ERROR: Slot 2 already holds an ICU")]
fn should_reject_container_over_bare_icu_in_dev_mode() {
    let mut tview = TView::<DevMode>::new(4);
    set_t_icu(&mut tview, 2, icu(&["a", "b"], Some(0), 3));
    assert!(get_t_icu(&tview, 2).is_some());

    create_t_node_at_index(&mut tview, 2, TNodeType::ICU, None);
}

#[test]
#[should_panic(expected = "Expected an ICU or an ICU container at index 0, but found text")]
fn should_reject_icu_over_text_in_dev_mode() {
    let mut tview = TView::<DevMode>::new(1);
    tview.write(0, TDataSlot::Text("label".to_string()));
    set_t_icu(&mut tview, 0, icu(&["a"], None, 0));
}

#[test]
#[should_panic(expected = "Expected an ICU container at index 0")]
fn should_reject_icu_in_non_container_node_in_dev_mode() {
    let mut tview = TView::<DevMode>::new(1);
    create_t_node_at_index(&mut tview, 0, TNodeType::ELEMENT, None);
    set_t_icu(&mut tview, 0, icu(&["a"], None, 0));
}

#[test]
#[should_panic(expected = "Malformed ICU at index 0")]
fn should_reject_malformed_icu_on_read_in_dev_mode() {
    let mut tview = TView::<DevMode>::new(1);
    set_t_icu(&mut tview, 0, icu(&["a"], Some(3), 0));
    get_t_icu(&tview, 0);
}

#[test]
fn should_skip_checks_in_prod_mode() {
    let mut tview = TView::<ProdMode>::new(1);
    tview.write(0, TDataSlot::Text("label".to_string()));
    let state = icu(&["a"], None, 0);

    set_t_icu(&mut tview, 0, state.clone());

    assert_eq!(get_t_icu(&tview, 0), Some(&state));
}

#[test]
#[should_panic(expected = "Node 0 of type IcuContainer cannot become a node of type Element")]
fn should_reject_element_over_populated_container_in_dev_mode() {
    let mut tview = TView::<DevMode>::new(1);
    create_t_node_at_index(&mut tview, 0, TNodeType::ICU, None);
    set_t_icu(&mut tview, 0, icu(&["a", "other"], None, 0));

    create_t_node_at_index(&mut tview, 0, TNodeType::ELEMENT, None);
}

#[test]
#[should_panic(expected = "Node 0 already owns an ICU or insert-before indices")]
fn should_reject_recreating_populated_container_in_dev_mode() {
    let mut tview = TView::<DevMode>::new(1);
    create_t_node_at_index(&mut tview, 0, TNodeType::ICU, None);
    set_t_icu(&mut tview, 0, icu(&["a", "other"], None, 0));

    create_t_node_at_index(&mut tview, 0, TNodeType::ICU, None);
}
