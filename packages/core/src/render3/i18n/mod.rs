//! Render3 I18n Module
//!
//! Runtime helpers for ICU expressions and i18n node ordering.

pub mod i18n_util;

pub use i18n_util::{
    add_t_node_and_update_insert_before_index, create_t_node_placeholder, get_t_icu,
    get_t_icu_mut, resolve_insert_before_target, set_t_icu, set_t_node_insert_before_index,
};
