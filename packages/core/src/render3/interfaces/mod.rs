//! Render3 Interfaces
//!
//! Shapes of the values stored in a view's slot table.

pub mod i18n;
pub mod node;
pub mod view;
