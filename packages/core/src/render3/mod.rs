//! Render3 Module
//!
//! Render-time data structures produced by the template compiler and
//! consumed by the rendering engine.

pub mod assert;
pub mod i18n;
pub mod interfaces;
pub mod tnode_manipulation;

pub use assert::{DefaultMode, DevMode, ProdMode, Verification};
pub use interfaces::i18n::{IcuType, TIcu};
pub use interfaces::node::{InsertBeforeIndex, TNode, TNodeType};
pub use interfaces::view::{TData, TDataSlot, TView};
