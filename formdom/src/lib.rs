//! Minimal owned markup tree for form-driven UIs.
//!
//! Build a tree with [`Element`], mount it with [`Document::new`], then
//! navigate and mutate it through [`NodeId`] handles.

pub mod document;
pub mod element;
pub mod style;

pub use document::{Document, NodeId};
pub use element::Element;
pub use style::Style;
