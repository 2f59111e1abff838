//! UI components.

pub mod traversal_canvas;
