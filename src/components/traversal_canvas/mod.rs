//! Traversal canvas component.
//!
//! Draws a graph on an HTML canvas and shows the progress of a traversal:
//! - Force-directed layout, computed once per graph and kept across steps
//! - Visited nodes eased to a highlight color, traversed edges drawn thicker
//! - A ring around the most recently visited node
//! - Pan, zoom, and node dragging
//!
//! # Example
//!
//! ```ignore
//! let data = Signal::derive(move || GraphData::from(&graph));
//! let highlight = Signal::derive(move || sequencer.highlight().clone());
//!
//! view! { <TraversalCanvas data=data highlight=highlight fullscreen=true /> }
//! ```

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::TraversalCanvas;
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode};
