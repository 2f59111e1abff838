//! Layout simulation state and traversal highlight tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node metadata, the
//! pan/zoom transform, and highlight intensities that ease in as the
//! traversal reveals nodes and edges.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{ScaleConfig, ScaledValues};
use super::types::GraphData;
use crate::graph::{Edge, NodeId};
use crate::sequencer::Highlight;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: NodeId,
	pub label: String,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Per-node and per-edge highlight intensity (0.0 to 1.0).
///
/// Revealed elements ease towards 1.0 with exponential smoothing. Nothing is
/// ever un-revealed: a new graph gets a fresh state.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	visited: HashSet<NodeId>,
	traversed: HashSet<Edge>,
	latest: Option<NodeId>,
	node_intensity: HashMap<NodeId, f64>,
	edge_intensity: HashMap<Edge, f64>,
}

/// Undirected edges are keyed with the smaller id first.
fn edge_key(a: NodeId, b: NodeId) -> Edge {
	(a.min(b), a.max(b))
}

impl HighlightState {
	/// Mirrors the sequencer's cumulative highlight.
	pub fn sync(&mut self, highlight: &Highlight) {
		self.visited = highlight.visited.iter().copied().collect();
		self.traversed = highlight
			.edges
			.iter()
			.map(|&(a, b)| edge_key(a, b))
			.collect();
		self.latest = highlight.visited.last().copied();
		self.node_intensity.retain(|id, _| self.visited.contains(id));
		self.edge_intensity.retain(|edge, _| self.traversed.contains(edge));
	}

	/// Eases every revealed element towards full intensity.
	///
	/// value += (1 - value) * (1 - e^(-speed * dt))
	pub fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 6.0; // ~150ms to 95%
		let factor = 1.0 - (-FADE_IN_SPEED * dt).exp();

		for &id in &self.visited {
			let intensity = self.node_intensity.entry(id).or_insert(0.0);
			*intensity += (1.0 - *intensity) * factor;
		}
		for &edge in &self.traversed {
			let intensity = self.edge_intensity.entry(edge).or_insert(0.0);
			*intensity += (1.0 - *intensity) * factor;
		}
	}

	pub fn node_intensity(&self, id: NodeId) -> f64 {
		self.node_intensity.get(&id).copied().unwrap_or(0.0)
	}

	pub fn edge_intensity(&self, a: NodeId, b: NodeId) -> f64 {
		self.edge_intensity
			.get(&edge_key(a, b))
			.copied()
			.unwrap_or(0.0)
	}

	/// The node revealed by the most recent step.
	pub fn latest(&self) -> Option<NodeId> {
		self.latest
	}
}

/// Layout simulation plus interaction and highlight tracking.
///
/// Rebuilt whenever a new graph is generated, then mutated each frame by the
/// animation loop.
pub struct TraversalCanvasState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub highlight: HighlightState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
}

impl TraversalCanvasState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 250.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			// Start on a circle so the simulation unfolds symmetrically.
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (150.0 * angle.cos()) as f32,
				y: (150.0 * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id,
					label: node.label.clone(),
				},
			});
			id_to_idx.insert(node.id, idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			animation_running: true,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < scale.hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_highlight(&mut self, highlight: &Highlight) {
		self.highlight.sync(highlight);
	}

	pub fn tick(&mut self, dt: f32) {
		if self.animation_running {
			self.graph.update(dt);
		}
		self.highlight.tick(dt as f64);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_highlight_eases_in() {
		let mut state = HighlightState::default();
		state.sync(&Highlight {
			visited: vec![0, 1],
			edges: vec![(1, 0)],
		});
		assert_eq!(state.node_intensity(0), 0.0);

		state.tick(0.016);
		let first = state.node_intensity(1);
		assert!(first > 0.0 && first < 1.0);
		assert!(state.edge_intensity(0, 1) > 0.0);
		assert_eq!(state.edge_intensity(0, 2), 0.0);

		for _ in 0..200 {
			state.tick(0.016);
		}
		assert!(state.node_intensity(1) > 0.99);
		assert_eq!(state.latest(), Some(1));
	}

	#[test]
	fn test_sync_drops_cleared_elements() {
		let mut state = HighlightState::default();
		state.sync(&Highlight {
			visited: vec![3],
			edges: vec![(3, 4)],
		});
		state.tick(0.1);
		state.sync(&Highlight::default());
		assert_eq!(state.node_intensity(3), 0.0);
		assert_eq!(state.edge_intensity(4, 3), 0.0);
		assert_eq!(state.latest(), None);
	}
}
