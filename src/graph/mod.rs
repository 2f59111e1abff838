//! Undirected graph model and random generation.
//!
//! Nodes are the integers `0..node_count`. Adjacency lists are kept sorted
//! ascending, which fixes the neighbor iteration order used by the traversals.

pub mod traversal;

use log::info;
use rand::Rng;

use crate::error::{Error, Result};

pub use traversal::{BfsVisit, breadth_first, depth_first};

/// Identifier of a node, in `0..node_count`.
pub type NodeId = usize;

/// An edge between two nodes. Undirected; stored with the smaller id first,
/// while traversal events keep the `(visited, neighbor)` orientation.
pub type Edge = (NodeId, NodeId);

/// Simple undirected graph without parallel edges or self-loops.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	adjacency: Vec<Vec<NodeId>>,
	edges: Vec<Edge>,
}

impl Graph {
	/// Creates a graph with `node_count` isolated nodes.
	pub fn new(node_count: usize) -> Self {
		Self {
			adjacency: vec![Vec::new(); node_count],
			edges: Vec::new(),
		}
	}

	/// Builds a graph from an edge list. See [`Graph::add_edge`] for the rules.
	pub fn from_edges(node_count: usize, edges: &[Edge]) -> Result<Self> {
		let mut graph = Self::new(node_count);
		for &(a, b) in edges {
			graph.add_edge(a, b)?;
		}
		Ok(graph)
	}

	/// Connects `a` and `b`. Adding an existing edge again is a no-op.
	pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
		self.check_node(a)?;
		self.check_node(b)?;
		if a == b {
			return Err(Error::InvalidArgument(format!(
				"self-loop on node {a} is not allowed"
			)));
		}
		if self.has_edge(a, b) {
			return Ok(());
		}
		insert_sorted(&mut self.adjacency[a], b);
		insert_sorted(&mut self.adjacency[b], a);
		self.edges.push((a.min(b), a.max(b)));
		Ok(())
	}

	pub fn node_count(&self) -> usize {
		self.adjacency.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn contains(&self, node: NodeId) -> bool {
		node < self.adjacency.len()
	}

	/// All node ids in ascending order.
	pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
		0..self.adjacency.len()
	}

	/// Edges in insertion order, smaller endpoint first.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Neighbors of `node` in ascending order; empty for unknown nodes.
	pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
		self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
		self.adjacency
			.get(a)
			.is_some_and(|neighbors| neighbors.binary_search(&b).is_ok())
	}

	/// Fails with [`Error::InvalidArgument`] unless `node` belongs to this graph.
	pub fn check_node(&self, node: NodeId) -> Result<()> {
		if self.contains(node) {
			Ok(())
		} else {
			Err(Error::InvalidArgument(format!(
				"node {node} is not in a graph of {} nodes",
				self.node_count()
			)))
		}
	}
}

fn insert_sorted(list: &mut Vec<NodeId>, value: NodeId) {
	if let Err(pos) = list.binary_search(&value) {
		list.insert(pos, value);
	}
}

/// Generates an Erdős–Rényi graph: each unordered pair of distinct nodes is
/// connected independently with `probability`.
///
/// Pairs are drawn in lexicographic order, so a seeded `rng` always yields
/// the same graph.
pub fn generate_random<R: Rng + ?Sized>(
	num_nodes: usize,
	probability: f64,
	rng: &mut R,
) -> Result<Graph> {
	if num_nodes == 0 {
		return Err(Error::InvalidArgument(
			"a graph needs at least one node".to_string(),
		));
	}
	if !(0.0..=1.0).contains(&probability) {
		return Err(Error::InvalidArgument(format!(
			"edge probability {probability} is outside [0, 1]"
		)));
	}

	let mut graph = Graph::new(num_nodes);
	for a in 0..num_nodes {
		for b in (a + 1)..num_nodes {
			if rng.gen_bool(probability) {
				graph.add_edge(a, b)?;
			}
		}
	}

	info!(
		"generated random graph: {} nodes, {} edges (p = {probability})",
		graph.node_count(),
		graph.edge_count()
	);
	Ok(graph)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn test_add_edge_keeps_neighbors_sorted_and_deduplicated() {
		let mut graph = Graph::new(4);
		graph.add_edge(3, 0).unwrap();
		graph.add_edge(1, 0).unwrap();
		graph.add_edge(0, 1).unwrap();

		assert_eq!(graph.neighbors(0), &[1, 3]);
		assert_eq!(graph.edges(), &[(0, 3), (0, 1)]);
		assert_eq!(graph.edge_count(), 2);
		assert!(graph.has_edge(3, 0));
	}

	#[test]
	fn test_add_edge_rejects_unknown_nodes_and_self_loops() {
		let mut graph = Graph::new(3);
		assert!(matches!(graph.add_edge(0, 3), Err(Error::InvalidArgument(_))));
		assert!(matches!(graph.add_edge(2, 2), Err(Error::InvalidArgument(_))));
		assert_eq!(graph.edge_count(), 0);
	}

	#[test]
	fn test_neighbors_of_unknown_node_is_empty() {
		let graph = Graph::new(2);
		assert!(graph.neighbors(7).is_empty());
	}

	#[test]
	fn test_generate_random_rejects_bad_parameters() {
		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(
			generate_random(0, 0.5, &mut rng),
			Err(Error::InvalidArgument(_))
		));
		assert!(matches!(
			generate_random(5, 1.5, &mut rng),
			Err(Error::InvalidArgument(_))
		));
		assert!(matches!(
			generate_random(5, -0.1, &mut rng),
			Err(Error::InvalidArgument(_))
		));
		assert!(matches!(
			generate_random(5, f64::NAN, &mut rng),
			Err(Error::InvalidArgument(_))
		));
	}

	#[test]
	fn test_generate_random_extreme_probabilities() {
		let mut rng = StdRng::seed_from_u64(7);
		let empty = generate_random(6, 0.0, &mut rng).unwrap();
		assert_eq!(empty.node_count(), 6);
		assert_eq!(empty.edge_count(), 0);

		let complete = generate_random(6, 1.0, &mut rng).unwrap();
		assert_eq!(complete.edge_count(), 15);
	}

	#[test]
	fn test_generate_random_is_deterministic_with_seed() {
		let a = generate_random(12, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
		let b = generate_random(12, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
		assert_eq!(a, b);
	}

	proptest! {
		#[test]
		fn prop_generated_edges_have_valid_endpoints(
			num_nodes in 1usize..30,
			probability in 0.0f64..=1.0,
			seed in any::<u64>(),
		) {
			let graph = generate_random(num_nodes, probability, &mut StdRng::seed_from_u64(seed)).unwrap();
			prop_assert_eq!(graph.node_count(), num_nodes);
			for &(a, b) in graph.edges() {
				prop_assert!(a < num_nodes && b < num_nodes);
				prop_assert!(a < b);
				prop_assert!(graph.neighbors(a).contains(&b));
				prop_assert!(graph.neighbors(b).contains(&a));
			}
		}
	}
}
