//! Depth-first and breadth-first visitation orders.
//!
//! Both functions are pure: they read the graph and return the full order,
//! which the sequencer later replays one event at a time.

use std::collections::{HashSet, VecDeque};

use log::info;

use super::{Edge, Graph, NodeId};
use crate::error::Result;

/// One breadth-first visitation event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BfsVisit {
	pub node: NodeId,
	/// `(node, neighbor)` for every neighbor of `node`, not only the tree edges.
	pub edges: Vec<Edge>,
}

/// Pre-order depth-first traversal of the component containing `start`.
///
/// Uses an explicit stack of `(node, next neighbor index)` frames, so the
/// order matches the recursive formulation without its recursion depth.
pub fn depth_first(graph: &Graph, start: NodeId) -> Result<Vec<NodeId>> {
	graph.check_node(start)?;

	let mut visited = HashSet::new();
	let mut order = Vec::new();
	let mut stack: Vec<(NodeId, usize)> = Vec::new();

	visited.insert(start);
	order.push(start);
	stack.push((start, 0));

	while let Some((node, next)) = stack.last_mut() {
		let Some(&neighbor) = graph.neighbors(*node).get(*next) else {
			stack.pop();
			continue;
		};
		*next += 1;
		if visited.insert(neighbor) {
			order.push(neighbor);
			stack.push((neighbor, 0));
		}
	}

	info!("DFS traversal order from {start}: {order:?}");
	Ok(order)
}

/// Breadth-first traversal of the component containing `start`.
///
/// A node may sit in the queue several times; it is recorded only on its
/// first dequeue.
pub fn breadth_first(graph: &Graph, start: NodeId) -> Result<Vec<BfsVisit>> {
	graph.check_node(start)?;

	let mut visited = HashSet::new();
	let mut order = Vec::new();
	let mut queue = VecDeque::from([start]);

	while let Some(node) = queue.pop_front() {
		if !visited.insert(node) {
			continue;
		}
		let neighbors = graph.neighbors(node);
		order.push(BfsVisit {
			node,
			edges: neighbors.iter().map(|&neighbor| (node, neighbor)).collect(),
		});
		queue.extend(neighbors.iter().filter(|n| !visited.contains(*n)));
	}

	info!(
		"BFS traversal order from {start}: {:?}",
		order.iter().map(|visit| visit.node).collect::<Vec<_>>()
	);
	Ok(order)
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::error::Error;
	use crate::graph::generate_random;

	fn sample_graph() -> Graph {
		Graph::from_edges(4, &[(0, 1), (0, 2), (1, 3)]).unwrap()
	}

	/// Hop distance from `start` to every reachable node.
	fn distances(graph: &Graph, start: NodeId) -> HashMap<NodeId, usize> {
		let mut dist = HashMap::from([(start, 0)]);
		let mut queue = VecDeque::from([start]);
		while let Some(node) = queue.pop_front() {
			let d = dist[&node];
			for &n in graph.neighbors(node) {
				if !dist.contains_key(&n) {
					dist.insert(n, d + 1);
					queue.push_back(n);
				}
			}
		}
		dist
	}

	#[test]
	fn test_depth_first_sample_graph() {
		let order = depth_first(&sample_graph(), 0).unwrap();
		assert_eq!(order, vec![0, 1, 3, 2]);
	}

	#[test]
	fn test_breadth_first_sample_graph() {
		let order = breadth_first(&sample_graph(), 0).unwrap();
		let nodes: Vec<NodeId> = order.iter().map(|visit| visit.node).collect();
		assert_eq!(nodes, vec![0, 1, 2, 3]);
	}

	#[test]
	fn test_breadth_first_records_all_incident_edges() {
		let order = breadth_first(&sample_graph(), 0).unwrap();
		assert_eq!(order[0].edges, vec![(0, 1), (0, 2)]);
		assert_eq!(order[1].edges, vec![(1, 0), (1, 3)]);
		assert_eq!(order[2].edges, vec![(2, 0)]);
		assert_eq!(order[3].edges, vec![(3, 1)]);
	}

	#[test]
	fn test_breadth_first_records_node_once_despite_duplicate_enqueues() {
		// 3 is enqueued from both 1 and 2 before it is dequeued.
		let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
		let order = breadth_first(&graph, 0).unwrap();
		let nodes: Vec<NodeId> = order.iter().map(|visit| visit.node).collect();
		assert_eq!(nodes, vec![0, 1, 2, 3]);
	}

	#[test]
	fn test_traversals_stay_in_start_component() {
		let graph = Graph::from_edges(5, &[(0, 1), (3, 4)]).unwrap();
		assert_eq!(depth_first(&graph, 3).unwrap(), vec![3, 4]);
		assert_eq!(breadth_first(&graph, 2).unwrap().len(), 1);
	}

	#[test]
	fn test_invalid_start_node() {
		let graph = sample_graph();
		assert!(matches!(depth_first(&graph, 99), Err(Error::InvalidArgument(_))));
		assert!(matches!(breadth_first(&graph, 99), Err(Error::InvalidArgument(_))));
	}

	#[test]
	fn test_depth_first_handles_long_paths() {
		let edges: Vec<Edge> = (0..9_999).map(|i| (i, i + 1)).collect();
		let graph = Graph::from_edges(10_000, &edges).unwrap();
		let order = depth_first(&graph, 0).unwrap();
		assert_eq!(order.len(), 10_000);
		assert_eq!(order.last(), Some(&9_999));
	}

	proptest! {
		#[test]
		fn prop_depth_first_is_valid_preorder(
			num_nodes in 1usize..25,
			probability in 0.0f64..=0.6,
			seed in any::<u64>(),
		) {
			let mut rng = StdRng::seed_from_u64(seed);
			let graph = generate_random(num_nodes, probability, &mut rng).unwrap();
			let start = seed as usize % num_nodes;
			let order = depth_first(&graph, start).unwrap();

			prop_assert_eq!(order.first(), Some(&start));
			let position: HashMap<NodeId, usize> =
				order.iter().enumerate().map(|(i, &n)| (n, i)).collect();
			prop_assert_eq!(position.len(), order.len());
			prop_assert_eq!(position.len(), distances(&graph, start).len());

			// Each later node hangs off the deepest still-open ancestor, which
			// must be adjacent to it and come earlier in the order.
			let mut path = vec![start];
			for &node in order.iter().skip(1) {
				while let Some(&top) = path.last() {
					if graph.has_edge(top, node) {
						break;
					}
					path.pop();
				}
				prop_assert!(!path.is_empty());
				path.push(node);
			}
		}

		#[test]
		fn prop_breadth_first_visits_by_distance(
			num_nodes in 1usize..25,
			probability in 0.0f64..=0.6,
			seed in any::<u64>(),
		) {
			let mut rng = StdRng::seed_from_u64(seed);
			let graph = generate_random(num_nodes, probability, &mut rng).unwrap();
			let start = seed as usize % num_nodes;
			let order = breadth_first(&graph, start).unwrap();
			let dist = distances(&graph, start);

			prop_assert_eq!(order.len(), dist.len());
			let mut seen = HashSet::new();
			let mut last_distance = 0;
			for visit in &order {
				prop_assert!(seen.insert(visit.node));
				let d = dist[&visit.node];
				prop_assert!(d >= last_distance);
				last_distance = d;
				prop_assert_eq!(visit.edges.len(), graph.neighbors(visit.node).len());
			}
		}
	}
}
