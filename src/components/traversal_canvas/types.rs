//! Graph snapshot handed to the canvas component.

use crate::graph::{Graph, NodeId};

/// A node as drawn on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: NodeId,
	/// Text drawn on the node; the id by default.
	pub label: String,
}

/// An undirected link between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: NodeId,
	pub target: NodeId,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl From<&Graph> for GraphData {
	fn from(graph: &Graph) -> Self {
		Self {
			nodes: graph
				.nodes()
				.map(|id| GraphNode {
					id,
					label: id.to_string(),
				})
				.collect(),
			links: graph
				.edges()
				.iter()
				.map(|&(source, target)| GraphLink { source, target })
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_graph() {
		let graph = Graph::from_edges(3, &[(2, 0)]).unwrap();
		let data = GraphData::from(&graph);
		assert_eq!(data.nodes.len(), 3);
		assert_eq!(data.nodes[2].label, "2");
		assert_eq!(data.links, vec![GraphLink { source: 0, target: 2 }]);
	}
}
