//! Step-by-step replay of precomputed traversal orders.
//!
//! The sequencer owns two independent channels, one per traversal, each with
//! its own cursor. Both channels feed the same cumulative highlight, which is
//! what the canvas draws.

use log::debug;

use crate::graph::{BfsVisit, Edge, NodeId};

/// Progress of a single channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelState {
	/// Nothing replayed yet.
	Idle,
	/// Some, but not all, events replayed.
	Stepping,
	/// Every event replayed; further steps are no-ops.
	Done,
}

/// A traversal order plus a cursor counting replayed events.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel<T> {
	order: Vec<T>,
	cursor: usize,
}

impl<T> Channel<T> {
	pub fn new(order: Vec<T>) -> Self {
		Self { order, cursor: 0 }
	}

	pub fn order(&self) -> &[T] {
		&self.order
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn state(&self) -> ChannelState {
		if self.cursor >= self.order.len() {
			ChannelState::Done
		} else if self.cursor == 0 {
			ChannelState::Idle
		} else {
			ChannelState::Stepping
		}
	}

	/// Moves the cursor past the next event and returns that event's index.
	fn advance(&mut self) -> Option<usize> {
		if self.cursor >= self.order.len() {
			return None;
		}
		self.cursor += 1;
		Some(self.cursor - 1)
	}
}

impl<T> Default for Channel<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

/// Everything revealed so far, in reveal order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
	pub visited: Vec<NodeId>,
	pub edges: Vec<Edge>,
}

/// Replays DFS and BFS orders one event per step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequencer {
	dfs: Channel<NodeId>,
	bfs: Channel<BfsVisit>,
	highlight: Highlight,
}

impl Sequencer {
	pub fn new(dfs_order: Vec<NodeId>, bfs_order: Vec<BfsVisit>) -> Self {
		Self {
			dfs: Channel::new(dfs_order),
			bfs: Channel::new(bfs_order),
			highlight: Highlight::default(),
		}
	}

	/// Replaces both orders and returns every channel to [`ChannelState::Idle`].
	pub fn reset(&mut self, dfs_order: Vec<NodeId>, bfs_order: Vec<BfsVisit>) {
		*self = Self::new(dfs_order, bfs_order);
	}

	/// Reveals the next DFS node. Returns `false` once the order is exhausted.
	pub fn step_dfs(&mut self) -> bool {
		let Some(index) = self.dfs.advance() else {
			return false;
		};
		let node = self.dfs.order[index];
		debug!("DFS step {}/{}: node {node}", self.dfs.cursor(), self.dfs.len());
		self.highlight.visited.push(node);
		true
	}

	/// Reveals the next BFS node together with all of its incident edges.
	/// Returns `false` once the order is exhausted.
	pub fn step_bfs(&mut self) -> bool {
		let Some(index) = self.bfs.advance() else {
			return false;
		};
		let visit = &self.bfs.order[index];
		debug!(
			"BFS step {}/{}: node {}",
			self.bfs.cursor(),
			self.bfs.len(),
			visit.node
		);
		self.highlight.visited.push(visit.node);
		self.highlight.edges.extend_from_slice(&visit.edges);
		true
	}

	pub fn dfs(&self) -> &Channel<NodeId> {
		&self.dfs
	}

	pub fn bfs(&self) -> &Channel<BfsVisit> {
		&self.bfs
	}

	pub fn highlight(&self) -> &Highlight {
		&self.highlight
	}
}
