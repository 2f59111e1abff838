//! One interactive session: a graph, its two traversals and their replay.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::graph::{Graph, NodeId, breadth_first, depth_first, generate_random};
use crate::sequencer::Sequencer;

/// Owns the random source, the current graph and the sequencer replaying
/// its traversals. DFS and BFS start from independently drawn nodes.
pub struct Session {
	config: SessionConfig,
	rng: StdRng,
	graph: Graph,
	dfs_start: NodeId,
	bfs_start: NodeId,
	sequencer: Sequencer,
	generation: u64,
}

impl Session {
	pub fn new(config: SessionConfig) -> Result<Self> {
		config.validate()?;
		let rng = match config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		let mut session = Self {
			config,
			rng,
			graph: Graph::default(),
			dfs_start: 0,
			bfs_start: 0,
			sequencer: Sequencer::default(),
			generation: 0,
		};
		session.regenerate()?;
		Ok(session)
	}

	/// Draws a new graph and start nodes, recomputes both traversals and
	/// resets the sequencer. On error the previous state is kept.
	pub fn regenerate(&mut self) -> Result<()> {
		let graph = generate_random(self.config.num_nodes, self.config.probability, &mut self.rng)?;
		let dfs_start = self.rng.gen_range(0..graph.node_count());
		let bfs_start = self.rng.gen_range(0..graph.node_count());
		let dfs_order = depth_first(&graph, dfs_start)?;
		let bfs_order = breadth_first(&graph, bfs_start)?;

		self.graph = graph;
		self.dfs_start = dfs_start;
		self.bfs_start = bfs_start;
		self.sequencer.reset(dfs_order, bfs_order);
		self.generation += 1;
		info!(
			"session graph #{}: DFS from {dfs_start}, BFS from {bfs_start}",
			self.generation
		);
		Ok(())
	}

	pub fn step_dfs(&mut self) -> bool {
		self.sequencer.step_dfs()
	}

	pub fn step_bfs(&mut self) -> bool {
		self.sequencer.step_bfs()
	}

	pub fn config(&self) -> &SessionConfig {
		&self.config
	}

	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	pub fn dfs_start(&self) -> NodeId {
		self.dfs_start
	}

	pub fn bfs_start(&self) -> NodeId {
		self.bfs_start
	}

	pub fn sequencer(&self) -> &Sequencer {
		&self.sequencer
	}

	/// Counts generated graphs; changes exactly when the graph is replaced.
	pub fn generation(&self) -> u64 {
		self.generation
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use crate::sequencer::ChannelState;

	fn seeded(seed: u64) -> SessionConfig {
		SessionConfig {
			num_nodes: 12,
			probability: 0.3,
			seed: Some(seed),
		}
	}

	#[test]
	fn test_new_session_is_idle() {
		let session = Session::new(seeded(3)).unwrap();
		assert_eq!(session.generation(), 1);
		assert_eq!(session.graph().node_count(), 12);
		assert_eq!(session.sequencer().dfs().state(), ChannelState::Idle);
		assert_eq!(session.sequencer().bfs().state(), ChannelState::Idle);
		assert_eq!(session.sequencer().dfs().order().first(), Some(&session.dfs_start()));
		assert_eq!(
			session.sequencer().bfs().order().first().map(|visit| visit.node),
			Some(session.bfs_start())
		);
	}

	#[test]
	fn test_seeded_sessions_match() {
		let a = Session::new(seeded(11)).unwrap();
		let b = Session::new(seeded(11)).unwrap();
		assert_eq!(a.graph(), b.graph());
		assert_eq!(a.sequencer(), b.sequencer());
	}

	#[test]
	fn test_regenerate_resets_progress() {
		let mut session = Session::new(seeded(5)).unwrap();
		assert!(session.step_dfs());
		assert!(session.step_bfs());
		assert!(!session.sequencer().highlight().visited.is_empty());

		session.regenerate().unwrap();
		assert_eq!(session.generation(), 2);
		assert!(session.sequencer().highlight().visited.is_empty());
		assert_eq!(session.sequencer().dfs().cursor(), 0);
		assert_eq!(session.sequencer().bfs().cursor(), 0);
	}

	#[test]
	fn test_invalid_config_is_rejected() {
		let config = SessionConfig {
			num_nodes: 0,
			..SessionConfig::default()
		};
		assert!(matches!(Session::new(config), Err(Error::InvalidArgument(_))));
	}
}
