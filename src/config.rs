//! Session configuration.
//!
//! The host page may embed a JSON object in `<script id="session-config">`;
//! missing fields fall back to their defaults.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Parameters for graph generation.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
	/// Number of nodes in each generated graph.
	pub num_nodes: usize,
	/// Probability that any given pair of nodes is connected.
	pub probability: f64,
	/// Fixed seed for reproducible sessions; entropy-seeded when absent.
	pub seed: Option<u64>,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			num_nodes: 10,
			probability: 0.3,
			seed: None,
		}
	}
}

impl SessionConfig {
	/// Parses a configuration from JSON text.
	pub fn from_json(text: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(text)
			.map_err(|e| Error::InvalidArgument(format!("malformed session config: {e}")))?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.num_nodes == 0 {
			return Err(Error::InvalidArgument(
				"num_nodes must be at least 1".to_string(),
			));
		}
		if !(0.0..=1.0).contains(&self.probability) {
			return Err(Error::InvalidArgument(format!(
				"probability {} is outside [0, 1]",
				self.probability
			)));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = SessionConfig::default();
		assert_eq!(config.num_nodes, 10);
		assert_eq!(config.probability, 0.3);
		assert!(config.seed.is_none());
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_from_json_partial() {
		let config = SessionConfig::from_json(r#"{ "num_nodes": 25, "seed": 9 }"#).unwrap();
		assert_eq!(config.num_nodes, 25);
		assert_eq!(config.probability, 0.3);
		assert_eq!(config.seed, Some(9));
	}

	#[test]
	fn test_from_json_rejects_invalid_values() {
		assert!(matches!(
			SessionConfig::from_json(r#"{ "num_nodes": 0 }"#),
			Err(Error::InvalidArgument(_))
		));
		assert!(matches!(
			SessionConfig::from_json(r#"{ "probability": 2.0 }"#),
			Err(Error::InvalidArgument(_))
		));
		assert!(matches!(
			SessionConfig::from_json("not json"),
			Err(Error::InvalidArgument(_))
		));
	}
}
