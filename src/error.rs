//! Error types shared by graph generation, traversal and configuration.

use thiserror::Error;

/// Errors raised by the graph core.
///
/// Stepping past the end of a traversal is not an error; only bad inputs are.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
	/// A caller supplied a node id, node count or probability that is out of range.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}

/// Result alias for graph core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = Error::InvalidArgument("node 99 is not in a graph of 4 nodes".to_string());
		assert_eq!(
			err.to_string(),
			"invalid argument: node 99 is not in a graph of 4 nodes"
		);
	}
}
