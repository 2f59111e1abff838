//! Zoom-dependent scaling for canvas visuals.
//!
//! Sizes are expressed in world units (the graph's coordinate system) and are
//! converted once per frame into [`ScaledValues`] for the current zoom `k`.

/// How a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value for `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// Node sizing.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	pub radius: f64,
	pub radius_behavior: ScaleBehavior,
	/// Radius multiplier once a node is fully visited.
	pub visited_growth: f64,
	pub hit_radius: f64,
	pub hit_behavior: ScaleBehavior,
	/// Label font size in screen pixels.
	pub label_size: f64,
	/// Zoom below which labels stop shrinking.
	pub label_min_k: f64,
}

/// Edge line widths in screen pixels.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	pub line_width: f64,
	pub traversed_width: f64,
}

/// Ring around the latest visited node, in screen pixels.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	pub width: f64,
	pub offset: f64,
}

/// Complete scale configuration for all canvas elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub edge: EdgeScaleConfig,
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 14.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
				visited_growth: 1.25,
				hit_radius: 18.0,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 8.0,
					max_screen: f64::INFINITY,
				},
				label_size: 12.0,
				label_min_k: 0.5,
			},
			edge: EdgeScaleConfig {
				line_width: 1.5,
				traversed_width: 3.0,
			},
			ring: RingScaleConfig {
				width: 2.0,
				offset: 3.0,
			},
		}
	}
}

/// Scale values resolved for one zoom level, in world space.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub k: f64,
	pub node_radius: f64,
	pub visited_growth: f64,
	pub hit_radius: f64,
	/// e.g. "bold 12px sans-serif"
	pub label_font: String,
	pub edge_line_width: f64,
	pub traversed_line_width: f64,
	pub ring_width: f64,
	pub ring_offset: f64,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let label_font_size = config.node.label_size / k.max(config.node.label_min_k);

		Self {
			k,
			node_radius: config.node.radius_behavior.apply(config.node.radius, k),
			visited_growth: config.node.visited_growth,
			hit_radius: config.node.hit_behavior.apply(config.node.hit_radius, k),
			label_font: format!("bold {}px sans-serif", label_font_size),
			edge_line_width: ScaleBehavior::Screen.apply(config.edge.line_width, k),
			traversed_line_width: ScaleBehavior::Screen.apply(config.edge.traversed_width, k),
			ring_width: ScaleBehavior::Screen.apply(config.ring.width, k),
			ring_offset: ScaleBehavior::Screen.apply(config.ring.offset, k),
		}
	}
}
