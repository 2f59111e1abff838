//! Canvas rendering for the traversal view.
//!
//! Passes, back to front:
//! 1. Background (screen space)
//! 2. Untouched edges, then traversed edges on top (world space)
//! 3. Nodes with their id labels, then the ring around the latest visit

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{NodeInfo, TraversalCanvasState};
use super::theme::Theme;

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &TraversalCanvasState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();
}

fn draw_background(state: &TraversalCanvasState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = theme
		.background
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.ok()
		})
		.flatten();

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&theme.background.color.to_css()),
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_edges(
	state: &TraversalCanvasState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_stroke_style_str(&theme.edge.color.to_css());
	ctx.set_line_width(scale.edge_line_width);
	state.graph.visit_edges(|n1, n2, _| {
		draw_segment(ctx, n1, n2);
	});

	state.graph.visit_edges(|n1, n2, _| {
		let t = smooth_step(
			state
				.highlight
				.edge_intensity(n1.data.user_data.id, n2.data.user_data.id),
		);
		if t < 0.01 {
			return;
		}
		ctx.set_stroke_style_str(&theme.edge.traversed_color.with_alpha(t).to_css());
		ctx.set_line_width(
			scale.edge_line_width + (scale.traversed_line_width - scale.edge_line_width) * t,
		);
		draw_segment(ctx, n1, n2);
	});
}

fn draw_segment(
	ctx: &CanvasRenderingContext2d,
	n1: &force_graph::Node<NodeInfo>,
	n2: &force_graph::Node<NodeInfo>,
) {
	ctx.begin_path();
	ctx.move_to(n1.x() as f64, n1.y() as f64);
	ctx.line_to(n2.x() as f64, n2.y() as f64);
	ctx.stroke();
}

fn draw_nodes(
	state: &TraversalCanvasState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	state.graph.visit_nodes(|node| {
		let t = smooth_step(state.highlight.node_intensity(node.data.user_data.id));
		let radius = scale.node_radius * (1.0 + (scale.visited_growth - 1.0) * t);
		draw_node(ctx, node, scale, theme, radius, t);
	});

	let Some(latest) = state.highlight.latest() else {
		return;
	};
	state.graph.visit_nodes(|node| {
		if node.data.user_data.id != latest {
			return;
		}
		let t = smooth_step(state.highlight.node_intensity(latest));
		let radius = scale.node_radius * scale.visited_growth + scale.ring_offset;
		ctx.begin_path();
		let _ = ctx.arc(node.x() as f64, node.y() as f64, radius, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&theme.node.ring_color.with_alpha(0.8 * t).to_css());
		ctx.set_line_width(scale.ring_width);
		ctx.stroke();
	});
}

/// Draws one node, blending from the base color to the visited color by `t`.
fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &force_graph::Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
	radius: f64,
	t: f64,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let color = theme.node.color.lerp(theme.node.visited_color, t);

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	let gradient = theme
		.node
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
				.ok()
		})
		.flatten();
	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &color.to_css());
			let _ = gradient.add_color_stop(1.0, &color.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&color.to_css()),
	}
	ctx.fill();

	ctx.set_fill_style_str(&theme.node.label_color.to_css());
	ctx.set_font(&scale.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(&node.data.user_data.label, x, y);
}
