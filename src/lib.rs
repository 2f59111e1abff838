//! graph-walk: step-by-step DFS and BFS over a random graph.
//!
//! The core (graph generation, traversal orders, replay sequencing) is plain
//! Rust; the WASM front end draws the graph on a canvas and advances each
//! traversal one step per button press.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// rand's entropy source on wasm32 needs getrandom's `js` backend enabled.
use getrandom as _;

pub mod components;
pub mod config;
pub mod error;
pub mod graph;
pub mod sequencer;
pub mod session;

pub use components::traversal_canvas::{GraphData, GraphLink, GraphNode, TraversalCanvas};
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use graph::{BfsVisit, Edge, Graph, NodeId, breadth_first, depth_first, generate_random};
pub use sequencer::{Channel, ChannelState, Highlight, Sequencer};
pub use session::Session;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graph-walk: logging initialized");
}

/// Load the session configuration from a script element with id="session-config".
/// Expected format: JSON with any of { num_nodes, probability, seed }.
fn load_session_config() -> Option<SessionConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("session-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SessionConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"graph-walk: loaded config ({} nodes, p = {})",
				config.num_nodes, config.probability
			);
			Some(config)
		}
		Err(e) => {
			warn!("graph-walk: ignoring session config: {}", e);
			None
		}
	}
}

fn channel_status<T>(channel: &Channel<T>) -> String {
	let state = match channel.state() {
		ChannelState::Idle => "idle",
		ChannelState::Stepping => "stepping",
		ChannelState::Done => "done",
	};
	format!("{}/{} {}", channel.cursor(), channel.len(), state)
}

/// Main application component.
/// Generates a graph from the page's config and renders the canvas with
/// step controls for both traversals.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let session = match Session::new(load_session_config().unwrap_or_default()) {
		Ok(session) => session,
		Err(e) => {
			warn!("graph-walk: failed to start session: {}", e);
			return view! { <p class="error">{e.to_string()}</p> }.into_any();
		}
	};
	let session = RwSignal::new(session);

	let graph_data = Memo::new(move |_| session.with(|s| GraphData::from(s.graph())));
	let highlight = Memo::new(move |_| session.with(|s| s.sequencer().highlight().clone()));
	let dfs_status = move || session.with(|s| channel_status(s.sequencer().dfs()));
	let bfs_status = move || session.with(|s| channel_status(s.sequencer().bfs()));
	let starts = move || {
		session.with(|s| format!("DFS from {}, BFS from {}", s.dfs_start(), s.bfs_start()))
	};

	let step_dfs = move |_: leptos::ev::MouseEvent| {
		session.update(|s| {
			s.step_dfs();
		})
	};
	let step_bfs = move |_: leptos::ev::MouseEvent| {
		session.update(|s| {
			s.step_bfs();
		})
	};
	let new_graph = move |_: leptos::ev::MouseEvent| {
		session.update(|s| {
			if let Err(e) = s.regenerate() {
				warn!("graph-walk: failed to regenerate graph: {}", e);
			}
		})
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Graph Walk" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<TraversalCanvas data=graph_data highlight=highlight fullscreen=true />
			<div class="graph-overlay">
				<h1>"Graph Walk"</h1>
				<p class="subtitle">{starts}</p>
				<div class="controls">
					<button on:click=step_dfs>"Step DFS"</button>
					<span class="status">{dfs_status}</span>
					<button on:click=step_bfs>"Step BFS"</button>
					<span class="status">{bfs_status}</span>
					<button on:click=new_graph>"New graph"</button>
				</div>
			</div>
		</div>
	}
	.into_any()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_channel_status() {
		let mut sequencer = Sequencer::new(vec![0, 1], Vec::new());
		assert_eq!(channel_status(sequencer.dfs()), "0/2 idle");
		sequencer.step_dfs();
		assert_eq!(channel_status(sequencer.dfs()), "1/2 stepping");
		sequencer.step_dfs();
		assert_eq!(channel_status(sequencer.dfs()), "2/2 done");
		assert_eq!(channel_status(sequencer.bfs()), "0/0 done");
	}
}
