use log::warn;

use super::config::SceneConfig;
use super::render;
use super::surface::Surface;
use super::types::{Connection, DiagramData, Layer, Node};

/// Rotation and zoom, the only state that changes after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
	pub rotation: f64,
	pub zoom: f64,
}

/// Two counter-rotating rings of labelled nodes plus their connections.
pub struct SceneRenderer {
	pub config: SceneConfig,
	pub outer_nodes: Vec<Node>,
	pub inner_nodes: Vec<Node>,
	pub outer_connections: Vec<Connection>,
	pub inner_connections: Vec<Connection>,
	pub cross_connections: Vec<Connection>,
	pub center: (f64, f64),
	state: RenderState,
}

impl SceneRenderer {
	pub fn new(data: &DiagramData, config: SceneConfig, width: f64, height: f64) -> Self {
		let config = config.normalized();
		let (outer_nodes, inner_nodes) = (
			Node::ring(data.outer.as_slice()),
			Node::ring(data.inner.as_slice()),
		);
		let (outer_connections, inner_connections) = (
			Connection::ring(outer_nodes.len()),
			Connection::ring(inner_nodes.len()),
		);

		let cross_connections = data
			.cross
			.iter()
			.filter_map(|&(a, b)| {
				if a < outer_nodes.len() && b < inner_nodes.len() {
					Some(Connection { a, b })
				} else {
					warn!("dropping cross connection ({a}, {b}): index out of range");
					None
				}
			})
			.collect();

		let state = RenderState {
			rotation: 0.0,
			zoom: config.clamp_zoom(config.zoom_initial),
		};

		Self {
			config,
			outer_nodes,
			inner_nodes,
			outer_connections,
			inner_connections,
			cross_connections,
			center: (width / 2.0, height / 2.0),
			state,
		}
	}

	pub fn zoom(&self) -> f64 {
		self.state.zoom
	}

	pub fn nodes(&self, layer: Layer) -> &[Node] {
		match layer {
			Layer::Outer => &self.outer_nodes,
			Layer::Inner => &self.inner_nodes,
		}
	}

	/// Position of `node` on `layer` for the given rotation, in unzoomed
	/// canvas coordinates. The outer ring turns forward at `outer_rate`, the
	/// inner ring backward at full rate.
	pub fn compute_position(&self, node: &Node, layer: Layer, rotation: f64) -> (f64, f64) {
		let angle = match layer {
			Layer::Outer => node.angle + rotation * self.config.outer_rate,
			Layer::Inner => node.angle - rotation,
		};
		let radius = self.config.radius(layer);
		(
			self.center.0 + radius * angle.cos(),
			self.center.1 + radius * angle.sin(),
		)
	}

	/// Positions of every node on `layer` at the current rotation.
	pub fn positions(&self, layer: Layer) -> Vec<(f64, f64)> {
		self.nodes(layer)
			.iter()
			.map(|node| self.compute_position(node, layer, self.state.rotation))
			.collect()
	}

	/// Applies a wheel delta. Scrolling down (positive delta) zooms out.
	pub fn on_wheel(&mut self, delta_y: f64) {
		let zoom = self.state.zoom - delta_y * self.config.wheel_sensitivity;
		self.state.zoom = self.config.clamp_zoom(zoom);
	}

	/// Paints one frame and advances the rotation. Scheduling is left to
	/// the caller.
	pub fn render_frame<S: Surface>(&mut self, surface: &mut S) {
		render::render(self, surface);
		self.advance();
	}

	fn advance(&mut self) {
		self.state.rotation += self.config.rotation_step;
	}
}

#[cfg(test)]
impl SceneRenderer {
	pub fn state(&self) -> RenderState {
		self.state
	}

	pub fn rotation(&self) -> f64 {
		self.state.rotation
	}
}
