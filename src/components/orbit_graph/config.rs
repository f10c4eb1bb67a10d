use super::types::Layer;

/// Colours and stroke widths for one ring.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStyle {
	pub fill: String,
	pub border: String,
	pub ring_color: String,
	pub ring_width: f64,
}

/// Geometry, motion and styling knobs for the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
	pub outer_radius: f64,
	pub inner_radius: f64,
	pub node_radius: f64,
	pub node_border_width: f64,
	/// Labels wrap once a line grows wider than `node_radius * wrap_factor`.
	pub wrap_factor: f64,
	pub font_px: f64,
	pub line_height_px: f64,
	pub font_family: String,
	pub label_color: String,
	/// Radians added to the rotation angle every frame.
	pub rotation_step: f64,
	/// The outer ring turns at this fraction of the rotation angle.
	pub outer_rate: f64,
	pub zoom_min: f64,
	pub zoom_max: f64,
	pub zoom_initial: f64,
	pub wheel_sensitivity: f64,
	pub outer: LayerStyle,
	pub inner: LayerStyle,
	pub cross_color: String,
	pub cross_width: f64,
}

impl SceneConfig {
	pub fn radius(&self, layer: Layer) -> f64 {
		match layer {
			Layer::Outer => self.outer_radius,
			Layer::Inner => self.inner_radius,
		}
	}

	pub fn style(&self, layer: Layer) -> &LayerStyle {
		match layer {
			Layer::Outer => &self.outer,
			Layer::Inner => &self.inner,
		}
	}

	/// Orders the zoom bounds and swaps non-finite or non-positive zoom
	/// settings for the defaults.
	pub fn normalized(mut self) -> Self {
		let defaults = SceneConfig::default();
		let positive = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };

		let (min, max) = (
			positive(self.zoom_min, defaults.zoom_min),
			positive(self.zoom_max, defaults.zoom_max),
		);
		self.zoom_min = min.min(max);
		self.zoom_max = min.max(max);
		self.zoom_initial = positive(self.zoom_initial, defaults.zoom_initial);
		if !self.wheel_sensitivity.is_finite() {
			self.wheel_sensitivity = defaults.wheel_sensitivity;
		}
		self
	}

	pub fn clamp_zoom(&self, zoom: f64) -> f64 {
		// NaN from a degenerate wheel delta would otherwise escape the clamp.
		let zoom = if zoom.is_nan() { self.zoom_initial } else { zoom };
		zoom.max(self.zoom_min).min(self.zoom_max)
	}
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			outer_radius: 300.0,
			inner_radius: 170.0,
			node_radius: 20.0,
			node_border_width: 1.5,
			wrap_factor: 2.5,
			font_px: 9.0,
			line_height_px: 10.0,
			font_family: "Arial".into(),
			label_color: "black".into(),
			rotation_step: 0.007,
			outer_rate: 0.5,
			zoom_min: 0.4,
			zoom_max: 2.5,
			zoom_initial: 1.0,
			wheel_sensitivity: 0.001,
			outer: LayerStyle {
				fill: "#5aa9e6".into(),
				border: "#003366".into(),
				ring_color: "#0b3d91".into(),
				ring_width: 1.0,
			},
			inner: LayerStyle {
				fill: "#9fd3f0".into(),
				border: "#02577a".into(),
				ring_color: "#1a5fb4".into(),
				ring_width: 0.8,
			},
			cross_color: "#1177cc".into(),
			cross_width: 0.7,
		}
	}
}
