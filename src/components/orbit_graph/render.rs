use super::config::SceneConfig;
use super::state::SceneRenderer;
use super::surface::Surface;
use super::types::{Connection, Layer};

/// Paints the whole scene under a zoom pivoted on the canvas centre.
pub fn render<S: Surface>(scene: &SceneRenderer, surface: &mut S) {
	let (cx, cy) = scene.center;
	let (config, zoom) = (&scene.config, scene.zoom());

	surface.clear();
	surface.save();
	surface.translate(cx, cy);
	surface.scale(zoom);
	surface.translate(-cx, -cy);

	let (outer, inner) = (scene.positions(Layer::Outer), scene.positions(Layer::Inner));

	draw_ring(surface, &outer, &scene.outer_connections, config, Layer::Outer, zoom);
	draw_ring(surface, &inner, &scene.inner_connections, config, Layer::Inner, zoom);
	for c in &scene.cross_connections {
		draw_connection(
			surface,
			outer[c.a],
			inner[c.b],
			&config.cross_color,
			config.cross_width / zoom,
		);
	}

	// Outer nodes last so they sit on top of the inner ring.
	for layer in [Layer::Inner, Layer::Outer] {
		let style = config.style(layer);
		let positions = if layer == Layer::Outer { &outer } else { &inner };
		for (node, &pos) in scene.nodes(layer).iter().zip(positions) {
			draw_node(surface, config, zoom, pos, &node.label, &style.fill, &style.border);
		}
	}

	surface.restore();
}

fn draw_ring<S: Surface>(
	surface: &mut S,
	positions: &[(f64, f64)],
	connections: &[Connection],
	config: &SceneConfig,
	layer: Layer,
	zoom: f64,
) {
	let style = config.style(layer);
	for c in connections {
		draw_connection(
			surface,
			positions[c.a],
			positions[c.b],
			&style.ring_color,
			style.ring_width / zoom,
		);
	}
}

/// Strokes a straight line. Callers pass `width` already divided by zoom.
pub fn draw_connection<S: Surface>(
	surface: &mut S,
	p1: (f64, f64),
	p2: (f64, f64),
	color: &str,
	width: f64,
) {
	surface.line(p1, p2, color, width);
}

/// A fixed-radius circle with its label wrapped and centred inside. Font
/// size and line height shrink with zoom so text keeps its on-screen size.
pub fn draw_node<S: Surface>(
	surface: &mut S,
	config: &SceneConfig,
	zoom: f64,
	(x, y): (f64, f64),
	label: &str,
	fill: &str,
	border: &str,
) {
	surface.circle(x, y, config.node_radius, fill, border, config.node_border_width);

	surface.set_font(config.font_px / zoom, &config.font_family);
	let max_width = config.node_radius * config.wrap_factor;
	let lines = wrap_label(label, max_width, |text| surface.measure_text(text));

	let line_height = config.line_height_px / zoom;
	let start_y = y - (lines.len() - 1) as f64 * line_height / 2.0;
	for (i, line) in lines.iter().enumerate() {
		surface.fill_text(line, x, start_y + i as f64 * line_height, &config.label_color);
	}
}

/// Greedy word wrap: a word joins the current line unless the joined text
/// measures wider than `max_width`. A word wider than `max_width` on its own
/// gets a line to itself. Always yields at least one line.
///
/// Only the joined words are measured, with no trailing space, so a label
/// that measures within `max_width` as a whole always stays on one line.
pub fn wrap_label<F>(label: &str, max_width: f64, mut measure: F) -> Vec<String>
where
	F: FnMut(&str) -> f64,
{
	let mut lines = Vec::new();
	let mut line = String::new();

	for word in label.split_whitespace() {
		if line.is_empty() {
			line.push_str(word);
			continue;
		}
		let candidate = format!("{line} {word}");
		if measure(&candidate) > max_width {
			lines.push(std::mem::replace(&mut line, word.to_owned()));
		} else {
			line = candidate;
		}
	}
	lines.push(line);
	lines
}
