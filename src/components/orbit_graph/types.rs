use std::f64::consts::PI;

/// Which ring a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
	Outer,
	Inner,
}

/// A labelled node with a fixed base angle on its ring.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub label: String,
	pub angle: f64,
}

impl Node {
	/// Spreads `labels` evenly around a full turn, starting at angle 0.
	pub fn ring<S: AsRef<str>>(labels: &[S]) -> Vec<Node> {
		let step = 2.0 * PI / labels.len().max(1) as f64;
		labels
			.iter()
			.enumerate()
			.map(|(i, label)| Node {
				label: label.as_ref().to_owned(),
				angle: step * i as f64,
			})
			.collect()
	}
}

/// Index pair into node sequences. For ring connections both indices refer
/// to the same ring; for cross connections `a` is outer and `b` is inner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connection {
	pub a: usize,
	pub b: usize,
}

impl Connection {
	/// Links every node to its circular successor.
	pub fn ring(len: usize) -> Vec<Connection> {
		(0..len)
			.map(|i| Connection {
				a: i,
				b: (i + 1) % len,
			})
			.collect()
	}
}

/// Diagram content supplied to the canvas component.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramData {
	pub outer: Vec<String>,
	pub inner: Vec<String>,
	pub cross: Vec<(usize, usize)>,
}

impl Default for DiagramData {
	fn default() -> Self {
		use super::data::{CROSS_CONNECTIONS, INNER_LABELS, OUTER_LABELS};

		Self {
			outer: OUTER_LABELS.iter().map(|s| s.to_string()).collect(),
			inner: INNER_LABELS.iter().map(|s| s.to_string()).collect(),
			cross: CROSS_CONNECTIONS.to_vec(),
		}
	}
}
