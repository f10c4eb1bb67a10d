use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

/// Immediate-mode 2D drawing target the scene paints onto.
pub trait Surface {
	fn clear(&mut self);
	fn save(&mut self);
	fn restore(&mut self);
	fn translate(&mut self, x: f64, y: f64);
	fn scale(&mut self, k: f64);
	fn circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, border: &str, border_width: f64);
	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
	/// Sets the font used by later `measure_text` and `fill_text` calls.
	fn set_font(&mut self, px: f64, family: &str);
	fn measure_text(&self, text: &str) -> f64;
	/// Draws `text` centred horizontally and vertically on `(x, y)`.
	fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str);
}

/// A `<canvas>` 2d context together with the canvas pixel size.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
		Self { ctx, width, height }
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
	}

	fn save(&mut self) {
		self.ctx.save();
	}

	fn restore(&mut self) {
		self.ctx.restore();
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = self.ctx.translate(x, y);
	}

	fn scale(&mut self, k: f64) {
		let _ = self.ctx.scale(k, k);
	}

	fn circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, border: &str, border_width: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		self.ctx.set_fill_style_str(fill);
		self.ctx.fill();
		self.ctx.set_line_width(border_width);
		self.ctx.set_stroke_style_str(border);
		self.ctx.stroke();
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.set_stroke_style_str(color);
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}

	fn set_font(&mut self, px: f64, family: &str) {
		self.ctx.set_font(&format!("{}px {}", px, family));
		self.ctx.set_text_align("center");
		self.ctx.set_text_baseline("middle");
	}

	fn measure_text(&self, text: &str) -> f64 {
		self.ctx
			.measure_text(text)
			.map(|m| m.width())
			.unwrap_or_default()
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		let _ = self.ctx.fill_text(text, x, y);
	}
}

#[cfg(test)]
pub(crate) mod recording {
	//! In-memory surface that records draw calls in order.

	use super::Surface;

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Clear,
		Save,
		Restore,
		Translate(f64, f64),
		Scale(f64),
		Circle { x: f64, y: f64, radius: f64, fill: String },
		Line { from: (f64, f64), to: (f64, f64), color: String, width: f64 },
		Font(f64),
		Text { text: String, x: f64, y: f64 },
	}

	/// Monospace metrics: every char is half the font size wide.
	pub struct RecordingSurface {
		pub font_px: f64,
		pub ops: Vec<Op>,
	}

	impl RecordingSurface {
		pub fn new() -> Self {
			Self {
				font_px: 10.0,
				ops: Vec::new(),
			}
		}
	}

	impl Surface for RecordingSurface {
		fn clear(&mut self) {
			self.ops.push(Op::Clear);
		}

		fn save(&mut self) {
			self.ops.push(Op::Save);
		}

		fn restore(&mut self) {
			self.ops.push(Op::Restore);
		}

		fn translate(&mut self, x: f64, y: f64) {
			self.ops.push(Op::Translate(x, y));
		}

		fn scale(&mut self, k: f64) {
			self.ops.push(Op::Scale(k));
		}

		fn circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, _: &str, _: f64) {
			self.ops.push(Op::Circle {
				x,
				y,
				radius,
				fill: fill.to_owned(),
			});
		}

		fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
			self.ops.push(Op::Line {
				from,
				to,
				color: color.to_owned(),
				width,
			});
		}

		fn set_font(&mut self, px: f64, _: &str) {
			self.font_px = px;
			self.ops.push(Op::Font(px));
		}

		fn measure_text(&self, text: &str) -> f64 {
			text.chars().count() as f64 * self.font_px * 0.5
		}

		fn fill_text(&mut self, text: &str, x: f64, y: f64, _: &str) {
			self.ops.push(Op::Text {
				text: text.to_owned(),
				x,
				y,
			});
		}
	}
}
