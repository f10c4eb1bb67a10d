use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, WheelEvent, Window};

use super::config::SceneConfig;
use super::frame_loop::RenderLoop;
use super::state::SceneRenderer;
use super::surface::CanvasSurface;
use super::types::DiagramData;
use crate::error::SetupError;

type SharedScene = Rc<RefCell<Option<SceneRenderer>>>;

#[component]
pub fn OrbitGraphCanvas(
	#[prop(optional)] data: DiagramData,
	#[prop(optional)] config: SceneConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: SharedScene = Rc::new(RefCell::new(None));
	let frame_loop = StoredValue::new_local(None::<RenderLoop>);
	let scene_init = scene.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let started = start_scene(
			&canvas,
			&scene_init,
			&data,
			&config,
			fullscreen,
			(width, height),
		);
		match started {
			Ok(render_loop) => frame_loop.set_value(Some(render_loop)),
			Err(err) => error!("orbit graph setup failed: {err}"),
		}
	});

	on_cleanup(move || {
		let _ = frame_loop.try_update_value(|render_loop| {
			if let Some(render_loop) = render_loop.take() {
				render_loop.stop();
			}
		});
	});

	let scene_wh = scene.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(ref mut s) = *scene_wh.borrow_mut() {
			s.on_wheel(ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="orbit-graph-canvas"
			on:wheel=on_wheel
			style="display: block;"
		/>
	}
}

fn start_scene(
	canvas: &HtmlCanvasElement,
	scene: &SharedScene,
	data: &DiagramData,
	config: &SceneConfig,
	fullscreen: bool,
	(width, height): (Option<f64>, Option<f64>),
) -> Result<RenderLoop, SetupError> {
	let window: Window = web_sys::window().ok_or(SetupError::NoWindow)?;

	let (w, h) = if fullscreen {
		(
			window_dimension(window.inner_width(), 800.0),
			window_dimension(window.inner_height(), 600.0),
		)
	} else {
		(
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.filter(|w| *w > 0.0)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.filter(|h| *h > 0.0)
					.unwrap_or(600.0)
			}),
		)
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(|_| SetupError::ContextUnavailable)?
		.ok_or(SetupError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| SetupError::ContextType)?;
	debug!("canvas sized to {w}x{h}");

	*scene.borrow_mut() = Some(SceneRenderer::new(data, config.clone(), w, h));

	let (scene_anim, mut surface) = (scene.clone(), CanvasSurface::new(ctx, w, h));
	RenderLoop::start(move || {
		if let Some(ref mut s) = *scene_anim.borrow_mut() {
			s.render_frame(&mut surface);
		}
	})
}

fn window_dimension(value: Result<JsValue, JsValue>, fallback: f64) -> f64 {
	value.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
}
