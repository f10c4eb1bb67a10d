use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;

use crate::error::SetupError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that reschedules itself after every frame
/// until stopped or dropped.
pub struct RenderLoop {
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
}

impl RenderLoop {
	/// Schedules `frame` for the next repaint and keeps rescheduling it.
	pub fn start<F>(mut frame: F) -> Result<Self, SetupError>
	where
		F: FnMut() + 'static,
	{
		let window = web_sys::window().ok_or(SetupError::NoWindow)?;
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));

		let (callback_inner, pending_inner) = (callback.clone(), pending.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			frame();
			if let Some(ref cb) = *callback_inner.borrow() {
				let next = web_sys::window()
					.and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
				pending_inner.set(next);
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}

		info!("render loop started");
		Ok(Self { callback, pending })
	}

	/// Cancels the pending frame and releases the callback. Must not be
	/// called from inside the frame callback.
	pub fn stop(&self) {
		if let Some(id) = self.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		if self.callback.borrow_mut().take().is_some() {
			info!("render loop stopped");
		}
	}
}

impl Drop for RenderLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
