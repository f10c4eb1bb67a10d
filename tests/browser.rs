//! Browser-side behaviour of the render loop and the menu binding.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use orbit_diagram_canvas::{MenuBinding, MenuIds, RenderLoop};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

async fn next_frames(n: u32) {
	for _ in 0..n {
		let promise = js_sys::Promise::new(&mut |resolve, _| {
			let _ = web_sys::window().unwrap().request_animation_frame(&resolve);
		});
		let _ = JsFuture::from(promise).await;
	}
}

fn ids(prefix: &str) -> MenuIds {
	MenuIds {
		trigger: format!("{prefix}-trigger"),
		panel: format!("{prefix}-panel"),
		open_class: "open".into(),
	}
}

fn element(tag: &str, id: Option<&str>) -> HtmlElement {
	let el: HtmlElement = document().create_element(tag).unwrap().unchecked_into();
	if let Some(id) = id {
		el.set_id(id);
	}
	el
}

/// Mounts a closed menu: a trigger button and a hidden panel holding one link.
fn mount_menu(ids: &MenuIds) -> (HtmlElement, HtmlElement, HtmlElement) {
	let body = document().body().unwrap();
	let trigger = element("button", Some(&ids.trigger));
	trigger.set_attribute("aria-expanded", "false").unwrap();
	let panel = element("nav", Some(&ids.panel));
	panel.set_attribute("hidden", "").unwrap();
	let link = element("a", None);
	link.set_attribute("href", "#section").unwrap();
	panel.append_child(&link).unwrap();
	body.append_child(&trigger).unwrap();
	body.append_child(&panel).unwrap();
	(trigger, panel, link)
}

fn is_open(trigger: &HtmlElement, panel: &HtmlElement) -> bool {
	let hidden = panel.has_attribute("hidden");
	let class = trigger.class_list().contains("open");
	let aria = trigger.get_attribute("aria-expanded").as_deref() == Some("true");
	assert!(hidden != class && class == aria, "menu state out of sync");
	!hidden
}

fn press(key: &str) {
	let init = KeyboardEventInit::new();
	init.set_key(key);
	let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
	document().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn render_loop_stops_rescheduling() {
	let frames = Rc::new(Cell::new(0u32));
	let counter = frames.clone();
	let render_loop = RenderLoop::start(move || counter.set(counter.get() + 1)).unwrap();

	next_frames(3).await;
	assert!(frames.get() > 0);

	render_loop.stop();
	let stopped_at = frames.get();
	next_frames(3).await;
	assert_eq!(frames.get(), stopped_at);
}

#[wasm_bindgen_test]
async fn dropping_render_loop_cancels_pending_frame() {
	let frames = Rc::new(Cell::new(0u32));
	let counter = frames.clone();
	let render_loop = RenderLoop::start(move || counter.set(counter.get() + 1)).unwrap();
	drop(render_loop);

	next_frames(3).await;
	assert_eq!(frames.get(), 0);
}

#[wasm_bindgen_test]
fn missing_panel_attaches_nothing() {
	let ids = ids("lonely");
	let body = document().body().unwrap();
	let trigger = element("button", Some(&ids.trigger));
	trigger.set_attribute("aria-expanded", "false").unwrap();
	body.append_child(&trigger).unwrap();

	assert!(MenuBinding::attach_by_id(&document(), &ids).is_none());

	trigger.click();
	assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("false"));
	assert!(!trigger.class_list().contains("open"));
	body.remove_child(&trigger).unwrap();
}

#[wasm_bindgen_test]
fn missing_both_elements_attaches_nothing() {
	assert!(MenuBinding::attach_by_id(&document(), &ids("absent")).is_none());
}

#[wasm_bindgen_test]
fn click_toggles_and_link_closes() {
	let ids = ids("links");
	let (trigger, panel, link) = mount_menu(&ids);
	let binding = MenuBinding::attach_by_id(&document(), &ids).unwrap();

	trigger.click();
	assert!(is_open(&trigger, &panel));
	trigger.click();
	assert!(!is_open(&trigger, &panel));

	trigger.click();
	link.click();
	assert!(!is_open(&trigger, &panel));

	drop(binding);
	trigger.click();
	assert!(!is_open(&trigger, &panel));
	trigger.remove();
	panel.remove();
}

#[wasm_bindgen_test]
fn escape_closes_and_returns_focus() {
	let ids = ids("escape");
	let (trigger, panel, link) = mount_menu(&ids);
	let _binding = MenuBinding::attach_by_id(&document(), &ids).unwrap();

	trigger.click();
	link.focus().unwrap();
	press("Enter");
	assert!(is_open(&trigger, &panel));

	press("Escape");
	assert!(!is_open(&trigger, &panel));
	let active = document().active_element().unwrap();
	assert_eq!(active.id(), ids.trigger);
	trigger.remove();
	panel.remove();
}
