use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, KeyboardEvent, MouseEvent};

use super::state::{MenuToggle, PanelHandle, TriggerHandle};

/// Element ids and class name the toggler looks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuIds {
	/// Id of the button that toggles the menu.
	pub trigger: String,
	/// Id of the collapsible menu element.
	pub panel: String,
	/// Class set on the trigger while the menu is open.
	pub open_class: String,
}

impl Default for MenuIds {
	fn default() -> Self {
		Self {
			trigger: "hamburgerBtn".into(),
			panel: "mobileMenu".into(),
			open_class: "open".into(),
		}
	}
}

impl TriggerHandle for HtmlElement {
	fn set_class(&self, class: &str, present: bool) {
		let _ = self.class_list().toggle_with_force(class, present);
	}

	fn set_aria_expanded(&self, value: &str) {
		let _ = self.set_attribute("aria-expanded", value);
	}

	fn focus(&self) {
		let _ = HtmlElement::focus(self);
	}
}

impl PanelHandle for HtmlElement {
	fn is_hidden(&self) -> bool {
		self.has_attribute("hidden")
	}

	fn set_hidden(&self, hidden: bool) {
		if hidden {
			let _ = self.set_attribute("hidden", "");
		} else {
			let _ = self.remove_attribute("hidden");
		}
	}
}

/// Listeners wired to a trigger, its panel and the key target. Dropping the
/// binding detaches them.
pub struct MenuBinding {
	trigger: HtmlElement,
	panel: HtmlElement,
	key_target: EventTarget,
	on_trigger_click: Closure<dyn FnMut(MouseEvent)>,
	on_panel_click: Closure<dyn FnMut(MouseEvent)>,
	on_keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

impl MenuBinding {
	/// Looks both elements up by id in `document`.
	pub fn attach_by_id(document: &Document, ids: &MenuIds) -> Option<Self> {
		let find = |id: &str| {
			document
				.get_element_by_id(id)
				.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		};
		Self::attach(
			find(&ids.trigger),
			find(&ids.panel),
			document.clone().into(),
			&ids.open_class,
		)
	}

	/// Attaches nothing and returns `None` if either element is absent.
	pub fn attach(
		trigger: Option<HtmlElement>,
		panel: Option<HtmlElement>,
		key_target: EventTarget,
		open_class: &str,
	) -> Option<Self> {
		let Some(toggle) = MenuToggle::new(trigger, panel, open_class) else {
			debug!("menu elements missing, toggler not attached");
			return None;
		};
		let (trigger, panel) = (toggle.trigger().clone(), toggle.panel().clone());
		let toggle = Rc::new(toggle);

		let toggle_click = toggle.clone();
		let on_trigger_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
			toggle_click.toggle();
		});

		let toggle_panel = toggle.clone();
		let on_panel_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let is_link = ev
				.target()
				.and_then(|t| t.dyn_into::<Element>().ok())
				.is_some_and(|el| el.tag_name().eq_ignore_ascii_case("a"));
			toggle_panel.on_panel_click(is_link);
		});

		let toggle_key = toggle;
		let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
			toggle_key.on_key(&ev.key());
		});

		let _ = trigger
			.add_event_listener_with_callback("click", on_trigger_click.as_ref().unchecked_ref());
		let _ =
			panel.add_event_listener_with_callback("click", on_panel_click.as_ref().unchecked_ref());
		let _ = key_target
			.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
		debug!("menu toggler attached");

		Some(Self {
			trigger,
			panel,
			key_target,
			on_trigger_click,
			on_panel_click,
			on_keydown,
		})
	}
}

impl Drop for MenuBinding {
	fn drop(&mut self) {
		let _ = self.trigger.remove_event_listener_with_callback(
			"click",
			self.on_trigger_click.as_ref().unchecked_ref(),
		);
		let _ = self
			.panel
			.remove_event_listener_with_callback("click", self.on_panel_click.as_ref().unchecked_ref());
		let _ = self
			.key_target
			.remove_event_listener_with_callback("keydown", self.on_keydown.as_ref().unchecked_ref());
	}
}
