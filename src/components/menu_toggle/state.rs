/// The visible state of the menu. All three fields are written together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
	pub hidden: bool,
	pub open_class: bool,
	pub aria_expanded: bool,
}

impl MenuState {
	pub const CLOSED: MenuState = MenuState {
		hidden: true,
		open_class: false,
		aria_expanded: false,
	};

	pub const OPEN: MenuState = MenuState {
		hidden: false,
		open_class: true,
		aria_expanded: true,
	};

	pub fn aria_value(&self) -> &'static str {
		if self.aria_expanded { "true" } else { "false" }
	}
}

/// The button that opens and closes the menu.
pub trait TriggerHandle {
	fn set_class(&self, class: &str, present: bool);
	fn set_aria_expanded(&self, value: &str);
	fn focus(&self);
}

/// The collapsible menu panel.
pub trait PanelHandle {
	fn is_hidden(&self) -> bool;
	fn set_hidden(&self, hidden: bool);
}

pub struct MenuToggle<T, P> {
	trigger: T,
	panel: P,
	open_class: String,
}

impl<T: TriggerHandle, P: PanelHandle> MenuToggle<T, P> {
	/// Returns `None` when either element is absent.
	pub fn new(trigger: Option<T>, panel: Option<P>, open_class: &str) -> Option<Self> {
		Some(Self {
			trigger: trigger?,
			panel: panel?,
			open_class: open_class.to_owned(),
		})
	}

	pub fn trigger(&self) -> &T {
		&self.trigger
	}

	pub fn panel(&self) -> &P {
		&self.panel
	}

	/// The panel's `hidden` attribute is the source of truth.
	pub fn is_open(&self) -> bool {
		!self.panel.is_hidden()
	}

	pub fn toggle(&self) {
		self.apply(if self.is_open() {
			MenuState::CLOSED
		} else {
			MenuState::OPEN
		});
	}

	pub fn close(&self) {
		self.apply(MenuState::CLOSED);
	}

	/// Clicking a link inside the menu closes it.
	pub fn on_panel_click(&self, target_is_link: bool) {
		if target_is_link {
			self.close();
		}
	}

	/// Escape closes an open menu and hands focus back to the trigger.
	/// Returns whether the key was handled.
	pub fn on_key(&self, key: &str) -> bool {
		if key != "Escape" || !self.is_open() {
			return false;
		}
		self.close();
		self.trigger.focus();
		true
	}

	fn apply(&self, state: MenuState) {
		self.panel.set_hidden(state.hidden);
		self.trigger.set_class(&self.open_class, state.open_class);
		self.trigger.set_aria_expanded(state.aria_value());
	}
}
