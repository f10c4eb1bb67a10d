use leptos::prelude::*;

use super::dom::{MenuBinding, MenuIds};

/// Site header with a hamburger button driving a collapsible link menu.
#[component]
pub fn SiteHeader(
	#[prop(into)] title: String,
	links: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
	let ids = MenuIds::default();
	let binding = StoredValue::new_local(None::<MenuBinding>);

	let lookup = ids.clone();
	Effect::new(move |_| {
		binding.set_value(MenuBinding::attach_by_id(&document(), &lookup));
	});
	on_cleanup(move || {
		let _ = binding.try_update_value(Option::take);
	});

	view! {
		<header class="site-header">
			<span class="site-title">{title}</span>
			<button
				id=ids.trigger
				class="hamburger"
				type="button"
				aria-label="Toggle navigation"
				aria-controls=ids.panel.clone()
				aria-expanded="false"
			>
				<span class="bar"></span>
				<span class="bar"></span>
				<span class="bar"></span>
			</button>
			<nav id=ids.panel class="mobile-menu" hidden=true>
				<ul>
					{links
						.into_iter()
						.map(|(label, href)| view! { <li><a href=href>{label}</a></li> })
						.collect_view()}
				</ul>
			</nav>
		</header>
	}
}
