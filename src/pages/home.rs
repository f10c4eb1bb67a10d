use leptos::prelude::*;

use crate::components::menu_toggle::SiteHeader;
use crate::components::orbit_graph::{DiagramData, OrbitGraphCanvas};

const NAV_LINKS: &[(&str, &str)] = &[
	("About", "#about"),
	("Research", "#research"),
	("Projects", "#projects"),
	("Contact", "#contact"),
];

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<SiteHeader title="Portfolio" links=NAV_LINKS.to_vec() />
		<div class="fullscreen-graph">
			<OrbitGraphCanvas data=DiagramData::default() fullscreen=true />
			<div class="graph-overlay">
				<h1>"Research Map"</h1>
				<p class="subtitle">"Scroll to zoom."</p>
			</div>
		</div>
	}
}
