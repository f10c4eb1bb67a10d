pub mod menu_toggle;
pub mod orbit_graph;
