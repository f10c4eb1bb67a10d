mod component;
mod dom;
mod state;

pub use component::SiteHeader;
pub use dom::{MenuBinding, MenuIds};
