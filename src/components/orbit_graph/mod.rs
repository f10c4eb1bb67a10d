mod component;
mod config;
mod data;
mod frame_loop;
mod render;
mod state;
mod surface;
mod types;

pub use component::OrbitGraphCanvas;
pub use frame_loop::RenderLoop;
pub use types::DiagramData;
