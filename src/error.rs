use thiserror::Error;

/// Reasons the scene could not be set up on the page.
#[derive(Debug, Error)]
pub enum SetupError {
	/// `web_sys::window()` returned nothing, e.g. outside a browser.
	#[error("no global window")]
	NoWindow,
	/// `getContext("2d")` failed or returned null.
	#[error("canvas has no 2d context")]
	ContextUnavailable,
	/// The context is not a `CanvasRenderingContext2d`.
	#[error("2d context has an unexpected type")]
	ContextType,
}
