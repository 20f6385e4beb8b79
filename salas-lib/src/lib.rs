//! Room reservation list client
//!
//! Fetches the room and reservation collections from the reservation backend,
//! validates the `{success, data}` envelope and renders the result as an HTML
//! fragment into a named output region.

pub mod config;
pub mod envelope;
pub mod error;
pub mod model;
pub mod render;
pub mod session;
pub mod sink;

mod client;
mod renderer;

pub use client::*;
pub use config::RendererConfig;
pub use model::ListKind;
pub use renderer::ListRenderer;
pub use renderer::RenderOutcome;
