//! Markdown rendering of link descriptions.
//!
//! Descriptions pass through three stages: marker substitution into a
//! Markdown template, comrak rendering, and removal of the single paragraph
//! wrapper comrak places around inline content.

mod links;
mod markers;
mod renderer;

pub use links::{LinkHtmlBuilder, unwrap_paragraph};
pub use markers::{MARKERS, Marker, substitute};
pub use renderer::MarkdownRenderer;
