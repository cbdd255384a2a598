//! Frame template wrapping every full page

use anyhow::Result;

use crate::components::layout::page_frame;
use crate::template::FrameContext;

/// Renders the page frame around an already rendered body
pub fn render(context: &FrameContext) -> Result<String> {
    Ok(page_frame(&context.body, &context.years, &context.built).into_string())
}
