//! Markdown to HTML conversion with comrak.

use anyhow::{Result, anyhow};
use comrak::Options;
use std::sync::Mutex;

use crate::config::MarkdownOptions;

/// Renders Markdown to HTML.
///
/// One renderer is shared by every page composed in the process. Parsing
/// runs inside a single named critical section so the renderer can be used
/// from concurrent render calls regardless of the parser's own guarantees.
pub struct MarkdownRenderer {
    options: MarkdownOptions,
    parse_guard: Mutex<()>,
}

impl MarkdownRenderer {
    /// Creates renderer with plain CommonMark options.
    pub fn new() -> Self {
        Self::with_options(MarkdownOptions::default())
    }

    /// Creates renderer with explicit dialect options.
    ///
    /// # Arguments
    ///
    /// * `options`: Extensions and punctuation settings
    pub fn with_options(options: MarkdownOptions) -> Self {
        Self {
            options,
            parse_guard: Mutex::new(()),
        }
    }

    /// Renders markdown content to HTML string.
    ///
    /// The input is only borrowed; nothing is retained between calls.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML, including comrak's trailing newline
    ///
    /// # Errors
    ///
    /// Returns error if a previous render panicked while holding the parse
    /// section
    pub fn render(&self, content: &str) -> Result<String> {
        let options = self.comrak_options();

        let _parsing = self
            .parse_guard
            .lock()
            .map_err(|_| anyhow!("Markdown parse section poisoned by an earlier panic"))?;

        Ok(comrak::markdown_to_html(content, &options))
    }

    fn comrak_options(&self) -> Options<'static> {
        let mut options = Options::default();

        if self.options.gfm_extensions {
            options.extension.strikethrough = true;
            options.extension.table = true;
            options.extension.autolink = true;
            options.extension.tasklist = true;
        }

        options.parse.smart = self.options.smart_punctuation;
        options.render.unsafe_ = self.options.unsafe_html;

        options
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
