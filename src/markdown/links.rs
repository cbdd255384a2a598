//! Description rendering for individual links.

use anyhow::{Context, Result};

use super::MarkdownRenderer;
use super::markers::{MARKERS, Marker, substitute};
use crate::link::{Link, LinkField, RenderedLink};

/// Template used when a description contains no markers: the description
/// becomes the text of a Markdown link to the href.
const DEFAULT_TEMPLATE: &str = "[_DESC_](_URL_)";

const PARAGRAPH_OPEN: &str = "<p>";
const PARAGRAPH_CLOSE: &str = "</p>";

/// Turns a [`Link`] into the [`RenderedLink`] view templates consume.
///
/// Descriptions containing any marker token are treated as their own
/// Markdown template; all others are rendered as `[description](href)`.
pub struct LinkHtmlBuilder {
    renderer: MarkdownRenderer,
    fields: &'static [LinkField],
}

impl LinkHtmlBuilder {
    pub fn new(renderer: MarkdownRenderer) -> Self {
        Self {
            renderer,
            fields: &LinkField::ALL,
        }
    }

    /// Builds the template view of a link.
    ///
    /// # Arguments
    ///
    /// * `link`: Link to render
    ///
    /// # Returns
    ///
    /// Every exported link attribute plus the rendered `html` fragment
    ///
    /// # Errors
    ///
    /// Returns error if markdown rendering fails
    pub fn build(&self, link: &Link) -> Result<RenderedLink> {
        let fields = self
            .fields
            .iter()
            .map(|field| (field.name(), field.value(link)))
            .collect();

        let html = self
            .render_description(link)
            .with_context(|| format!("Failed to render link {}", link.publish_key))?;

        tracing::trace!(publish_key = %link.publish_key, "rendered link");

        Ok(RenderedLink::new(fields, html))
    }

    /// Builds template views for a sequence of links, preserving order.
    ///
    /// # Errors
    ///
    /// Returns the first rendering error encountered
    pub fn build_all<'a>(
        &self,
        links: impl IntoIterator<Item = &'a Link>,
    ) -> Result<Vec<RenderedLink>> {
        links.into_iter().map(|link| self.build(link)).collect()
    }

    /// Renders a link's description to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns error if markdown rendering fails
    pub fn render_description(&self, link: &Link) -> Result<String> {
        let template = if Marker::any_in(&link.description) {
            link.description.as_str()
        } else {
            DEFAULT_TEMPLATE
        };

        let replacements: Vec<(&str, &str)> = MARKERS
            .iter()
            .map(|marker| (marker.token(), marker.value(link)))
            .collect();
        let markdown = substitute(template, &replacements);

        let html = self.renderer.render(&markdown)?;
        Ok(unwrap_paragraph(html.trim()).to_string())
    }
}

impl Default for LinkHtmlBuilder {
    fn default() -> Self {
        Self::new(MarkdownRenderer::default())
    }
}

/// Strips one enclosing paragraph from an HTML fragment.
///
/// Removes the leading `<p>` and the last `</p>` when the fragment both
/// starts and ends with them. Inner paragraphs are left untouched, and
/// fragments without the wrapper are returned unchanged.
pub fn unwrap_paragraph(html: &str) -> &str {
    if !(html.starts_with(PARAGRAPH_OPEN) && html.ends_with(PARAGRAPH_CLOSE)) {
        return html;
    }

    let inner = &html[PARAGRAPH_OPEN.len()..];
    match inner.rfind(PARAGRAPH_CLOSE) {
        Some(end) => &inner[..end],
        None => html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn link(description: &str) -> Link {
        Link::new(
            "abc123",
            "https://example.com/post",
            description,
            Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_plain_description_renders_as_link() {
        // Arrange
        let builder = LinkHtmlBuilder::default();

        // Act
        let html = builder
            .render_description(&link("A good read"))
            .expect("Should render");

        // Assert
        assert_eq!(html, "<a href=\"https://example.com/post\">A good read</a>");
    }

    #[test]
    fn test_marker_description_used_as_template() {
        // Arrange
        let builder = LinkHtmlBuilder::default();
        let description = "Read [this](_URL_) (id _ID_)";

        // Act
        let html = builder
            .render_description(&link(description))
            .expect("Should render");

        // Assert
        assert_eq!(
            html,
            "Read <a href=\"https://example.com/post\">this</a> (id abc123)"
        );
    }

    #[test]
    fn test_desc_marker_inserts_raw_description() {
        let builder = LinkHtmlBuilder::default();

        let html = builder
            .render_description(&link("Title: _DESC_"))
            .expect("Should render");

        assert_eq!(html, "Title: Title: <em>DESC</em>");
    }

    #[test]
    fn test_no_marker_survives_substitution() {
        // Arrange
        let builder = LinkHtmlBuilder::default();
        let description = "_URL_ _ID_ _URL_ _ID_";

        // Act
        let html = builder
            .render_description(&link(description))
            .expect("Should render");

        // Assert
        assert!(!html.contains("_URL_"), "{}", html);
        assert!(!html.contains("_ID_"), "{}", html);
        assert!(html.contains("abc123 "), "{}", html);
    }

    #[test]
    fn test_block_content_keeps_inner_paragraphs() {
        let builder = LinkHtmlBuilder::default();

        let html = builder
            .render_description(&link("first _ID_\n\nsecond"))
            .expect("Should render");

        assert_eq!(html, "first abc123</p>\n<p>second");
    }

    #[test]
    fn test_non_paragraph_output_untouched() {
        let builder = LinkHtmlBuilder::default();

        let html = builder
            .render_description(&link("# Heading _ID_"))
            .expect("Should render");

        assert_eq!(html, "<h1>Heading abc123</h1>");
    }

    #[test]
    fn test_build_exports_every_field_and_html() {
        // Arrange
        let builder = LinkHtmlBuilder::default();

        // Act
        let rendered = builder.build(&link("Post")).expect("Should build");

        // Assert
        let names: Vec<&str> = rendered.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["publishKey", "href", "description", "time"]);
        assert_eq!(rendered.get("publishKey"), Some("abc123"));
        assert_eq!(rendered.get("description"), Some("Post"));
        assert_eq!(rendered.get("time"), Some("2024-01-02T09:30:00Z"));
        assert_eq!(
            rendered.html(),
            "<a href=\"https://example.com/post\">Post</a>"
        );
    }

    #[test]
    fn test_build_all_preserves_order() {
        let builder = LinkHtmlBuilder::default();
        let links = [link("one"), link("two"), link("three")];

        let rendered = builder.build_all(&links).expect("Should build");

        let descriptions: Vec<_> = rendered
            .iter()
            .map(|r| r.get("description").unwrap_or_default())
            .collect();
        assert_eq!(descriptions, ["one", "two", "three"]);
    }

    #[test]
    fn test_unwrap_paragraph_strips_single_wrapper() {
        assert_eq!(unwrap_paragraph("<p>text</p>"), "text");
        assert_eq!(unwrap_paragraph("<p>a</p>\n<p>b</p>"), "a</p>\n<p>b");
    }

    #[test]
    fn test_unwrap_paragraph_requires_both_ends() {
        assert_eq!(unwrap_paragraph("<p>open only"), "<p>open only");
        assert_eq!(unwrap_paragraph("close only</p>"), "close only</p>");
        assert_eq!(unwrap_paragraph("<ul><li>x</li></ul>"), "<ul><li>x</li></ul>");
    }

    #[test]
    fn test_unwrap_paragraph_is_idempotent_on_unwrapped_content() {
        let once = unwrap_paragraph("<p><a href=\"x\">y</a></p>");
        let twice = unwrap_paragraph(once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_href_and_description() {
        let builder = LinkHtmlBuilder::default();
        let empty = Link::new("", "", "", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let html = builder.render_description(&empty).expect("Should render");

        assert_eq!(html, "<a href=\"\"></a>");
    }
}
