//! Bookmark records and their rendered form.

use chrono::{DateTime, SecondsFormat, Utc};

/// A published bookmark.
///
/// `description` may be plain text, Markdown, or a Markdown template
/// containing marker tokens (see [`crate::Marker`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub publish_key: String,
    pub href: String,
    pub description: String,
    pub time: DateTime<Utc>,
}

impl Link {
    pub fn new(
        publish_key: impl Into<String>,
        href: impl Into<String>,
        description: impl Into<String>,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            publish_key: publish_key.into(),
            href: href.into(),
            description: description.into(),
            time,
        }
    }
}

/// Attributes of a [`Link`] exposed to page templates.
///
/// Adding a field to `Link` means adding a variant here and to
/// [`LinkField::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    PublishKey,
    Href,
    Description,
    Time,
}

impl LinkField {
    /// Every exported attribute, in template order.
    pub const ALL: [LinkField; 4] = [
        LinkField::PublishKey,
        LinkField::Href,
        LinkField::Description,
        LinkField::Time,
    ];

    /// Name under which templates see the attribute.
    pub fn name(self) -> &'static str {
        match self {
            LinkField::PublishKey => "publishKey",
            LinkField::Href => "href",
            LinkField::Description => "description",
            LinkField::Time => "time",
        }
    }

    /// Reads the attribute's value from a link.
    pub fn value(self, link: &Link) -> String {
        match self {
            LinkField::PublishKey => link.publish_key.clone(),
            LinkField::Href => link.href.clone(),
            LinkField::Description => link.description.clone(),
            LinkField::Time => link.time.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Template view of a [`Link`]: every exported attribute plus the rendered
/// description fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLink {
    fields: Vec<(&'static str, String)>,
    html: String,
}

impl RenderedLink {
    pub(crate) fn new(fields: Vec<(&'static str, String)>, html: String) -> Self {
        Self { fields, html }
    }

    /// Looks up a value by attribute name. `"html"` returns the fragment.
    pub fn get(&self, name: &str) -> Option<&str> {
        if name == "html" {
            return Some(&self.html);
        }
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Rendered description fragment, already HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Exported attributes in [`LinkField::ALL`] order.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }
}
