//! Literal marker substitution for description templates.

use crate::link::Link;

/// Placeholder tokens recognized in a link description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `_URL_`, replaced by the link's href
    Url,
    /// `_ID_`, replaced by the link's publish key
    Id,
    /// `_DESC_`, replaced by the raw description
    Description,
}

/// All markers in substitution order.
pub const MARKERS: [Marker; 3] = [Marker::Url, Marker::Id, Marker::Description];

impl Marker {
    /// Literal token searched for in templates.
    pub fn token(self) -> &'static str {
        match self {
            Marker::Url => "_URL_",
            Marker::Id => "_ID_",
            Marker::Description => "_DESC_",
        }
    }

    /// Value substituted for the token.
    pub fn value(self, link: &Link) -> &str {
        match self {
            Marker::Url => &link.href,
            Marker::Id => &link.publish_key,
            Marker::Description => &link.description,
        }
    }

    /// Returns true if any marker token occurs in `text`.
    pub fn any_in(text: &str) -> bool {
        MARKERS.iter().any(|marker| text.contains(marker.token()))
    }
}

/// Replaces every occurrence of each token with its value.
///
/// Replacements are applied in slice order, each token replaced to
/// exhaustion before the next one. Every pass is a single left-to-right
/// scan, so text inserted for a token is never matched by that same token
/// again. Text inserted by an earlier pair can still be matched by a later
/// pair's token.
///
/// # Arguments
///
/// * `template`: Text containing literal tokens
/// * `replacements`: Ordered `(token, value)` pairs
///
/// # Returns
///
/// Template with all tokens replaced
pub fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut text = template.to_string();

    for &(token, value) in replacements {
        if token.is_empty() || !text.contains(token) {
            continue;
        }
        text = replace_literal(&text, token, value);
    }

    text
}

/// Single pass literal replacement of non-overlapping occurrences.
fn replace_literal(text: &str, token: &str, value: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;

    for (start, matched) in text.match_indices(token) {
        result.push_str(&text[last_end..start]);
        result.push_str(value);
        last_end = start + matched.len();
    }

    result.push_str(&text[last_end..]);
    result
}
