//! Rendered link list component

use maud::{Markup, PreEscaped, html};

use crate::link::RenderedLink;

/// Renders links as a list of their description fragments
///
/// Each item carries the publish key as its anchor so individual links
/// can be addressed from other pages.
///
/// # Arguments
///
/// * `links`: Links in display order
///
/// # Returns
///
/// Unordered list markup, or an empty-state paragraph for no links
pub fn link_list(links: &[RenderedLink]) -> Markup {
    html! {
        @if links.is_empty() {
            p class="empty-state" { "No links" }
        } @else {
            ul class="link-list" {
                @for link in links {
                    li class="link-entry" id=[link.get("publishKey")] {
                        (PreEscaped(link.html()))
                    }
                }
            }
        }
    }
}
