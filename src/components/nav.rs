//! Site navigation component

use maud::{Markup, html};

/// Renders the top navigation bar linking home and to the years archive
pub fn site_nav(years_href: &str) -> Markup {
    html! {
        header class="site-nav" {
            a href="index.html" class="nav-link" { "Latest" }
            span class="nav-separator" { "/" }
            a href=(years_href) class="nav-link" { "Archive" }
        }
    }
}
