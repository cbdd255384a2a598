//! Index page template

use anyhow::Result;
use maud::html;

use crate::template::IndexContext;

/// Renders the landing page pointing at the latest month
pub fn render(context: &IndexContext) -> Result<String> {
    let markup = html! {
        main class="index" {
            h1 class="page-title" { "Latest links" }
            p class="latest" {
                a href=(context.latest) { (context.latest_date) }
            }
        }
    };
    Ok(markup.into_string())
}
