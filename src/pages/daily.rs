//! Daily page template

use anyhow::Result;
use maud::html;

use crate::components::link_list::link_list;
use crate::template::DailyContext;

/// Renders the links published on one day
///
/// # Arguments
///
/// * `context`: Formatted date and rendered links
///
/// # Returns
///
/// Unframed page body
pub fn render(context: &DailyContext) -> Result<String> {
    let markup = html! {
        main class="daily" {
            h1 class="page-title" { (context.date) }
            (link_list(&context.links))
        }
    };
    Ok(markup.into_string())
}
