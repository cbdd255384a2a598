//! Monthly page template

use anyhow::Result;
use maud::html;

use crate::components::link_list::link_list;
use crate::template::MonthlyContext;

/// Renders one month of links grouped under day headings
pub fn render(context: &MonthlyContext) -> Result<String> {
    let markup = html! {
        main class="monthly" {
            h1 class="page-title" { (context.year_and_month.to_string()) }
            @for bucket in &context.dates {
                section class="day" id=(bucket.key) {
                    h2 class="day-title" { (bucket.key) }
                    (link_list(&bucket.links))
                }
            }
        }
    };
    Ok(markup.into_string())
}
