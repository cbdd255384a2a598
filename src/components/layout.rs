//! Page frame component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::nav::site_nav;

/// Wraps rendered page content with the shared document structure
///
/// Provides DOCTYPE, head, navigation and footer for every framed page.
/// The body arrives as already rendered HTML and is inserted unescaped.
///
/// # Arguments
///
/// * `body`: Rendered page body
/// * `years_href`: Link target for the archive of years
/// * `built`: Generation timestamp shown in the footer
///
/// # Returns
///
/// Complete HTML document
pub fn page_frame(body: &str, years_href: &str, built: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Links" }
            }
            body {
                (site_nav(years_href))
                div class="container" {
                    (PreEscaped(body))
                }
                footer class="site-footer" {
                    "Generated " time datetime=(built) { (built) }
                }
            }
        }
    }
}
