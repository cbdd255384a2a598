//! Year list templates
//!
//! `render_year` produces one fragment per year; `render_years` joins the
//! fragments into the archive page.

use anyhow::Result;
use maud::{PreEscaped, html};

use crate::template::{YearContext, YearsContext};

/// Renders one year with links to each of its monthly pages
pub fn render_year(context: &YearContext) -> Result<String> {
    let markup = html! {
        section class="year" {
            h2 class="year-title" { (context.year) }
            ul class="month-list" {
                @for month in &context.months {
                    li {
                        a href=(format!("{month}.html")) { (month.to_string()) }
                    }
                }
            }
        }
    };
    Ok(markup.into_string())
}

/// Renders the archive from already rendered year fragments
pub fn render_years(context: &YearsContext) -> Result<String> {
    let markup = html! {
        nav class="years" {
            @for year in &context.years {
                (PreEscaped(year))
            }
        }
    };
    Ok(markup.into_string())
}
