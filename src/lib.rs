//! Static HTML archive pages for bookmark collections.
//!
//! Links are rendered through Markdown description templates, grouped by
//! day, month and year, and composed into daily, monthly, index and year
//! list pages wrapped in a shared frame.

pub mod components;
mod composer;
mod config;
mod error;
mod grouping;
mod link;
mod markdown;
pub mod pages;
mod template;
mod year_month;

pub use composer::{PageComposer, PageComposerBuilder};
pub use config::{Config, MarkdownOptions};
pub use error::ComposeError;
pub use grouping::{DateBucket, YearGroup, date_buckets, links_by_day, year_groups};
pub use link::{Link, LinkField, RenderedLink};
pub use markdown::{LinkHtmlBuilder, MARKERS, MarkdownRenderer, Marker, substitute, unwrap_paragraph};
pub use template::{
    DailyContext, FrameContext, IndexContext, MonthlyContext, Template, TemplateSet,
    TemplateSetBuilder, YearContext, YearsContext,
};
pub use year_month::YearMonth;
