//! Page composition.
//!
//! Each page type is built in two steps: a pure function assembles the
//! typed context, then the page's template is executed. Every page except
//! [`PageComposer::monthly_without_frame`] is wrapped in the frame exactly
//! once.

use anyhow::{Context, Result};
use chrono::{NaiveDate, SecondsFormat, Utc};
use std::collections::HashMap;

use crate::config::{Config, format_day};
use crate::grouping::{date_buckets, year_groups};
use crate::link::Link;
use crate::markdown::{LinkHtmlBuilder, MarkdownRenderer};
use crate::template::{
    DailyContext, FrameContext, IndexContext, MonthlyContext, TemplateSet, YearContext,
    YearsContext,
};
use crate::year_month::YearMonth;

type FileNameResolver = Box<dyn Fn(&str) -> String + Send + Sync>;
type Clock = Box<dyn Fn() -> String + Send + Sync>;

/// Renders archive pages from links.
///
/// # Examples
///
/// ```
/// use linklog::{PageComposer, TemplateSet, YearMonth};
///
/// let composer = PageComposer::builder()
///     .templates(TemplateSet::builtin())
///     .file_name_resolver(|name| format!("/archive/{name}"))
///     .build()?;
///
/// let latest: YearMonth = "2024-05".parse()?;
/// let html = composer.index(latest)?;
/// assert!(html.contains("/archive/2024-05-latest.html"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct PageComposer {
    templates: TemplateSet,
    links: LinkHtmlBuilder,
    config: Config,
    file_name_resolver: FileNameResolver,
    clock: Clock,
}

impl PageComposer {
    pub fn builder() -> PageComposerBuilder {
        PageComposerBuilder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Renders the framed page for one day's links.
    ///
    /// # Errors
    ///
    /// Returns error if `day_format` cannot format the date, a link fails to
    /// render or a template fails
    pub fn daily(&self, date: NaiveDate, links: &[Link]) -> Result<String> {
        tracing::debug!(%date, links = links.len(), "composing daily page");

        let context = DailyContext {
            date: format_day(date.format(&self.config.day_format), &self.config.day_format)?,
            links: self.links.build_all(links)?,
        };
        let body = self
            .templates
            .daily
            .execute(&context)
            .context("Failed to execute daily template")?;

        self.frame(&body)
    }

    /// Renders a month of links without the frame.
    ///
    /// Used on its own to embed the latest month in other pages.
    ///
    /// # Arguments
    ///
    /// * `year_month`: Month being rendered
    /// * `links`: Links keyed by day, as produced by [`crate::links_by_day`]
    ///
    /// # Errors
    ///
    /// Returns error if a link fails to render or the template fails
    pub fn monthly_without_frame(
        &self,
        year_month: YearMonth,
        links: &HashMap<String, Vec<Link>>,
    ) -> Result<String> {
        tracing::debug!(%year_month, days = links.len(), "composing monthly page");

        let context = MonthlyContext {
            year_and_month: year_month,
            dates: date_buckets(links, &self.links)?,
        };

        self.templates
            .monthly
            .execute(&context)
            .with_context(|| format!("Failed to execute monthly template for {year_month}"))
    }

    /// Renders the framed page for a month of links.
    ///
    /// # Errors
    ///
    /// Returns error if a link fails to render or a template fails
    pub fn monthly(
        &self,
        year_month: YearMonth,
        links: &HashMap<String, Vec<Link>>,
    ) -> Result<String> {
        let body = self.monthly_without_frame(year_month, links)?;
        self.frame(&body)
    }

    /// Renders the framed landing page pointing at the latest month.
    ///
    /// # Errors
    ///
    /// Returns error if a template fails
    pub fn index(&self, latest: YearMonth) -> Result<String> {
        tracing::debug!(%latest, "composing index page");

        let context = IndexContext {
            latest_date: latest.to_string(),
            latest: (self.file_name_resolver)(&format!("{latest}{}", self.config.latest_suffix)),
        };
        let body = self
            .templates
            .index
            .execute(&context)
            .context("Failed to execute index template")?;

        self.frame(&body)
    }

    /// Renders the framed archive of years, newest year first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComposeError::EmptyYearMonths`] if `year_months` is
    /// empty, or an error if a template fails
    pub fn years(&self, year_months: &[YearMonth]) -> Result<String> {
        let groups = year_groups(year_months)?;
        tracing::debug!(years = groups.len(), "composing years page");

        let fragments = groups
            .into_iter()
            .map(|group| {
                let context = YearContext {
                    year: group.year,
                    months: group.months,
                };
                self.templates
                    .year
                    .execute(&context)
                    .with_context(|| format!("Failed to execute year template for {}", context.year))
            })
            .collect::<Result<Vec<_>>>()?;

        let body = self
            .templates
            .years
            .execute(&YearsContext { years: fragments })
            .context("Failed to execute years template")?;

        self.frame(&body)
    }

    /// Wraps a rendered body in the page frame.
    ///
    /// The timestamp is taken from the clock at call time.
    ///
    /// # Errors
    ///
    /// Returns error if the frame template fails
    pub fn frame(&self, body: &str) -> Result<String> {
        let context = FrameContext {
            body: body.to_string(),
            years: (self.file_name_resolver)(&self.config.years_include),
            built: (self.clock)(),
        };

        self.templates
            .frame
            .execute(&context)
            .context("Failed to execute frame template")
    }
}

/// Configures a [`PageComposer`].
///
/// Templates are required. The file-name resolver defaults to returning
/// names unchanged and the clock to the current UTC time in RFC 3339.
#[derive(Default)]
pub struct PageComposerBuilder {
    templates: Option<TemplateSet>,
    config: Option<Config>,
    file_name_resolver: Option<FileNameResolver>,
    clock: Option<Clock>,
}

impl PageComposerBuilder {
    pub fn templates(mut self, templates: TemplateSet) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn file_name_resolver(
        mut self,
        resolver: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.file_name_resolver = Some(Box::new(resolver));
        self
    }

    pub fn clock(mut self, clock: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Finishes the composer.
    ///
    /// # Errors
    ///
    /// Returns error if no templates were supplied or the config is invalid
    pub fn build(self) -> Result<PageComposer> {
        let templates = self
            .templates
            .context("Templates are required to build a page composer")?;

        let config = self.config.unwrap_or_default();
        config.validate()?;

        let renderer = MarkdownRenderer::with_options(config.markdown);

        Ok(PageComposer {
            templates,
            links: LinkHtmlBuilder::new(renderer),
            config,
            file_name_resolver: self
                .file_name_resolver
                .unwrap_or_else(|| Box::new(|name: &str| name.to_string())),
            clock: self.clock.unwrap_or_else(|| Box::new(now_rfc3339)),
        })
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
