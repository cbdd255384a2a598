//! Page templates and the contexts they are executed with.
//!
//! A template is anything that turns a typed context into markup. Plain
//! functions and closures of the shape `Fn(&C) -> Result<String>` qualify,
//! so callers can plug in any template engine behind a closure. The
//! built-in maud theme lives in [`crate::pages`].

use anyhow::Result;

use crate::error::ComposeError;
use crate::grouping::DateBucket;
use crate::link::RenderedLink;
use crate::year_month::YearMonth;

/// Compiled template producing markup from a context of type `C`.
pub trait Template<C>: Send + Sync {
    fn execute(&self, context: &C) -> Result<String>;
}

impl<C, F> Template<C> for F
where
    F: Fn(&C) -> Result<String> + Send + Sync,
{
    fn execute(&self, context: &C) -> Result<String> {
        self(context)
    }
}

/// Links published on one day.
#[derive(Debug, Clone)]
pub struct DailyContext {
    pub date: String,
    pub links: Vec<RenderedLink>,
}

/// One month of links, grouped by day with the newest day first.
#[derive(Debug, Clone)]
pub struct MonthlyContext {
    pub year_and_month: YearMonth,
    pub dates: Vec<DateBucket>,
}

/// Landing page pointing at the latest month.
#[derive(Debug, Clone)]
pub struct IndexContext {
    /// Latest year-month as `YYYY-MM`
    pub latest_date: String,
    /// Resolved file name of the latest month's page
    pub latest: String,
}

/// Months of a single year.
#[derive(Debug, Clone)]
pub struct YearContext {
    pub year: String,
    pub months: Vec<YearMonth>,
}

/// Year fragments, newest year first.
#[derive(Debug, Clone)]
pub struct YearsContext {
    pub years: Vec<String>,
}

/// Shared chrome around every page body.
#[derive(Debug, Clone)]
pub struct FrameContext {
    pub body: String,
    /// Resolved file name of the years include
    pub years: String,
    /// Generation timestamp
    pub built: String,
}

type Boxed<C> = Box<dyn Template<C>>;

/// The complete set of templates a [`crate::PageComposer`] needs.
pub struct TemplateSet {
    pub(crate) daily: Boxed<DailyContext>,
    pub(crate) index: Boxed<IndexContext>,
    pub(crate) monthly: Boxed<MonthlyContext>,
    pub(crate) frame: Boxed<FrameContext>,
    pub(crate) years: Boxed<YearsContext>,
    pub(crate) year: Boxed<YearContext>,
}

impl TemplateSet {
    pub fn builder() -> TemplateSetBuilder {
        TemplateSetBuilder::default()
    }

    /// Templates of the built-in maud theme.
    pub fn builtin() -> Self {
        use crate::pages;

        Self {
            daily: Box::new(pages::daily::render),
            index: Box::new(pages::index::render),
            monthly: Box::new(pages::monthly::render),
            frame: Box::new(pages::frame::render),
            years: Box::new(pages::years::render_years),
            year: Box::new(pages::years::render_year),
        }
    }
}

/// Collects templates one by one; [`TemplateSetBuilder::build`] refuses to
/// produce a set with any template missing.
#[derive(Default)]
pub struct TemplateSetBuilder {
    daily: Option<Boxed<DailyContext>>,
    index: Option<Boxed<IndexContext>>,
    monthly: Option<Boxed<MonthlyContext>>,
    frame: Option<Boxed<FrameContext>>,
    years: Option<Boxed<YearsContext>>,
    year: Option<Boxed<YearContext>>,
}

impl TemplateSetBuilder {
    pub fn daily(mut self, template: impl Template<DailyContext> + 'static) -> Self {
        self.daily = Some(Box::new(template));
        self
    }

    pub fn index(mut self, template: impl Template<IndexContext> + 'static) -> Self {
        self.index = Some(Box::new(template));
        self
    }

    pub fn monthly(mut self, template: impl Template<MonthlyContext> + 'static) -> Self {
        self.monthly = Some(Box::new(template));
        self
    }

    pub fn frame(mut self, template: impl Template<FrameContext> + 'static) -> Self {
        self.frame = Some(Box::new(template));
        self
    }

    pub fn years(mut self, template: impl Template<YearsContext> + 'static) -> Self {
        self.years = Some(Box::new(template));
        self
    }

    pub fn year(mut self, template: impl Template<YearContext> + 'static) -> Self {
        self.year = Some(Box::new(template));
        self
    }

    /// Finishes the set.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::MissingTemplate`] naming the first absent
    /// template
    pub fn build(self) -> Result<TemplateSet> {
        Ok(TemplateSet {
            daily: self.daily.ok_or(ComposeError::MissingTemplate("daily"))?,
            index: self.index.ok_or(ComposeError::MissingTemplate("index"))?,
            monthly: self.monthly.ok_or(ComposeError::MissingTemplate("monthly"))?,
            frame: self.frame.ok_or(ComposeError::MissingTemplate("frame"))?,
            years: self.years.ok_or(ComposeError::MissingTemplate("years"))?,
            year: self.year.ok_or(ComposeError::MissingTemplate("year"))?,
        })
    }
}
