//! Chronological grouping of links and year-months for archive pages.

use anyhow::Result;
use std::collections::{BTreeMap, HashMap};

use crate::config::format_day;
use crate::error::ComposeError;
use crate::link::{Link, RenderedLink};
use crate::markdown::LinkHtmlBuilder;
use crate::year_month::YearMonth;

/// Links published on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBucket {
    pub key: String,
    pub links: Vec<RenderedLink>,
}

/// Months of one year that have an archive page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    pub year: String,
    pub months: Vec<YearMonth>,
}

/// Groups links by the day they were published.
///
/// Keys are the link time formatted with `day_format`. Links keep their
/// input order within each day.
///
/// # Arguments
///
/// * `links`: Links in any order
/// * `day_format`: chrono format string, `%Y-%m-%d` by default
///
/// # Errors
///
/// Returns [`ComposeError::InvalidConfig`] if `day_format` cannot format a
/// link time
pub fn links_by_day(
    links: impl IntoIterator<Item = Link>,
    day_format: &str,
) -> Result<HashMap<String, Vec<Link>>> {
    let mut days: HashMap<String, Vec<Link>> = HashMap::new();
    for link in links {
        let key = format_day(link.time.format(day_format), day_format)?;
        days.entry(key).or_default().push(link);
    }
    Ok(days)
}

/// Renders each day's links and orders the days newest first.
///
/// Day keys are compared as strings, so they must sort lexicographically in
/// chronological order (as `YYYY-MM-DD` does).
///
/// # Errors
///
/// Returns error if any link fails to render
pub fn date_buckets(
    days: &HashMap<String, Vec<Link>>,
    builder: &LinkHtmlBuilder,
) -> Result<Vec<DateBucket>> {
    let mut buckets = days
        .iter()
        .map(|(key, links)| -> Result<DateBucket> {
            Ok(DateBucket {
                key: key.clone(),
                links: builder.build_all(links)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    buckets.sort_by(|a, b| b.key.cmp(&a.key));
    Ok(buckets)
}

/// Groups year-months by year, newest year first.
///
/// The input is treated as a set: a year-month listed more than once
/// appears once in its year. Months within a year are ascending.
///
/// # Errors
///
/// Returns [`ComposeError::EmptyYearMonths`] if `year_months` is empty
pub fn year_groups(year_months: &[YearMonth]) -> Result<Vec<YearGroup>> {
    if year_months.is_empty() {
        return Err(ComposeError::EmptyYearMonths.into());
    }

    let mut by_year: BTreeMap<i32, Vec<YearMonth>> = BTreeMap::new();
    for ym in year_months {
        by_year.entry(ym.year()).or_default().push(*ym);
    }

    Ok(by_year
        .into_iter()
        .rev()
        .map(|(year, mut months)| {
            months.sort();
            months.dedup();
            YearGroup {
                year: year.to_string(),
                months,
            }
        })
        .collect())
}
