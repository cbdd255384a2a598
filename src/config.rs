//! Rendering configuration.

use anyhow::Result;
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use std::fmt::{Display, Write};

use crate::error::ComposeError;

/// Markdown dialect used for link descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Curly quotes and dashes
    pub smart_punctuation: bool,
    /// Tables, strikethrough, autolinks and task lists
    pub gfm_extensions: bool,
    /// Pass raw HTML in descriptions through unescaped
    pub unsafe_html: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            smart_punctuation: false,
            gfm_extensions: false,
            unsafe_html: true,
        }
    }
}

/// Configuration shared by every page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub markdown: MarkdownOptions,

    /// chrono format for day keys and the daily page date
    pub day_format: String,

    /// Name handed to the file-name resolver for the years include
    pub years_include: String,

    /// Suffix appended to the latest year-month for the index page link
    pub latest_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markdown: MarkdownOptions::default(),
            day_format: "%Y-%m-%d".to_string(),
            years_include: "years.include".to_string(),
            latest_suffix: "-latest.html".to_string(),
        }
    }
}

impl Config {
    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if any of the name or format settings is empty, or if
    /// `day_format` is not a chrono format that can render a calendar date.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("day_format", &self.day_format),
            ("years_include", &self.years_include),
            ("latest_suffix", &self.latest_suffix),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                let message = format!("`{name}` must not be empty");
                return Err(ComposeError::InvalidConfig(message).into());
            }
        }

        if StrftimeItems::new(&self.day_format).any(|item| matches!(item, Item::Error)) {
            let message = format!("`day_format` {:?} is not a valid format", self.day_format);
            return Err(ComposeError::InvalidConfig(message).into());
        }

        // Time specifiers parse fine but cannot render a date without a time
        let sample = NaiveDate::MIN;
        format_day(sample.format(&self.day_format), &self.day_format)?;

        Ok(())
    }
}

/// Writes a chrono formatting result into a string.
///
/// chrono reports unusable format strings only when the value is written,
/// so the write error is surfaced here instead of panicking in `to_string`.
///
/// # Errors
///
/// Returns [`ComposeError::InvalidConfig`] if the format cannot render the value
pub(crate) fn format_day(formatted: impl Display, day_format: &str) -> Result<String, ComposeError> {
    let mut day = String::new();
    write!(day, "{formatted}").map_err(|_| {
        ComposeError::InvalidConfig(format!("`day_format` {day_format:?} cannot format a date"))
    })?;
    Ok(day)
}
