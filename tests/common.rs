//! Shared test utilities for integration tests.
//!
//! Provides sample links and a composer with a fixed clock so rendered
//! pages are reproducible.

#![allow(dead_code)]

use anyhow::Result;
use chrono::{TimeZone, Utc};
use linklog::{Link, PageComposer, TemplateSet, YearMonth};

/// Timestamp returned by the test clock.
pub const BUILT: &str = "2024-02-01T00:00:00.000Z";

/// Creates composer using the built-in theme and a fixed clock.
///
/// # Errors
///
/// Returns error if the composer fails to build
pub fn builtin_composer() -> Result<PageComposer> {
    PageComposer::builder()
        .templates(TemplateSet::builtin())
        .clock(|| BUILT.to_string())
        .build()
}

/// Creates link published on the given day of January 2024.
pub fn january_link(id: &str, day: u32, description: &str) -> Link {
    Link::new(
        id,
        format!("https://example.com/{id}"),
        description,
        Utc.with_ymd_and_hms(2024, 1, day, 8, 0, 0).unwrap(),
    )
}

/// Parses year-month, panicking on malformed test input.
pub fn ym(s: &str) -> YearMonth {
    s.parse().expect("Test year-month should parse")
}
