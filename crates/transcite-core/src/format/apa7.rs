//! APA 7th edition formatter
//!
//! Differs from 6th edition in the author truncation threshold (20) and in
//! the italic markers around journal and volume.

use crate::format::apa;
use crate::format::shared::{join_with_period, preferred_locator};
use crate::reference::Reference;

const DOI_PREFIX: &str = "https://doi.org/";

/// Format a reference in APA 7th edition style
pub fn format_apa7(reference: &Reference) -> String {
    let sections = [
        apa::author_section(reference, 20),
        apa::year_section(reference),
        apa::title_section(reference),
        apa::container_section(reference, true),
    ];
    let body = join_with_period(&sections);
    match preferred_locator(
        reference.doi.as_deref(),
        reference.url.as_deref(),
        DOI_PREFIX,
    ) {
        Some(locator) if body.is_empty() => locator,
        Some(locator) => format!("{body} {locator}"),
        None => body,
    }
}
