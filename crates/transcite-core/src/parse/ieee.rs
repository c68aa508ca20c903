//! IEEE citation parser

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CitationParseError;
use crate::format::shared::normalize_page_range;
use crate::parse::shared::{
    classify_locator, generate_cite_key, split_authors_delimited, strip_trailing_period,
};
use crate::reference::Reference;

lazy_static! {
    static ref QUOTED_TITLE: Regex = Regex::new(r#""([^"]+?),?""#).unwrap();
    static ref VOLUME: Regex = Regex::new(r"^vol\.\s*(\S+)$").unwrap();
    static ref ISSUE: Regex = Regex::new(r"^no\.\s*(\S+)$").unwrap();
    static ref PAGES: Regex = Regex::new(r"^pp\.\s*([\w\-\u{2013}]+)$").unwrap();
    static ref YEAR: Regex = Regex::new(r"^\d{4}$").unwrap();
}

/// Parse an IEEE-shaped citation string
///
/// The quoted title anchors the split; the comma-separated tokens after it
/// are scanned for `vol.`/`no.`/`pp.`/year/locator markers, and the first
/// unmarked token is the container.
pub fn parse_ieee_citation(text: &str) -> Result<Reference, CitationParseError> {
    let text = text.trim();
    let caps = QUOTED_TITLE
        .captures(text)
        .ok_or_else(|| CitationParseError::Malformed("missing quoted title".to_string()))?;
    let anchor = caps
        .get(0)
        .ok_or_else(|| CitationParseError::Malformed("missing quoted title".to_string()))?;
    let title = caps
        .get(1)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    if title.is_empty() {
        return Err(CitationParseError::Malformed(
            "missing quoted title".to_string(),
        ));
    }

    let author_segment = text[..anchor.start()].trim().trim_end_matches(',').trim();
    let authors = split_authors_delimited(author_segment);

    let mut container = None;
    let mut place = None;
    let mut volume = None;
    let mut issue = None;
    let mut pages = None;
    let mut year = None;
    let mut doi = None;
    let mut url = None;
    let tail = strip_trailing_period(text[anchor.end()..].trim());
    for raw in tail.split(", ") {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(caps) = VOLUME.captures(token) {
            volume = caps.get(1).map(|m| m.as_str().to_string());
        } else if let Some(caps) = ISSUE.captures(token) {
            issue = caps.get(1).map(|m| m.as_str().to_string());
        } else if let Some(caps) = PAGES.captures(token) {
            pages = caps.get(1).map(|m| normalize_page_range(m.as_str()));
        } else if YEAR.is_match(token) {
            year = Some(token.to_string());
        } else if let Some(rest) = token.strip_prefix("doi:") {
            doi = Some(rest.trim().to_string());
        } else if token.starts_with("http") || token.starts_with("10.") {
            let locator = classify_locator(token);
            doi = doi.or(locator.doi);
            url = url.or(locator.url);
        } else if container.is_none() {
            container = Some(token.to_string());
        } else if place.is_none() {
            place = Some(token.to_string());
        }
    }

    let is_article = volume.is_some() || issue.is_some();
    let entry_type = if is_article { "article" } else { "book" };
    let cite_key = generate_cite_key(&authors, year.as_deref(), Some(&title));

    let mut reference = Reference::new(entry_type, cite_key)
        .with_title(title)
        .with_authors(authors);
    if let Some(container) = container {
        reference = if is_article {
            reference.with_journal(container)
        } else {
            reference.with_publisher(container)
        };
    }
    if let Some(place) = place {
        reference = reference.with_place(place);
    }
    if let Some(year) = year {
        reference = reference.with_year(year);
    }
    if let Some(volume) = volume {
        reference = reference.with_volume(volume);
    }
    if let Some(issue) = issue {
        reference = reference.with_issue(issue);
    }
    if let Some(pages) = pages {
        reference = reference.with_pages(pages);
    }
    if let Some(doi) = doi {
        reference = reference.with_doi(doi);
    }
    if let Some(url) = url {
        reference = reference.with_url(url);
    }
    Ok(reference)
}
