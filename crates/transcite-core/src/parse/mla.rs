//! MLA citation parser

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CitationParseError;
use crate::format::shared::normalize_page_range;
use crate::parse::shared::{
    classify_locator, generate_cite_key, split_author_pair, strip_trailing_period, Locator,
};
use crate::reference::Reference;

lazy_static! {
    static ref QUOTED_TITLE: Regex = Regex::new(r#""([^"]+?)\.?""#).unwrap();
    static ref ITALIC_CONTAINER: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
    static ref VOLUME: Regex = Regex::new(r"vol\.\s*(\w+)").unwrap();
    static ref ISSUE: Regex = Regex::new(r"no\.\s*(\w+)").unwrap();
    static ref YEAR: Regex = Regex::new(r"\b(\d{4})\b").unwrap();
    static ref PAGES: Regex = Regex::new(r"pp\.\s*([\w\-\u{2013}]+)").unwrap();
    static ref TRAILING_LOCATOR: Regex = Regex::new(r"(https?://\S+|10\.\S+)$").unwrap();
}

/// Parse an MLA-shaped citation string
///
/// Authors sit before the quoted title; the detail clause after it carries
/// the italic container and the `vol.`/`no.`/year/`pp.` markers.
pub fn parse_mla_citation(text: &str) -> Result<Reference, CitationParseError> {
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

    let author_segment = text[..anchor.start()].trim();
    let authors = split_author_pair(strip_trailing_period(author_segment));

    let mut detail = text[anchor.end()..].trim().to_string();
    let mut locator = Locator::default();
    if let Some(found) = TRAILING_LOCATOR.find(&detail) {
        locator = classify_locator(strip_trailing_period(found.as_str()));
        detail = detail[..found.start()].trim().to_string();
    }

    let container = ITALIC_CONTAINER
        .captures(&detail)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());
    let volume = VOLUME
        .captures(&detail)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    let issue = ISSUE
        .captures(&detail)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    let year = YEAR
        .captures(&detail)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());
    let pages = PAGES
        .captures(&detail)
        .and_then(|caps| caps.get(1))
        .map(|m| normalize_page_range(m.as_str()));

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
            reference.with_booktitle(container)
        };
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
    if let Some(doi) = locator.doi {
        reference = reference.with_doi(doi);
    }
    if let Some(url) = locator.url {
        reference = reference.with_url(url);
    }
    Ok(reference)
}
