//! APA citation parser (serves the apa, apa6, and apa7 style names)

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CitationParseError;
use crate::format::shared::normalize_page_range;
use crate::parse::shared::{
    classify_locator, generate_cite_key, strip_trailing_period, Locator,
};
use crate::reference::Reference;

lazy_static! {
    static ref YEAR_ANCHOR: Regex = Regex::new(r"\(([^)]+)\)\.").unwrap();
    static ref TRAILING_LOCATOR: Regex = Regex::new(r"(https?://\S+|10\.\S+)$").unwrap();
    // Tolerates *...* italics markers so 7th-edition output re-parses
    static ref CONTAINER: Regex = Regex::new(
        r"^(?P<container>.+?)(?:,\s*\*?(?P<volume>\d+)\*?(?:\((?P<issue>[^)]+)\))?)?(?:,\s*(?P<pages>[\w\-\u{2013}]+))?$",
    )
    .unwrap();
    static ref INITIALS: Regex = Regex::new(r"^(?:[A-Z]\.)(?:\s*[A-Z]\.)*$").unwrap();
    static ref REPORT_NUMBER: Regex = Regex::new(r"\s*\(Report No\.\s*([^)]+)\)$").unwrap();
}

/// Parse an APA-shaped citation string
///
/// The `(year).` segment anchors the split: authors before it, title up to
/// the next sentence break, source clause and locator after.
pub fn parse_apa_citation(text: &str) -> Result<Reference, CitationParseError> {
    let text = text.trim();
    let caps = YEAR_ANCHOR
        .captures(text)
        .ok_or_else(|| CitationParseError::Malformed("missing (year). segment".to_string()))?;
    let anchor = caps
        .get(0)
        .ok_or_else(|| CitationParseError::Malformed("missing (year). segment".to_string()))?;
    let year_raw = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .unwrap_or_default();
    let year = (!year_raw.is_empty() && year_raw != "n.d.").then(|| year_raw.to_string());

    let authors = parse_authors(text[..anchor.start()].trim());

    let mut rest = text[anchor.end()..].trim().to_string();
    let mut locator = Locator::default();
    if let Some(found) = TRAILING_LOCATOR.find(&rest) {
        locator = classify_locator(strip_trailing_period(found.as_str()));
        rest = rest[..found.start()].trim().to_string();
    }

    let (raw_title, source_text) = split_title_source(&rest);
    if raw_title.is_empty() {
        return Err(CitationParseError::Malformed(
            "missing title segment".to_string(),
        ));
    }
    let (title, report_number) = split_report_number(&raw_title);

    let mut container = None;
    let mut volume = None;
    let mut issue = None;
    let mut pages = None;
    if let Some(source_text) = source_text.filter(|source| !source.is_empty()) {
        if let Some(caps) = CONTAINER.captures(&source_text) {
            container = caps
                .name("container")
                .map(|m| m.as_str().trim().trim_matches('*').to_string());
            volume = caps.name("volume").map(|m| m.as_str().to_string());
            issue = caps.name("issue").map(|m| m.as_str().to_string());
            pages = caps
                .name("pages")
                .map(|m| normalize_page_range(m.as_str()));
        }
    }

    let is_article = volume.is_some() || issue.is_some() || pages.is_some();
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
    if let Some(report_number) = report_number {
        reference = reference.with_report_number(report_number);
    }
    Ok(reference)
}

/// Split the post-year text into title and source clause at the first
/// sentence break outside parentheses, so a `(Report No. 88).` suffix stays
/// attached to the title
fn split_title_source(rest: &str) -> (String, Option<String>) {
    let mut depth = 0usize;
    for (pos, ch) in rest.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '.' if depth == 0 && rest[pos + 1..].starts_with(' ') => {
                let title = rest[..pos].trim().to_string();
                let source = strip_trailing_period(rest[pos + 1..].trim()).to_string();
                return (title, Some(source));
            }
            _ => {}
        }
    }
    (strip_trailing_period(rest.trim()).to_string(), None)
}

/// Re-pair `Doe, J., & Smith, J.` tokens: an initials token attaches to the
/// preceding surname
fn parse_authors(segment: &str) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    for raw in segment.split(", ") {
        let token = raw.trim();
        let token = token.strip_prefix("& ").unwrap_or(token);
        let token = token.strip_prefix("and ").unwrap_or(token);
        let token = token.strip_prefix("... ").unwrap_or(token).trim();
        if token.is_empty() || token == "..." {
            continue;
        }
        if token == "et al." {
            authors.push("et al.".to_string());
            continue;
        }
        if INITIALS.is_match(token) {
            if let Some(last) = authors.last_mut() {
                last.push_str(", ");
                last.push_str(token);
                continue;
            }
        }
        authors.push(token.to_string());
    }
    authors
}

fn split_report_number(title: &str) -> (String, Option<String>) {
    if let Some(caps) = REPORT_NUMBER.captures(title) {
        if let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) {
            return (
                title[..whole.start()].trim().to_string(),
                Some(number.as_str().to_string()),
            );
        }
    }
    (title.to_string(), None)
}
