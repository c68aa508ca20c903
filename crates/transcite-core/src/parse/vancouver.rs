//! Vancouver citation parser

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CitationParseError;
use crate::format::shared::normalize_page_range;
use crate::parse::shared::{
    capitalize_sentence, classify_locator, generate_cite_key, split_authors_delimited,
    strip_trailing_period, Locator,
};
use crate::reference::Reference;

lazy_static! {
    static ref TIMELINE: Regex = Regex::new(
        r"^(?P<year>\d{4}|n\.d\.?)(?:;(?P<volume>\d+)?(?:\((?P<issue>\w+)\))?)?(?::(?P<pages>[\w\-\u{2013}]+))?$",
    )
    .unwrap();
    static ref IMPRINT: Regex = Regex::new(r"^(?P<publisher>.+);\s*(?P<year>\d{4}|n\.d\.?)$").unwrap();
}

/// Parse a Vancouver-shaped citation string
///
/// Vancouver output never carries periods inside the author segment, so
/// `. `-splitting yields clean segments: authors, title, source, timeline,
/// locator.
pub fn parse_vancouver_citation(text: &str) -> Result<Reference, CitationParseError> {
    let segments: Vec<&str> = text
        .trim()
        .split(". ")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    if segments.len() < 3 {
        return Err(CitationParseError::Malformed(
            "expected author, title, and source segments".to_string(),
        ));
    }

    let authors = split_authors_delimited(segments[0]);
    let title = capitalize_sentence(strip_trailing_period(segments[1]));
    if title.is_empty() {
        return Err(CitationParseError::Malformed(
            "missing title segment".to_string(),
        ));
    }

    let mut journal = None;
    let mut publisher = None;
    let mut year = None;
    let mut volume = None;
    let mut issue = None;
    let mut pages = None;
    let trailing_from;

    let timeline_at = |index: usize| {
        segments
            .get(index)
            .copied()
            .and_then(|segment| TIMELINE.captures(strip_trailing_period(segment)))
    };
    if let Some(caps) = timeline_at(3) {
        journal = Some(segments[2].to_string());
        year = read_year(caps.name("year").map(|m| m.as_str()));
        volume = caps.name("volume").map(|m| m.as_str().to_string());
        issue = caps.name("issue").map(|m| m.as_str().to_string());
        pages = caps
            .name("pages")
            .map(|m| normalize_page_range(m.as_str()));
        trailing_from = 4;
    } else if let Some(caps) = IMPRINT.captures(strip_trailing_period(segments[2])) {
        publisher = caps.name("publisher").map(|m| m.as_str().trim().to_string());
        year = read_year(caps.name("year").map(|m| m.as_str()));
        trailing_from = 3;
    } else if let Some(caps) = timeline_at(2) {
        year = read_year(caps.name("year").map(|m| m.as_str()));
        volume = caps.name("volume").map(|m| m.as_str().to_string());
        issue = caps.name("issue").map(|m| m.as_str().to_string());
        pages = caps
            .name("pages")
            .map(|m| normalize_page_range(m.as_str()));
        trailing_from = 3;
    } else {
        return Err(CitationParseError::Malformed(
            "unrecognized source segment".to_string(),
        ));
    }

    let mut locator = Locator::default();
    let mut index = trailing_from.min(segments.len());
    while index < segments.len() {
        let token = strip_trailing_period(segments[index]);
        if token.starts_with("doi:") || token.starts_with("http") || token.starts_with("10.") {
            let classified = classify_locator(token);
            locator.doi = locator.doi.or(classified.doi);
            locator.url = locator.url.or(classified.url);
        } else if let Some(page_text) = token.strip_prefix("p. ") {
            pages = Some(normalize_page_range(page_text));
        } else if token == "p" {
            // `p. 12-40.` loses its abbreviation period to the segment
            // split, leaving a bare `p` before the page range
            if let Some(next) = segments.get(index + 1) {
                pages = Some(normalize_page_range(strip_trailing_period(next)));
                index += 2;
                continue;
            }
        }
        index += 1;
    }

    let entry_type = if journal.is_some() { "article" } else { "book" };
    let cite_key = generate_cite_key(&authors, year.as_deref(), Some(&title));

    let mut reference = Reference::new(entry_type, cite_key)
        .with_title(title)
        .with_authors(authors);
    if let Some(journal) = journal {
        reference = reference.with_journal(journal);
    }
    if let Some(publisher) = publisher {
        reference = reference.with_publisher(publisher);
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

fn read_year(raw: Option<&str>) -> Option<String> {
    raw.filter(|year| !year.starts_with("n.d")).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_article() {
        let reference = parse_vancouver_citation(
            "Doe J, Smith J. Deep learning for everything. \
             Journal of Omniscience. 2020;42(7):1\u{2013}10. \
             doi:10.1000/j.jo.2020.01.001.",
        )
        .unwrap();
        assert_eq!(reference.entry_type, "article");
        assert_eq!(reference.authors, vec!["Doe J", "Smith J"]);
        assert_eq!(
            reference.title.as_deref(),
            Some("Deep learning for everything")
        );
        assert_eq!(reference.journal.as_deref(), Some("Journal of Omniscience"));
        assert_eq!(reference.year.as_deref(), Some("2020"));
        assert_eq!(reference.volume.as_deref(), Some("42"));
        assert_eq!(reference.issue.as_deref(), Some("7"));
        assert_eq!(reference.pages.as_deref(), Some("1\u{2013}10"));
        assert_eq!(reference.doi.as_deref(), Some("10.1000/j.jo.2020.01.001"));
    }

    #[test]
    fn test_book_shape() {
        let reference = parse_vancouver_citation(
            "Doe J. Collected essays. Beacon Press; 2018. p. 12\u{2013}40.",
        )
        .unwrap();
        assert_eq!(reference.entry_type, "book");
        assert_eq!(reference.publisher.as_deref(), Some("Beacon Press"));
        assert_eq!(reference.year.as_deref(), Some("2018"));
        assert_eq!(reference.pages.as_deref(), Some("12\u{2013}40"));
    }

    #[test]
    fn test_issue_without_volume() {
        let reference = parse_vancouver_citation(
            "Doe J. A study. Nature. 2020;(7):1\u{2013}2.",
        )
        .unwrap();
        assert!(reference.volume.is_none());
        assert_eq!(reference.issue.as_deref(), Some("7"));
        assert_eq!(reference.pages.as_deref(), Some("1\u{2013}2"));
    }

    #[test]
    fn test_nd_year_maps_to_absent() {
        let reference = parse_vancouver_citation(
            "Doe J. A study. Nature. n.d.:3\u{2013}9.",
        )
        .unwrap();
        assert!(reference.year.is_none());
        assert_eq!(reference.pages.as_deref(), Some("3\u{2013}9"));
    }

    #[test]
    fn test_et_al_authors() {
        let reference = parse_vancouver_citation(
            "Doe J, et al. A study. Nature. 2020;5:1\u{2013}2.",
        )
        .unwrap();
        assert_eq!(reference.authors, vec!["Doe J", "et al."]);
    }

    #[test]
    fn test_too_few_segments_is_malformed() {
        let error = parse_vancouver_citation("Doe J. A study.").unwrap_err();
        assert!(matches!(error, CitationParseError::Malformed(_)));
    }
}
