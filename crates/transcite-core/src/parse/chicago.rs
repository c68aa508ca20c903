//! Chicago author-date citation parser

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CitationParseError;
use crate::format::shared::normalize_page_range;
use crate::parse::shared::{
    classify_locator, generate_cite_key, split_author_pair, strip_trailing_period, Locator,
};
use crate::reference::Reference;

lazy_static! {
    static ref ANCHOR: Regex =
        Regex::new(r"^(?P<authors>.*?)\.\s+(?P<year>\d{4}|n\.d\.)\.?\s+(?P<rest>.+)$").unwrap();
    static ref QUOTED_TITLE: Regex = Regex::new(r#"^"([^"]+?)\.?""#).unwrap();
    static ref ITALIC_TITLE: Regex = Regex::new(r"^\*([^*]+)\*\.?").unwrap();
    static ref JOURNAL_DETAIL: Regex =
        Regex::new(r"\*([^*]+)\*\s+(\d+)\s*(?:\(([^)]+)\))?:\s*(\S+)").unwrap();
    static ref CHAPTER_DETAIL: Regex =
        Regex::new(r"In \*([^*]+)\*(?:,\s*([\w\-\u{2013}]+))?").unwrap();
    static ref TRAILING_LOCATOR: Regex = Regex::new(r"(https?://\S+|10\.\S+)$").unwrap();
}

/// Parse a Chicago author-date citation string
///
/// The `Authors. Year.` opening anchors the split; `n.d.` is accepted in
/// the year slot and maps to an absent year.
pub fn parse_chicago_citation(text: &str) -> Result<Reference, CitationParseError> {
    let text = text.trim();
    let caps = ANCHOR
        .captures(text)
        .ok_or_else(|| CitationParseError::Malformed("missing authors/year opening".to_string()))?;
    let authors = split_author_pair(
        caps.name("authors")
            .map(|m| m.as_str().trim())
            .unwrap_or_default(),
    );
    let year = caps
        .name("year")
        .map(|m| m.as_str())
        .filter(|year| *year != "n.d.")
        .map(str::to_string);

    let mut rest = caps
        .name("rest")
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    let mut locator = Locator::default();
    if let Some(found) = TRAILING_LOCATOR.find(&rest) {
        locator = classify_locator(strip_trailing_period(found.as_str()));
        rest = rest[..found.start()].trim().to_string();
    }

    let mut journal = None;
    let mut booktitle = None;
    let mut volume = None;
    let mut issue = None;
    let mut pages = None;
    let mut place = None;
    let mut publisher = None;

    let title;
    if let Some(title_caps) = QUOTED_TITLE.captures(&rest) {
        let anchor_end = title_caps.get(0).map(|m| m.end()).unwrap_or(0);
        title = title_caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let detail = rest[anchor_end..].trim();
        if let Some(detail_caps) = JOURNAL_DETAIL.captures(detail) {
            journal = detail_caps.get(1).map(|m| m.as_str().trim().to_string());
            volume = detail_caps.get(2).map(|m| m.as_str().to_string());
            issue = detail_caps.get(3).map(|m| m.as_str().to_string());
            pages = detail_caps
                .get(4)
                .map(|m| normalize_page_range(strip_trailing_period(m.as_str())));
        } else if let Some(detail_caps) = CHAPTER_DETAIL.captures(detail) {
            booktitle = detail_caps.get(1).map(|m| m.as_str().trim().to_string());
            pages = detail_caps
                .get(2)
                .map(|m| normalize_page_range(m.as_str()));
        } else if let Some(detail_caps) = ITALIC_TITLE.captures(detail) {
            // Bare italic container, no volume data
            journal = detail_caps.get(1).map(|m| m.as_str().trim().to_string());
        } else {
            (place, publisher) = split_imprint(detail);
        }
    } else if let Some(title_caps) = ITALIC_TITLE.captures(&rest) {
        let anchor_end = title_caps.get(0).map(|m| m.end()).unwrap_or(0);
        title = title_caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        (place, publisher) = split_imprint(rest[anchor_end..].trim());
    } else {
        return Err(CitationParseError::Malformed(
            "missing title segment".to_string(),
        ));
    }
    if title.is_empty() {
        return Err(CitationParseError::Malformed(
            "missing title segment".to_string(),
        ));
    }

    let entry_type = if journal.is_some() { "article" } else { "book" };
    let cite_key = generate_cite_key(&authors, year.as_deref(), Some(&title));

    let mut reference = Reference::new(entry_type, cite_key)
        .with_title(title)
        .with_authors(authors);
    if let Some(journal) = journal {
        reference = reference.with_journal(journal);
    }
    if let Some(booktitle) = booktitle {
        reference = reference.with_booktitle(booktitle);
    }
    if let Some(place) = place {
        reference = reference.with_place(place);
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

fn split_imprint(detail: &str) -> (Option<String>, Option<String>) {
    let detail = strip_trailing_period(detail.trim());
    if detail.is_empty() {
        return (None, None);
    }
    match detail.split_once(", ") {
        Some((place, publisher)) => (
            Some(place.trim().to_string()),
            Some(publisher.trim().to_string()),
        ),
        None => (None, Some(detail.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_article() {
        let reference = parse_chicago_citation(
            "Doe, John, and Jane Smith. 2020. \"Deep Learning for Everything.\" \
             *Journal of Omniscience* 42 (7): 1\u{2013}10. \
             https://doi.org/10.1000/j.jo.2020.01.001.",
        )
        .unwrap();
        assert_eq!(reference.entry_type, "article");
        assert_eq!(reference.authors, vec!["Doe, John", "Jane Smith"]);
        assert_eq!(reference.year.as_deref(), Some("2020"));
        assert_eq!(reference.journal.as_deref(), Some("Journal of Omniscience"));
        assert_eq!(reference.volume.as_deref(), Some("42"));
        assert_eq!(reference.issue.as_deref(), Some("7"));
        assert_eq!(reference.pages.as_deref(), Some("1\u{2013}10"));
        assert_eq!(reference.doi.as_deref(), Some("10.1000/j.jo.2020.01.001"));
    }

    #[test]
    fn test_nd_year_maps_to_absent() {
        let reference = parse_chicago_citation(
            "Doe, John. n.d. \"A Study.\" *Nature*.",
        )
        .unwrap();
        assert!(reference.year.is_none());
        assert_eq!(reference.journal.as_deref(), Some("Nature"));
    }

    #[test]
    fn test_italic_book_title() {
        let reference = parse_chicago_citation(
            "Doe, John. 2018. *Collected Essays*. Chicago, University Press.",
        )
        .unwrap();
        assert_eq!(reference.entry_type, "book");
        assert_eq!(reference.title.as_deref(), Some("Collected Essays"));
        assert_eq!(reference.place.as_deref(), Some("Chicago"));
        assert_eq!(reference.publisher.as_deref(), Some("University Press"));
    }

    #[test]
    fn test_book_chapter() {
        let reference = parse_chicago_citation(
            "Doe, John. 2018. \"A Chapter.\" In *Collected Essays*, 12\u{2013}40.",
        )
        .unwrap();
        assert_eq!(reference.booktitle.as_deref(), Some("Collected Essays"));
        assert_eq!(reference.pages.as_deref(), Some("12\u{2013}40"));
    }

    #[test]
    fn test_missing_year_opening_is_malformed() {
        let error =
            parse_chicago_citation("Doe, John. \"A Study.\" *Nature* 5: 1.").unwrap_err();
        assert!(matches!(error, CitationParseError::Malformed(_)));
    }
}
