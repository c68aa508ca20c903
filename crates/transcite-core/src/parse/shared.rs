//! Helpers shared across the citation-string parsers

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::format::shared::name_parts;

lazy_static! {
    static ref NAME_DELIMITERS: Regex = Regex::new(r",\s+and\s+|\s+and\s+|,\s+").unwrap();
}

/// What a trailing locator token identifies
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Locator {
    pub doi: Option<String>,
    pub url: Option<String>,
}

/// Classify a locator token as DOI, URL, or both
///
/// A `doi.org` URL yields both: the DOI is lifted out of the path and the
/// URL itself is kept.
pub fn classify_locator(token: &str) -> Locator {
    let token = token.trim();
    if let Some(doi) = token.strip_prefix("doi:") {
        let doi = doi.trim();
        return Locator {
            doi: (!doi.is_empty()).then(|| doi.to_string()),
            url: None,
        };
    }
    if token.starts_with("10.") {
        return Locator {
            doi: Some(token.to_string()),
            url: None,
        };
    }
    if token.starts_with("http") {
        let doi = token
            .split_once("doi.org/")
            .map(|(_, path)| path.to_string())
            .filter(|path| !path.is_empty());
        return Locator {
            doi,
            url: Some(token.to_string()),
        };
    }
    Locator::default()
}

fn slug(text: &str) -> String {
    text.nfkd()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Synthesize a cite key from the first author's surname, the year, and the
/// title, each folded to lowercase ASCII alphanumerics
///
/// `["John Doe"], "2020", "Deep Learning for Everything"` gives
/// `doe2020deeplearningforeverything`.
pub fn generate_cite_key(authors: &[String], year: Option<&str>, title: Option<&str>) -> String {
    let author_part = match authors.first() {
        Some(author) => {
            let folded = slug(&name_parts(author).surname);
            if folded.is_empty() {
                "anon".to_string()
            } else {
                folded
            }
        }
        None => String::new(),
    };
    let year_part = match year {
        Some(year) => {
            let folded = slug(year);
            if folded.is_empty() {
                "nd".to_string()
            } else {
                folded
            }
        }
        None => String::new(),
    };
    let title_part = title.map(slug).unwrap_or_default();

    let key = format!("{author_part}{year_part}{title_part}");
    if key.is_empty() {
        "reference".to_string()
    } else {
        key
    }
}

/// Strip at most one trailing period
pub fn strip_trailing_period(text: &str) -> &str {
    text.strip_suffix('.').unwrap_or(text)
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_sentence(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Split a delimited author segment (`A. One, B. Two, and C. Three`) into
/// names, recognizing a trailing `et al.` marker
// Upstream splitting may have eaten the marker's final period
fn strip_et_al_suffix(segment: &str) -> Option<&str> {
    segment
        .strip_suffix("et al.")
        .or_else(|| segment.strip_suffix("et al"))
        .map(|rest| rest.trim_end().trim_end_matches(',').trim_end())
}

pub fn split_authors_delimited(segment: &str) -> Vec<String> {
    let mut rest = segment.trim();
    let mut et_al = false;
    if let Some(stripped) = strip_et_al_suffix(rest) {
        et_al = true;
        rest = stripped;
    }
    let mut names: Vec<String> = NAME_DELIMITERS
        .split(rest)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if et_al {
        names.push("et al.".to_string());
    }
    names
}

/// Split an MLA/Chicago author segment where the first name is inverted
/// (`Doe, John, and Jane Smith`)
///
/// The first two comma tokens before the `and` always belong to the
/// inverted lead author; later comma tokens are full names.
pub fn split_author_pair(segment: &str) -> Vec<String> {
    let mut rest = segment.trim();
    let mut et_al = false;
    if let Some(stripped) = strip_et_al_suffix(rest) {
        et_al = true;
        rest = stripped;
    }

    let mut names = Vec::new();
    if !rest.is_empty() {
        let (head, tail) = match rest.split_once(", and ") {
            Some((head, tail)) => (head, Some(tail)),
            None => match rest.split_once(" and ") {
                Some((head, tail)) => (head.trim_end_matches(','), Some(tail)),
                None => (rest, None),
            },
        };
        let tokens: Vec<&str> = head.split(", ").collect();
        if tokens.len() >= 2 {
            names.push(format!("{}, {}", tokens[0], tokens[1]));
            for token in &tokens[2..] {
                names.push(token.to_string());
            }
        } else {
            names.push(head.to_string());
        }
        if let Some(tail) = tail {
            names.push(tail.trim().to_string());
        }
    }
    if et_al {
        names.push("et al.".to_string());
    }
    names
}
