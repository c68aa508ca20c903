//! Chicago author-date formatter

use crate::format::shared::{
    format_author_list, join_clauses, join_with_period, normalize_page_range, preferred_locator,
    AuthorListOptions,
};
use crate::reference::Reference;

const DOI_PREFIX: &str = "https://doi.org/";

/// Format a reference in Chicago author-date style
///
/// `Doe, John, and Jane Smith. 2020. "Deep Learning for Everything."
/// *Journal of Omniscience* 42 (7): 1-10. https://doi.org/....`
pub fn format_chicago(reference: &Reference) -> String {
    let options = AuthorListOptions {
        max_names: Some(3),
        et_al_after_first: true,
        ..AuthorListOptions::default()
    };
    let authors = reference.normalized_authors();
    let author_section = if authors.is_empty() {
        None
    } else {
        Some(format_author_list(&authors, &options))
    };

    let year_section = Some(
        reference
            .year
            .as_deref()
            .filter(|year| !year.is_empty())
            .unwrap_or("n.d.")
            .to_string(),
    );

    let in_container = reference
        .journal
        .as_deref()
        .or(reference.booktitle.as_deref())
        .map(|container| !container.is_empty())
        .unwrap_or(false);
    let title_section = reference
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .map(|title| {
            if in_container {
                format!("\"{title}.\"")
            } else {
                format!("*{title}*")
            }
        });

    let sections = [
        author_section,
        year_section,
        title_section,
        detail_section(reference),
        preferred_locator(
            reference.doi.as_deref(),
            reference.url.as_deref(),
            DOI_PREFIX,
        ),
    ];
    join_with_period(&sections)
}

fn detail_section(reference: &Reference) -> Option<String> {
    let pages = reference
        .pages
        .as_deref()
        .filter(|pages| !pages.is_empty())
        .map(normalize_page_range);
    if let Some(journal) = reference.journal.as_deref().filter(|j| !j.is_empty()) {
        let mut detail = format!("*{journal}*");
        if let Some(volume) = reference.volume.as_deref().filter(|v| !v.is_empty()) {
            detail.push_str(&format!(" {volume}"));
        }
        if let Some(issue) = reference.issue.as_deref().filter(|i| !i.is_empty()) {
            detail.push_str(&format!(" ({issue})"));
        }
        if let Some(pages) = pages {
            detail.push_str(&format!(": {pages}"));
        }
        return Some(detail);
    }
    if let Some(booktitle) = reference.booktitle.as_deref().filter(|b| !b.is_empty()) {
        let mut detail = format!("In *{booktitle}*");
        if let Some(pages) = pages {
            detail.push_str(&format!(", {pages}"));
        }
        return Some(detail);
    }
    let clauses = [reference.place.clone(), reference.publisher.clone()];
    let joined = join_clauses(&clauses, ", ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
