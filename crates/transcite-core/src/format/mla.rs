//! MLA formatter

use crate::format::shared::{
    build_detail_section, format_author_list, join_with_period, normalize_page_range,
    preferred_locator, AuthorListOptions,
};
use crate::reference::Reference;

const DOI_PREFIX: &str = "https://doi.org/";

/// Format a reference in MLA style
///
/// `Doe, John, and Jane Smith. "Deep Learning for Everything." *Journal of
/// Omniscience*, vol. 42, no. 7, 2020, pp. 1-10. https://doi.org/....`
pub fn format_mla(reference: &Reference) -> String {
    let options = AuthorListOptions {
        max_names: Some(2),
        et_al_after_first: true,
        ..AuthorListOptions::default()
    };
    let authors = reference.normalized_authors();
    let author_section = if authors.is_empty() {
        None
    } else {
        Some(format_author_list(&authors, &options))
    };

    // A publisher alone is not a container; standalone works keep a plain title
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
                format!("{title}.")
            }
        });

    let sections = [
        author_section,
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
    let year = reference
        .year
        .as_deref()
        .filter(|year| !year.is_empty())
        .map(str::to_string);
    let pages = reference
        .pages
        .as_deref()
        .filter(|pages| !pages.is_empty())
        .map(|pages| format!("pp. {}", normalize_page_range(pages)));

    if let Some(journal) = reference.journal.as_deref().filter(|j| !j.is_empty()) {
        return build_detail_section(&[
            Some(format!("*{journal}*")),
            reference
                .volume
                .as_deref()
                .filter(|volume| !volume.is_empty())
                .map(|volume| format!("vol. {volume}")),
            reference
                .issue
                .as_deref()
                .filter(|issue| !issue.is_empty())
                .map(|issue| format!("no. {issue}")),
            year,
            pages,
        ]);
    }
    if let Some(booktitle) = reference.booktitle.as_deref().filter(|b| !b.is_empty()) {
        return build_detail_section(&[
            Some(format!("*{booktitle}*")),
            reference.publisher.clone(),
            year,
            pages,
        ]);
    }
    build_detail_section(&[reference.place.clone(), reference.publisher.clone(), year, pages])
}
