//! IEEE formatter

use crate::format::shared::{
    initials_then_surname, join_clauses, join_names, normalize_page_range, preferred_locator,
    split_et_al_tail,
};
use crate::reference::Reference;

const MAX_LISTED_AUTHORS: usize = 6;

/// Format a reference in IEEE style
///
/// `J. Doe and J. Smith, "Deep Learning for Everything," Journal of
/// Omniscience, vol. 42, no. 7, pp. 1-10, 2020, doi: ....`
pub fn format_ieee(reference: &Reference) -> String {
    let mut out = String::new();

    let authors = reference.normalized_authors();
    let author_text = ieee_author_list(&authors);
    if !author_text.is_empty() {
        out.push_str(&author_text);
        out.push_str(", ");
    }
    if let Some(title) = reference.title.as_deref().filter(|title| !title.is_empty()) {
        out.push_str(&format!("\"{title},\" "));
    }

    let is_journal = reference
        .journal
        .as_deref()
        .map(|journal| !journal.is_empty())
        .unwrap_or(false);
    let has_booktitle = reference
        .booktitle
        .as_deref()
        .map(|booktitle| !booktitle.is_empty())
        .unwrap_or(false);
    let clauses = [
        reference.primary_container().map(str::to_string),
        // primary_container picks the booktitle, so the publisher still
        // needs its own clause
        if !is_journal && has_booktitle {
            reference.publisher.clone().filter(|p| !p.is_empty())
        } else {
            None
        },
        if is_journal {
            None
        } else {
            reference.place.clone()
        },
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
        reference
            .pages
            .as_deref()
            .filter(|pages| !pages.is_empty())
            .map(|pages| format!("pp. {}", normalize_page_range(pages))),
        reference
            .year
            .as_deref()
            .filter(|year| !year.is_empty())
            .map(str::to_string),
        locator_clause(reference),
    ];
    out.push_str(&join_clauses(&clauses, ", "));

    let trimmed = out.trim_end().to_string();
    if trimmed.is_empty() {
        return trimmed;
    }
    if trimmed.ends_with('.') {
        trimmed
    } else {
        format!("{trimmed}.")
    }
}

/// `I. Last` names: `and` for pairs, serial comma for longer lists, and a
/// bare `First et al.` past six authors
fn ieee_author_list(authors: &[String]) -> String {
    let (authors, et_al_tail) = split_et_al_tail(authors, "et al.");
    let rendered: Vec<String> = authors
        .iter()
        .map(|name| initials_then_surname(name))
        .collect();
    if et_al_tail || rendered.len() > MAX_LISTED_AUTHORS {
        return match rendered.first() {
            Some(first) => format!("{first} et al."),
            None => String::new(),
        };
    }
    join_names(&rendered, ", ", " and ", ", and ")
}

fn locator_clause(reference: &Reference) -> Option<String> {
    preferred_locator(reference.doi.as_deref(), reference.url.as_deref(), "doi: ")
}
