//! APA 6th edition formatter

use crate::format::shared::{
    join_clauses, join_names, join_with_period, normalize_page_range, preferred_locator,
    sentence_case, split_et_al_tail, surname_with_initials,
};
use crate::reference::Reference;

const DOI_PREFIX: &str = "https://doi.org/";

/// Format a reference in APA 6th edition style
///
/// `Doe, J., & Smith, J. (2020). Deep learning for everything. Journal of
/// Omniscience, 42(7), 1-10. https://doi.org/...`
pub fn format_apa(reference: &Reference) -> String {
    let sections = [
        author_section(reference, 7),
        year_section(reference),
        title_section(reference),
        container_section(reference, false),
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

pub(crate) fn author_section(reference: &Reference, max_names: usize) -> Option<String> {
    let authors = reference.normalized_authors();
    if authors.is_empty() {
        return None;
    }
    Some(apa_author_list(&authors, max_names))
}

/// Inverted-initials list: serial comma and `&`, with the long-list
/// ellipsis `First ... Last` truncation past `max_names`
pub(crate) fn apa_author_list(authors: &[String], max_names: usize) -> String {
    let (authors, et_al_tail) = split_et_al_tail(authors, "et al.");
    let rendered: Vec<String> = authors
        .iter()
        .map(|name| surname_with_initials(name))
        .collect();
    if et_al_tail {
        return format!("{}, et al.", rendered.join(", "));
    }
    if rendered.len() > max_names {
        let head = rendered[..max_names - 1].join(", ");
        let last = &rendered[rendered.len() - 1];
        return format!("{head}, ... {last}");
    }
    join_names(&rendered, ", ", ", & ", ", & ")
}

pub(crate) fn year_section(reference: &Reference) -> Option<String> {
    reference
        .year
        .as_deref()
        .filter(|year| !year.is_empty())
        .map(|year| format!("({year})."))
}

pub(crate) fn title_section(reference: &Reference) -> Option<String> {
    let title = reference.title.as_deref().filter(|title| !title.is_empty())?;
    let cased = sentence_case(title);
    match reference
        .report_number
        .as_deref()
        .filter(|number| !number.is_empty())
    {
        Some(number) => Some(format!("{cased} (Report No. {number}).")),
        None => Some(format!("{cased}.")),
    }
}

/// The source section after the title: journal, proceedings, book chapter,
/// or the loose edition/place/publisher clause for whole works
pub(crate) fn container_section(reference: &Reference, italics: bool) -> Option<String> {
    if let Some(journal) = reference.journal.as_deref().filter(|j| !j.is_empty()) {
        return Some(journal_clause(reference, journal, italics));
    }
    let pages = reference
        .pages
        .as_deref()
        .filter(|pages| !pages.is_empty())
        .map(normalize_page_range);
    if let Some(event) = reference
        .event_title
        .as_deref()
        .filter(|event| !event.is_empty())
    {
        let clauses = [
            Some(format!("In {event}")),
            pages.map(|pages| format!("(pp. {pages})")),
            reference.event_location.clone(),
            reference.publisher.clone(),
        ];
        return Some(format!("{}.", join_clauses(&clauses, ", ")));
    }
    if let Some(booktitle) = reference
        .booktitle
        .as_deref()
        .filter(|booktitle| !booktitle.is_empty())
    {
        let clauses = [
            Some(format!("In {booktitle}")),
            reference
                .edition
                .as_deref()
                .map(|edition| format!("({edition} ed.)")),
            pages.map(|pages| format!("(pp. {pages})")),
            reference.publisher.clone(),
        ];
        return Some(format!("{}.", join_clauses(&clauses, ", ")));
    }
    let clauses = [
        reference
            .edition
            .as_deref()
            .map(|edition| format!("({edition} ed.)")),
        reference.place.clone(),
        reference.publisher.clone(),
        pages.map(|pages| format!("pp. {pages}")),
        reference
            .accessed_date
            .as_deref()
            .map(|date| format!("Retrieved {date}")),
    ];
    let joined = join_clauses(&clauses, ", ");
    if joined.is_empty() {
        None
    } else {
        Some(format!("{joined}."))
    }
}

fn journal_clause(reference: &Reference, journal: &str, italics: bool) -> String {
    let mut clause = if italics {
        format!("*{journal}*")
    } else {
        journal.to_string()
    };
    let volume = reference.volume.as_deref().filter(|v| !v.is_empty());
    let issue = reference.issue.as_deref().filter(|i| !i.is_empty());
    match (volume, issue) {
        (Some(volume), issue) => {
            if italics {
                clause.push_str(&format!(", *{volume}*"));
            } else {
                clause.push_str(&format!(", {volume}"));
            }
            if let Some(issue) = issue {
                clause.push_str(&format!("({issue})"));
            }
        }
        // No volume: an issue on its own is not rendered
        (None, _) => {}
    }
    if let Some(pages) = reference.pages.as_deref().filter(|p| !p.is_empty()) {
        clause.push_str(&format!(", {}", normalize_page_range(pages)));
    }
    format!("{clause}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Reference {
        Reference::new("article", "doe2020deeplearningforeverything")
            .with_authors(["John Doe", "Jane Smith"])
            .with_title("Deep Learning for Everything")
            .with_journal("Journal of Omniscience")
            .with_year("2020")
            .with_volume("42")
            .with_issue("7")
            .with_pages("1-10")
            .with_doi("10.1000/j.jo.2020.01.001")
    }

    #[test]
    fn test_journal_article() {
        assert_eq!(
            format_apa(&scenario()),
            "Doe, J., & Smith, J. (2020). Deep learning for everything. \
             Journal of Omniscience, 42(7), 1\u{2013}10. \
             https://doi.org/10.1000/j.jo.2020.01.001"
        );
    }

    #[test]
    fn test_single_author_no_locator() {
        let reference = Reference::new("article", "k")
            .with_authors(["John Doe"])
            .with_title("A study")
            .with_journal("Nature")
            .with_year("2019")
            .with_volume("5");
        assert_eq!(
            format_apa(&reference),
            "Doe, J. (2019). A study. Nature, 5."
        );
    }

    #[test]
    fn test_eight_authors_use_ellipsis() {
        let authors: Vec<String> = (1..=8).map(|n| format!("Ann Author{n}")).collect();
        let list = apa_author_list(&authors, 7);
        assert!(list.starts_with("Author1, A., Author2, A."));
        assert!(list.contains(", ... Author8, A."));
        assert!(!list.contains("Author7"));
    }

    #[test]
    fn test_seven_authors_listed_in_full() {
        let authors: Vec<String> = (1..=7).map(|n| format!("Ann Author{n}")).collect();
        let list = apa_author_list(&authors, 7);
        assert!(list.contains("Author6, A., & Author7, A."));
        assert!(!list.contains("..."));
    }

    #[test]
    fn test_book_renders_publisher_clause() {
        let reference = Reference::new("book", "k")
            .with_authors(["John Doe"])
            .with_title("Collected Essays")
            .with_year("2018")
            .with_place("Boston")
            .with_publisher("Beacon Press");
        assert_eq!(
            format_apa(&reference),
            "Doe, J. (2018). Collected essays. Boston, Beacon Press."
        );
    }

    #[test]
    fn test_report_number_suffix() {
        let reference = Reference::new("report", "k")
            .with_authors(["John Doe"])
            .with_title("Annual Survey")
            .with_year("2021")
            .with_publisher("Stats Office")
            .with_report_number("88");
        assert_eq!(
            format_apa(&reference),
            "Doe, J. (2021). Annual survey (Report No. 88). Stats Office."
        );
    }

    #[test]
    fn test_issue_without_volume_is_omitted() {
        let reference = Reference::new("article", "k")
            .with_authors(["John Doe"])
            .with_title("A study")
            .with_journal("Nature")
            .with_year("2020")
            .with_issue("7")
            .with_pages("1-2");
        assert_eq!(
            format_apa(&reference),
            "Doe, J. (2020). A study. Nature, 1\u{2013}2."
        );
    }

    #[test]
    fn test_missing_year_is_omitted() {
        let reference = Reference::new("article", "k")
            .with_authors(["John Doe"])
            .with_title("A study")
            .with_journal("Nature");
        assert_eq!(format_apa(&reference), "Doe, J. A study. Nature.");
    }
}
