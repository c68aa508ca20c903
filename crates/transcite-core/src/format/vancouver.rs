//! Vancouver formatter

use crate::format::shared::{
    join_with_period, normalize_page_range, preferred_locator, sentence_case, split_et_al_tail,
    surname_with_bare_initials,
};
use crate::reference::Reference;

/// Format a reference in Vancouver style
///
/// `Doe J, Smith J. Deep learning for everything. Journal of Omniscience.
/// 2020;42(7):1-10. doi:....`
pub fn format_vancouver(reference: &Reference) -> String {
    let sections = [
        author_section(reference),
        reference
            .title
            .as_deref()
            .filter(|title| !title.is_empty())
            .map(|title| format!("{}.", sentence_case(title))),
        source_section(reference),
        locator_section(reference),
    ];
    join_with_period(&sections)
}

fn author_section(reference: &Reference) -> Option<String> {
    let authors = reference.normalized_authors();
    if authors.is_empty() {
        return None;
    }
    let (authors, et_al_tail) = split_et_al_tail(&authors, "et al.");
    let mut rendered: Vec<String> = authors
        .iter()
        .map(|name| surname_with_bare_initials(name))
        .collect();
    if et_al_tail {
        rendered.push("et al.".to_string());
    }
    Some(rendered.join(", "))
}

fn year_text(reference: &Reference) -> &str {
    reference
        .year
        .as_deref()
        .filter(|year| !year.is_empty())
        .unwrap_or("n.d.")
}

/// Journal items render `Journal. Year;Vol(Issue):Pages.`; items without a
/// journal fall back to `Publisher; Year. p. Pages.`
fn source_section(reference: &Reference) -> Option<String> {
    let pages = reference
        .pages
        .as_deref()
        .filter(|pages| !pages.is_empty())
        .map(normalize_page_range);
    if let Some(journal) = reference.journal.as_deref().filter(|j| !j.is_empty()) {
        let mut timeline = year_text(reference).to_string();
        let issue = reference.issue.as_deref().filter(|i| !i.is_empty());
        if let Some(volume) = reference.volume.as_deref().filter(|v| !v.is_empty()) {
            timeline.push_str(&format!(";{volume}"));
            if let Some(issue) = issue {
                timeline.push_str(&format!("({issue})"));
            }
        } else if let Some(issue) = issue {
            timeline.push_str(&format!(";({issue})"));
        }
        if let Some(pages) = pages {
            timeline.push_str(&format!(":{pages}"));
        }
        return Some(format!("{journal}. {timeline}."));
    }
    if let Some(publisher) = reference.publisher.as_deref().filter(|p| !p.is_empty()) {
        let mut section = format!("{publisher}; {}.", year_text(reference));
        if let Some(pages) = pages {
            section.push_str(&format!(" p. {pages}."));
        }
        return Some(section);
    }
    None
}

fn locator_section(reference: &Reference) -> Option<String> {
    preferred_locator(reference.doi.as_deref(), reference.url.as_deref(), "doi:")
        .map(|locator| format!("{locator}."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_article() {
        let reference = Reference::new("article", "doe2020deeplearningforeverything")
            .with_authors(["John Doe", "Jane Smith"])
            .with_title("Deep Learning for Everything")
            .with_journal("Journal of Omniscience")
            .with_year("2020")
            .with_volume("42")
            .with_issue("7")
            .with_pages("1-10")
            .with_doi("10.1000/j.jo.2020.01.001");
        assert_eq!(
            format_vancouver(&reference),
            "Doe J, Smith J. Deep learning for everything. \
             Journal of Omniscience. 2020;42(7):1\u{2013}10. \
             doi:10.1000/j.jo.2020.01.001."
        );
    }

    #[test]
    fn test_missing_year_renders_nd() {
        let reference = Reference::new("article", "k")
            .with_authors(["John Doe"])
            .with_title("A Study")
            .with_journal("Nature")
            .with_pages("3-9");
        assert_eq!(
            format_vancouver(&reference),
            "Doe J. A study. Nature. n.d.:3\u{2013}9."
        );
    }

    #[test]
    fn test_issue_without_volume_kept_in_timeline() {
        let reference = Reference::new("article", "k")
            .with_authors(["John Doe"])
            .with_title("A Study")
            .with_journal("Nature")
            .with_year("2020")
            .with_issue("7")
            .with_pages("1-2");
        assert_eq!(
            format_vancouver(&reference),
            "Doe J. A study. Nature. 2020;(7):1\u{2013}2."
        );
    }

    #[test]
    fn test_url_form_doi_rendered_verbatim() {
        let reference = Reference::new("article", "k")
            .with_authors(["John Doe"])
            .with_title("A Study")
            .with_journal("Nature")
            .with_year("2020")
            .with_doi("https://doi.org/10.1/x");
        assert_eq!(
            format_vancouver(&reference),
            "Doe J. A study. Nature. 2020. https://doi.org/10.1/x."
        );
    }

    #[test]
    fn test_book_shape() {
        let reference = Reference::new("book", "k")
            .with_authors(["John Doe"])
            .with_title("Collected Essays")
            .with_publisher("Beacon Press")
            .with_year("2018")
            .with_pages("12-40");
        assert_eq!(
            format_vancouver(&reference),
            "Doe J. Collected essays. Beacon Press; 2018. p. 12\u{2013}40."
        );
    }

    #[test]
    fn test_et_al_tail_preserved() {
        let reference = Reference::new("article", "k")
            .with_authors(["Doe J", "et al."])
            .with_title("A Study")
            .with_journal("Nature")
            .with_year("2020");
        assert!(format_vancouver(&reference).starts_with("Doe J, et al. A study."));
    }
}
