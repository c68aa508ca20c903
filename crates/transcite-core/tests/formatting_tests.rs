//! Exact-output checks for the style formatters

use rstest::rstest;
use transcite_core::{format_reference, Reference};

fn journal_article() -> Reference {
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

#[rstest]
#[case::apa6(
    "apa6",
    "Doe, J., & Smith, J. (2020). Deep learning for everything. \
     Journal of Omniscience, 42(7), 1\u{2013}10. \
     https://doi.org/10.1000/j.jo.2020.01.001"
)]
#[case::apa7(
    "apa7",
    "Doe, J., & Smith, J. (2020). Deep learning for everything. \
     *Journal of Omniscience*, *42*(7), 1\u{2013}10. \
     https://doi.org/10.1000/j.jo.2020.01.001"
)]
#[case::ieee(
    "ieee",
    "J. Doe and J. Smith, \"Deep Learning for Everything,\" \
     Journal of Omniscience, vol. 42, no. 7, pp. 1\u{2013}10, 2020, \
     doi: 10.1000/j.jo.2020.01.001."
)]
#[case::mla(
    "mla",
    "Doe, John, and Jane Smith. \"Deep Learning for Everything.\" \
     *Journal of Omniscience*, vol. 42, no. 7, 2020, pp. 1\u{2013}10. \
     https://doi.org/10.1000/j.jo.2020.01.001."
)]
#[case::chicago(
    "chicago",
    "Doe, John, and Jane Smith. 2020. \"Deep Learning for Everything.\" \
     *Journal of Omniscience* 42 (7): 1\u{2013}10. \
     https://doi.org/10.1000/j.jo.2020.01.001."
)]
#[case::vancouver(
    "vancouver",
    "Doe J, Smith J. Deep learning for everything. \
     Journal of Omniscience. 2020;42(7):1\u{2013}10. \
     doi:10.1000/j.jo.2020.01.001."
)]
fn journal_article_renders_exactly(#[case] style: &str, #[case] expected: &str) {
    assert_eq!(format_reference(style, &journal_article()).unwrap(), expected);
}

#[test]
fn apa_alias_matches_sixth_edition() {
    let reference = journal_article();
    assert_eq!(
        format_reference("apa", &reference).unwrap(),
        format_reference("apa6", &reference).unwrap()
    );
}

#[rstest]
#[case("apa6")]
#[case("apa7")]
#[case("ieee")]
#[case("mla")]
#[case("chicago")]
#[case("vancouver")]
fn page_ranges_use_en_dash(#[case] style: &str) {
    let formatted = format_reference(style, &journal_article()).unwrap();
    assert!(formatted.contains("1\u{2013}10"), "{style}: {formatted}");
    assert!(!formatted.contains("1-10"), "{style}: {formatted}");
}

#[test]
fn unknown_style_is_rejected_with_supported_list() {
    let error = format_reference("harvard", &journal_article()).unwrap_err();
    assert_eq!(
        error.to_string(),
        "unsupported style 'harvard'. Supported styles: \
         apa, apa6, apa7, chicago, ieee, mla, vancouver"
    );
}

#[test]
fn sparse_reference_still_renders() {
    let reference = Reference::new("misc", "anon").with_title("Untitled Fragment");
    let formatted = format_reference("apa6", &reference).unwrap();
    assert_eq!(formatted, "Untitled fragment.");
}
