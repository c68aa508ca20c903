//! Cross-style conversion and codec bridging checks

use rstest::rstest;
use transcite_core::{
    citation_to_bibtex, convert_citation, format_reference, parse_citation, ConversionError,
    Reference,
};

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
#[case("apa")]
#[case("apa6")]
#[case("apa7")]
#[case("ieee")]
#[case("mla")]
#[case("chicago")]
#[case("vancouver")]
fn self_conversion_is_identity(#[case] style: &str) {
    let formatted = format_reference(style, &journal_article()).unwrap();
    assert_eq!(
        convert_citation(style, style, &formatted).unwrap(),
        formatted,
        "style {style}"
    );
}

#[test]
fn conversion_composes_parse_and_format() {
    let apa = format_reference("apa", &journal_article()).unwrap();
    let composed =
        format_reference("ieee", &parse_citation("apa", &apa).unwrap()).unwrap();
    assert_eq!(convert_citation("apa", "ieee", &apa).unwrap(), composed);
}

#[test]
fn unknown_source_style_wraps_as_parse_error() {
    let error = convert_citation("harvard", "ieee", "text").unwrap_err();
    match error {
        ConversionError::Parse { style, message } => {
            assert_eq!(style, "harvard");
            assert!(message.contains("apa, apa6, apa7, chicago, ieee, mla, vancouver"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_target_style_wraps_as_format_error() {
    let apa = format_reference("apa", &journal_article()).unwrap();
    let error = convert_citation("apa", "harvard", &apa).unwrap_err();
    match error {
        ConversionError::Format { style, message } => {
            assert_eq!(style, "harvard");
            assert!(message.contains("apa, apa6, apa7, chicago, ieee, mla, vancouver"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_text_wraps_the_inner_message() {
    let error = convert_citation("vancouver", "apa", "too short").unwrap_err();
    match error {
        ConversionError::Parse { style, message } => {
            assert_eq!(style, "vancouver");
            assert!(message.contains("malformed citation"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn citation_converts_to_field_format() {
    let apa = format_reference("apa", &journal_article()).unwrap();
    let bibtex = citation_to_bibtex("apa", &apa).unwrap();
    assert!(bibtex.starts_with("@article{doe2020deeplearningforeverything,"));
    assert!(bibtex.contains("author = {Doe, J. and Smith, J.}"));
    assert!(bibtex.contains("journal = {Journal of Omniscience}"));
    assert!(bibtex.contains("volume = {42}"));
    assert!(bibtex.contains("number = {7}"));
    assert!(bibtex.contains("pages = {1\u{2013}10}"));
    assert!(bibtex.contains("doi = {10.1000/j.jo.2020.01.001}"));
}
