//! Helpers shared across the style formatters
//!
//! Name handling accepts the three author shapes that appear in practice:
//! `"Given Surname"`, `"Surname, Given"`, and the `"Surname AB"` form where
//! the final token is a short uppercase initials cluster.

/// Split of a personal name into its given-name part and surname
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameParts {
    pub given: String,
    pub surname: String,
}

/// Parse a personal name into given and surname parts
///
/// A trailing token of 1-3 uppercase letters is treated as an initials
/// cluster (`"Doe JR"` -> surname `"Doe"`, given `"JR"`), not as a surname.
pub fn name_parts(name: &str) -> NameParts {
    let name = name.trim();
    if let Some((surname, given)) = name.split_once(',') {
        return NameParts {
            given: given.trim().to_string(),
            surname: surname.trim().to_string(),
        };
    }
    let tokens: Vec<&str> = name.split_whitespace().collect();
    match tokens.len() {
        0 => NameParts {
            given: String::new(),
            surname: String::new(),
        },
        1 => NameParts {
            given: String::new(),
            surname: tokens[0].to_string(),
        },
        n => {
            let last = tokens[n - 1];
            let is_initials_cluster =
                last.len() <= 3 && last.chars().all(|c| c.is_ascii_uppercase());
            if is_initials_cluster {
                NameParts {
                    given: last.to_string(),
                    surname: tokens[..n - 1].join(" "),
                }
            } else {
                NameParts {
                    given: tokens[..n - 1].join(" "),
                    surname: last.to_string(),
                }
            }
        }
    }
}

/// Surname plus the uppercase initials of the given names
///
/// `"John Robert Doe"` -> `("Doe", ["J", "R"])`. Dotted and clustered
/// initials (`"J.R."`, `"JR"`) expand to one letter each.
pub fn split_name_with_initials(name: &str) -> (String, Vec<String>) {
    let parts = name_parts(name);
    let mut initials = Vec::new();
    for token in parts
        .given
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter(|token| !token.is_empty())
    {
        if token.len() > 1 && token.chars().all(|c| c.is_ascii_uppercase()) {
            for letter in token.chars() {
                initials.push(letter.to_string());
            }
        } else if let Some(first) = token.chars().next() {
            initials.push(first.to_uppercase().to_string());
        }
    }
    (parts.surname, initials)
}

/// `"John Doe"` -> `"Doe, J."`
pub fn surname_with_initials(name: &str) -> String {
    let (surname, initials) = split_name_with_initials(name);
    if initials.is_empty() {
        return surname;
    }
    let dotted: Vec<String> = initials.iter().map(|i| format!("{i}.")).collect();
    format!("{}, {}", surname, dotted.join(" "))
}

/// `"John Doe"` -> `"J. Doe"`
pub fn initials_then_surname(name: &str) -> String {
    let (surname, initials) = split_name_with_initials(name);
    if initials.is_empty() {
        return surname;
    }
    let dotted: Vec<String> = initials.iter().map(|i| format!("{i}.")).collect();
    format!("{} {}", dotted.join(" "), surname)
}

/// `"John Robert Doe"` -> `"Doe JR"`
pub fn surname_with_bare_initials(name: &str) -> String {
    let (surname, initials) = split_name_with_initials(name);
    if initials.is_empty() {
        return surname;
    }
    format!("{} {}", surname, initials.concat())
}

/// `"John Doe"` -> `"Doe, John"`; single-token names pass through
pub fn surname_first_full(name: &str) -> String {
    let parts = name_parts(name);
    if parts.given.is_empty() {
        parts.surname
    } else {
        format!("{}, {}", parts.surname, parts.given)
    }
}

/// `"Doe, John"` -> `"John Doe"`; single-token names pass through
pub fn display_name(name: &str) -> String {
    let parts = name_parts(name);
    if parts.given.is_empty() {
        parts.surname
    } else {
        format!("{} {}", parts.given, parts.surname)
    }
}

/// Detach a trailing literal `et al.` element from an author list
///
/// Parsers keep truncated lists as `["First Author", "et al."]`; formatters
/// drop the marker here and re-append their own rendering of it.
pub fn split_et_al_tail<'a>(authors: &'a [String], et_al_text: &str) -> (&'a [String], bool) {
    match authors.last() {
        Some(last) if last == et_al_text => (&authors[..authors.len() - 1], true),
        _ => (authors, false),
    }
}

/// Join already-rendered names with list punctuation
///
/// Two names use `pair_joiner`; longer lists join all but the last with
/// `separator` and attach the last with `final_joiner`.
pub fn join_names(names: &[String], separator: &str, pair_joiner: &str, final_joiner: &str) -> String {
    match names.len() {
        0 => String::new(),
        1 => names[0].clone(),
        2 => format!("{}{}{}", names[0], pair_joiner, names[1]),
        n => format!(
            "{}{}{}",
            names[..n - 1].join(separator),
            final_joiner,
            names[n - 1]
        ),
    }
}

/// Rendering options for [`format_author_list`]
#[derive(Clone, Debug)]
pub struct AuthorListOptions {
    /// Invert the first name to `Surname, Given`
    pub invert_first: bool,
    /// Word before the final name (`and`, `&`)
    pub conjunction: String,
    /// Separator between non-final names
    pub separator: String,
    /// Punctuation before the conjunction (serial comma when `,`)
    pub final_separator: String,
    /// Longest list rendered in full
    pub max_names: Option<usize>,
    pub et_al_text: String,
    /// When truncating, keep only the first name (else keep `max_names`)
    pub et_al_after_first: bool,
    pub et_al_separator: String,
}

impl Default for AuthorListOptions {
    fn default() -> Self {
        Self {
            invert_first: true,
            conjunction: "and".to_string(),
            separator: ",".to_string(),
            final_separator: ",".to_string(),
            max_names: None,
            et_al_text: "et al.".to_string(),
            et_al_after_first: false,
            et_al_separator: ", ".to_string(),
        }
    }
}

/// Render a full-name author list in the MLA/Chicago manner
pub fn format_author_list(authors: &[String], options: &AuthorListOptions) -> String {
    let (authors, had_et_al_tail) = split_et_al_tail(authors, &options.et_al_text);
    let rendered: Vec<String> = authors
        .iter()
        .enumerate()
        .map(|(index, name)| {
            if options.invert_first && index == 0 {
                surname_first_full(name)
            } else {
                display_name(name)
            }
        })
        .collect();

    let over_limit = options
        .max_names
        .map(|max| rendered.len() > max)
        .unwrap_or(false);
    if over_limit || had_et_al_tail {
        let kept = if over_limit && !options.et_al_after_first {
            options.max_names.unwrap_or(1)
        } else if over_limit {
            1
        } else {
            rendered.len()
        };
        let head = join_names(
            &rendered[..kept],
            &format!("{} ", options.separator),
            &final_joiner(options),
            &final_joiner(options),
        );
        return format!("{}{}{}", head, options.et_al_separator, options.et_al_text);
    }

    join_names(
        &rendered,
        &format!("{} ", options.separator),
        &final_joiner(options),
        &final_joiner(options),
    )
}

fn final_joiner(options: &AuthorListOptions) -> String {
    format!("{} {} ", options.final_separator, options.conjunction)
}

/// The locator a formatter prefers: DOI first, URL otherwise
///
/// Only a bare registry DOI (a `10.` prefix) is glued onto `doi_prefix`;
/// anything else, URL-form DOIs included, is used verbatim.
pub fn preferred_locator(
    doi: Option<&str>,
    url: Option<&str>,
    doi_prefix: &str,
) -> Option<String> {
    if let Some(doi) = doi.filter(|d| !d.is_empty()) {
        if doi.starts_with("10.") {
            return Some(format!("{doi_prefix}{doi}"));
        }
        return Some(doi.to_string());
    }
    url.filter(|u| !u.is_empty()).map(str::to_string)
}

/// Replace a hyphen between digits with an en dash
pub fn normalize_page_range(pages: &str) -> String {
    let chars: Vec<char> = pages.chars().collect();
    let mut out = String::with_capacity(pages.len());
    for (index, &ch) in chars.iter().enumerate() {
        let between_digits = ch == '-'
            && index > 0
            && chars[index - 1].is_ascii_digit()
            && chars.get(index + 1).map_or(false, |c| c.is_ascii_digit());
        if between_digits {
            out.push('\u{2013}');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Lower-case a title sentence-style
///
/// The first word keeps an initial capital; later words are lowered unless
/// they are all-uppercase (acronyms survive). Whitespace runs are kept.
pub fn sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    let mut first_word = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !word.is_empty() {
                push_cased_word(&mut out, &word, first_word);
                first_word = false;
                word.clear();
            }
            out.push(ch);
        } else {
            word.push(ch);
        }
    }
    if !word.is_empty() {
        push_cased_word(&mut out, &word, first_word);
    }
    out
}

fn push_cased_word(out: &mut String, word: &str, first_word: bool) {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    let is_acronym =
        word.chars().count() > 1 && !letters.is_empty() && letters.iter().all(|c| c.is_uppercase());
    if is_acronym {
        out.push_str(word);
        return;
    }
    if first_word {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    } else {
        out.push_str(&word.to_lowercase());
    }
}

/// Join non-empty clauses with a separator
pub fn join_clauses(clauses: &[Option<String>], separator: &str) -> String {
    clauses
        .iter()
        .flatten()
        .filter(|clause| !clause.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Comma-join non-empty clauses and close with a period
pub fn build_detail_section(clauses: &[Option<String>]) -> Option<String> {
    let joined = join_clauses(clauses, ", ");
    if joined.is_empty() {
        None
    } else {
        Some(format!("{joined}."))
    }
}

const TERMINAL_PUNCTUATION: [&str; 9] = [".", "!", "?", ".\"", "!\"", "?\"", ".'", "!'", "?'"];

/// Space-join sections, closing each with a period unless it already ends
/// with terminal punctuation (a closing quote after the mark counts)
pub fn join_with_period(sections: &[Option<String>]) -> String {
    let mut out = String::new();
    for section in sections.iter().flatten() {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(section);
        if !TERMINAL_PUNCTUATION
            .iter()
            .any(|ending| section.ends_with(ending))
        {
            out.push('.');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parts_recognizes_all_three_forms() {
        assert_eq!(
            name_parts("John Doe"),
            NameParts {
                given: "John".to_string(),
                surname: "Doe".to_string()
            }
        );
        assert_eq!(
            name_parts("Doe, John"),
            NameParts {
                given: "John".to_string(),
                surname: "Doe".to_string()
            }
        );
        assert_eq!(
            name_parts("Doe JR"),
            NameParts {
                given: "JR".to_string(),
                surname: "Doe".to_string()
            }
        );
        assert_eq!(name_parts("Madonna").surname, "Madonna");
    }

    #[test]
    fn test_name_renderings() {
        assert_eq!(surname_with_initials("John Robert Doe"), "Doe, J. R.");
        assert_eq!(surname_with_initials("Doe, J. R."), "Doe, J. R.");
        assert_eq!(initials_then_surname("John Doe"), "J. Doe");
        assert_eq!(surname_with_bare_initials("John Robert Doe"), "Doe JR");
        assert_eq!(surname_with_bare_initials("Doe JR"), "Doe JR");
        assert_eq!(surname_first_full("Jane Smith"), "Smith, Jane");
        assert_eq!(display_name("Doe, John"), "John Doe");
    }

    #[test]
    fn test_format_author_list_mla_shapes() {
        let options = AuthorListOptions {
            max_names: Some(2),
            et_al_after_first: true,
            ..AuthorListOptions::default()
        };
        let one = vec!["John Doe".to_string()];
        assert_eq!(format_author_list(&one, &options), "Doe, John");

        let two = vec!["John Doe".to_string(), "Jane Smith".to_string()];
        assert_eq!(
            format_author_list(&two, &options),
            "Doe, John, and Jane Smith"
        );

        let three = vec![
            "John Doe".to_string(),
            "Jane Smith".to_string(),
            "Bob Jones".to_string(),
        ];
        assert_eq!(format_author_list(&three, &options), "Doe, John, et al.");
    }

    #[test]
    fn test_format_author_list_preserves_et_al_tail() {
        let options = AuthorListOptions {
            max_names: Some(3),
            et_al_after_first: true,
            ..AuthorListOptions::default()
        };
        let authors = vec!["John Doe".to_string(), "et al.".to_string()];
        assert_eq!(format_author_list(&authors, &options), "Doe, John, et al.");
    }

    #[test]
    fn test_preferred_locator() {
        assert_eq!(
            preferred_locator(Some("10.1/x"), None, "https://doi.org/"),
            Some("https://doi.org/10.1/x".to_string())
        );
        assert_eq!(
            preferred_locator(Some("https://doi.org/10.1/x"), None, "https://doi.org/"),
            Some("https://doi.org/10.1/x".to_string())
        );
        assert_eq!(
            preferred_locator(Some("doi:10.1/x"), None, "https://doi.org/"),
            Some("doi:10.1/x".to_string())
        );
        assert_eq!(
            preferred_locator(None, Some("https://example.com"), "https://doi.org/"),
            Some("https://example.com".to_string())
        );
        assert_eq!(preferred_locator(None, None, "https://doi.org/"), None);
    }

    #[test]
    fn test_normalize_page_range() {
        assert_eq!(normalize_page_range("1-10"), "1\u{2013}10");
        assert_eq!(normalize_page_range("1\u{2013}10"), "1\u{2013}10");
        assert_eq!(normalize_page_range("e2020-3"), "e2020\u{2013}3");
        assert_eq!(normalize_page_range("xii-xv"), "xii-xv");
    }

    #[test]
    fn test_sentence_case_keeps_acronyms() {
        assert_eq!(
            sentence_case("Deep Learning for Everything"),
            "Deep learning for everything"
        );
        assert_eq!(
            sentence_case("Advances in DNA  Sequencing"),
            "Advances in DNA  sequencing"
        );
        assert_eq!(sentence_case("a study"), "A study");
    }

    #[test]
    fn test_join_with_period_respects_terminal_punctuation() {
        let sections = vec![
            Some("Doe, John".to_string()),
            Some("2020".to_string()),
            Some("\"A Title.\"".to_string()),
            None,
            Some("https://doi.org/10.1/x".to_string()),
        ];
        assert_eq!(
            join_with_period(&sections),
            "Doe, John. 2020. \"A Title.\" https://doi.org/10.1/x."
        );
    }
}
