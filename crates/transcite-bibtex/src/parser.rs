//! Field-format parser
//!
//! Parses `@type{key, field = {value}, ...}` entries. Field values may be
//! brace-delimited (nested braces are balanced), quote-delimited, or bare
//! (terminated by a comma, newline, or the closing brace of the entry).

use nom::{branch::alt, bytes::complete::take_while1, combinator::map, IResult};

use super::entry::{BibTexEntry, BibTexField};
use super::error::BibTexError;

/// Parse a single entry
pub fn parse_entry(input: &str) -> Result<BibTexEntry, BibTexError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(BibTexError::EmptyEntry);
    }
    let (rest, entry) = parse_entry_frame(text)?;
    if !rest.trim().is_empty() {
        return Err(BibTexError::TrailingInput);
    }
    Ok(entry)
}

/// Parse a sequence of entries separated by whitespace
pub fn parse_entries(input: &str) -> Result<Vec<BibTexEntry>, BibTexError> {
    let mut entries = Vec::new();
    let mut remaining = input.trim();
    while !remaining.is_empty() {
        let (rest, entry) = parse_entry_frame(remaining)?;
        entries.push(entry);
        remaining = rest.trim_start();
    }
    if entries.is_empty() {
        return Err(BibTexError::EmptyEntry);
    }
    Ok(entries)
}

/// Parse one `@type{key, ...}` frame, returning the unconsumed remainder
fn parse_entry_frame(input: &str) -> Result<(&str, BibTexEntry), BibTexError> {
    let rest = input.strip_prefix('@').ok_or(BibTexError::MissingAtSign)?;
    let rest = rest.trim_start();

    let type_len = count_while(rest, |c| c.is_ascii_alphanumeric());
    if type_len == 0 {
        return Err(BibTexError::MissingEntryType);
    }
    let entry_type = &rest[..type_len];
    let rest = rest[type_len..].trim_start();

    let rest = rest
        .strip_prefix('{')
        .ok_or(BibTexError::MissingOpeningBrace)?;
    let rest = rest.trim_start();

    let key_len = count_while(rest, |c| c.is_ascii_alphanumeric() || "_-:./".contains(c));
    if key_len == 0 {
        return Err(BibTexError::MissingCiteKey);
    }
    let cite_key = &rest[..key_len];
    let rest = rest[key_len..].trim_start();

    let rest = rest.strip_prefix(',').ok_or(BibTexError::MissingFields)?;

    let (rest, fields) = parse_fields(rest)?;
    let rest = rest.trim_start();
    let rest = rest
        .strip_prefix('}')
        .ok_or(BibTexError::MissingClosingBrace)?;

    let mut entry = BibTexEntry::new(entry_type, cite_key);
    for (key, value) in fields {
        entry.add_field(key, value);
    }
    Ok((rest, entry))
}

/// Parse the `field = value` list up to (not including) the closing brace
fn parse_fields(input: &str) -> Result<(&str, Vec<(String, String)>), BibTexError> {
    let mut fields = Vec::new();
    let mut remaining = input;

    loop {
        remaining = remaining.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if remaining.is_empty() {
            return Err(BibTexError::MissingClosingBrace);
        }
        if remaining.starts_with('}') {
            return Ok((remaining, fields));
        }

        let name_len = count_while(remaining, |c| {
            c.is_ascii_alphanumeric() || c == '_' || c == '-'
        });
        if name_len == 0 {
            return Err(BibTexError::MissingFieldName);
        }
        let name = remaining[..name_len].to_lowercase();
        remaining = remaining[name_len..].trim_start();

        remaining = remaining
            .strip_prefix('=')
            .ok_or_else(|| BibTexError::MissingEquals {
                field: name.clone(),
            })?;
        remaining = remaining.trim_start();

        let (rest, value) = match parse_field_value(remaining) {
            Ok(parsed) => parsed,
            Err(_) => return Err(classify_value_error(remaining, &name)),
        };
        fields.push((name, clean_value(&value)));
        remaining = rest;
    }
}

/// Turn a nom value failure into the matching domain error
fn classify_value_error(input: &str, field: &str) -> BibTexError {
    if input.starts_with('{') {
        BibTexError::UnterminatedBrace
    } else if input.starts_with('"') {
        BibTexError::UnterminatedQuote
    } else {
        BibTexError::MissingValue {
            field: field.to_string(),
        }
    }
}

/// Parse a field value (braced, quoted, or bare)
fn parse_field_value(input: &str) -> IResult<&str, String> {
    alt((
        parse_braced_value,
        parse_quoted_value,
        map(
            take_while1(|c: char| !",\n\r}".contains(c)),
            |s: &str| s.trim().to_string(),
        ),
    ))(input)
}

/// Parse a braced value {content}, keeping interior braces
fn parse_braced_value(input: &str) -> IResult<&str, String> {
    let (rest, content) = parse_braced_content(input)?;
    let inner = &content[1..content.len() - 1];
    Ok((rest, inner.to_string()))
}

/// Parse braced content including nested braces
fn parse_braced_content(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('{') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let mut depth = 0;
    let mut pos = 0;
    let bytes = input.as_bytes();

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[pos + 1..], &input[..pos + 1]));
                }
            }
            b'\\' => {
                // Skip escaped character
                pos += 1;
            }
            _ => {}
        }
        pos += 1;
    }

    Err(nom::Err::Failure(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Parse a quoted value "content"
fn parse_quoted_value(input: &str) -> IResult<&str, String> {
    if !input.starts_with('"') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let mut result = String::new();
    let mut brace_depth = 0;
    let mut escaped = false;

    for (pos, ch) in input.char_indices().skip(1) {
        if escaped {
            result.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '"' if brace_depth == 0 => {
                return Ok((&input[pos + 1..], result));
            }
            '{' => {
                brace_depth += 1;
                result.push('{');
            }
            '}' => {
                brace_depth -= 1;
                result.push('}');
            }
            '\\' => escaped = true,
            c => result.push(c),
        }
    }

    Err(nom::Err::Failure(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Collapse interior whitespace runs (including newlines) to single spaces
fn clean_value(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn count_while(input: &str, predicate: impl Fn(char) -> bool) -> usize {
    input
        .char_indices()
        .find(|(_, c)| !predicate(*c))
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
