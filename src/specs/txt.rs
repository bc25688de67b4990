// src/specs/txt.rs
// Line-oriented errcodes.txt parser (PostgreSQL 9.1+).
//
// Two line shapes, after comment stripping:
//   Section: Class 42 - Syntax Error or Access Rule Violation
//   42501    E    ERRCODE_INSUFFICIENT_PRIVILEGE    insufficient_privilege
// The trailing name token is optional; without it the code has no public
// symbolic name and the entry is dropped. Anything else aborts.

use std::error::Error;

use super::PageSpec;
use crate::catalog::Catalog;
use crate::params::Params;
use crate::version::Version;

pub struct TxtSpec;

impl PageSpec for TxtSpec {
    fn name(&self) -> &'static str {
        "txt"
    }

    fn url(&self, params: &Params, version: Version) -> (String, String) {
        (
            s!(params.txt_url.host),
            params.txt_url.path_for(&version.underscored()),
        )
    }

    fn parse(&self, doc: &str) -> Result<Catalog, Box<dyn Error>> {
        parse_doc(doc)
    }
}

pub fn parse_doc(doc: &str) -> Result<Catalog, Box<dyn Error>> {
    let mut cat = Catalog::new();
    let mut current_class: Option<String> = None;

    for raw in doc.lines() {
        // Strip comments and skip blanks
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        // Parse a section
        if let Some((class, label)) = parse_section(line) {
            cat.insert_class(class, label);
            current_class = Some(s!(class));
            continue;
        }

        // Parse an error
        if let Some((code, symbol)) = parse_error_line(line) {
            // no symbolic name means the code is not publicly visible
            let Some(symbol) = symbol else { continue };
            let class = current_class
                .as_deref()
                .ok_or_else(|| format!("error line before any section: {raw}"))?;
            cat.insert_error(class, code, &symbol.to_uppercase());
            continue;
        }

        // We don't expect anything else
        return Err(format!("unexpected line: {raw}").into());
    }

    Ok(cat)
}

/// "Section: Class 42 - Syntax Error…" → ("42", "Class 42 - Syntax Error…")
fn parse_section(line: &str) -> Option<(&str, &str)> {
    let label = line.strip_prefix("Section: ")?;
    let rest = label.strip_prefix("Class ")?;
    let class = rest.get(..2)?;
    if !rest.get(2..)?.starts_with(" - ") || rest.len() <= 5 {
        return None;
    }
    Some((class, label))
}

/// "CCCCC E|W|S ERRCODE_FOO [name]" → ("CCCCC", Some("name") | None)
fn parse_error_line(line: &str) -> Option<(&str, Option<&str>)> {
    let mut tokens = line.split_whitespace();
    let code = tokens.next()?;
    let qualifier = tokens.next()?;
    let macro_name = tokens.next()?;
    let symbol = tokens.next();
    if tokens.next().is_some() {
        return None;
    }
    if code.chars().count() != 5 {
        return None;
    }
    if !matches!(qualifier, "E" | "W" | "S") {
        return None;
    }
    if !macro_name.starts_with("ERRCODE_") || macro_name.len() == "ERRCODE_".len() {
        return None;
    }
    Some((code, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# errcodes.txt
#      PostgreSQL error codes
# comment-only line

Section: Class 00 - Successful Completion

00000    S    ERRCODE_SUCCESSFUL_COMPLETION                                  successful_completion

Section: Class 42 - Syntax Error or Access Rule Violation

42501    E    ERRCODE_INSUFFICIENT_PRIVILEGE                                 insufficient_privilege
42601    E    ERRCODE_SYNTAX_ERROR                                           syntax_error
42P01    E    ERRCODE_UNDEFINED_TABLE                                        undefined_table
44000    E    ERRCODE_INTERNAL_ONLY_THING
"#;

    #[test]
    fn parses_sections_and_errors() {
        let cat = parse_doc(SAMPLE).unwrap();
        assert_eq!(cat.classes["00"], "Class 00 - Successful Completion");
        assert_eq!(
            cat.classes["42"],
            "Class 42 - Syntax Error or Access Rule Violation"
        );
        assert_eq!(cat.errors["42"]["42501"], "INSUFFICIENT_PRIVILEGE");
        assert_eq!(cat.errors["42"]["42P01"], "UNDEFINED_TABLE");
    }

    #[test]
    fn error_line_round_trip() {
        let cat = parse_doc(
            "Section: Class 42 - Syntax Error or Access Rule Violation\n\
             42501 E ERRCODE_INSUFFICIENT_PRIVILEGE INSUFFICIENT_PRIVILEGE\n",
        )
        .unwrap();
        assert_eq!(cat.errors["42"]["42501"], "INSUFFICIENT_PRIVILEGE");
    }

    #[test]
    fn entry_without_name_token_is_dropped() {
        let cat = parse_doc(
            "Section: Class 42 - Syntax Error or Access Rule Violation\n\
             42501 E ERRCODE_INSUFFICIENT_PRIVILEGE\n",
        )
        .unwrap();
        assert!(cat.errors.get("42").is_none_or(|m| m.is_empty()));
    }

    #[test]
    fn warning_and_success_qualifiers_accepted() {
        let cat = parse_doc(
            "Section: Class 01 - Warning\n\
             01000 W ERRCODE_WARNING warning\n\
             00000 S ERRCODE_SUCCESSFUL_COMPLETION successful_completion\n",
        )
        .unwrap();
        assert_eq!(cat.errors["01"]["01000"], "WARNING");
        assert_eq!(cat.errors["01"]["00000"], "SUCCESSFUL_COMPLETION");
    }

    #[test]
    fn unexpected_line_is_fatal() {
        let err = parse_doc("Section: Class 42 - Syntax Error\nnot a real line\n").unwrap_err();
        assert!(err.to_string().contains("unexpected line"));
    }

    #[test]
    fn error_before_any_section_is_fatal() {
        let err = parse_doc("42501 E ERRCODE_INSUFFICIENT_PRIVILEGE priv\n").unwrap_err();
        assert!(err.to_string().contains("before any section"));
    }

    #[test]
    fn six_char_code_is_fatal() {
        let err = parse_doc(
            "Section: Class 42 - Syntax Error\n\
             425011 E ERRCODE_X x\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("unexpected line"));
    }

    #[test]
    fn reparsing_and_remerging_is_idempotent() {
        let part = parse_doc(SAMPLE).unwrap();
        let mut once = Catalog::new();
        once.merge(part.clone());
        let mut twice = once.clone();
        twice.merge(parse_doc(SAMPLE).unwrap());
        assert_eq!(once, twice);
    }
}
