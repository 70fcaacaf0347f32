use dbal_dsl::DslError;
use miette::{Diagnostic, NamedSource, SourceSpan};

/// A diagnostic wrapping a `DslError` for rich miette rendering.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct DbalDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `DslError` into a miette `DbalDiagnostic`.
pub fn dsl_error_to_diagnostic(error: &DslError, source: &str, filename: &str) -> DbalDiagnostic {
    let named_src = NamedSource::new(filename, source.to_string());
    let span = error.span();

    match error {
        DslError::InvalidCharacter { character, .. } => DbalDiagnostic {
            src: named_src,
            span: (span.start, span.len()).into(),
            message: format!("invalid character {character:?}"),
            label: "not part of the notation".to_string(),
            suggestion: Some(invalid_character_hint(*character)),
        },

        DslError::UnexpectedToken {
            expected, found, ..
        } => DbalDiagnostic {
            src: named_src,
            span: (span.start, span.len()).into(),
            message: format!("unexpected token: expected {expected}, found {found}"),
            label: format!("expected {expected}"),
            suggestion: unexpected_token_hint(expected, found),
        },

        DslError::UnexpectedEndOfInput { expected, .. } => DbalDiagnostic {
            src: named_src,
            span: end_of_input_span(span.start, source),
            message: format!("unexpected end of input: expected {expected}"),
            label: "input ended here".to_string(),
            suggestion: Some(format!(
                "Add {expected} to complete the definition, or close an unterminated string."
            )),
        },

        // Catch future non_exhaustive variants
        _ => DbalDiagnostic {
            src: named_src,
            span: (span.start, span.len()).into(),
            message: error.to_string(),
            label: "error".to_string(),
            suggestion: None,
        },
    }
}

/// One character at `start`, or an empty span when `start` is the end of
/// the source.
fn end_of_input_span(start: usize, source: &str) -> SourceSpan {
    let start = start.min(source.len());
    let width = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    (start, width).into()
}

fn invalid_character_hint(character: char) -> String {
    match character {
        '_' | '-' => "Identifiers may only contain letters, digits and '.'.".to_string(),
        '/' | '#' => "The notation has no comment syntax.".to_string(),
        _ => "Check for typos or unsupported characters.".to_string(),
    }
}

fn unexpected_token_hint(expected: &str, found: &str) -> Option<String> {
    if expected == "keyword" && found.starts_with("identifier") {
        Some("Column types must be one of: bool, string, int, float.".to_string())
    } else if expected == "'Table'" {
        Some("Only 'Table' declarations are allowed at the top level.".to_string())
    } else {
        None
    }
}

/// Render a parse error for a file using miette.
pub fn render_diagnostic(error: &DslError, source: &str, filename: &str) -> miette::Report {
    miette::Report::new(dsl_error_to_diagnostic(error, source, filename))
}
