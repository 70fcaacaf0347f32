use logos::Logos;

use crate::error::{DslError, Span};
use crate::token::{Token, TokenKind};

/// Tokenizes DBAL source text into an ordered token sequence.
///
/// Whitespace runs are kept as tokens; the parser skips them. The scan stops
/// at the first character no rule accepts.
///
/// # Errors
///
/// Returns `DslError::InvalidCharacter` naming the first offending
/// character and its byte span.
pub fn tokenize(source: &str) -> Result<Vec<Token>, DslError> {
    let mut tokens = Vec::new();

    let lexer = TokenKind::lexer(source);
    for (result, range) in lexer.spanned() {
        match result {
            Ok(kind) => {
                let span = Span::new(range.start, range.end);
                let text = match kind {
                    TokenKind::StringLiteral => unquote(&source[range]),
                    _ => &source[range],
                };
                tokens.push(Token::new(kind, text, span));
            }
            Err(()) => {
                let character = source[range.start..].chars().next().unwrap_or('\u{fffd}');
                let span = Span::new(range.start, range.start + character.len_utf8());
                tracing::debug!(%span, ?character, "invalid character");
                return Err(DslError::InvalidCharacter { character, span });
            }
        }
    }

    tracing::debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Strips the opening quote and, if present, the matching closing quote.
fn unquote(literal: &str) -> &str {
    let mut chars = literal.chars();
    let Some(quote) = chars.next() else {
        return literal;
    };
    let inner = chars.as_str();
    inner.strip_suffix(quote).unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn significant(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn tokenize_simple_table() {
        let tokens = tokenize("Table t { id int }").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Symbol,
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Keyword,
                TokenKind::Whitespace,
                TokenKind::Symbol,
            ]
        );
        assert_eq!(tokens[0].text, "Table");
        assert_eq!(tokens[8].text, "int");
    }

    #[test]
    fn tokenize_preserves_spans() {
        let tokens = tokenize("Table users").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 5));
        assert_eq!(tokens[1].span, Span::new(5, 6));
        assert_eq!(tokens[2].span, Span::new(6, 11));
    }

    #[test]
    fn whitespace_run_is_single_token() {
        let tokens = tokenize("a \t\n\n b").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[1].text, " \t\n\n ");
    }

    #[test]
    fn string_literal_drops_quotes() {
        assert_eq!(
            significant(r#"'hello world' "double""#),
            vec![
                (TokenKind::StringLiteral, "hello world".to_string()),
                (TokenKind::StringLiteral, "double".to_string()),
            ]
        );
    }

    #[test]
    fn string_literal_span_includes_quotes() {
        let tokens = tokenize("'abc'").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 5));
    }

    #[test]
    fn empty_string_literal() {
        assert_eq!(
            significant("''"),
            vec![(TokenKind::StringLiteral, String::new())]
        );
    }

    #[test]
    fn other_quote_does_not_terminate() {
        assert_eq!(
            significant(r#""it's""#),
            vec![(TokenKind::StringLiteral, "it's".to_string())]
        );
    }

    #[test]
    fn unterminated_string_runs_to_end_of_input() {
        let tokens = significant("Note: 'abc");
        assert_eq!(
            tokens.last(),
            Some(&(TokenKind::StringLiteral, "abc".to_string()))
        );
    }

    #[test]
    fn unterminated_string_swallows_rest_of_source() {
        let tokens = significant("'abc }\nTable x {");
        assert_eq!(
            tokens,
            vec![(TokenKind::StringLiteral, "abc }\nTable x {".to_string())]
        );
    }

    #[test]
    fn backslash_is_not_an_escape() {
        assert_eq!(
            significant(r"'a\' b"),
            vec![
                (TokenKind::StringLiteral, r"a\".to_string()),
                (TokenKind::Identifier, "b".to_string()),
            ]
        );
    }

    #[test]
    fn reference_constraint_tokens() {
        assert_eq!(
            significant("[ref: <> tags.id]"),
            vec![
                (TokenKind::Symbol, "[".to_string()),
                (TokenKind::Keyword, "ref".to_string()),
                (TokenKind::Symbol, ":".to_string()),
                (TokenKind::Symbol, "<".to_string()),
                (TokenKind::Symbol, ">".to_string()),
                (TokenKind::Identifier, "tags.id".to_string()),
                (TokenKind::Symbol, "]".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_character_reports_char_and_position() {
        let err = tokenize("Table @t {}").unwrap_err();
        assert_eq!(
            err,
            DslError::InvalidCharacter {
                character: '@',
                span: Span::new(6, 7),
            }
        );
        assert!(err.is_lex_error());
    }

    #[test]
    fn underscore_is_not_an_identifier_character() {
        let err = tokenize("user_id").unwrap_err();
        assert!(matches!(
            err,
            DslError::InvalidCharacter { character: '_', .. }
        ));
    }

    #[test]
    fn multibyte_invalid_character() {
        let err = tokenize("a é").unwrap_err();
        assert_eq!(
            err,
            DslError::InvalidCharacter {
                character: 'é',
                span: Span::new(2, 4),
            }
        );
    }

    #[test]
    fn digits_lex_as_numbers() {
        assert_eq!(
            significant("[default: 0, 2.5] x1"),
            vec![
                (TokenKind::Symbol, "[".to_string()),
                (TokenKind::Keyword, "default".to_string()),
                (TokenKind::Symbol, ":".to_string()),
                (TokenKind::Number, "0".to_string()),
                (TokenKind::Symbol, ",".to_string()),
                (TokenKind::Number, "2.5".to_string()),
                (TokenKind::Symbol, "]".to_string()),
                (TokenKind::Identifier, "x1".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn tokenize_is_idempotent() {
        let source = "Table a.b [pk] {\n  id int [not null]\n  Note: 'x'\n}";
        assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
    }
}
