use dbal_core::types::{Ast, Column, Table};

use crate::error::{DslError, Span};
use crate::token::{Token, TokenKind};

/// Recursive descent parser for the DBAL grammar.
///
/// Consumes the token sequence produced by the lexer through a single
/// cursor. Every production decides on one token of lookahead and the first
/// mismatch aborts the parse.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    // -- Cursor helpers --

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(tok)
    }

    fn skip_whitespace(&mut self) {
        while self
            .peek()
            .is_some_and(|t| t.kind == TokenKind::Whitespace)
        {
            self.pos += 1;
        }
    }

    /// Next non-whitespace token, without consuming it.
    fn peek_significant(&mut self) -> Option<&Token> {
        self.skip_whitespace();
        self.peek()
    }

    fn at_symbol(&mut self, symbol: &str) -> bool {
        self.peek_significant().is_some_and(|t| t.is_symbol(symbol))
    }

    fn expect(&mut self, kind: TokenKind, literal: Option<&str>) -> Result<Token, DslError> {
        self.skip_whitespace();
        let expected = || match literal {
            Some(text) => format!("'{text}'"),
            None => kind.description().to_string(),
        };
        match self.advance() {
            Some(tok) if tok.kind == kind && literal.map_or(true, |l| tok.text == l) => Ok(tok),
            Some(tok) => Err(DslError::UnexpectedToken {
                expected: expected(),
                found: tok.describe(),
                span: tok.span,
            }),
            None => Err(self.end_of_input(expected())),
        }
    }

    fn end_of_input(&self, expected: String) -> DslError {
        let end = self.tokens.last().map_or(0, |t| t.span.end);
        DslError::UnexpectedEndOfInput {
            expected,
            span: Span::new(end, end),
        }
    }

    // -- Grammar productions --

    /// schema = table*
    fn parse_schema(&mut self) -> Result<Ast, DslError> {
        let mut tables = Vec::new();
        loop {
            match self.peek_significant() {
                None => break,
                Some(tok) if tok.is_keyword("Table") => tables.push(self.parse_table()?),
                Some(tok) => {
                    return Err(DslError::UnexpectedToken {
                        expected: "'Table'".to_string(),
                        found: tok.describe(),
                        span: tok.span,
                    });
                }
            }
        }
        tracing::debug!(tables = tables.len(), "parsed schema");
        Ok(Ast::new(tables))
    }

    /// table = "Table" IDENT ("[" constraints "]")? "{" member* "}"
    fn parse_table(&mut self) -> Result<Table, DslError> {
        self.expect(TokenKind::Keyword, Some("Table"))?;
        let name = self.expect(TokenKind::Identifier, None)?;
        let mut table = Table::new(name.text);

        if self.at_symbol("[") {
            self.parse_constraints(&mut table.constraints)?;
        }

        self.expect(TokenKind::Symbol, Some("{"))?;

        // member = column | note | "[" constraints "]"
        loop {
            let Some(tok) = self.peek_significant() else {
                return Err(self.end_of_input("column, 'Note', '[' or '}'".to_string()));
            };
            match tok.kind {
                TokenKind::Identifier => {
                    let column = self.parse_column()?;
                    table.columns.push(column);
                }
                TokenKind::Keyword if tok.text == "Note" => {
                    table.note = Some(self.parse_note()?);
                }
                TokenKind::Symbol if tok.text == "[" => {
                    self.parse_constraints(&mut table.constraints)?;
                }
                TokenKind::Symbol if tok.text == "}" => break,
                _ => {
                    return Err(DslError::UnexpectedToken {
                        expected: "column, 'Note', '[' or '}'".to_string(),
                        found: tok.describe(),
                        span: tok.span,
                    });
                }
            }
        }

        self.expect(TokenKind::Symbol, Some("}"))?;
        tracing::trace!(table = %table.name, columns = table.columns.len(), "parsed table");
        Ok(table)
    }

    /// column = IDENT KEYWORD ("[" constraints "]")? ("note" ":" STRING)?
    fn parse_column(&mut self) -> Result<Column, DslError> {
        let name = self.expect(TokenKind::Identifier, None)?;
        let data_type = self.expect(TokenKind::Keyword, None)?;
        let mut column = Column::new(name.text, data_type.text);

        if self.at_symbol("[") {
            self.parse_constraints(&mut column.constraints)?;
        }

        if self
            .peek_significant()
            .is_some_and(|t| t.is(TokenKind::Identifier, "note"))
        {
            self.advance();
            self.expect(TokenKind::Symbol, Some(":"))?;
            column.note = Some(self.expect(TokenKind::StringLiteral, None)?.text);
        }

        Ok(column)
    }

    /// constraints = TOKEN ("," TOKEN)*
    ///
    /// Entries are raw token texts of any kind; only the `,` separators and
    /// the closing `]` are structural. Any token whose text is `]` ends the
    /// list, so a quoted `']'` is rejected by the closing `expect`.
    fn parse_constraints(&mut self, into: &mut Vec<String>) -> Result<(), DslError> {
        self.expect(TokenKind::Symbol, Some("["))?;
        loop {
            match self.peek_significant() {
                None => return Err(self.end_of_input("']'".to_string())),
                Some(tok) if tok.text == "]" => break,
                Some(_) => {
                    if let Some(entry) = self.advance() {
                        into.push(entry.text);
                    }
                    if self.at_symbol(",") {
                        self.advance();
                    }
                }
            }
        }
        self.expect(TokenKind::Symbol, Some("]"))?;
        Ok(())
    }

    /// note = "Note" ":" STRING
    fn parse_note(&mut self) -> Result<String, DslError> {
        self.expect(TokenKind::Keyword, Some("Note"))?;
        self.expect(TokenKind::Symbol, Some(":"))?;
        Ok(self.expect(TokenKind::StringLiteral, None)?.text)
    }
}

/// Parses a token sequence produced by [`tokenize`](crate::tokenize).
///
/// # Errors
///
/// Returns the first syntax error encountered. No partial AST is produced.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Ast, DslError> {
    Parser::new(tokens).parse_schema()
}

/// Tokenizes and parses DBAL source text.
///
/// # Errors
///
/// Returns the lexical error if tokenizing fails, otherwise the first
/// syntax error.
pub fn parse(source: &str) -> Result<Ast, DslError> {
    let tokens = crate::lexer::tokenize(source)?;
    parse_tokens(tokens)
}
