use sqlgen_core::types::{
    Declaration, File, Ident, JoinClause, JoinCondition, JoinKind, Options, SqlName, TableRef,
    PLACEHOLDER,
};
use sqlgen_core::AstError;

use crate::error::{LexError, LexErrorKind, Position, Span, SyntaxError, SyntaxErrorKind};
use crate::lexer::{self, Scan, SpannedToken};
use crate::token::Token;

/// Where the main loop stands relative to declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AtFileLevel,
    InDeclaration,
}

/// Recursive descent parser for the sqlgen DSL grammar.
///
/// Consumes the tokens lexed before the first lex failure. Reaching the end
/// of those tokens while a lex error is pending reports that error, so the
/// first problem in source order is the one returned.
struct Parser<'src> {
    unit: &'src str,
    source: &'src str,
    tokens: Vec<SpannedToken>,
    pos: usize,
    lex_error: Option<LexError>,
    end: Position,
}

impl<'src> Parser<'src> {
    fn new(unit: &'src str, source: &'src str, scan: Scan) -> Self {
        Self {
            unit,
            source,
            tokens: scan.tokens,
            pos: 0,
            lex_error: scan.error,
            end: scan.end,
        }
    }

    // -- Cursor helpers --

    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<Token> {
        self.peek().map(|st| st.token)
    }

    fn peek_nth_token(&self, n: usize) -> Option<Token> {
        self.tokens.get(self.pos + n).map(|st| st.token)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let tok = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(tok)
    }

    fn expect(&mut self, expected: Token) -> Result<SpannedToken, SyntaxError> {
        match self.peek() {
            Some(st) if st.token == expected => {
                let st = st.clone();
                self.pos += 1;
                Ok(st)
            }
            _ => Err(self.unexpected(expected.description())),
        }
    }

    fn expect_ident(&mut self, context: &str) -> Result<Ident, SyntaxError> {
        match self.peek() {
            Some(st) if st.token == Token::Ident => {
                let ident = Ident::new(st.text.as_str()).map_err(|e| self.invalid_at(st, e))?;
                self.pos += 1;
                Ok(ident)
            }
            _ => Err(self.unexpected(context)),
        }
    }

    /// Builds the error for the token under the cursor.
    ///
    /// Past the last token this is the pending lex error, or an
    /// end-of-input error pointing one past the last character.
    fn unexpected(&self, expected: &str) -> SyntaxError {
        if let Some(st) = self.peek() {
            return SyntaxError::new(
                self.unit,
                st.position,
                st.span,
                SyntaxErrorKind::UnexpectedToken {
                    expected: expected.to_string(),
                    found: format!("{} ('{}')", st.token.description(), st.text),
                },
            );
        }
        if let Some(err) = &self.lex_error {
            return SyntaxError::from_lex(self.unit, err.clone());
        }
        SyntaxError::new(
            self.unit,
            self.end,
            Span::new(self.source.len(), self.source.len()),
            SyntaxErrorKind::UnexpectedEndOfInput {
                expected: expected.to_string(),
            },
        )
    }

    fn invalid_at(&self, st: &SpannedToken, err: AstError) -> SyntaxError {
        SyntaxError::new(
            self.unit,
            st.position,
            st.span,
            SyntaxErrorKind::InvalidValue(err),
        )
    }

    // -- Grammar productions --

    /// file = declaration*
    ///
    /// A `generate` seen while a declaration is open closes it, as if a `;`
    /// had been written just before it.
    fn parse_file(&mut self) -> Result<File, SyntaxError> {
        let mut declarations = Vec::new();
        let mut state = State::AtFileLevel;

        loop {
            match state {
                State::AtFileLevel => match self.peek_token() {
                    None => break,
                    Some(Token::Generate) => {
                        self.advance();
                        state = State::InDeclaration;
                    }
                    Some(_) => return Err(self.unexpected("'generate'")),
                },
                State::InDeclaration => {
                    let declaration = self.parse_declaration_body()?;
                    match self.peek_token() {
                        Some(Token::Semicolon) => {
                            self.advance();
                        }
                        Some(Token::Generate) => {
                            tracing::trace!(
                                unit = self.unit,
                                declaration = declarations.len(),
                                "implicit terminator before 'generate'"
                            );
                        }
                        None => {}
                        Some(_) => {
                            return Err(self.unexpected("';', 'generate', or end of input"))
                        }
                    }
                    declarations.push(declaration);
                    state = State::AtFileLevel;
                }
            }
        }

        if let Some(err) = self.lex_error.take() {
            return Err(SyntaxError::from_lex(self.unit, err));
        }

        Ok(File::new(declarations))
    }

    /// declaration = "generate" name? options? from_part? join_part*
    /// The "generate" keyword has already been consumed.
    fn parse_declaration_body(&mut self) -> Result<Declaration, SyntaxError> {
        let generate_index = self.pos.saturating_sub(1);
        let name = self.parse_name()?;
        let options = self.parse_options()?;

        let mut joins = vec![self.parse_from_part()?];
        while let Some(kind) = self.peek_join_kind() {
            joins.push(self.parse_join_part(kind)?);
        }

        Declaration::new(name, options, joins).map_err(|e| match self.tokens.get(generate_index) {
            Some(st) => self.invalid_at(st, e),
            None => self.unexpected("declaration"),
        })
    }

    /// name = IDENT | "{}"
    fn parse_name(&mut self) -> Result<Option<Ident>, SyntaxError> {
        match self.peek_token() {
            Some(Token::Ident) => self.expect_ident("entity name").map(Some),
            Some(Token::Placeholder) => {
                self.advance();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// options = "(" (IDENT IDENT ","?)* ")"
    fn parse_options(&mut self) -> Result<Options, SyntaxError> {
        let mut options = Options::new();
        if self.peek_token() != Some(Token::LParen) {
            return Ok(options);
        }
        self.advance(); // consume (

        loop {
            if self.peek_token() == Some(Token::RParen) {
                self.advance();
                break;
            }

            let key_index = self.pos;
            let key = self.expect_ident("option name or ')'")?;
            let value = self.expect_ident("option value")?;
            if let Err(e) = options.insert(key, value) {
                return Err(self.invalid_at(&self.tokens[key_index], e));
            }

            if self.peek_token() == Some(Token::Comma) {
                self.advance();
            }
        }

        Ok(options)
    }

    /// from_part = ("from" table_ref type_hint? alias?)?
    fn parse_from_part(&mut self) -> Result<JoinClause, SyntaxError> {
        if self.peek_token() != Some(Token::From) {
            return Ok(JoinClause::from_table(TableRef::placeholder()));
        }
        self.advance(); // consume from

        let table = self.parse_table_ref()?;
        let clause = JoinClause::from_table(table);
        self.parse_hint_and_alias(clause)
    }

    /// The join kind starting at the cursor, if any.
    fn peek_join_kind(&self) -> Option<JoinKind> {
        match self.peek_token()? {
            Token::Join | Token::Inner => Some(JoinKind::Inner),
            Token::Full => Some(JoinKind::Full),
            Token::Left => Some(JoinKind::Left),
            Token::Right => Some(JoinKind::Right),
            Token::Cross => Some(JoinKind::Cross),
            _ => None,
        }
    }

    /// join_part = qualifier? "join" table_ref type_hint? alias? ("on" condition)?
    ///
    /// The condition is required for every kind except `cross`, which takes none.
    fn parse_join_part(&mut self, kind: JoinKind) -> Result<JoinClause, SyntaxError> {
        if self.peek_token().is_some_and(|t| t.is_join_qualifier()) {
            self.advance();
        }
        self.expect(Token::Join)?;

        let table = self.parse_table_ref()?;
        let clause = self.parse_hint_and_alias(JoinClause::join(kind, table, None))?;

        if !kind.requires_condition() {
            return Ok(clause);
        }

        self.expect(Token::On)?;
        let on = self.parse_condition()?;
        Ok(JoinClause {
            on: Some(on),
            ..clause
        })
    }

    /// type_hint = "(" IDENT ")" ; alias = "as" IDENT
    fn parse_hint_and_alias(&mut self, mut clause: JoinClause) -> Result<JoinClause, SyntaxError> {
        if self.peek_token() == Some(Token::LParen) {
            self.advance();
            clause.type_hint = Some(self.expect_ident("type name")?);
            self.expect(Token::RParen)?;
        }
        if self.peek_token() == Some(Token::As) {
            self.advance();
            clause.alias = Some(self.expect_ident("alias")?);
        }
        Ok(clause)
    }

    /// table_ref = name_part ("." name_part)?
    fn parse_table_ref(&mut self) -> Result<TableRef, SyntaxError> {
        let first = self.parse_name_part()?;
        if self.peek_token() != Some(Token::Dot) {
            return Ok(TableRef {
                schema: None,
                table: first,
            });
        }
        self.advance(); // consume .
        let second = self.parse_name_part()?;
        Ok(TableRef {
            schema: first,
            table: second,
        })
    }

    /// name_part = IDENT | STRING | "{}"
    ///
    /// The placeholder, bare or quoted, yields `None`.
    fn parse_name_part(&mut self) -> Result<Option<SqlName>, SyntaxError> {
        let Some(st) = self.peek().cloned() else {
            return Err(self.unexpected("table name"));
        };
        let value = match st.token {
            Token::Ident => st.text.clone(),
            Token::StringLiteral => lexer::unquote(&st.text).map_err(|offset| {
                let at = st.span.start + offset;
                SyntaxError::new(
                    self.unit,
                    st.position,
                    Span::new(at, at),
                    SyntaxErrorKind::Lex(LexErrorKind::InvalidEscape),
                )
            })?,
            Token::Placeholder => PLACEHOLDER.to_string(),
            _ => return Err(self.unexpected("table name")),
        };
        self.advance();

        if value == PLACEHOLDER {
            return Ok(None);
        }
        SqlName::new(value).map(Some).map_err(|e| self.invalid_at(&st, e))
    }

    /// condition = RAW_STRING | token+ (up to the next clause boundary)
    ///
    /// The bare form is captured as the exact source slice from the first
    /// token to the last, so spacing inside the condition is kept.
    fn parse_condition(&mut self) -> Result<JoinCondition, SyntaxError> {
        if self.peek_token() == Some(Token::RawString) {
            let st = self.expect(Token::RawString)?;
            let inner = &st.text[1..st.text.len() - 1];
            return JoinCondition::new(inner).map_err(|e| self.invalid_at(&st, e));
        }

        let first = match self.peek() {
            Some(st) if !self.at_condition_boundary() => st.clone(),
            _ => return Err(self.unexpected("join condition")),
        };
        let mut end = first.span.end;
        while !self.at_condition_boundary() {
            if self.peek_token() == Some(Token::RawString) {
                return Err(self.unexpected("join condition"));
            }
            if let Some(st) = self.advance() {
                end = st.span.end;
            }
        }

        let text = &self.source[first.span.start..end];
        JoinCondition::new(text).map_err(|e| self.invalid_at(&first, e))
    }

    /// True at `;`, `generate`, `join`, a qualifier followed by `join`, or
    /// the end of the tokens.
    fn at_condition_boundary(&self) -> bool {
        match self.peek_token() {
            None | Some(Token::Semicolon | Token::Generate | Token::Join) => true,
            Some(token) if token.is_join_qualifier() => {
                self.peek_nth_token(1) == Some(Token::Join)
            }
            Some(_) => false,
        }
    }
}

/// Parse sqlgen DSL source into a [`File`].
///
/// `unit` names the source in error messages, e.g. a file name.
///
/// # Errors
///
/// Returns the first syntax or lexical error, formatted as
/// `Error at <unit>:<line>:<col>: syntax error`. No partial result is kept.
pub fn parse(unit: &str, source: &str) -> Result<File, SyntaxError> {
    let scan = lexer::scan(source);
    let mut parser = Parser::new(unit, source, scan);
    match parser.parse_file() {
        Ok(file) => {
            tracing::debug!(unit, declarations = file.len(), "parsed sqlgen source");
            Ok(file)
        }
        Err(err) => {
            tracing::debug!(
                unit,
                line = err.position.line,
                column = err.position.column,
                kind = ?err.kind,
                "sqlgen syntax error"
            );
            Err(err)
        }
    }
}
