use logos::Logos;

use crate::error::{LexError, LexErrorKind, Position, Span};
use crate::token::Token;

/// A token paired with its source span and position.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub position: Position,
    pub text: String,
}

/// Maps byte offsets to 1-based line and column positions.
pub(crate) struct LineIndex<'src> {
    source: &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    pub(crate) fn position(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.source[line_start..offset].chars().count() + 1;
        Position::new(line, column)
    }
}

/// The tokens lexed before the first failure, if any.
pub(crate) struct Scan {
    pub tokens: Vec<SpannedToken>,
    pub error: Option<LexError>,
    /// Position one past the last character of the source.
    pub end: Position,
}

/// Lexes until the end of input or the first malformed token.
pub(crate) fn scan(source: &str) -> Scan {
    let index = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut error = None;

    let lexer = Token::lexer(source);
    for (result, range) in lexer.spanned() {
        let span = Span::new(range.start, range.end);
        let text = &source[range];
        match result {
            Ok(Token::StringLiteral) => {
                if let Err(offset) = unquote(text) {
                    let at = span.start + offset;
                    error = Some(LexError {
                        kind: LexErrorKind::InvalidEscape,
                        span: Span::new(at, (at + 2).min(span.end)),
                        position: index.position(at),
                    });
                    break;
                }
                tokens.push(SpannedToken {
                    token: Token::StringLiteral,
                    span,
                    position: index.position(span.start),
                    text: text.to_string(),
                });
            }
            Ok(token) => {
                tokens.push(SpannedToken {
                    token,
                    span,
                    position: index.position(span.start),
                    text: text.to_string(),
                });
            }
            Err(()) => {
                error = Some(LexError {
                    kind: classify_failure(text),
                    span,
                    position: index.position(span.start),
                });
                break;
            }
        }
    }

    Scan {
        tokens,
        error,
        end: index.position(source.len()),
    }
}

fn classify_failure(text: &str) -> LexErrorKind {
    match text.chars().next() {
        Some('"') | Some('\'') => LexErrorKind::UnterminatedString,
        Some('`') => LexErrorKind::UnterminatedRawString,
        _ => LexErrorKind::InvalidCharacter,
    }
}

/// Tokenizes DSL source text into a sequence of spanned tokens.
///
/// # Errors
///
/// Returns the first `LexError`: an unterminated string, an invalid escape
/// inside a double-quoted name, or a character no token rule matches.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let scan = scan(source);
    match scan.error {
        Some(err) => Err(err),
        None => Ok(scan.tokens),
    }
}

/// Removes the surrounding double quotes from a name literal and resolves
/// the `\"` and `\\` escapes.
///
/// Returns the byte offset (within `literal`) of the first invalid escape.
pub fn unquote(literal: &str) -> Result<String, usize> {
    let inner = &literal[1..literal.len() - 1];
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some((_, escaped @ ('"' | '\\'))) => result.push(escaped),
                _ => return Err(i + 1),
            }
        } else {
            result.push(c);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_simple_declaration() {
        let tokens = tokenize(r#"generate Account from "account";"#).unwrap();
        let kinds: Vec<Token> = tokens.iter().map(|t| t.token).collect();
        assert_eq!(
            kinds,
            vec![
                Token::Generate,
                Token::Ident,
                Token::From,
                Token::StringLiteral,
                Token::Semicolon,
            ]
        );
        assert_eq!(tokens[1].text, "Account");
        assert_eq!(tokens[3].text, "\"account\"");
    }

    #[test]
    fn tokenize_preserves_spans() {
        let tokens = tokenize("generate Account").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 8));
        assert_eq!(tokens[1].span, Span::new(9, 16));
    }

    #[test]
    fn tokenize_tracks_lines_and_columns() {
        let tokens = tokenize("generate X\n\tfrom user\n  join a").unwrap();
        let positions: Vec<Position> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(1, 1),
                Position::new(1, 10),
                Position::new(2, 2),
                Position::new(2, 7),
                Position::new(3, 3),
                Position::new(3, 8),
            ]
        );
    }

    #[test]
    fn columns_count_characters() {
        let tokens = tokenize("generate X from \"é\" as a").unwrap();
        assert_eq!(tokens[4].position, Position::new(1, 21));
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("  \n\t ").unwrap().is_empty());
    }

    #[test]
    fn tokenize_unterminated_string() {
        let err = tokenize("generate X from \"account").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.position, Position::new(1, 17));
    }

    #[test]
    fn tokenize_unterminated_raw_string() {
        let err = tokenize("join a on `a.id = b.id").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedRawString);
        assert_eq!(err.position, Position::new(1, 11));
    }

    #[test]
    fn tokenize_invalid_escape() {
        let err = tokenize(r#"from "a\nb""#).unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidEscape);
        assert_eq!(err.position, Position::new(1, 8));
    }

    #[test]
    fn tokenize_invalid_character() {
        let err = tokenize("generate { Account").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidCharacter);
        assert_eq!(err.position, Position::new(1, 10));
    }

    #[test]
    fn scan_keeps_tokens_before_failure() {
        let scan = scan("generate Account \"open");
        assert_eq!(scan.tokens.len(), 2);
        assert!(scan.error.is_some());
    }

    #[test]
    fn block_comments_may_end_in_repeated_stars() {
        for source in [
            "generate X /* note **/ from a",
            "generate X /***/ from a",
            "generate X /** a * b ***/ from a",
        ] {
            let kinds: Vec<Token> = tokenize(source)
                .unwrap_or_else(|e| panic!("{source:?}: {e}"))
                .iter()
                .map(|t| t.token)
                .collect();
            assert_eq!(
                kinds,
                vec![Token::Generate, Token::Ident, Token::From, Token::Ident],
                "{source:?}"
            );
        }
    }

    #[test]
    fn end_position_is_past_last_character() {
        let scan = scan("generate\nab");
        assert_eq!(scan.end, Position::new(2, 3));
    }

    #[test]
    fn unquote_simple() {
        assert_eq!(unquote(r#""account""#).unwrap(), "account");
    }

    #[test]
    fn unquote_escapes() {
        assert_eq!(unquote(r#""schema\"account""#).unwrap(), "schema\"account");
        assert_eq!(unquote(r#""back\\slash""#).unwrap(), "back\\slash");
    }

    #[test]
    fn unquote_empty() {
        assert_eq!(unquote(r#""""#).unwrap(), "");
    }

    #[test]
    fn unquote_rejects_unknown_escape() {
        assert_eq!(unquote(r#""a\tb""#), Err(2));
    }
}
