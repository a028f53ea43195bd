use logos::Logos;

/// Tokens produced by the sqlgen DSL lexer.
///
/// Whitespace and comments are skipped automatically by logos. String,
/// number, and operator tokens other than the punctuation below only carry
/// meaning inside a bare `on` condition, where they are captured verbatim.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum Token {
    // -- Keywords --
    #[token("generate")]
    Generate,

    #[token("from")]
    From,

    #[token("join")]
    Join,

    #[token("full")]
    Full,

    #[token("left")]
    Left,

    #[token("right")]
    Right,

    #[token("inner")]
    Inner,

    #[token("cross")]
    Cross,

    #[token("on")]
    On,

    #[token("as")]
    As,

    // -- Punctuation --
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("=")]
    Eq,

    #[token(";")]
    Semicolon,

    /// The placeholder `{}` standing for an omitted name.
    #[token("{}")]
    Placeholder,

    // -- Literals --
    /// A double-quoted name, e.g. `"account"` or `"schema\"account"`.
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,

    /// A backtick-delimited raw string; no escape processing.
    #[regex(r"`[^`]*`")]
    RawString,

    /// A single-quoted SQL string, e.g. `'active'`.
    #[regex(r"'([^'\\]|\\.)*'")]
    SqlString,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// A run of operator characters, e.g. `>=` or `<>`.
    #[regex(r"[<>!+\-*/%|&^~:?@#$\[\]][<>!=+\-*/%|&^~:?@#$\[\]]*")]
    Operator,

    // -- Identifiers --
    /// An identifier: letters, digits, and underscores, starting with a letter or underscore.
    /// Keywords take precedence over this rule.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

impl Token {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Generate => "'generate'",
            Self::From => "'from'",
            Self::Join => "'join'",
            Self::Full => "'full'",
            Self::Left => "'left'",
            Self::Right => "'right'",
            Self::Inner => "'inner'",
            Self::Cross => "'cross'",
            Self::On => "'on'",
            Self::As => "'as'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::Eq => "'='",
            Self::Semicolon => "';'",
            Self::Placeholder => "'{}'",
            Self::StringLiteral => "string literal",
            Self::RawString => "raw string",
            Self::SqlString => "sql string",
            Self::Number => "number",
            Self::Operator => "operator",
            Self::Ident => "identifier",
        }
    }

    /// Keywords that may precede `join` to select the join kind.
    pub fn is_join_qualifier(&self) -> bool {
        matches!(
            self,
            Self::Full | Self::Left | Self::Right | Self::Inner | Self::Cross
        )
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
