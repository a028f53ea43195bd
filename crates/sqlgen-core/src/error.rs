/// Errors that occur when constructing or validating AST values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AstError {
    /// Identifier failed `[A-Za-z_][A-Za-z0-9_]*` validation.
    #[error("invalid identifier '{0}': must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidIdent(String),

    /// Identifier collides with a DSL keyword.
    #[error("'{0}' is a reserved keyword and cannot be used as an identifier")]
    ReservedKeyword(String),

    /// The placeholder text `{}` is not a representable user value.
    #[error("'{{}}' is reserved for the placeholder and cannot be used as a name")]
    ReservedPlaceholder,

    /// Join condition was empty or whitespace only.
    #[error("join condition must not be empty")]
    EmptyJoinCondition,

    /// Join condition contains a backtick, which no delimiter form can carry.
    #[error("join condition must not contain a backtick: {0}")]
    BacktickInJoinCondition(String),

    /// Declaration has no leading `from` clause.
    #[error("declaration must start with a from clause")]
    MissingFromClause,

    /// A `from` clause appeared after the first position.
    #[error("from clause must be the first clause of a declaration")]
    MisplacedFromClause,

    /// A join kind that requires a condition has none.
    #[error("{kind} clause requires an on condition")]
    MissingJoinCondition { kind: String },

    /// A `from` or `cross join` clause carries a condition.
    #[error("{kind} clause cannot have an on condition")]
    UnexpectedJoinCondition { kind: String },

    /// An option key was given twice.
    #[error("duplicate option key '{0}'")]
    DuplicateOption(String),
}
