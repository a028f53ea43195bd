use sqlgen_core::types::{
    Declaration, File, JoinClause, JoinCondition, SqlName, TableRef, PLACEHOLDER,
};

use crate::error::SyntaxError;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::token::Token;

const INDENT: &str = "    ";

/// Print a parsed file as canonical DSL text.
///
/// Every declaration ends with `;` and a newline. Parsing the output yields
/// a `File` equal to the input, and printing that again yields the same text.
pub fn print(file: &File) -> String {
    let mut output = String::new();
    for declaration in file {
        print_declaration_into(declaration, &mut output);
    }
    output
}

/// Print a single declaration, including its trailing `;\n`.
pub fn print_declaration(declaration: &Declaration) -> String {
    let mut output = String::new();
    print_declaration_into(declaration, &mut output);
    output
}

/// Parse `source` and print it back in canonical form.
///
/// # Errors
///
/// Returns the first syntax error in `source`.
pub fn normalize(unit: &str, source: &str) -> Result<String, SyntaxError> {
    parse(unit, source).map(|file| print(&file))
}

fn print_declaration_into(declaration: &Declaration, output: &mut String) {
    output.push_str("generate ");
    output.push_str(declaration.name_or_placeholder());

    if !declaration.options.is_empty() {
        output.push_str(" (");
        for (i, (key, value)) in declaration.options.iter().enumerate() {
            if i > 0 {
                output.push(' ');
            }
            output.push_str(key.as_str());
            output.push(' ');
            output.push_str(value.as_str());
        }
        output.push(')');
    }

    // Joins go one clause per line; a lone `from` stays on the same line.
    for clause in &declaration.joins {
        if declaration.is_join() {
            output.push('\n');
            output.push_str(INDENT);
        } else {
            output.push(' ');
        }
        print_clause(clause, output);
    }

    output.push_str(";\n");
}

fn print_clause(clause: &JoinClause, output: &mut String) {
    output.push_str(clause.kind.keyword());
    output.push(' ');
    print_table_ref(&clause.table, output);

    if let Some(type_hint) = &clause.type_hint {
        output.push_str(" (");
        output.push_str(type_hint.as_str());
        output.push(')');
    }
    if let Some(alias) = &clause.alias {
        output.push_str(" as ");
        output.push_str(alias.as_str());
    }
    if let Some(on) = &clause.on {
        output.push_str(" on ");
        print_condition(on, output);
    }
}

fn print_table_ref(table: &TableRef, output: &mut String) {
    if let Some(schema) = &table.schema {
        print_quoted(schema.as_str(), output);
        output.push('.');
    }
    print_quoted(table.table.as_ref().map_or(PLACEHOLDER, SqlName::as_str), output);
}

fn print_quoted(name: &str, output: &mut String) {
    output.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            output.push('\\');
        }
        output.push(c);
    }
    output.push('"');
}

fn print_condition(condition: &JoinCondition, output: &mut String) {
    let text = condition.as_str();
    if needs_raw_delimiters(text) {
        output.push('`');
        output.push_str(text);
        output.push('`');
    } else {
        output.push_str(text);
    }
}

/// True when `text` printed bare would not be captured back as exactly
/// `text`: it fails to lex, has leading or trailing whitespace or comments,
/// contains a clause boundary or a raw string, ends in a join qualifier
/// that the next clause's `join` would complete, or has an operator holding
/// a comment opener that later text in the file could close.
fn needs_raw_delimiters(text: &str) -> bool {
    let Ok(tokens) = tokenize(text) else {
        return true;
    };
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) if first.span.start == 0 && last.span.end == text.len() => {
            last.token.is_join_qualifier()
                || tokens.iter().any(|t| {
                    matches!(
                        t.token,
                        Token::Semicolon | Token::Generate | Token::Join | Token::RawString
                    ) || (t.token == Token::Operator
                        && (t.text.contains("/*") || t.text.contains("//")))
                })
        }
        _ => true,
    }
}
