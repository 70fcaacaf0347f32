use dbal_core::types::{Ast, Column, Constraint, Table};

use crate::lexer::tokenize;
use crate::token::TokenKind;

/// Print a single table to DBAL text.
///
/// The output uses 4-space indentation and reparses to the same table.
pub fn print(table: &Table) -> String {
    let mut output = String::new();
    print_table(table, &mut output);
    output
}

/// Print every table of an AST, separated by blank lines.
pub fn print_all(ast: &Ast) -> String {
    let mut output = String::new();
    for (i, table) in ast.tables.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        print_table(table, &mut output);
    }
    output
}

fn print_table(table: &Table, output: &mut String) {
    output.push_str("Table ");
    output.push_str(&table.name);
    if !table.constraints.is_empty() {
        output.push(' ');
        print_constraints(&table.constraints, output);
    }
    output.push_str(" {\n");

    for (i, column) in table.columns.iter().enumerate() {
        output.push_str("    ");
        print_column(column, output);
        if table
            .columns
            .get(i + 1)
            .is_some_and(|next| needs_separator(column, next))
        {
            // An empty list on the column, then an empty table block. Both
            // add nothing and end the column production before `note`.
            if column.constraints.is_empty() {
                output.push_str(" []");
            }
            output.push_str("\n    []");
        }
        output.push('\n');
    }

    if let Some(note) = &table.note {
        output.push_str("    Note: ");
        output.push_str(&quote(note));
        output.push('\n');
    }

    output.push_str("}\n");
}

fn print_column(column: &Column, output: &mut String) {
    output.push_str(&column.name);
    output.push(' ');
    output.push_str(&column.data_type);

    if !column.constraints.is_empty() {
        output.push(' ');
        print_constraints(&column.constraints, output);
    }

    if let Some(note) = &column.note {
        output.push_str(" note: ");
        output.push_str(&quote(note));
    }
}

/// A column named `note` right after a column without an inline note would
/// be read back as that column's note.
fn needs_separator(column: &Column, next: &Column) -> bool {
    next.name == "note" && column.note.is_none()
}

/// Groups entries the way `Constraint::group` reads them, so `not null`
/// stays together and groups are comma separated.
fn print_constraints(entries: &[String], output: &mut String) {
    output.push('[');
    for (i, (_, group)) in Constraint::group(entries).iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        let mut previous: Option<&str> = None;
        for entry in group.iter() {
            let glued = entry == ":" || (previous == Some("<") && entry == ">");
            if previous.is_some() && !glued {
                output.push(' ');
            }
            output.push_str(&render_entry(entry));
            previous = Some(entry);
        }
    }
    output.push(']');
}

/// An entry is written bare when it lexes back to exactly itself as one
/// non-string token; anything else is quoted. `,` and `]` are structural
/// inside a list and always quoted.
fn render_entry(entry: &str) -> String {
    if entry == "," || entry == "]" {
        return quote(entry);
    }
    match tokenize(entry).as_deref() {
        Ok([token]) if token.kind != TokenKind::StringLiteral && token.text == entry => {
            entry.to_string()
        }
        _ => quote(entry),
    }
}

/// Quotes with `'` unless the text contains one.
///
/// Text holding both quote characters cannot be written as one literal;
/// it is emitted with `'` and will not reparse to the same value.
fn quote(text: &str) -> String {
    if text.contains('\'') && !text.contains('"') {
        format!("\"{text}\"")
    } else {
        format!("'{text}'")
    }
}
