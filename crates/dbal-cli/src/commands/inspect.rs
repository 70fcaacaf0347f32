use dbal_core::types::{Ast, Column, Table};

use crate::cli::{GlobalOpts, InspectArgs};
use crate::config::load_config;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

use super::parse::parse_all;

/// Run the `inspect` command: show declared tables and their details.
pub fn run(args: InspectArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let ast = parse_all(&args.paths, &config)?;

    if let Some(ref name) = args.table {
        let table = ast
            .table(name)
            .ok_or_else(|| CliError::TableNotFound { name: name.clone() })?;

        render_table_detail(table, output);
    } else {
        render_table_list(&ast, output);
    }

    Ok(())
}

fn render_table_list(ast: &Ast, output: &OutputContext) {
    match output.mode {
        OutputMode::Human => {
            if ast.tables.is_empty() {
                output.status("No tables declared.");
                return;
            }
            println!("{:<24} {:<8} {:<6} Note", "Table", "Columns", "Refs");
            println!("{:<24} {:<8} {:<6} ----", "-----", "-------", "----");
            for table in &ast.tables {
                println!(
                    "{:<24} {:<8} {:<6} {}",
                    table.name,
                    table.columns.len(),
                    reference_count(table),
                    table.note.as_deref().unwrap_or("")
                );
            }

            let references = ast.references();
            if !references.is_empty() {
                println!();
                println!("References:");
                for reference in &references {
                    println!("  {reference}");
                }
            }
        }
        OutputMode::Json => {
            let tables: Vec<serde_json::Value> = ast.tables.iter().map(table_to_json).collect();
            let references: Vec<serde_json::Value> = ast
                .references()
                .iter()
                .map(|r| serde_json::json!({ "source": r.source, "target": r.target }))
                .collect();
            output.print_json(&serde_json::json!({
                "tables": tables,
                "references": references,
            }));
        }
        OutputMode::Plain => {
            for table in &ast.tables {
                println!(
                    "{}\t{}\t{}\t{}",
                    table.name,
                    table.columns.len(),
                    reference_count(table),
                    table.note.as_deref().unwrap_or("")
                );
            }
        }
    }
}

fn render_table_detail(table: &Table, output: &OutputContext) {
    match output.mode {
        OutputMode::Human => {
            match table.qualified_name() {
                (Some(schema), name) => println!("Table: {name} (schema {schema})"),
                (None, name) => println!("Table: {name}"),
            }
            if !table.constraints.is_empty() {
                println!("Settings: [{}]", table.constraints.join(" "));
            }
            println!();
            println!("Columns:");
            for column in &table.columns {
                let labels = constraint_labels(column);
                let mut line = format!("  {:<16} {:<8}", column.name, column.data_type);
                if !labels.is_empty() {
                    line.push_str(&format!(" {}", labels.join(", ")));
                }
                if let Some(note) = &column.note {
                    line.push_str(&format!("  // {note}"));
                }
                println!("{}", line.trim_end());
            }
            println!();
            match &table.note {
                Some(note) => println!("Note: {note}"),
                None => println!("Note: (none)"),
            }
        }
        OutputMode::Json => {
            output.print_json(&table_to_json(table));
        }
        OutputMode::Plain => {
            for column in &table.columns {
                println!(
                    "{}\t{}\t{}",
                    column.name,
                    column.data_type,
                    constraint_labels(column).join(",")
                );
            }
        }
    }
}

fn reference_count(table: &Table) -> usize {
    table
        .columns
        .iter()
        .filter(|c| c.reference_target().is_some())
        .count()
}

fn constraint_labels(column: &Column) -> Vec<String> {
    column
        .typed_constraints()
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn table_to_json(table: &Table) -> serde_json::Value {
    let columns: Vec<serde_json::Value> = table
        .columns
        .iter()
        .map(|c| {
            serde_json::json!({
                "name": c.name,
                "type": c.data_type,
                "constraints": constraint_labels(c),
                "not_null": c.is_not_null(),
                "unique": c.is_unique(),
                "references": c.reference_target(),
                "note": c.note,
            })
        })
        .collect();

    serde_json::json!({
        "name": table.name,
        "columns": columns,
        "settings": table.constraints,
        "note": table.note,
    })
}
