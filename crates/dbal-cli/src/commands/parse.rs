use std::path::{Path, PathBuf};

use dbal_core::types::Ast;
use dbal_dsl::Token;

use crate::cli::{GlobalOpts, ParseArgs};
use crate::config::{load_config, CliConfig};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `parse` command: validate .dbal files and render diagnostics.
pub fn run(args: ParseArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let paths = config.paths_or_default(&args.paths);
    let files = discover_schema_files(&paths, &config.cli.extension)?;

    let mut total_tables = 0usize;
    let mut failed = 0usize;
    let mut results: Vec<serde_json::Value> = Vec::new();

    for file in &files {
        let filename = file.display().to_string();

        match parse_file(file) {
            Ok((tokens, ast)) => {
                let count = ast.tables.len();
                total_tables += count;

                if output.mode == OutputMode::Json {
                    let mut entry = serde_json::json!({
                        "file": filename,
                        "ast": to_json_value(&ast)?,
                    });
                    if args.debug {
                        entry["tokens"] = to_json_value(&tokens)?;
                    }
                    results.push(entry);
                    continue;
                }

                if args.debug {
                    dump_tokens(&filename, &tokens);
                }
                if args.print_ast {
                    print!("{}", dbal_dsl::print_all(&ast));
                }
                if output.is_verbose() {
                    output.status(&format!(
                        "  {filename} .... {count} tables, {} tokens",
                        tokens.len()
                    ));
                } else {
                    output.status(&format!("  {filename} .... {count} tables"));
                }
            }
            Err(err @ CliError::Parse { .. }) => {
                failed += 1;
                if output.mode == OutputMode::Json {
                    results.push(err.to_json());
                } else {
                    output.print_error(&err);
                }
            }
            Err(other) => return Err(other),
        }
    }

    match output.mode {
        OutputMode::Human => {
            let summary = format!(
                "{total_tables} tables parsed from {} files, {failed} failed",
                files.len()
            );
            output.summary(&summary, failed > 0);
        }
        OutputMode::Json => {
            output.print_json(&serde_json::json!({
                "files": files.len(),
                "tables": total_tables,
                "failed": failed,
                "results": results,
            }));
        }
        OutputMode::Plain => {
            println!("{}\t{total_tables}\t{failed}", files.len());
        }
    }

    if failed > 0 {
        Err(CliError::ParseFailed {
            failed,
            total: files.len(),
        })
    } else {
        Ok(())
    }
}

fn dump_tokens(filename: &str, tokens: &[Token]) {
    println!("# {filename}");
    for token in tokens {
        println!(
            "{}\t{}\t{:?}",
            token.span,
            token.kind.description(),
            token.text
        );
    }
}

fn to_json_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, CliError> {
    serde_json::to_value(value).map_err(|e| CliError::Other(e.to_string()))
}

/// Read, tokenize and parse one file.
///
/// The token stream is returned alongside the AST for `--debug` output.
pub fn parse_file(file: &Path) -> Result<(Vec<Token>, Ast), CliError> {
    let source_text = std::fs::read_to_string(file).map_err(|e| CliError::Io {
        path: file.to_path_buf(),
        source: e,
    })?;

    let parsed = dbal_dsl::tokenize(&source_text).and_then(|tokens| {
        let ast = dbal_dsl::parse_tokens(tokens.clone())?;
        Ok((tokens, ast))
    });

    parsed.map_err(|error| CliError::Parse {
        error,
        source_text,
        file: file.to_path_buf(),
    })
}

/// Discover schema files from a list of paths.
///
/// Paths can be files (used directly) or directories (searched recursively
/// for files with the configured extension).
pub fn discover_schema_files(paths: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let pattern = format!("{}/**/*.{extension}", path.display());
            let entries = glob::glob(&pattern).map_err(|e| CliError::Other(e.to_string()))?;
            for entry in entries {
                let entry = entry.map_err(|e| CliError::Other(e.to_string()))?;
                files.push(entry);
            }
        } else {
            return Err(CliError::NoSchemaFiles { path: path.clone() });
        }
    }

    if files.is_empty() {
        let display_path = paths
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("schemas/"));
        return Err(CliError::NoSchemaFiles { path: display_path });
    }

    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "discovered schema files");
    Ok(files)
}

/// Parse every schema file under `paths` into one AST, stopping at the
/// first file that fails.
pub fn parse_all(paths: &[PathBuf], config: &CliConfig) -> Result<Ast, CliError> {
    let files = discover_schema_files(&config.paths_or_default(paths), &config.cli.extension)?;
    let mut tables = Vec::new();

    for file in &files {
        let (_, ast) = parse_file(file)?;
        tables.extend(ast.tables);
    }

    Ok(Ast::new(tables))
}
