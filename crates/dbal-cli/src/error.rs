use std::path::PathBuf;

use dbal_dsl::DslError;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error
/// - 2: invalid arguments / configuration
/// - 3: parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned by CLI command handlers.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A file failed to tokenize or parse.
    #[error("parse error in {file}: {error}")]
    Parse {
        error: DslError,
        source_text: String,
        file: PathBuf,
    },

    /// Some files failed to parse; their diagnostics were already shown.
    #[error("{failed} of {total} files failed to parse")]
    ParseFailed { failed: usize, total: usize },

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// No schema files at the given path.
    #[error("no schema files found in {path}")]
    NoSchemaFiles { path: PathBuf },

    /// The requested table is not declared in any file.
    #[error("table '{name}' not found")]
    TableNotFound { name: String },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } | Self::ParseFailed { .. } => ExitCode::ParseError,
            Self::Config { .. } | Self::NoSchemaFiles { .. } => ExitCode::InvalidArguments,
            Self::Io { .. } | Self::TableNotFound { .. } | Self::Other(_) => {
                ExitCode::GeneralError
            }
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse {
                error,
                file,
                source_text,
            } => {
                let (line, column) = error.span().line_col(source_text);
                serde_json::json!({
                    "error": "parse_error",
                    "file": file.display().to_string(),
                    "message": error.to_string(),
                    "line": line,
                    "column": column,
                })
            }
            Self::ParseFailed { failed, total } => serde_json::json!({
                "error": "parse_error",
                "failed": failed,
                "total": total,
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}
