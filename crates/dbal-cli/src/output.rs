use console::{Style, Term};

use crate::cli::GlobalOpts;
use crate::diagnostic::render_diagnostic;
use crate::error::CliError;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl OutputMode {
    /// Maps a `--format` value; clap has already restricted the choices.
    pub fn from_format(format: &str) -> Self {
        match format {
            "json" => Self::Json,
            "plain" => Self::Plain,
            _ => Self::Human,
        }
    }
}

/// Where command results go.
///
/// Data (printed DBAL, token dumps, tables, JSON documents) is written to
/// stdout by the commands themselves. This type owns stderr: per-file
/// progress lines, the closing summary, and errors.
pub struct OutputContext {
    pub mode: OutputMode,
    verbose: bool,
    quiet: bool,
    use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        let use_color = !global.no_color
            && std::env::var("TERM").map_or(true, |t| t != "dumb")
            && Term::stderr().is_term();

        Self {
            mode: OutputMode::from_format(&global.format),
            verbose: global.verbose > 0,
            quiet: global.quiet,
            use_color,
        }
    }

    fn human_chatter(&self) -> bool {
        self.mode == OutputMode::Human && !self.quiet
    }

    /// `-v` was given at least once.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// A per-file progress line.
    pub fn status(&self, msg: &str) {
        if self.human_chatter() {
            eprintln!("{msg}");
        }
    }

    /// The closing line of a multi-file run, tagged `ok` or `warning:`.
    pub fn summary(&self, msg: &str, failed: bool) {
        if !self.human_chatter() {
            return;
        }
        let tag = if failed {
            self.paint("warning:", Style::new().yellow().bold())
        } else {
            self.paint("ok", Style::new().green().bold())
        };
        eprintln!("{tag} {msg}");
    }

    /// Reports an error in the selected format. Errors are never silenced by
    /// `--quiet`.
    pub fn print_error(&self, err: &CliError) {
        match (self.mode, err) {
            (
                OutputMode::Human,
                CliError::Parse {
                    error,
                    source_text,
                    file,
                },
            ) => {
                let filename = file.display().to_string();
                eprintln!("{:?}", render_diagnostic(error, source_text, &filename));
            }
            (OutputMode::Human, _) => {
                eprintln!("{} {err}", self.paint("error:", Style::new().red().bold()));
            }
            (OutputMode::Json, _) => eprintln!("{}", err.to_json()),
            (OutputMode::Plain, _) => eprintln!("error\t{err}"),
        }
    }

    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(s) = serde_json::to_string_pretty(value) {
            println!("{s}");
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}
