mod cli;
mod commands;
mod config;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod logging;
mod output;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    logging::init_logging(cli.global.verbose, cli.global.quiet);
    let output = output::OutputContext::from_global(&cli.global);

    let result = match cli.command {
        cli::Commands::Parse(args) => commands::parse::run(args, &cli.global, &output),
        cli::Commands::Inspect(args) => commands::inspect::run(args, &cli.global, &output),
        cli::Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(()) => std::process::exit(error::ExitCode::Success as i32),
        Err(e) => {
            // The JSON summary already carries the failure count.
            let summarized = matches!(e, error::CliError::ParseFailed { .. })
                && output.mode == output::OutputMode::Json;
            if !summarized {
                output.print_error(&e);
            }
            std::process::exit(e.exit_code() as i32);
        }
    }
}
