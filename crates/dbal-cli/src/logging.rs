use tracing_subscriber::EnvFilter;

/// The filter directive used when `RUST_LOG` is unset.
pub fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `-v`/`-q`.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
