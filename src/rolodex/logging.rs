use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with command output on stdout.
/// `RUST_LOG` overrides the verbosity flag if set.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "rolodex=debug"
    } else {
        "rolodex=warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
