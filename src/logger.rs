use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset. The library and the `closest` binary
/// are named by target; the `csv` binary shares its name with the csv crate, so it
/// falls under the global level.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "closest_point=debug,closest=debug,info"
    } else {
        "warn"
    }
}

/// Logs go to stderr so stdout only carries the prompt and results.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
