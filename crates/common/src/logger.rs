use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `default_level` when set.
pub fn setup_logger(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive(quiet("hyper=warn"))
        .add_directive(quiet("reqwest=warn"));

    tracing_subscriber::fmt()
        // .with_file(true)
        // .with_line_number(true)
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .compact()
        .with_env_filter(filter)
        .init();
}

fn quiet(directive: &str) -> Directive {
    directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::WARN.into())
}
