//! Diagnostic logging setup

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Logs go to stderr so command previews on
/// stdout stay clean. `verbose` turns on debug output for this crate.
pub fn init(verbose: bool) {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    if verbose {
        if let Ok(directive) = "ssh_gui_manager=debug".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
