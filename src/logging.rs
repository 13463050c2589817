use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// With `verbose` set, the behaviour systems log at debug level; other
/// crates stay at info either way so Bevy internals do not drown out the
/// pursuit diagnostics. `RUST_LOG` overrides the default filter entirely.
pub fn init(verbose: bool) {
    let crate_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let filter = format!("info,{}={crate_level}", env!("CARGO_CRATE_NAME"));
    let env = Env::default().default_filter_or(filter);
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}
