//! Log output for the session binary.
//!
//! The library logs through the `log` facade. The binary installs a
//! `tracing-subscriber` formatter, whose `log` bridge picks those records up.
//! Records go to stderr so they never interleave with session output on
//! stdout.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Filter directive for a count of `-v` flags.
#[must_use]
pub fn directive_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Verbosity carried by one argument: `--verbose` counts one, `-v`, `-vv`,
/// `-vvv`... count their `v`s. Anything else is not a verbosity flag.
#[must_use]
pub fn verbosity_flag(arg: &str) -> Option<u8> {
    if arg == "--verbose" {
        return Some(1);
    }
    let cluster = arg.strip_prefix('-')?;
    if cluster.is_empty() || !cluster.chars().all(|c| c == 'v') {
        return None;
    }
    Some(u8::try_from(cluster.len()).unwrap_or(u8::MAX))
}

/// Install the stderr subscriber. `RUST_LOG`, when set, overrides the flags.
pub fn init_logging(verbosity: u8) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
}
