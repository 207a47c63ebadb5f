//! Logging setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter from `RUST_LOG`, falling back to `info` (`warn` when quiet) for
/// anything the variable leaves unset.
pub fn env_filter(quiet: bool) -> EnvFilter {
    filter_from(quiet, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(quiet: bool, directives: Option<&str>) -> EnvFilter {
    let default = if quiet { LevelFilter::WARN } else { LevelFilter::INFO };
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives.unwrap_or(""))
}

/// Install a `fmt` subscriber on stderr using [`env_filter`].
pub fn init(quiet: bool) {
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter(quiet))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn enabled_under(filter: EnvFilter, level: Level) -> bool {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || match level {
            Level::DEBUG => tracing::enabled!(Level::DEBUG),
            Level::INFO => tracing::enabled!(Level::INFO),
            Level::WARN => tracing::enabled!(Level::WARN),
            _ => tracing::enabled!(Level::ERROR),
        })
    }

    #[test]
    fn test_rust_log_level_overrides_default() {
        std::env::set_var(EnvFilter::DEFAULT_ENV, "debug");
        let filter = env_filter(false);
        std::env::remove_var(EnvFilter::DEFAULT_ENV);

        assert!(enabled_under(filter, Level::DEBUG));
    }

    #[test]
    fn test_plain_warn_silences_info() {
        assert!(!enabled_under(filter_from(false, Some("warn")), Level::INFO));
        assert!(enabled_under(filter_from(false, Some("warn")), Level::WARN));
    }

    #[test]
    fn test_defaults_without_rust_log() {
        assert!(enabled_under(filter_from(false, None), Level::INFO));
        assert!(!enabled_under(filter_from(false, None), Level::DEBUG));
        assert!(!enabled_under(filter_from(true, None), Level::INFO));
        assert!(enabled_under(filter_from(true, None), Level::WARN));
    }
}
