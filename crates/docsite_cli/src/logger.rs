//! Logging setup for the docsite CLI.
//!
//! The level comes from the global flags first, then from the `DOCSITE_LOG`
//! environment variable, and defaults to `info`. Log lines go to stderr so
//! they never mix with `--preview` output on stdout.

use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter
pub const LOG_ENV: &str = "DOCSITE_LOG";

/// Pick the log filter for the given flags
pub fn filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Build the subscriber writing to `writer`, with escapes only when `ansi` is set
pub fn subscriber<W>(
    verbose: bool,
    quiet: bool,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, quiet))
        .with_target(false)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

/// Install the global stderr subscriber. Call once, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool) {
    let ansi = std::io::stderr().is_terminal();
    subscriber(verbose, quiet, std::io::stderr, ansi).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::filter::LevelFilter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_filter_flags() {
        assert_eq!(filter(true, false).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filter(false, true).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_errors_reach_writer_without_escapes() {
        let captured = Captured::default();
        let writer = captured.clone();
        let logger = subscriber(false, true, move || writer.clone(), false);

        tracing::subscriber::with_default(logger, || {
            tracing::info!("Saved modules.yml");
            tracing::error!("File not found: json/service-broker.json");
        });

        let text = captured.text();
        assert!(text.contains("ERROR"));
        assert!(text.contains("File not found: json/service-broker.json"));
        assert!(!text.contains("Saved modules.yml"));
        assert!(!text.contains('\x1b'));
    }
}
