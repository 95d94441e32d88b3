//! Tracing subscriber setup for the `showdown` binary.
//!
//! Engine events go to stderr so they never mix with game output on stdout.
//! `RUST_LOG` picks the filter (default `warn`); `--verbose` forces `debug`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn filter_for(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global subscriber. Later calls in the same process are no-ops,
/// so `run` can be invoked repeatedly from tests.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
pub(crate) mod capture {
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;

    /// Structured log entry recorded by [`CaptureLayer`]
    #[derive(Debug, Clone)]
    pub struct LogEntry {
        pub level: Level,
        pub message: String,
        pub fields: Vec<(String, String)>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct CaptureLayer {
        entries: Arc<Mutex<Vec<LogEntry>>>,
    }

    impl CaptureLayer {
        pub fn entries(&self) -> Vec<LogEntry> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.entries.lock().unwrap().push(LogEntry {
                level: *event.metadata().level(),
                message: visitor.message.unwrap_or_default(),
                fields: visitor.fields,
            });
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            let value_str = format!("{:?}", value);
            if field.name() == "message" {
                self.message = Some(value_str);
            } else {
                self.fields.push((field.name().to_string(), value_str));
            }
        }
    }
}
