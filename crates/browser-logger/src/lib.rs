//! Browser Logger
//!
//! A `tracing` layer that formats events as
//! `HH:MM:SS.mmm LEVEL target: message key=value` and hands them to the
//! browser console (stderr when not running in wasm).

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

type Sink = dyn Fn(Level, &str) + Send + Sync;

/// Layer writing one formatted line per event.
pub struct ConsoleLayer {
    sink: Box<Sink>,
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self { sink: Box::new(write_console) }
    }
}

impl ConsoleLayer {
    /// Route lines somewhere else, e.g. into a buffer in tests.
    pub fn with_sink(sink: impl Fn(Level, &str) + Send + Sync + 'static) -> Self {
        Self { sink: Box::new(sink) }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&time, *meta.level(), meta.target(), &fields);
        (self.sink)(*meta.level(), &line);
    }
}

/// Install the console layer as the global subscriber.
///
/// Fails (without panicking) if a global subscriber is already set.
pub fn init(max_level: Level) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(ConsoleLayer::default().with_filter(LevelFilter::from_level(max_level)))
        .try_init()
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push((field.name(), format!("{:?}", value)));
        }
    }
}

fn format_line(time: &str, level: Level, target: &str, fields: &FieldCollector) -> String {
    let mut line = format!("{} {:>5} {}: {}", time, level, target, fields.message);
    for (name, value) in &fields.fields {
        let _ = write!(line, " {}={}", name, value);
    }
    line
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    fn capture<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = lines.clone();
        let layer = ConsoleLayer::with_sink(move |level, line| {
            sink_lines.lock().unwrap().push((level, line.to_string()));
        });
        let subscriber = tracing_subscriber::registry().with(layer.with_filter(LevelFilter::INFO));
        tracing::subscriber::with_default(subscriber, f);
        let out = lines.lock().unwrap().clone();
        out
    }

    #[test]
    fn test_formats_message_and_fields() {
        let lines = capture(|| {
            tracing::info!(target: "console", resource = "Contact", rows = 3, "list fetched");
        });
        assert_eq!(lines.len(), 1);
        let (level, line) = &lines[0];
        assert_eq!(*level, Level::INFO);
        assert!(line.ends_with(" INFO console: list fetched resource=Contact rows=3"), "{}", line);
    }

    #[test]
    fn test_filter_drops_debug() {
        let lines = capture(|| {
            tracing::debug!("noise");
            tracing::error!("boom");
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::ERROR);
        assert!(lines[0].1.contains("ERROR"));
    }

    #[test]
    fn test_line_layout() {
        let fields = FieldCollector { message: "hi".into(), fields: vec![("id", "4".into())] };
        assert_eq!(format_line("10:00:00.000", Level::WARN, "ui", &fields), "10:00:00.000  WARN ui: hi id=4");
    }
}
