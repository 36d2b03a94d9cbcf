//! Colorful console output for checkout searches.
//!
//! Provides a custom `tracing` layer that formats calculator events with
//! colors. Output goes to stderr so suggestions on stdout stay pipeable.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "dartforge_solver=info";

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the console output with [`DEFAULT_DIRECTIVE`].
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_directive(DEFAULT_DIRECTIVE);
}

/// Initializes the console output with a custom fallback directive, such as
/// `dartforge_solver=debug`.
///
/// `RUST_LOG` still wins when set. An unparsable directive falls back to
/// [`DEFAULT_DIRECTIVE`].
pub fn init_with_directive(directive: &str) {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(CheckoutConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 ____             _   _____
|  _ \  __ _ _ __| |_|  ___|__  _ __ __ _  ___
| | | |/ _` | '__| __| |_ / _ \| '__/ _` |/ _ \
| |_| | (_| | |  | |_|  _| (_) | | | (_| |  __/
|____/ \__,_|_|   \__|_|  \___/|_|  \__, |\___|
                                    |___/
"#;

    let version_line = format!(
        "                 v{} - Darts Checkout Calculator\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats calculator events with colors.
pub struct CheckoutConsoleLayer;

impl<S: Subscriber> Layer<S> for CheckoutConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Only handle dartforge_solver events
        if !metadata.target().starts_with("dartforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_search_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    checkout_type: Option<String>,
    checkout: Option<String>,
    score: Option<i64>,
    limit: Option<u64>,
    max_throws: Option<u64>,
    found: Option<u64>,
    nodes: Option<u64>,
    pruned: Option<u64>,
    accepted: Option<u64>,
    duration_us: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "checkout_type" => self.checkout_type = Some(s),
            "checkout" => self.checkout = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "limit" => self.limit = Some(value),
            "max_throws" => self.max_throws = Some(value),
            "found" => self.found = Some(value),
            "nodes" => self.nodes = Some(value),
            "pruned" => self.pruned = Some(value),
            "accepted" => self.accepted = Some(value),
            "duration_us" => self.duration_us = Some(value),
            "score" => self.score = Some(value as i64),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "score" => self.score = Some(value),
            _ if value >= 0 => self.record_u64(field, value as u64),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "checkout_type" => self.checkout_type = Some(value.to_string()),
            "checkout" => self.checkout = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_search_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("search_start") => format_search_start(level, v),
        Some("search_end") => format_search_end(level, v),
        Some("checkout") => format_checkout(v),
        _ => String::new(),
    }
}

fn format_search_start(level: Level, v: &EventVisitor) -> String {
    format!(
        "{} {} {} score ({}), limit ({}), max throws ({}), {}",
        timestamp().bright_black(),
        level_tag(level),
        "[Calculator]".bright_cyan(),
        v.score.unwrap_or(0).bright_yellow(),
        v.limit.unwrap_or(0).bright_yellow(),
        v.max_throws.unwrap_or(0).bright_yellow(),
        v.checkout_type.as_deref().unwrap_or("N/A").white().bold()
    )
}

fn format_search_end(level: Level, v: &EventVisitor) -> String {
    let found = v.found.unwrap_or(0);
    let found_text = if found == 0 {
        "no checkout".bright_red().to_string()
    } else {
        found.bright_green().bold().to_string()
    };

    format!(
        "{} {} {} score ({}) done: found ({}), time spent ({}), nodes ({}), pruned ({}), accepted ({})",
        timestamp().bright_black(),
        level_tag(level),
        "[Calculator]".bright_cyan(),
        v.score.unwrap_or(0).bright_yellow(),
        found_text,
        format_duration_us(v.duration_us.unwrap_or(0)).yellow(),
        v.nodes.unwrap_or(0).bright_magenta(),
        v.pruned.unwrap_or(0).white(),
        v.accepted.unwrap_or(0).white()
    )
}

fn format_checkout(v: &EventVisitor) -> String {
    format!(
        "    {} {}",
        "->".bright_blue(),
        v.checkout.as_deref().unwrap_or("N/A").white()
    )
}

fn level_tag(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().to_string(),
        Level::WARN => "WARN".bright_yellow().to_string(),
        Level::INFO => "INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_us() {
        assert_eq!(format_duration_us(250), "250µs");
        assert_eq!(format_duration_us(1_500), "1.50ms");
        assert_eq!(format_duration_us(2_340_000), "2.34s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("other".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_search_event(Level::DEBUG, &visitor).is_empty());
        assert!(format_search_event(Level::DEBUG, &EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_search_end_mentions_counts() {
        let visitor = EventVisitor {
            event: Some("search_end".to_string()),
            score: Some(170),
            found: Some(1),
            nodes: Some(42),
            ..EventVisitor::default()
        };
        let line = format_search_event(Level::DEBUG, &visitor);
        assert!(line.contains("[Calculator]"));
        assert!(line.contains("170"));
        assert!(line.contains("42"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_directive("dartforge_solver=debug");
    }
}
