//! Colorful console output for search progress.
//!
//! Provides a custom `tracing` layer that renders the solver's structured
//! search events. Output goes to stderr so stdout stays free for results.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const SOLVER_TARGET: &str = "teamforge_solver";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. If a
/// global subscriber is already installed it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = format!("{}=info", SOLVER_TARGET).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let line = format!(
        "TeamForge v{} - exact team partitioning",
        env!("CARGO_PKG_VERSION")
    );
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", line.bright_cyan().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(SOLVER_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_search_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    people: Option<u64>,
    teams: Option<u64>,
    max_results: Option<u64>,
    canonical_partitions: Option<String>,
    partitions_checked: Option<u64>,
    score: Option<u64>,
    best_score: Option<u64>,
    tied: Option<u64>,
    ties_dropped: Option<u64>,
    duration_ms: Option<u64>,
    reason: Option<String>,
    error: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "canonical_partitions" => self.canonical_partitions = Some(s),
            "reason" => self.reason = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "people" => self.people = Some(value),
            "teams" => self.teams = Some(value),
            "max_results" => self.max_results = Some(value),
            "partitions_checked" => self.partitions_checked = Some(value),
            "score" => self.score = Some(value),
            "best_score" => self.best_score = Some(value),
            "tied" => self.tied = Some(value),
            "ties_dropped" => self.ties_dropped = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "canonical_partitions" => self.canonical_partitions = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_search_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "new_best" => format_new_best(v),
        "search_end" => format_search_end(v),
        "search_terminated" => format_search_terminated(v),
        "validation_failed" => format_validation_failed(v),
        _ => String::new(),
    }
}

fn format_search_start(v: &EventVisitor) -> String {
    let canonical = v
        .canonical_partitions
        .as_deref()
        .and_then(|s| s.parse::<u128>().ok())
        .map(format_count)
        .unwrap_or_else(|| "?".to_string());

    format!(
        "{} {} {} people ({}), teams ({}), max results ({}), canonical partitions ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        v.people.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.teams.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        v.max_results.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        canonical.bright_magenta()
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} Partition {:>11} | score {}",
        "->".bright_blue(),
        v.partitions_checked
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        format_score(v.score)
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let checked = v.partitions_checked.unwrap_or(0);
    let duration_ms = v.duration_ms.unwrap_or(0);
    let speed = if duration_ms == 0 {
        checked
    } else {
        checked.saturating_mul(1000) / duration_ms
    };

    format!(
        "{} {} {} Search ended: time spent ({}), best score ({}), tied ({}), ties dropped ({}), partitions ({}), speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        format_duration_ms(duration_ms).yellow(),
        format_score(v.best_score),
        v.tied.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.ties_dropped.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        checked.to_formatted_string(&Locale::en).white(),
        speed.to_formatted_string(&Locale::en).bright_magenta().bold()
    )
}

fn format_search_terminated(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Search stopped early ({}): best score ({}) after {} partitions",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Search]".bright_cyan(),
        v.reason.as_deref().unwrap_or("unknown").bright_red(),
        format_score(v.best_score),
        v.partitions_checked
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white()
    )
}

fn format_validation_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {}",
        timestamp().bright_black(),
        "ERROR".bright_red(),
        "[Search]".bright_cyan(),
        v.error.as_deref().unwrap_or("invalid input")
    )
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

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_score(score: Option<u64>) -> String {
    match score {
        None => "N/A".white().to_string(),
        Some(0) => "0".bright_green().to_string(),
        Some(n) => n.to_formatted_string(&Locale::en).yellow().to_string(),
    }
}

/// Exact below a trillion, scientific notation above.
fn format_count(n: u128) -> String {
    if n < 1_000_000_000_000 {
        return (n as u64).to_formatted_string(&Locale::en);
    }
    let log = (n as f64).log10();
    let exponent = log.floor() as i32;
    let mantissa = 10f64.powf(log - exponent as f64);
    format!("{:.3} x 10^{}", mantissa, exponent)
}
