//! Prometheus metrics collection for bangcmd.
//!
//! Recording is a no-op until [`init`] has been called, so hosts that do not
//! scrape metrics pay nothing for them.
//!
//! - `bot_command_total{command}` - Commands dispatched to a handler
//! - `bot_command_duration_seconds{command}` - Handler latency histogram
//! - `bot_command_errors_total{command,error}` - Failed handler invocations
//! - `bot_unknown_command_total` - Commands answered with suggestions

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::{Once, OnceLock};

/// Global Prometheus registry for all metrics.
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Commands dispatched to a handler, by command name.
pub static COMMAND_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();

/// Handler latency by command name.
pub static COMMAND_LATENCY: OnceLock<HistogramVec> = OnceLock::new();

/// Handler failures by command name and kind (error or panic).
pub static COMMAND_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();

/// Unknown commands. Unlabeled: the names come straight from users.
pub static UNKNOWN_COMMANDS: OnceLock<IntCounter> = OnceLock::new();

static INIT: Once = Once::new();

/// Initialize the Prometheus metrics registry.
///
/// Safe to call more than once; only the first call registers metrics.
pub fn init() {
    INIT.call_once(|| {
        let r = registry();

        // Helper macro to register metric
        macro_rules! register {
            ($metric:ident, $init:expr) => {
                match $init {
                    Ok(m) => {
                        if let Err(e) = r.register(Box::new(m.clone())) {
                            tracing::warn!(error = %e, concat!("Failed to register metric ", stringify!($metric)));
                        }
                        let _ = $metric.set(m);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, concat!("Failed to create metric ", stringify!($metric)));
                    }
                }
            };
        }

        register!(COMMAND_COUNTER, IntCounterVec::new(Opts::new("bot_command_total", "Commands dispatched to a handler"), &["command"]));
        register!(COMMAND_LATENCY, HistogramVec::new(
            HistogramOpts::new("bot_command_duration_seconds", "Command handler latency")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["command"]));
        register!(COMMAND_ERRORS, IntCounterVec::new(Opts::new("bot_command_errors_total", "Failed command handler invocations"), &["command", "error"]));
        register!(UNKNOWN_COMMANDS, IntCounter::new("bot_unknown_command_total", "Commands that matched no registered name"));
    });
}

/// Gather all metrics and encode them in Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry().gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode Prometheus metrics");
        return String::new();
    }
    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Prometheus metrics were not valid UTF-8");
            String::new()
        }
    }
}

/// Record a command execution with latency.
#[inline]
pub fn record_command(command: &str, duration_secs: f64) {
    if let Some(c) = COMMAND_COUNTER.get() {
        c.with_label_values(&[command]).inc();
    }
    if let Some(h) = COMMAND_LATENCY.get() {
        h.with_label_values(&[command]).observe(duration_secs);
    }
}

/// Record a command error.
#[inline]
pub fn record_command_error(command: &str, error: &str) {
    if let Some(c) = COMMAND_ERRORS.get() {
        c.with_label_values(&[command, error]).inc();
    }
}

/// Record a command that matched nothing in the registry.
#[inline]
pub fn record_unknown_command() {
    if let Some(c) = UNKNOWN_COMMANDS.get() {
        c.inc();
    }
}
