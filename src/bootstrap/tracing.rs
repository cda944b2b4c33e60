//! Tracing configuration for WatchDeck
//!
//! This module provides the tracing-subscriber initialization for structured
//! logging with spans across the console core.
//!
//! ## Architecture / 架构
//!
//! - **Environment-aware**: Development logs at debug, production at info
//! - **Dual sink**: stdout always, plus a rolling file under the state
//!   directory when it can be created
//! - **Override**: `RUST_LOG` takes precedence over the built-in directives

use std::{fs, io, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};
use wd_core::config::StateConfig;
use wd_infra::StatePaths;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for app crates, info elsewhere
/// - **Production**: info level everywhere
/// - **HTTP internals**: hyper and reqwest stay at warn; every status poll
///   would otherwise flood the log with connection chatter
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
        if is_dev { "wd_infra=debug" } else { "wd_infra=info" }.to_string(),
        if is_dev { "wd_app=debug" } else { "wd_app=info" }.to_string(),
    ]
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// ## Behavior / 行为
///
/// - **Development**: Debug level, outputs to stdout
/// - **Production**: Info level, outputs to stdout
/// - **Environment filter**: Respects RUST_LOG, with sensible defaults
/// - **File sink**: Best effort; falls back to stdout only when the state
///   directory cannot be prepared
///
/// ## Call this / 调用位置
///
/// Call once in the embedding shell, **before** wiring dependencies:
///
/// ```ignore
/// fn main() {
///     let config = load_config(config_path).unwrap_or_default();
///     watchdeck::bootstrap::tracing::init_tracing_subscriber(&config.state)
///         .expect("Failed to initialize tracing");
///
///     run_console(config);
/// }
/// ```
///
/// ## Errors / 错误
///
/// Returns `Err` if:
/// - Subscriber is already registered (should only call once)
/// - Invalid filter directives in RUST_LOG
pub fn init_tracing_subscriber(state: &StateConfig) -> anyhow::Result<()> {
    let is_dev = is_development();

    // Step 1: Build environment filter
    // - Defaults to debug in dev, info in prod
    // - Keeps HTTP client internals at warn
    // - Can be overridden with RUST_LOG environment variable
    let filter_directives = build_filter_directives(is_dev);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // Step 2: Create writers
    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let file_writer = match build_file_writer(state) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
    };

    // Step 3: Create fmt layers (formatting)
    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test))) // Disable colors in tests
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false) // No ANSI colors in file logs
            .with_writer(writer)
    });

    // Step 4: Register the global subscriber
    // This MUST be called once, before any logging occurs
    let subscriber = registry().with(env_filter).with(stdout_layer);

    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer(state: &StateConfig) -> anyhow::Result<NonBlocking> {
    let paths = StatePaths::resolve(state)?;
    fs::create_dir_all(&paths.logs_dir)?;

    let file_appender = tracing_appender::rolling::never(&paths.logs_dir, "watchdeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
