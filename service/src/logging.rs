//! Terminal logging shared by the API server and the seed binary.

use crate::config::{Config, RustEnv};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Crates that log every connection, TLS handshake or HTTP frame.
const TRANSPORT_MODULES: &[&str] = &["hyper", "h2", "rustls", "reqwest", "tower_http", "axum"];

/// Crates that log every SQL statement.
const DATABASE_MODULES: &[&str] = &["sqlx", "sea_orm"];

pub struct Logger;

impl Logger {
    /// Installs the global terminal logger. Only the first call takes effect.
    pub fn init_logger(config: &Config) {
        let level = config.log_level_filter;
        let runtime_env = config.runtime_env();

        if let Err(e) = TermLogger::init(
            level,
            Self::build_log_config(level),
            TerminalMode::Mixed,
            Self::color_choice(&runtime_env),
        ) {
            eprintln!("Logger not installed: {e}");
        }
    }

    /// Dependency modules hidden at `level`. SQL statements show from Debug,
    /// transport chatter only at Trace.
    fn ignored_modules(level: LevelFilter) -> Vec<&'static str> {
        let mut ignored = Vec::new();
        if level < LevelFilter::Trace {
            ignored.extend_from_slice(TRANSPORT_MODULES);
        }
        if level < LevelFilter::Debug {
            ignored.extend_from_slice(DATABASE_MODULES);
        }
        ignored
    }

    fn build_log_config(level: LevelFilter) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();
        for module in Self::ignored_modules(level) {
            builder.add_filter_ignore_str(module);
        }
        builder.build()
    }

    // Deployed environments collect stdout, where escape codes are noise.
    fn color_choice(runtime_env: &RustEnv) -> ColorChoice {
        match runtime_env {
            RustEnv::Development => ColorChoice::Auto,
            RustEnv::Staging | RustEnv::Production => ColorChoice::Never,
        }
    }
}
