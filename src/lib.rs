//! IPv4 subnet calculator.
//!
//! - [`models`] - network blocks and 32-bit address arithmetic
//! - [`processing`] - parse, details, mask selection, enumeration
//! - [`output`] - human-readable reports
//! - [`shell`] - interactive menu loop

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod shell;

pub use error::SubnetError;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Initialise log4rs from `log_config`.
///
/// Without that file, warnings and above go to stderr so stdout stays a
/// clean interactive console.
pub fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::warn!("Log config {log_config} not found, logging warnings to stderr");
    Ok(())
}
