//! WebAssembly entry point of the page.
//!
//! Waits for the document to finish parsing, then installs the console logger, reads
//! the embedded config, injects the global stylesheet and mounts the controllers.

use anyhow::Context;
use folio::domain::config::PageConfig;
use folio::domain::constants::CONFIG_ELEMENT_ID;
use folio_kernel::KernelError;
use folio_kernel::config::parse_config;
use folio_kernel::web;
use folio_logger::{LevelFilter, Logger, LoggerError};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Event;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = web::document().map_err(|err| JsValue::from_str(&err.to_string()))?;

    if document.ready_state() == "loading" {
        web::listen(&document, "DOMContentLoaded", |_: Event| boot())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
    } else {
        boot();
    }
    Ok(())
}

fn boot() {
    let (config, config_error) = load_config();

    match init_logger(&config) {
        Ok((logger, ignored_filter)) => {
            info!(logger = logger.name(), "Page ready");
            if let Some(err) = ignored_filter {
                warn!(%err, "Ignoring configured log filter");
            }
        },
        Err(err) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!("folio: {err:#}")));
        },
    }
    if let Some(err) = config_error {
        warn!(%err, "Ignoring malformed page config; using defaults");
    }

    if let Err(err) = folio::styles::inject() {
        warn!(%err, "Failed to inject global stylesheet");
    }

    let report = folio::mount(&config);
    if !report.failed().is_empty() {
        warn!(failed = ?report.failed(), "Some controllers failed to mount");
    }
}

/// Reads the embedded config; a malformed block falls back to defaults.
fn load_config() -> (PageConfig, Option<KernelError>) {
    let parsed = web::config_text(CONFIG_ELEMENT_ID)
        .and_then(|raw| parse_config::<PageConfig>(raw.as_deref()));
    match parsed {
        Ok(config) => (config, None),
        Err(err) => (PageConfig::default(), Some(err)),
    }
}

/// Installs the console logger. A rejected `log.filter` is dropped and the logger is
/// installed with the level directive alone; the rejection is returned for logging.
fn init_logger(config: &PageConfig) -> anyhow::Result<(Logger, Option<LoggerError>)> {
    let builder = || {
        Logger::builder()
            .name(env!("CARGO_PKG_NAME"))
            .console(true)
            .level(log_level(config))
    };
    let Some(filter) = &config.log.filter else {
        return Ok((builder().init().context("Failed to initialize logger")?, None));
    };

    match builder().env_filter(filter.clone()).init() {
        Ok(logger) => Ok((logger, None)),
        Err(err @ LoggerError::InvalidConfiguration { .. }) => {
            let logger =
                builder().init().context("Failed to initialize logger without log filter")?;
            Ok((logger, Some(err)))
        },
        Err(err) => Err(err).context("Failed to initialize logger"),
    }
}

fn log_level(config: &PageConfig) -> LevelFilter {
    Logger::parse_level(&config.log.level).unwrap_or(LevelFilter::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_level_falls_back_to_info() {
        let mut config = PageConfig::default();
        assert_eq!(log_level(&config), LevelFilter::INFO);

        config.log.level = "debug".into();
        assert_eq!(log_level(&config), LevelFilter::DEBUG);

        config.log.level = "chatty".into();
        assert_eq!(log_level(&config), LevelFilter::INFO);
    }

    #[test]
    #[serial]
    fn test_rejected_log_filter_still_installs_logger() {
        let config: PageConfig =
            parse_config(Some(r#"{ "log": { "filter": "folio=loud" } }"#)).unwrap();

        let (logger, ignored) = init_logger(&config).unwrap();

        assert_eq!(logger.name(), "folio-web");
        assert!(matches!(ignored, Some(LoggerError::InvalidConfiguration { .. })));
    }
}
