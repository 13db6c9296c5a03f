//! # Logger
//!
//! A centralized logging utility for the page.
//! It installs a `tracing-subscriber` registry with an [`EnvFilter`] and a compact
//! formatting layer whose lines are routed to the browser console (`console.error`,
//! `console.warn`, ... by level). On host targets, where tests run, lines go to stderr.
//!
//! * Use [`LoggerBuilder::level`] for the default directive and
//!   [`LoggerBuilder::env_filter`] for module-directed filters
//!   (e.g., `"folio_reveal=debug,folio_counter=trace"`).
//! * Timestamps are disabled: the browser console stamps lines itself and
//!   `SystemTime` is unavailable on `wasm32-unknown-unknown`.
//!
//! ## Example
//!
//! ```rust
//! # use folio_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("folio-web")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;
mod writer;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::writer::{ConsoleLine, ConsoleWriter, console_method};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::str::FromStr;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit filter (e.g., `folio_reveal=debug`).
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(
                layer()
                    .compact()
                    .with_ansi(false)
                    .without_time()
                    .with_writer(ConsoleWriter)
                    .boxed(),
            );
        }

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(logger = %self.name.0, "Logger initialized");

        Ok(Logger { name: self.name.0 })
    }
}

/// A handle to the initialized logging system.
#[must_use = "The handle names the subscriber owner; keep it for the page lifetime."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("my-page")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    /// Parses a level directive such as `"debug"` (case-insensitive).
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for unknown levels.
    pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
        LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid log level '{level}': {e}").into(),
            context: None,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if let Some(filter) = &config.env_filter
        && filter.trim().is_empty()
    {
        return Err(LoggerError::InvalidConfiguration {
            message: "env_filter cannot be blank".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
