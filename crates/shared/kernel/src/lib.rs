//! Kernel utilities shared across controller slices.
//! Keep this crate lightweight: it owns the timer port, config parsing and, behind the
//! `web` feature, the thin `web-sys` glue every controller uses to find elements,
//! attach listeners and observe visibility.
//!
//! ## Config parsing
//! ```rust
//! use folio_kernel::config::parse_config;
//! use folio_kernel::domain::config::PageConfig;
//!
//! let cfg: PageConfig = parse_config(Some(r#"{ "counter": { "tick_ms": 20 } }"#)).unwrap();
//! assert_eq!(cfg.counter.tick_ms, 20);
//! assert_eq!(cfg.counter.duration_ms, 1000);
//! ```
pub mod config;
mod error;
pub mod prelude;
pub mod scheduler;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
#[cfg(feature = "web")]
pub mod web;

pub use crate::error::{KernelError, KernelErrorExt};
pub use folio_domain as domain;
