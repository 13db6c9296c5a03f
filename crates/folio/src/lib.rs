//! Facade crate for the page controllers.
//! Re-exports domain/kernel primitives and mounts every enabled slice.
//! Keep this crate thin: it composes other crates, it does not implement behaviour.
//!
//! ## Usage
//! - Depend on `folio` with the `web` feature from the wasm entry crate.
//! - Inject [`styles::GLOBAL_STYLESHEET`] once, then call `folio::mount` with the page
//!   config and log the returned report.

mod mount;
pub mod styles;

pub use crate::mount::{MountStep, mount_steps, outcome};
pub use folio_domain as domain;
pub use folio_kernel as kernel;
pub use folio_kernel::prelude;

#[cfg(feature = "web")]
pub use crate::mount::mount;

/// The controller slices, one crate each.
pub mod features {
    pub use folio_contact as contact;
    pub use folio_counter as counter;
    pub use folio_navigation as navigation;
    pub use folio_reveal as reveal;
    pub use folio_scroll_top as scroll_top;
    pub use folio_theme as theme;
}
