//! Theme feature slice: a persisted light/dark preference.
//!
//! The controller owns the current [`Mode`]. At startup it reads the stored preference
//! (anything but `"dark"` means light) and mirrors it into the page; every toggle flips
//! the mode, mirrors it and writes `"dark"`/`"light"` back under the configured key.

mod error;
#[cfg(feature = "web")]
pub mod web;

pub use crate::error::{ThemeError, ThemeErrorExt};

use folio_kernel::KernelError;
use std::fmt::Debug;
use strum_macros::{AsRefStr, Display, EnumString};
use tracing::{debug, warn};

pub const SUN_ICON: &str = "fas fa-sun";
pub const MOON_ICON: &str = "fas fa-moon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Interprets a stored preference; only the exact string `"dark"` selects dark mode.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Icon classes of the toggle control: the sun offers a way back to light.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON,
            Self::Dark => SUN_ICON,
        }
    }
}

/// Key-value store holding the preference (`localStorage` in the browser).
pub trait PreferenceStore: Debug {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns [`KernelError`] when the store rejects the write (quota, privacy mode).
    fn save(&self, key: &str, value: &str) -> Result<(), KernelError>;
}

/// Where the mode becomes visible: the document flag and the toggle icon.
pub trait ThemeView: Debug {
    /// # Errors
    /// Returns [`KernelError`] if the document flag could not be updated.
    fn set_dark(&self, dark: bool) -> Result<(), KernelError>;

    /// Implementations without an icon element do nothing.
    fn set_icon(&self, class: &str);
}

#[folio_derive::controller(name = "theme")]
pub struct Theme {
    mode: Mode,
    storage_key: String,
    store: Box<dyn PreferenceStore>,
    view: Box<dyn ThemeView>,
}

impl Theme {
    /// Reads the stored preference and applies it to `view`.
    #[must_use]
    pub fn start(
        store: Box<dyn PreferenceStore>,
        view: Box<dyn ThemeView>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let mode = Mode::from_stored(store.load(&storage_key).as_deref());
        debug!(%mode, "Restored theme preference");

        let state = ThemeState { mode, storage_key, store, view };
        state.render();
        Self::new(state)
    }

    /// Flips the mode, mirrors it into the page and persists it.
    pub fn toggle(&self) -> Mode {
        self.with_mut(ThemeState::toggle)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.with(|state| state.mode)
    }
}

impl ThemeState {
    fn render(&self) {
        if let Err(err) = self.view.set_dark(self.mode.is_dark()) {
            warn!(%err, "Failed to apply theme");
        }
        self.view.set_icon(self.mode.icon());
    }

    fn toggle(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.render();
        if let Err(err) = self.store.save(&self.storage_key, self.mode.as_ref()) {
            warn!(%err, "Failed to persist theme preference");
        }
        self.mode
    }
}
