//! Scroll-to-top feature slice.

mod error;
#[cfg(feature = "web")]
pub mod web;

pub use crate::error::{ScrollTopError, ScrollTopErrorExt};

use folio_kernel::KernelError;
use std::fmt::Debug;
use tracing::{trace, warn};

/// The button is shown strictly above `threshold`.
#[must_use]
pub fn is_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub trait ScrollTopView: Debug {
    /// # Errors
    /// Returns [`KernelError`] if the visibility class could not be changed.
    fn set_visible(&self, visible: bool) -> Result<(), KernelError>;

    /// Smooth-scrolls the window to the top.
    fn scroll_to_top(&self);
}

#[folio_derive::controller(name = "scroll_top")]
pub struct ScrollTop {
    threshold: f64,
    visible: Option<bool>,
    view: Box<dyn ScrollTopView>,
}

impl ScrollTop {
    #[must_use]
    pub fn start(view: Box<dyn ScrollTopView>, threshold: f64) -> Self {
        Self::new(ScrollTopState { threshold, visible: None, view })
    }

    /// Window scroll to vertical `offset`. Returns whether the button is visible.
    pub fn on_scroll(&self, offset: f64) -> bool {
        self.with_mut(|state| {
            let visible = is_visible(offset, state.threshold);
            if state.visible != Some(visible) {
                trace!(offset, visible, "Scroll button visibility changed");
                match state.view.set_visible(visible) {
                    Ok(()) => state.visible = Some(visible),
                    Err(err) => warn!(%err, "Failed to toggle scroll button"),
                }
            }
            visible
        })
    }

    pub fn on_click(&self) {
        self.with(|state| state.view.scroll_to_top());
    }

    /// Last visibility written to the page, if any.
    #[must_use]
    pub fn is_shown(&self) -> Option<bool> {
        self.with(|state| state.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_visible(0.0, 300.0));
        assert!(!is_visible(299.0, 300.0));
        assert!(!is_visible(300.0, 300.0));
        assert!(is_visible(301.0, 300.0));
        assert!(is_visible(300.5, 300.0));
    }
}
