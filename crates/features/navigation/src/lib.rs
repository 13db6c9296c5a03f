//! Navigation feature slice.
//!
//! Two behaviours share one controller. In-page links scroll smoothly to their
//! fragment target and collapse the menu. On narrow viewports a hamburger button
//! opens and closes the menu, which also closes on an outside click, on `Escape`
//! and when the viewport grows past the mobile breakpoint.
//!
//! The `open` flag lives in the controller; the page only mirrors it through
//! [`MenuView::render`].

mod error;
#[cfg(feature = "web")]
pub mod web;

pub use crate::error::{NavigationError, NavigationErrorExt};

use folio_kernel::KernelError;
use std::fmt::Debug;
use tracing::{debug, warn};

pub const ESCAPE_KEY: &str = "Escape";

/// Mirrors the menu flag into the menu class, the hamburger state and `aria-expanded`.
pub trait MenuView: Debug {
    /// # Errors
    /// Returns [`KernelError`] if one of the DOM updates was rejected.
    fn render(&self, open: bool) -> Result<(), KernelError>;
}

/// Smooth-scrolls the viewport to an element.
pub trait Scroller: Debug {
    /// Returns `false` when no element carries `id`.
    fn scroll_to(&self, id: &str) -> bool;
}

/// Element id referenced by an in-page link, e.g. `"about"` for `"#about"`.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    href.trim().strip_prefix('#').filter(|id| !id.is_empty())
}

#[folio_derive::controller(name = "navigation")]
pub struct Navigation {
    open: bool,
    breakpoint: f64,
    scroller: Box<dyn Scroller>,
    menu: Option<Box<dyn MenuView>>,
}

impl Navigation {
    /// A closed menu. `menu` is `None` when the page has no mobile menu; links still scroll.
    #[must_use]
    pub fn start(
        scroller: Box<dyn Scroller>,
        menu: Option<Box<dyn MenuView>>,
        breakpoint: f64,
    ) -> Self {
        Self::new(NavigationState { open: false, breakpoint, scroller, menu })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.with(|state| state.open)
    }

    #[must_use]
    pub fn has_menu(&self) -> bool {
        self.with(|state| state.menu.is_some())
    }

    /// Follows an in-page link. Returns `true` when the target existed; only then is
    /// the menu closed.
    pub fn follow(&self, href: &str) -> bool {
        let Some(id) = fragment(href) else {
            debug!(href, "Ignoring non-fragment link");
            return false;
        };
        self.with_mut(|state| {
            if !state.scroller.scroll_to(id) {
                debug!(id, "Link target not found");
                return false;
            }
            state.set_open(false);
            true
        })
    }

    /// Hamburger click. Returns the resulting state.
    pub fn toggle(&self) -> bool {
        self.with_mut(|state| {
            if state.menu.is_none() {
                return false;
            }
            let open = !state.open;
            state.set_open(open);
            open
        })
    }

    /// Forces the menu closed; safe to call on a closed menu.
    pub fn close(&self) {
        self.with_mut(|state| state.set_open(false));
    }

    /// Document click; `inside` is whether the target lies in the menu or the hamburger.
    pub fn on_document_click(&self, inside: bool) {
        if !inside && self.is_open() {
            self.close();
        }
    }

    pub fn on_key(&self, key: &str) {
        if key == ESCAPE_KEY && self.is_open() {
            self.close();
        }
    }

    /// Viewport resize to `width` logical pixels.
    pub fn on_resize(&self, width: f64) {
        let wide = self.with(|state| width > state.breakpoint);
        if wide && self.is_open() {
            debug!(width, "Viewport left mobile layout; closing menu");
            self.close();
        }
    }
}

impl NavigationState {
    fn set_open(&mut self, open: bool) {
        self.open = open;
        if let Some(menu) = &self.menu
            && let Err(err) = menu.render(open)
        {
            warn!(%err, open, "Failed to update menu");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_extraction() {
        assert_eq!(fragment("#about"), Some("about"));
        assert_eq!(fragment(" #contact "), Some("contact"));
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment("projects.html"), None);
        assert_eq!(fragment("https://example.org/#top"), None);
        assert_eq!(fragment(""), None);
    }
}
