use crate::constants::{
    FADE_IN_SELECTOR, SCROLL_TOP_VISIBLE_CLASS, SLIDE_UP_SELECTOR, THEME_STORAGE_KEY,
};
use crate::features::ControllerSet;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level page configuration shared across controllers.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfigInner {
    pub log: LogConfig,
    pub controllers: ControllerSet,
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub contact: ContactConfig,
    pub scroll_top: ScrollTopConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into controllers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(flatten, default)]
    inner: Arc<PageConfigInner>,
}

impl Deref for PageConfig {
    type Target = PageConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PageConfig {
    fn deref_mut(&mut self) -> &mut PageConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Browser console logging.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra directives, e.g. `folio_reveal=debug`.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Viewport width (logical px) above which an open mobile menu is closed on resize.
    pub breakpoint: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub toast_duration_ms: u32,
    pub message_min_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollTopConfig {
    /// Vertical scroll offset (px) the page must exceed before the button shows.
    pub threshold: f64,
    pub visible_class: String,
}

/// Options for one visibility observer registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
}

/// Overriding a pass in JSON replaces all of its options, selector included.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub fade_in: ObserverConfig,
    pub slide_up: ObserverConfig,
    /// Extra delay per position in an intersection batch.
    pub stagger_step_ms: u32,
    pub slide_offset_px: u32,
    pub transition_ms: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Delay before the stats section starts being observed.
    pub start_delay_ms: u32,
    pub duration_ms: u32,
    pub tick_ms: u32,
    pub threshold: f64,
    pub suffix: String,
}

// --- Default ---

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: THEME_STORAGE_KEY.to_owned() }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { breakpoint: 768.0 }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { toast_duration_ms: 3000, message_min_chars: 10 }
    }
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self { threshold: 300.0, visible_class: SCROLL_TOP_VISIBLE_CLASS.to_owned() }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self { selector: String::new(), threshold: 0.1, root_margin: "0px".to_owned() }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            fade_in: ObserverConfig {
                selector: FADE_IN_SELECTOR.to_owned(),
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px".to_owned(),
            },
            slide_up: ObserverConfig {
                selector: SLIDE_UP_SELECTOR.to_owned(),
                threshold: 0.1,
                root_margin: "0px 0px -100px 0px".to_owned(),
            },
            stagger_step_ms: 100,
            slide_offset_px: 30,
            transition_ms: 600,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            duration_ms: 1000,
            tick_ms: 16,
            threshold: 0.5,
            suffix: "+".to_owned(),
        }
    }
}
