//! Counter feature slice.
//!
//! Some time after startup the stats section is located. The first time it is at
//! least half visible, every stat value counts up from zero to the number it
//! showed at load, keeping the configured suffix (`"150"` ends as `"150+"`).
//! The section moves through the same one-shot phases as reveal targets, so it
//! animates once per page load.

mod error;
pub mod run;
#[cfg(feature = "web")]
pub mod web;

pub use crate::error::{CounterError, CounterErrorExt};
pub use crate::run::{CounterRun, Frame, parse_leading_integer};

use folio_domain::config::CounterConfig;
use folio_domain::reveal::{Intersection, RevealTracker, Slot};
use folio_kernel::KernelError;
use folio_kernel::scheduler::{Scheduler, Tick};
use std::fmt::Debug;
use tracing::{debug, warn};

/// The stat values inside the stats section.
pub trait StatView: Debug {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current text of stat `index`, empty when unknown.
    fn text(&self, index: usize) -> String;

    /// # Errors
    /// Returns [`KernelError`] for an unknown index.
    fn set_text(&self, index: usize, text: &str) -> Result<(), KernelError>;
}

/// Reads the target of a stat. Text without a leading integer counts as zero.
#[must_use]
pub fn target_of(text: &str) -> i64 {
    parse_leading_integer(text).unwrap_or_else(|| {
        warn!(text, "Stat value is not a number; counting to 0");
        0
    })
}

#[folio_derive::controller(name = "counter")]
pub struct Counter {
    config: CounterConfig,
    scheduler: Box<dyn Scheduler>,
    tracker: RevealTracker,
    section: Option<Slot>,
    view: Option<Box<dyn StatView>>,
}

impl Counter {
    /// A counter with nothing attached yet.
    #[must_use]
    pub fn start(scheduler: Box<dyn Scheduler>, config: &CounterConfig) -> Self {
        Self::new(CounterState {
            config: config.clone(),
            scheduler,
            tracker: RevealTracker::new(),
            section: None,
            view: None,
        })
    }

    /// Runs `locate` once the configured start delay has passed.
    ///
    /// # Errors
    /// Returns [`KernelError`] if the timer could not be registered.
    pub fn defer(&self, locate: impl FnOnce(&Self) + 'static) -> Result<(), KernelError> {
        let handle = self.clone();
        self.with(|state| {
            state.scheduler.timeout(state.config.start_delay_ms, Box::new(move || locate(&handle)))
        })
    }

    /// Attaches the stats section. Returns `false` if one is already attached.
    pub fn attach(&self, view: Box<dyn StatView>) -> bool {
        self.with_mut(|state| {
            if state.section.is_some() {
                return false;
            }
            let slot = state.tracker.register();
            state.tracker.observe(slot);
            debug!(stats = view.len(), "Stats section attached");
            state.section = Some(slot);
            state.view = Some(view);
            true
        })
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.with(|state| state.section.is_some())
    }

    /// Visibility change of the stats section. Returns `true` when this call started
    /// the animation; the section should then stop being observed.
    pub fn on_visibility(&self, is_intersecting: bool) -> bool {
        let fired = self.with_mut(|state| {
            let Some(slot) = state.section else {
                return false;
            };
            !state.tracker.on_batch([Intersection::new(slot, is_intersecting)]).is_empty()
        });
        if fired {
            self.animate();
        }
        fired
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.with(|state| state.tracker.triggered_count() > 0)
    }

    fn animate(&self) {
        let handle = self.clone();
        self.with(|state| {
            let Some(view) = &state.view else {
                return;
            };
            let CounterConfig { duration_ms, tick_ms, .. } = state.config;

            for index in 0..view.len() {
                let target = target_of(&view.text(index));
                let mut run = CounterRun::new(target, duration_ms, tick_ms);
                let handle = handle.clone();
                let task = Box::new(move || match run.next() {
                    Some(Frame::Running(value)) => {
                        handle.render(index, value);
                        Tick::Continue
                    },
                    Some(Frame::Done(value)) => {
                        handle.render(index, value);
                        Tick::Stop
                    },
                    None => Tick::Stop,
                });
                if let Err(err) = state.scheduler.interval(tick_ms, task) {
                    warn!(index, %err, "Failed to start counter");
                }
            }
            debug!(stats = view.len(), "Counters started");
        });
    }

    fn render(&self, index: usize, value: i64) {
        self.with(|state| {
            let Some(view) = &state.view else {
                return;
            };
            let text = format!("{value}{}", state.config.suffix);
            if let Err(err) = view.set_text(index, &text) {
                warn!(index, %err, "Failed to render counter");
            }
        });
    }
}
