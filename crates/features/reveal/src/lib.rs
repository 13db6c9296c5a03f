//! Reveal feature slice: scroll-triggered entrance animations for cards.
//!
//! Two independent passes run over overlapping element sets:
//!
//! * [`Pass::FadeIn`] starts a CSS `fadeIn` animation the first time an element
//!   becomes visible.
//! * [`Pass::SlideUp`] hides its elements up front (transparent, shifted down) and
//!   slides each one into place on first visibility, delayed by its position in the
//!   notification batch so cards entering together cascade.
//!
//! Each pass keeps a [`RevealTracker`]; an element fires at most once per pass and is
//! released from its observer as soon as it does.

mod error;
#[cfg(feature = "web")]
pub mod web;

pub use crate::error::{RevealError, RevealErrorExt};

use folio_domain::config::RevealConfig;
use folio_domain::reveal::{Intersection, RevealPhase, RevealTracker, Slot};
use folio_kernel::KernelError;
use folio_kernel::scheduler::Scheduler;
use std::fmt::Debug;
use strum_macros::{Display, IntoStaticStr};
use tracing::{debug, warn};

pub const FADE_IN_ANIMATION: &str = "fadeIn 0.8s ease forwards";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Pass {
    FadeIn,
    SlideUp,
}

/// The elements of one pass, addressed by position.
pub trait Stage: Debug {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets one inline style property on element `index`.
    ///
    /// # Errors
    /// Returns [`KernelError`] for an unknown index or a rejected value.
    fn style(&self, index: usize, property: &str, value: &str) -> Result<(), KernelError>;
}

/// Inline style declarations of the slide-up pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideStyles {
    pub hidden: Vec<(&'static str, String)>,
    pub shown: Vec<(&'static str, String)>,
}

impl SlideStyles {
    #[must_use]
    pub fn new(offset_px: u32, transition_ms: u32) -> Self {
        let seconds = f64::from(transition_ms) / 1000.0;
        Self {
            hidden: vec![
                ("opacity", "0".to_owned()),
                ("transform", format!("translateY({offset_px}px)")),
                ("transition", format!("opacity {seconds}s ease, transform {seconds}s ease")),
            ],
            shown: vec![("opacity", "1".to_owned()), ("transform", "translateY(0)".to_owned())],
        }
    }
}

#[derive(Debug)]
struct Track {
    tracker: RevealTracker,
    slots: Vec<Slot>,
    stage: Box<dyn Stage>,
}

impl Track {
    fn new(mut tracker: RevealTracker, stage: Box<dyn Stage>) -> Self {
        let slots = (0..stage.len())
            .map(|_| {
                let slot = tracker.register();
                tracker.observe(slot);
                slot
            })
            .collect();
        Self { tracker, slots, stage }
    }

    fn apply(&self, pass: Pass, index: usize, declarations: &[(&'static str, String)]) {
        for (property, value) in declarations {
            if let Err(err) = self.stage.style(index, property, value) {
                warn!(%pass, index, property, %err, "Failed to apply reveal style");
            }
        }
    }
}

#[folio_derive::controller(name = "reveal")]
pub struct Reveal {
    fade_in: Track,
    slide_up: Track,
    slide_styles: SlideStyles,
    scheduler: Box<dyn Scheduler>,
}

impl Reveal {
    /// Registers every element of both passes and hides the slide-up elements.
    #[must_use]
    pub fn start(
        fade_in: Box<dyn Stage>,
        slide_up: Box<dyn Stage>,
        scheduler: Box<dyn Scheduler>,
        config: &RevealConfig,
    ) -> Self {
        let fade_in = Track::new(RevealTracker::new(), fade_in);
        let slide_up = Track::new(RevealTracker::staggered(config.stagger_step_ms), slide_up);
        let slide_styles = SlideStyles::new(config.slide_offset_px, config.transition_ms);

        for index in 0..slide_up.slots.len() {
            slide_up.apply(Pass::SlideUp, index, &slide_styles.hidden);
        }
        debug!(fade_in = fade_in.slots.len(), slide_up = slide_up.slots.len(), "Reveal passes armed");

        Self::new(RevealState { fade_in, slide_up, slide_styles, scheduler })
    }

    /// Handles one notification batch of `pass`, given as `(index, is_intersecting)`
    /// pairs in browser order. Returns the indices that fired and must stop being observed.
    pub fn on_batch(&self, pass: Pass, batch: impl IntoIterator<Item = (usize, bool)>) -> Vec<usize> {
        let handle = self.clone();
        self.with_mut(|state| {
            let RevealState { fade_in, slide_up, scheduler, .. } = state;
            let track = match pass {
                Pass::FadeIn => fade_in,
                Pass::SlideUp => slide_up,
            };
            let entries: Vec<Intersection> = batch
                .into_iter()
                .filter_map(|(index, hit)| Some(Intersection::new(*track.slots.get(index)?, hit)))
                .collect();
            let triggers = track.tracker.on_batch(entries);

            for trigger in &triggers {
                let index = trigger.slot.index();
                match pass {
                    Pass::FadeIn => {
                        track.apply(pass, index, &[("animation", FADE_IN_ANIMATION.to_owned())]);
                    },
                    Pass::SlideUp => {
                        let handle = handle.clone();
                        let task = Box::new(move || handle.show(index));
                        if let Err(err) = scheduler.timeout(trigger.delay_ms, task) {
                            warn!(index, %err, "Failed to schedule slide-up");
                        }
                    },
                }
            }

            if !triggers.is_empty() {
                debug!(%pass, fired = triggers.len(), "Reveal triggered");
            }
            triggers.iter().map(|t| t.slot.index()).collect()
        })
    }

    #[must_use]
    pub fn phase(&self, pass: Pass, index: usize) -> Option<RevealPhase> {
        self.with(|state| {
            let track = state.track(pass);
            track.tracker.phase(*track.slots.get(index)?)
        })
    }

    #[must_use]
    pub fn triggered(&self, pass: Pass) -> usize {
        self.with(|state| state.track(pass).tracker.triggered_count())
    }

    fn show(&self, index: usize) {
        self.with(|state| state.slide_up.apply(Pass::SlideUp, index, &state.slide_styles.shown));
    }
}

impl RevealState {
    const fn track(&self, pass: Pass) -> &Track {
        match pass {
            Pass::FadeIn => &self.fade_in,
            Pass::SlideUp => &self.slide_up,
        }
    }
}
