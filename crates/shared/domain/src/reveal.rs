//! One-shot visibility state machine.
//!
//! Every element watched by a visibility observer moves through
//! `Unobserved -> Observed -> Triggered` and never leaves `Triggered`. The tracker
//! only sees slot numbers and intersection flags, so tests drive it with synthetic
//! batches instead of a rendering engine.

/// Lifecycle of one watched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Unobserved,
    Observed,
    Triggered,
}

/// Index of an element registered with a [`RevealTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(usize);

impl Slot {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One entry of an intersection notification batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub slot: Slot,
    pub is_intersecting: bool,
}

impl Intersection {
    #[must_use]
    pub const fn new(slot: Slot, is_intersecting: bool) -> Self {
        Self { slot, is_intersecting }
    }
}

/// An element that fired: apply its effect after `delay_ms` and stop observing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub slot: Slot,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    phases: Vec<RevealPhase>,
    stagger_step_ms: u32,
}

impl RevealTracker {
    /// A tracker whose triggers all fire immediately.
    #[must_use]
    pub const fn new() -> Self {
        Self { phases: Vec::new(), stagger_step_ms: 0 }
    }

    /// A tracker that delays each trigger by `step_ms` times its position in the batch.
    #[must_use]
    pub const fn staggered(step_ms: u32) -> Self {
        Self { phases: Vec::new(), stagger_step_ms: step_ms }
    }

    /// Adds an element in the `Unobserved` phase.
    pub fn register(&mut self) -> Slot {
        self.phases.push(RevealPhase::Unobserved);
        Slot(self.phases.len() - 1)
    }

    /// Moves `slot` to `Observed`. Returns `false` for unknown slots or elements that
    /// were observed or triggered before.
    pub fn observe(&mut self, slot: Slot) -> bool {
        match self.phases.get_mut(slot.0) {
            Some(phase @ RevealPhase::Unobserved) => {
                *phase = RevealPhase::Observed;
                true
            },
            _ => false,
        }
    }

    #[must_use]
    pub fn phase(&self, slot: Slot) -> Option<RevealPhase> {
        self.phases.get(slot.0).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn triggered_count(&self) -> usize {
        self.phases.iter().filter(|p| **p == RevealPhase::Triggered).count()
    }

    /// Processes one notification batch.
    ///
    /// Every observed element that is intersecting becomes `Triggered`. The stagger
    /// index is the entry's position in the whole batch, non-intersecting entries
    /// included.
    pub fn on_batch(&mut self, batch: impl IntoIterator<Item = Intersection>) -> Vec<Trigger> {
        let mut triggers = Vec::new();

        for (index, entry) in batch.into_iter().enumerate() {
            if !entry.is_intersecting {
                continue;
            }
            let Some(phase) = self.phases.get_mut(entry.slot.0) else {
                continue;
            };
            if *phase != RevealPhase::Observed {
                continue;
            }
            *phase = RevealPhase::Triggered;

            let delay_ms = u32::try_from(index)
                .map_or(u32::MAX, |i| i.saturating_mul(self.stagger_step_ms));
            triggers.push(Trigger { slot: entry.slot, delay_ms });
        }

        triggers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed(tracker: &mut RevealTracker, n: usize) -> Vec<Slot> {
        (0..n)
            .map(|_| {
                let slot = tracker.register();
                assert!(tracker.observe(slot));
                slot
            })
            .collect()
    }

    #[test]
    fn test_register_starts_unobserved() {
        let mut tracker = RevealTracker::new();
        let slot = tracker.register();
        assert_eq!(tracker.phase(slot), Some(RevealPhase::Unobserved));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_observe_is_one_shot() {
        let mut tracker = RevealTracker::new();
        let slot = tracker.register();
        assert!(tracker.observe(slot));
        assert!(!tracker.observe(slot));
        assert_eq!(tracker.phase(slot), Some(RevealPhase::Observed));
    }

    #[test]
    fn test_unobserved_elements_never_trigger() {
        let mut tracker = RevealTracker::new();
        let slot = tracker.register();
        let triggers = tracker.on_batch([Intersection::new(slot, true)]);
        assert!(triggers.is_empty());
        assert_eq!(tracker.phase(slot), Some(RevealPhase::Unobserved));
    }

    #[test]
    fn test_triggered_never_retriggers() {
        let mut tracker = RevealTracker::new();
        let slots = observed(&mut tracker, 1);

        assert_eq!(tracker.on_batch([Intersection::new(slots[0], true)]).len(), 1);
        assert!(tracker.on_batch([Intersection::new(slots[0], true)]).is_empty());
        assert!(!tracker.observe(slots[0]));
        assert_eq!(tracker.phase(slots[0]), Some(RevealPhase::Triggered));
    }

    #[test]
    fn test_stagger_uses_batch_position() {
        let mut tracker = RevealTracker::staggered(100);
        let slots = observed(&mut tracker, 3);

        let triggers = tracker.on_batch([
            Intersection::new(slots[0], true),
            Intersection::new(slots[1], false),
            Intersection::new(slots[2], true),
        ]);

        assert_eq!(
            triggers,
            vec![
                Trigger { slot: slots[0], delay_ms: 0 },
                Trigger { slot: slots[2], delay_ms: 200 },
            ]
        );
        assert_eq!(tracker.phase(slots[1]), Some(RevealPhase::Observed));
    }

    #[test]
    fn test_unknown_slot_is_ignored() {
        let mut other = RevealTracker::new();
        let foreign = observed(&mut other, 4)[3];

        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe(foreign));
        assert!(tracker.on_batch([Intersection::new(foreign, true)]).is_empty());
    }
}
