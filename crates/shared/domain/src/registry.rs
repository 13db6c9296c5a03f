//! Controller registry.
//! A minimal type-erased container for the controllers the facade mounted, plus the
//! ones that stayed inactive or failed, so the entry point can log one summary line.

use std::any::Any;
use std::fmt::Debug;

/// Marker trait for a mounted controller handle.
///
/// Handles live on the browser main thread, so no `Send`/`Sync` bound.
pub trait Controller: Any + Debug {
    /// Name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// Outcome of mounting a single controller.
#[derive(Debug)]
pub enum MountOutcome {
    /// Listeners attached; the handle stays alive inside them.
    Mounted(Box<dyn Controller>),
    /// A required element is absent, so the feature is silently off.
    Inactive,
    /// Mounting failed; sibling controllers are unaffected.
    Failed(String),
}

/// Per-controller results of a page mount, in mount order.
#[derive(Debug, Default)]
pub struct MountReport {
    entries: Vec<(&'static str, MountOutcome)>,
}

impl MountReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, outcome: MountOutcome) {
        self.entries.push((name, outcome));
    }

    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&MountOutcome> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, outcome)| outcome)
    }

    /// Downcasts the first mounted handle of type `T`.
    #[must_use]
    pub fn handle<T: Controller>(&self) -> Option<&T> {
        self.entries.iter().find_map(|(_, outcome)| match outcome {
            MountOutcome::Mounted(handle) => handle.as_any().downcast_ref::<T>(),
            _ => None,
        })
    }

    #[must_use]
    pub fn mounted(&self) -> Vec<&'static str> {
        self.names_where(|o| matches!(o, MountOutcome::Mounted(_)))
    }

    #[must_use]
    pub fn inactive(&self) -> Vec<&'static str> {
        self.names_where(|o| matches!(o, MountOutcome::Inactive))
    }

    #[must_use]
    pub fn failed(&self) -> Vec<&'static str> {
        self.names_where(|o| matches!(o, MountOutcome::Failed(_)))
    }

    /// One-line summary, e.g. `mounted [theme, navigation]; inactive [counter]; failed []`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "mounted [{}]; inactive [{}]; failed [{}]",
            self.mounted().join(", "),
            self.inactive().join(", "),
            self.failed().join(", ")
        )
    }

    fn names_where(&self, pred: impl Fn(&MountOutcome) -> bool) -> Vec<&'static str> {
        self.entries.iter().filter(|(_, outcome)| pred(outcome)).map(|(name, _)| *name).collect()
    }
}
