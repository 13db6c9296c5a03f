use folio_domain::config::PageConfig;
use folio_domain::features::ControllerSet;
use folio_domain::registry::{Controller, MountOutcome, MountReport};
use std::fmt::{self, Debug, Display};
use tracing::{debug, error, info};

/// One controller of the page: its enable flag, its name and how to mount it.
pub struct MountStep {
    pub flag: ControllerSet,
    pub name: &'static str,
    pub mount: Box<dyn Fn(&PageConfig) -> MountOutcome>,
}

impl Debug for MountStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountStep").field("flag", &self.flag).field("name", &self.name).finish_non_exhaustive()
    }
}

impl MountStep {
    pub fn new(
        flag: ControllerSet,
        name: &'static str,
        mount: impl Fn(&PageConfig) -> MountOutcome + 'static,
    ) -> Self {
        Self { flag, name, mount: Box::new(mount) }
    }
}

/// Folds a slice's mount result into an outcome.
pub fn outcome<T, E>(result: Result<Option<T>, E>) -> MountOutcome
where
    T: Controller,
    E: Display,
{
    match result {
        Ok(Some(handle)) => MountOutcome::Mounted(Box::new(handle)),
        Ok(None) => MountOutcome::Inactive,
        Err(err) => MountOutcome::Failed(err.to_string()),
    }
}

/// Runs every step enabled in `config.controllers`, in order. A failing step is
/// logged and recorded; the remaining steps still run.
#[must_use]
pub fn mount_steps(config: &PageConfig, steps: Vec<MountStep>) -> MountReport {
    let mut report = MountReport::new();

    for step in steps {
        if !config.controllers.contains(step.flag) {
            debug!(controller = step.name, "Controller disabled by configuration");
            continue;
        }

        let outcome = (step.mount)(config);
        match &outcome {
            MountOutcome::Mounted(_) => debug!(controller = step.name, "Controller mounted"),
            MountOutcome::Inactive => debug!(controller = step.name, "Controller inactive"),
            MountOutcome::Failed(err) => error!(controller = step.name, %err, "Failed to mount controller"),
        }
        report.record(step.name, outcome);
    }

    info!(summary = %report.summary(), "Page controllers mounted");
    report
}

/// Mounts every enabled controller against the live document.
#[cfg(feature = "web")]
#[must_use]
pub fn mount(config: &PageConfig) -> MountReport {
    use folio_domain::features::{CONTACT, COUNTER, NAVIGATION, REVEAL, SCROLL_TOP, THEME};

    let steps = vec![
        MountStep::new(ControllerSet::THEME, THEME, |c| outcome(folio_theme::web::mount(c))),
        MountStep::new(ControllerSet::NAVIGATION, NAVIGATION, |c| {
            outcome(folio_navigation::web::mount(c))
        }),
        MountStep::new(ControllerSet::REVEAL, REVEAL, |c| outcome(folio_reveal::web::mount(c))),
        MountStep::new(ControllerSet::CONTACT, CONTACT, |c| outcome(folio_contact::web::mount(c))),
        MountStep::new(ControllerSet::SCROLL_TOP, SCROLL_TOP, |c| {
            outcome(folio_scroll_top::web::mount(c))
        }),
        MountStep::new(ControllerSet::COUNTER, COUNTER, |c| outcome(folio_counter::web::mount(c))),
    ];
    mount_steps(config, steps)
}
