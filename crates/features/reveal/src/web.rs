use crate::{Pass, Reveal, RevealError, Stage};
use folio_domain::config::{ObserverConfig, PageConfig};
use folio_kernel::KernelError;
use folio_kernel::web::{self, BrowserScheduler, VisibilityObserver};
use tracing::debug;
use web_sys::Element;

/// Elements matched by one pass selector.
#[derive(Debug, Clone)]
pub struct ElementStage {
    targets: Vec<Element>,
}

impl Stage for ElementStage {
    fn len(&self) -> usize {
        self.targets.len()
    }

    fn style(&self, index: usize, property: &str, value: &str) -> Result<(), KernelError> {
        let target = self.targets.get(index).ok_or_else(|| KernelError::Internal {
            message: format!("no reveal target at {index}").into(),
            context: None,
        })?;
        web::set_style(target, property, value)
    }
}

/// Arms both passes over the configured selectors.
///
/// # Errors
/// Returns [`RevealError`] if a selector or the observer options are rejected.
pub fn mount(config: &PageConfig) -> Result<Option<Reveal>, RevealError> {
    let options = &config.reveal;
    let fade_in = web::query_all(&options.fade_in.selector)?;
    let slide_up = web::query_all(&options.slide_up.selector)?;

    if fade_in.is_empty() && slide_up.is_empty() {
        debug!("No reveal targets found");
        return Ok(None);
    }

    let reveal = Reveal::start(
        Box::new(ElementStage { targets: fade_in.clone() }),
        Box::new(ElementStage { targets: slide_up.clone() }),
        Box::new(BrowserScheduler),
        options,
    );

    watch(&reveal, Pass::FadeIn, fade_in, &options.fade_in)?;
    watch(&reveal, Pass::SlideUp, slide_up, &options.slide_up)?;

    Ok(Some(reveal))
}

fn watch(
    reveal: &Reveal,
    pass: Pass,
    targets: Vec<Element>,
    options: &ObserverConfig,
) -> Result<(), RevealError> {
    if targets.is_empty() {
        debug!(%pass, selector = %options.selector, "Pass has no targets");
        return Ok(());
    }

    let handle = reveal.clone();
    let observer = VisibilityObserver::watch(
        targets,
        options.threshold,
        &options.root_margin,
        move |observer, batch| {
            let entries = batch.into_iter().map(|entry| (entry.index, entry.is_intersecting));
            for index in handle.on_batch(pass, entries) {
                observer.unobserve(index);
            }
        },
    )?;

    for index in 0..observer.len() {
        observer.observe(index);
    }
    Ok(())
}
