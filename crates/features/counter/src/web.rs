use crate::{Counter, CounterError, StatView};
use folio_domain::config::PageConfig;
use folio_domain::constants::{STATS_SELECTOR, STAT_VALUE_SELECTOR};
use folio_kernel::KernelError;
use folio_kernel::web::{self, BrowserScheduler, VisibilityObserver};
use tracing::{debug, error};
use web_sys::Element;

#[derive(Debug, Clone)]
pub struct StatElements {
    values: Vec<Element>,
}

impl StatView for StatElements {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn text(&self, index: usize) -> String {
        self.values.get(index).and_then(|value| value.text_content()).unwrap_or_default()
    }

    fn set_text(&self, index: usize, text: &str) -> Result<(), KernelError> {
        let value = self.values.get(index).ok_or_else(|| KernelError::Internal {
            message: format!("no stat at {index}").into(),
            context: None,
        })?;
        value.set_text_content(Some(text));
        Ok(())
    }
}

/// Schedules the stats lookup after the configured start delay.
///
/// A page without a stats section is only detected when the delay has passed; the
/// counter then stays idle.
///
/// # Errors
/// Returns [`CounterError`] if the start timer could not be registered.
pub fn mount(config: &PageConfig) -> Result<Option<Counter>, CounterError> {
    let counter = Counter::start(Box::new(BrowserScheduler), &config.counter);
    let threshold = config.counter.threshold;

    counter.defer(move |counter| {
        if let Err(err) = arm(counter, threshold) {
            error!(%err, "Failed to arm counters");
        }
    })?;

    Ok(Some(counter))
}

fn arm(counter: &Counter, threshold: f64) -> Result<(), CounterError> {
    let Some(section) = web::query(STATS_SELECTOR)? else {
        debug!("{STATS_SELECTOR} not found; counters disabled");
        return Ok(());
    };

    let values = web::query_all_in(&section, STAT_VALUE_SELECTOR)?;
    counter.attach(Box::new(StatElements { values }));

    let handle = counter.clone();
    let observer =
        VisibilityObserver::watch(vec![section], threshold, "0px", move |observer, batch| {
            for entry in batch {
                if handle.on_visibility(entry.is_intersecting) {
                    observer.unobserve(entry.index);
                }
            }
        })?;
    observer.observe(0);
    Ok(())
}
