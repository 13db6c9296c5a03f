use folio_domain::config::CounterConfig;
use folio_kernel::KernelError;
use folio_kernel::domain::registry::Controller;
use folio_kernel::testing::ManualScheduler;
use folio_counter::{Counter, CounterRun, Frame, StatView, target_of};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Stat texts plus every text ever written, per stat.
#[derive(Debug, Clone)]
struct FakeStats {
    texts: Rc<RefCell<Vec<String>>>,
    history: Rc<RefCell<Vec<Vec<String>>>>,
}

impl FakeStats {
    fn new(texts: &[&str]) -> Self {
        Self {
            texts: Rc::new(RefCell::new(texts.iter().map(|t| (*t).to_owned()).collect())),
            history: Rc::new(RefCell::new(vec![Vec::new(); texts.len()])),
        }
    }

    fn shown(&self, index: usize) -> String {
        self.texts.borrow()[index].clone()
    }
}

impl StatView for FakeStats {
    fn len(&self) -> usize {
        self.texts.borrow().len()
    }

    fn text(&self, index: usize) -> String {
        self.texts.borrow().get(index).cloned().unwrap_or_default()
    }

    fn set_text(&self, index: usize, text: &str) -> Result<(), KernelError> {
        let mut texts = self.texts.borrow_mut();
        let slot = texts
            .get_mut(index)
            .ok_or(KernelError::Internal { message: "index".into(), context: None })?;
        *slot = text.to_owned();
        self.history.borrow_mut()[index].push(text.to_owned());
        Ok(())
    }
}

fn counter() -> (Counter, ManualScheduler) {
    let clock = ManualScheduler::new();
    (Counter::start(Box::new(clock.clone()), &CounterConfig::default()), clock)
}

fn attached(texts: &[&str]) -> (Counter, ManualScheduler, FakeStats) {
    let (counter, clock) = counter();
    let stats = FakeStats::new(texts);
    assert!(counter.attach(Box::new(stats.clone())));
    (counter, clock, stats)
}

#[test]
fn counts_up_to_the_displayed_number() {
    let (counter, clock, stats) = attached(&["150", "50+", "12 years"]);

    assert!(counter.on_visibility(true));
    clock.run_until_idle(5_000);

    assert_eq!(stats.shown(0), "150+");
    assert_eq!(stats.shown(1), "50+");
    assert_eq!(stats.shown(2), "12+");
    assert_eq!(clock.pending(), 0);
    assert_eq!(counter.name(), "counter");
}

#[test]
fn finishes_in_about_the_configured_duration() {
    let (counter, clock, stats) = attached(&["150"]);
    counter.on_visibility(true);

    clock.advance(16);
    assert_eq!(stats.shown(0), "2+");

    clock.advance(900);
    assert_ne!(stats.shown(0), "150+");

    clock.advance(200);
    assert_eq!(stats.shown(0), "150+");
}

#[test]
fn intermediate_values_never_decrease_or_overshoot() {
    let (counter, clock, stats) = attached(&["150"]);
    counter.on_visibility(true);
    clock.run_until_idle(5_000);

    let history = stats.history.borrow();
    let values: Vec<i64> =
        history[0].iter().map(|t| t.trim_end_matches('+').parse().unwrap()).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "{values:?}");
    assert!(values.iter().all(|v| *v <= 150));
    assert_eq!(values.last(), Some(&150));
}

#[test]
fn animates_only_once() {
    let (counter, clock, stats) = attached(&["10"]);

    assert!(!counter.on_visibility(false));
    assert!(counter.on_visibility(true));
    assert!(!counter.on_visibility(true));
    clock.run_until_idle(5_000);
    assert!(counter.has_fired());

    let writes = stats.history.borrow()[0].len();
    counter.on_visibility(true);
    clock.run_until_idle(5_000);
    assert_eq!(stats.history.borrow()[0].len(), writes);
}

#[test]
fn non_numeric_stat_counts_to_zero() {
    let (counter, clock, stats) = attached(&["many"]);
    counter.on_visibility(true);
    clock.advance(16);

    assert_eq!(stats.shown(0), "0+");
    assert_eq!(clock.pending(), 0);
    assert_eq!(target_of("n/a"), 0);
}

#[test]
fn lookup_waits_for_the_start_delay() {
    let (counter, clock) = counter();
    let stats = FakeStats::new(&["5"]);

    let view = stats.clone();
    counter
        .defer(move |counter| {
            counter.attach(Box::new(view));
        })
        .unwrap();

    clock.advance(499);
    assert!(!counter.is_attached());
    assert!(!counter.on_visibility(true), "nothing to animate before the section is found");

    clock.advance(1);
    assert!(counter.is_attached());
    assert!(counter.on_visibility(true));
    clock.run_until_idle(5_000);
    assert_eq!(stats.shown(0), "5+");
}

#[test]
fn second_attach_is_refused() {
    let (counter, _clock, _stats) = attached(&["1"]);
    assert!(!counter.attach(Box::new(FakeStats::new(&["2"]))));
}

proptest! {
    #[test]
    fn runs_are_monotone_and_end_exactly(target in 0i64..100_000) {
        let frames: Vec<Frame> = CounterRun::new(target, 1000, 16).collect();

        prop_assert_eq!(frames.last().copied(), Some(Frame::Done(target)));
        prop_assert!(frames[..frames.len() - 1].iter().all(|f| matches!(f, Frame::Running(_))));
        prop_assert!(frames.windows(2).all(|w| w[0].value() <= w[1].value()));
        prop_assert!(frames.iter().all(|f| f.value() <= target));
        prop_assert!(frames.len() <= 64);
    }
}
