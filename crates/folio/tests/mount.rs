use folio::domain::features::{ControllerSet, COUNTER, REVEAL, THEME};
use folio::domain::registry::MountOutcome;
use folio::prelude::{Controller, PageConfig};
use folio::{MountStep, mount_steps, outcome};
use folio_kernel::config::parse_config;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct Probe(&'static str);

impl Controller for Probe {
    fn name(&self) -> &'static str {
        self.0
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn steps(calls: &Rc<RefCell<Vec<&'static str>>>) -> Vec<MountStep> {
    let log = |name: &'static str| {
        let calls = Rc::clone(calls);
        move || calls.borrow_mut().push(name)
    };

    let theme = log(THEME);
    let reveal = log(REVEAL);
    let counter = log(COUNTER);
    vec![
        MountStep::new(ControllerSet::THEME, THEME, move |_| {
            theme();
            outcome::<_, String>(Ok(Some(Probe(THEME))))
        }),
        MountStep::new(ControllerSet::REVEAL, REVEAL, move |_| {
            reveal();
            outcome::<Probe, _>(Err("observer rejected rootMargin"))
        }),
        MountStep::new(ControllerSet::COUNTER, COUNTER, move |_| {
            counter();
            outcome::<Probe, String>(Ok(None))
        }),
    ]
}

#[test]
fn failure_does_not_stop_later_controllers() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let report = mount_steps(&PageConfig::default(), steps(&calls));

    assert_eq!(*calls.borrow(), vec![THEME, REVEAL, COUNTER]);
    assert_eq!(report.mounted(), vec![THEME]);
    assert_eq!(report.failed(), vec![REVEAL]);
    assert_eq!(report.inactive(), vec![COUNTER]);
    assert!(matches!(
        report.outcome(REVEAL),
        Some(MountOutcome::Failed(msg)) if msg == "observer rejected rootMargin"
    ));
    assert_eq!(report.summary(), "mounted [theme]; inactive [counter]; failed [reveal]");
    assert_eq!(report.handle::<Probe>().map(Controller::name), Some(THEME));
}

#[test]
fn disabled_controllers_are_not_mounted() {
    let config: PageConfig =
        parse_config(Some(r#"{ "controllers": ["theme", "counter"] }"#)).unwrap();
    let calls = Rc::new(RefCell::new(Vec::new()));

    let report = mount_steps(&config, steps(&calls));

    assert_eq!(*calls.borrow(), vec![THEME, COUNTER]);
    assert!(report.outcome(REVEAL).is_none());
    assert!(report.failed().is_empty());
}

#[test]
fn empty_set_mounts_nothing() {
    let mut config = PageConfig::default();
    config.controllers = ControllerSet::empty();
    let calls = Rc::new(RefCell::new(Vec::new()));

    let report = mount_steps(&config, steps(&calls));

    assert!(calls.borrow().is_empty());
    assert_eq!(report.summary(), "mounted []; inactive []; failed []");
}
