use folio_contact::{ContactForm, FieldKind, FormField, FormView};
use folio_domain::config::ContactConfig;
use folio_kernel::KernelError;
use folio_kernel::testing::ManualScheduler;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Control {
    pub value: String,
    pub error_styled: bool,
}

#[derive(Debug, Clone)]
pub struct FakeField {
    pub kind: FieldKind,
    pub control: Rc<RefCell<Control>>,
}

impl FormField for FakeField {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn value(&self) -> String {
        self.control.borrow().value.clone()
    }

    fn mark(&self, invalid: bool) -> Result<(), KernelError> {
        self.control.borrow_mut().error_styled = invalid;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Surface {
    pub resets: usize,
    pub toasts: Vec<String>,
    pub shown: usize,
}

#[derive(Debug, Clone)]
pub struct FakeForm {
    pub surface: Rc<RefCell<Surface>>,
    pub controls: Vec<Rc<RefCell<Control>>>,
}

impl FormView for FakeForm {
    fn reset(&self) -> Result<(), KernelError> {
        for control in &self.controls {
            control.borrow_mut().value.clear();
        }
        self.surface.borrow_mut().resets += 1;
        Ok(())
    }

    fn show_toast(&self, message: &str) -> Result<Box<dyn FnOnce()>, KernelError> {
        let mut surface = self.surface.borrow_mut();
        surface.toasts.push(message.to_owned());
        surface.shown += 1;
        let surface = Rc::clone(&self.surface);
        Ok(Box::new(move || {
            surface.borrow_mut().toasts.pop();
        }))
    }
}

/// The page form: name, email, subject and message.
pub struct Harness {
    pub form: ContactForm,
    pub controls: Vec<Rc<RefCell<Control>>>,
    pub surface: Rc<RefCell<Surface>>,
    pub clock: ManualScheduler,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_kinds(&[FieldKind::Text, FieldKind::Email, FieldKind::Text, FieldKind::Message])
    }

    pub fn with_kinds(kinds: &[FieldKind]) -> Self {
        let controls: Vec<_> =
            kinds.iter().map(|_| Rc::new(RefCell::new(Control::default()))).collect();
        let fields = kinds
            .iter()
            .zip(&controls)
            .map(|(kind, control)| {
                Box::new(FakeField { kind: *kind, control: Rc::clone(control) }) as Box<dyn FormField>
            })
            .collect();
        let surface = Rc::new(RefCell::new(Surface::default()));
        let clock = ManualScheduler::new();
        let form = ContactForm::start(
            fields,
            Box::new(FakeForm { surface: Rc::clone(&surface), controls: controls.clone() }),
            Box::new(clock.clone()),
            &ContactConfig::default(),
        );
        Self { form, controls, surface, clock }
    }

    pub fn fill(&self, values: &[&str]) {
        for (control, value) in self.controls.iter().zip(values) {
            control.borrow_mut().value = (*value).to_owned();
        }
    }

    pub fn styled(&self) -> Vec<usize> {
        self.controls
            .iter()
            .enumerate()
            .filter(|(_, c)| c.borrow().error_styled)
            .map(|(i, _)| i)
            .collect()
    }
}
