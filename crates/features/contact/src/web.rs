use crate::{
    ContactError, ContactForm, ERROR_BORDER_COLOR, ERROR_BOX_SHADOW, FieldKind, FormField,
    FormView, TOAST_STYLE,
};
use folio_domain::config::PageConfig;
use folio_domain::constants::{CONTACT_FORM_ID, FORM_FIELD_SELECTOR};
use folio_kernel::KernelError;
use folio_kernel::web::{self, BrowserScheduler, JsResultExt};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

#[derive(Debug, Clone)]
pub struct DomField {
    element: Element,
    kind: FieldKind,
}

impl DomField {
    #[must_use]
    pub fn new(element: Element) -> Self {
        let input_type = element.get_attribute("type").unwrap_or_default();
        let kind = FieldKind::classify(&element.tag_name(), &input_type);
        Self { element, kind }
    }
}

impl FormField for DomField {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn mark(&self, invalid: bool) -> Result<(), KernelError> {
        let (border, shadow) = if invalid { (ERROR_BORDER_COLOR, ERROR_BOX_SHADOW) } else { ("", "") };
        web::set_style(&self.element, "border-color", border)?;
        web::set_style(&self.element, "box-shadow", shadow)
    }
}

#[derive(Debug, Clone)]
pub struct DocumentForm {
    form: HtmlFormElement,
}

impl FormView for DocumentForm {
    fn reset(&self) -> Result<(), KernelError> {
        self.form.reset();
        Ok(())
    }

    fn show_toast(&self, message: &str) -> Result<Box<dyn FnOnce()>, KernelError> {
        let toast = web::document()?.create_element("div").dom_context("createElement(div)")?;
        toast.set_attribute("style", TOAST_STYLE).dom_context("toast.setAttribute(style)")?;
        toast.set_text_content(Some(message));
        web::body()?.append_child(&toast).dom_context("body.appendChild(toast)")?;
        Ok(Box::new(move || toast.remove()))
    }
}

/// Wires submit, blur and input handlers on `#contactForm`.
///
/// # Errors
/// Returns [`ContactError`] if `#contactForm` is not a `<form>` or a listener cannot be attached.
pub fn mount(config: &PageConfig) -> Result<Option<ContactForm>, ContactError> {
    let Some(element) = web::by_id(CONTACT_FORM_ID)? else {
        debug!("#{CONTACT_FORM_ID} not found; form validation disabled");
        return Ok(None);
    };
    let form = element
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| ContactError::from(format!("#{CONTACT_FORM_ID} is not a <form>")))?;

    let controls = web::query_all_in(&form, FORM_FIELD_SELECTOR)?;
    let fields = controls.iter().cloned().map(|el| Box::new(DomField::new(el)) as Box<dyn FormField>);

    let contact = ContactForm::start(
        fields.collect(),
        Box::new(DocumentForm { form: form.clone() }),
        Box::new(BrowserScheduler),
        &config.contact,
    );

    let handle = contact.clone();
    web::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let outcome = handle.submit();
        debug!(?outcome, "Contact form submitted");
    })?;

    for (index, control) in controls.iter().enumerate() {
        let handle = contact.clone();
        web::listen(control, "blur", move |_: Event| {
            handle.blur(index);
        })?;
        let handle = contact.clone();
        web::listen(control, "input", move |_: Event| handle.input(index))?;
    }

    Ok(Some(contact))
}
