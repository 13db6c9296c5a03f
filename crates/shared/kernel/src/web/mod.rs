//! Browser glue over `web-sys`.
//!
//! Every helper here is a one-liner around a DOM call that turns JavaScript exceptions
//! into [`KernelError`]s. Listener and observer closures are leaked into the JS heap:
//! the page never unmounts its controllers.

mod observer;
mod timer;

pub use observer::{Visibility, VisibilityObserver};
pub use timer::BrowserScheduler;

use crate::KernelError;
use std::borrow::Cow;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{Closure, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

/// Best-effort text of a thrown JavaScript value.
#[must_use]
pub fn js_message(value: &JsValue) -> Cow<'static, str> {
    if let Some(text) = value.as_string() {
        return text.into();
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message()).into();
    }
    format!("{value:?}").into()
}

/// Converts `Result<T, JsValue>` into a kernel result with context.
pub trait JsResultExt<T> {
    /// # Errors
    /// Returns [`KernelError::Dom`] carrying the JavaScript message and `context`.
    fn dom_context(self, context: impl Into<Cow<'static, str>>) -> Result<T, KernelError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn dom_context(self, context: impl Into<Cow<'static, str>>) -> Result<T, KernelError> {
        self.map_err(|value| KernelError::Dom {
            message: js_message(&value),
            context: Some(context.into()),
        })
    }
}

/// # Errors
/// Returns [`KernelError::Unavailable`] outside a browser window (e.g. in a worker).
pub fn window() -> Result<Window, KernelError> {
    web_sys::window()
        .ok_or(KernelError::Unavailable { message: "window".into(), context: None })
}

/// # Errors
/// Returns [`KernelError::Unavailable`] when there is no window or document.
pub fn document() -> Result<Document, KernelError> {
    window()?
        .document()
        .ok_or(KernelError::Unavailable { message: "document".into(), context: None })
}

/// # Errors
/// Returns [`KernelError::Unavailable`] when the document has no `<body>` yet.
pub fn body() -> Result<HtmlElement, KernelError> {
    document()?.body().ok_or(KernelError::Unavailable { message: "body".into(), context: None })
}

/// # Errors
/// Returns [`KernelError`] when the document is unavailable.
pub fn by_id(id: &str) -> Result<Option<Element>, KernelError> {
    Ok(document()?.get_element_by_id(id))
}

/// # Errors
/// Returns [`KernelError::Dom`] for an invalid selector.
pub fn query(selector: &str) -> Result<Option<Element>, KernelError> {
    document()?.query_selector(selector).dom_context(format!("querySelector({selector})"))
}

/// # Errors
/// Returns [`KernelError::Dom`] for an invalid selector.
pub fn query_all(selector: &str) -> Result<Vec<Element>, KernelError> {
    let list =
        document()?.query_selector_all(selector).dom_context(format!("querySelectorAll({selector})"))?;
    Ok(elements(&list))
}

/// Like [`query_all`], scoped to the descendants of `root`.
///
/// # Errors
/// Returns [`KernelError::Dom`] for an invalid selector.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, KernelError> {
    let list = root.query_selector_all(selector).dom_context(format!("querySelectorAll({selector})"))?;
    Ok(elements(&list))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length()).filter_map(|i| list.get(i)?.dyn_into::<Element>().ok()).collect()
}

/// Attaches `handler` to `event` on `target` for the lifetime of the page.
///
/// Events that do not cast to `E` are ignored.
///
/// # Errors
/// Returns [`KernelError::Dom`] if the listener could not be registered.
pub fn listen<E>(
    target: &EventTarget,
    event: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> Result<(), KernelError>
where
    E: JsCast + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |raw: web_sys::Event| {
        if let Ok(event) = raw.dyn_into::<E>() {
            handler(event);
        }
    });
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .dom_context(format!("addEventListener({event})"))?;
    closure.forget();
    Ok(())
}

/// Sets one inline style property; an empty `value` removes it.
///
/// # Errors
/// Returns [`KernelError::Dom`] if `element` is not an `HTMLElement` or the style rejects the value.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), KernelError> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Err(KernelError::Dom {
            message: format!("<{}> has no inline style", element.tag_name()).into(),
            context: None,
        });
    };
    let style = html.style();
    if value.is_empty() {
        style.remove_property(property).dom_context(format!("style.{property}"))?;
    } else {
        style.set_property(property, value).dom_context(format!("style.{property}"))?;
    }
    Ok(())
}

/// Text of the embedded config block, if the page has one.
///
/// # Errors
/// Returns [`KernelError`] when the document is unavailable.
pub fn config_text(id: &str) -> Result<Option<String>, KernelError> {
    Ok(by_id(id)?.and_then(|el| el.text_content()))
}

/// Appends a `<style>` element with `css` to `<head>`.
///
/// # Errors
/// Returns [`KernelError`] when the document has no head or the append fails.
pub fn inject_stylesheet(css: &str) -> Result<(), KernelError> {
    let document = document()?;
    let head =
        document.head().ok_or(KernelError::Unavailable { message: "head".into(), context: None })?;
    let style = document.create_element("style").dom_context("createElement(style)")?;
    style.set_text_content(Some(css));
    head.append_child(&style).dom_context("appendChild(style)")?;
    Ok(())
}
