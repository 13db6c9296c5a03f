use crate::KernelError;
use crate::web::JsResultExt;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{Closure, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One entry of a notification batch, as an index into the observer's targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub index: usize,
    pub is_intersecting: bool,
}

/// An `IntersectionObserver` over a fixed list of targets.
///
/// Targets are addressed by their position in the list handed to [`VisibilityObserver::watch`].
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    targets: Rc<[Element]>,
}

impl VisibilityObserver {
    /// Creates the observer. Nothing is observed until [`VisibilityObserver::observe`].
    ///
    /// `on_batch` receives every notification batch in browser order.
    ///
    /// # Errors
    /// Returns [`KernelError::Dom`] if the browser rejects the options (e.g. a malformed root margin).
    pub fn watch(
        targets: Vec<Element>,
        threshold: f64,
        root_margin: &str,
        mut on_batch: impl FnMut(&Self, Vec<Visibility>) + 'static,
    ) -> Result<Self, KernelError> {
        let targets: Rc<[Element]> = targets.into();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
            let targets = Rc::clone(&targets);
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let this = Self { observer, targets: Rc::clone(&targets) };
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = entry.target();
                        let index = targets.iter().position(|t| *t == target)?;
                        Some(Visibility { index, is_intersecting: entry.is_intersecting() })
                    })
                    .collect();
                on_batch(&this, batch);
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .dom_context(format!("IntersectionObserver(rootMargin: {root_margin})"))?;
        callback.forget();

        Ok(Self { observer, targets })
    }

    #[must_use]
    pub fn target(&self, index: usize) -> Option<&Element> {
        self.targets.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn observe(&self, index: usize) {
        if let Some(target) = self.targets.get(index) {
            self.observer.observe(target);
        }
    }

    pub fn unobserve(&self, index: usize) {
        if let Some(target) = self.targets.get(index) {
            self.observer.unobserve(target);
        }
    }
}
