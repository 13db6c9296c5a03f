use crate::{ScrollTop, ScrollTopError, ScrollTopView};
use folio_domain::config::PageConfig;
use folio_domain::constants::SCROLL_TOP_ID;
use folio_kernel::KernelError;
use folio_kernel::web::{self, JsResultExt};
use tracing::debug;
use web_sys::{Element, Event, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

#[derive(Debug, Clone)]
pub struct DocumentButton {
    button: Element,
    window: Window,
    visible_class: String,
}

impl ScrollTopView for DocumentButton {
    fn set_visible(&self, visible: bool) -> Result<(), KernelError> {
        self.button
            .class_list()
            .toggle_with_force(&self.visible_class, visible)
            .map(drop)
            .dom_context("scrollTopBtn.classList.toggle")
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// # Errors
/// Returns [`ScrollTopError`] if a listener cannot be attached.
pub fn mount(config: &PageConfig) -> Result<Option<ScrollTop>, ScrollTopError> {
    let Some(button) = web::by_id(SCROLL_TOP_ID)? else {
        debug!("#{SCROLL_TOP_ID} not found; scroll-to-top disabled");
        return Ok(None);
    };
    let window = web::window()?;

    let view = DocumentButton {
        button: button.clone(),
        window: window.clone(),
        visible_class: config.scroll_top.visible_class.clone(),
    };
    let scroll_top = ScrollTop::start(Box::new(view), config.scroll_top.threshold);

    let handle = scroll_top.clone();
    let viewport = window.clone();
    web::listen(&window, "scroll", move |_: Event| {
        if let Ok(offset) = viewport.scroll_y() {
            handle.on_scroll(offset);
        }
    })?;

    let handle = scroll_top.clone();
    web::listen(&button, "click", move |_: MouseEvent| handle.on_click())?;

    Ok(Some(scroll_top))
}
