use crate::{MenuView, Navigation, NavigationError, Scroller};
use folio_domain::config::PageConfig;
use folio_domain::constants::{
    ARIA_EXPANDED, HAMBURGER_ACTIVE_CLASS, HAMBURGER_ID, MENU_OPEN_CLASS, NAV_LINK_SELECTOR,
    NAV_MENU_SELECTOR,
};
use folio_kernel::KernelError;
use folio_kernel::web::{self, JsResultExt};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, KeyboardEvent, MouseEvent, Node, ScrollBehavior, ScrollIntoViewOptions,
};

/// `.nav-menu` and `#hamburger`.
#[derive(Debug, Clone)]
pub struct DocumentMenu {
    menu: Element,
    hamburger: Element,
}

impl DocumentMenu {
    /// `None` unless both elements exist.
    ///
    /// # Errors
    /// Returns [`KernelError`] when the document is unavailable.
    pub fn locate() -> Result<Option<Self>, KernelError> {
        let menu = web::query(NAV_MENU_SELECTOR)?;
        let hamburger = web::by_id(HAMBURGER_ID)?;
        Ok(menu.zip(hamburger).map(|(menu, hamburger)| Self { menu, hamburger }))
    }

    fn contains(&self, node: Option<&Node>) -> bool {
        self.menu.contains(node) || self.hamburger.contains(node)
    }
}

impl MenuView for DocumentMenu {
    fn render(&self, open: bool) -> Result<(), KernelError> {
        self.menu
            .class_list()
            .toggle_with_force(MENU_OPEN_CLASS, open)
            .dom_context("nav-menu.classList.toggle")?;
        self.hamburger
            .class_list()
            .toggle_with_force(HAMBURGER_ACTIVE_CLASS, open)
            .dom_context("hamburger.classList.toggle")?;
        self.hamburger
            .set_attribute(ARIA_EXPANDED, if open { "true" } else { "false" })
            .dom_context("hamburger.setAttribute(aria-expanded)")
    }
}

/// `element.scrollIntoView({ behavior: "smooth" })`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothScroll;

impl Scroller for SmoothScroll {
    fn scroll_to(&self, id: &str) -> bool {
        let Ok(Some(target)) = web::by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Wires `.nav-link` clicks and, when the page has one, the mobile menu.
///
/// Returns `None` when the page has neither links nor a menu.
///
/// # Errors
/// Returns [`NavigationError`] if a selector is rejected or a listener cannot be attached.
pub fn mount(config: &PageConfig) -> Result<Option<Navigation>, NavigationError> {
    let links = web::query_all(NAV_LINK_SELECTOR)?;
    let menu = DocumentMenu::locate()?;

    if links.is_empty() && menu.is_none() {
        debug!("No navigation links or menu found");
        return Ok(None);
    }

    let navigation = Navigation::start(
        Box::new(SmoothScroll),
        menu.clone().map(|menu| Box::new(menu) as Box<dyn MenuView>),
        config.navigation.breakpoint,
    );

    for link in links {
        let handle = navigation.clone();
        let anchor = link.clone();
        web::listen(&link, "click", move |event: MouseEvent| {
            event.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_default();
            handle.follow(&href);
        })?;
    }

    match menu {
        Some(menu) => wire_menu(&navigation, menu)?,
        None => debug!("#{HAMBURGER_ID} or {NAV_MENU_SELECTOR} not found; mobile menu disabled"),
    }

    Ok(Some(navigation))
}

fn wire_menu(navigation: &Navigation, menu: DocumentMenu) -> Result<(), NavigationError> {
    let handle = navigation.clone();
    web::listen(&menu.hamburger, "click", move |_: MouseEvent| {
        let open = handle.toggle();
        debug!(open, "Menu toggled");
    })?;

    let document = web::document()?;
    let handle = navigation.clone();
    web::listen(&document, "click", move |event: MouseEvent| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        handle.on_document_click(menu.contains(target.as_ref()));
    })?;

    let handle = navigation.clone();
    web::listen(&document, "keydown", move |event: KeyboardEvent| handle.on_key(&event.key()))?;

    let window = web::window()?;
    let handle = navigation.clone();
    let viewport = window.clone();
    web::listen(&window, "resize", move |_: Event| {
        if let Some(width) = viewport.inner_width().ok().and_then(|w| w.as_f64()) {
            handle.on_resize(width);
        }
    })?;

    Ok(())
}
