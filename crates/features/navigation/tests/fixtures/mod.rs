use folio_kernel::KernelError;
use folio_navigation::{MenuView, Navigation, Scroller};
use std::cell::RefCell;
use std::rc::Rc;

/// The DOM as the navigation controller sees it.
#[derive(Debug, Default)]
pub struct Page {
    pub menu_open: bool,
    pub hamburger_active: bool,
    pub aria_expanded: Option<String>,
    pub renders: usize,
    pub scrolled_to: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FakeMenu(pub Rc<RefCell<Page>>);

impl MenuView for FakeMenu {
    fn render(&self, open: bool) -> Result<(), KernelError> {
        let mut page = self.0.borrow_mut();
        page.menu_open = open;
        page.hamburger_active = open;
        page.aria_expanded = Some(open.to_string());
        page.renders += 1;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FakeScroller {
    pub page: Rc<RefCell<Page>>,
    pub ids: Vec<&'static str>,
}

impl Scroller for FakeScroller {
    fn scroll_to(&self, id: &str) -> bool {
        if !self.ids.contains(&id) {
            return false;
        }
        self.page.borrow_mut().scrolled_to.push(id.to_owned());
        true
    }
}

pub const SECTIONS: [&str; 4] = ["home", "about", "projects", "contact"];

pub fn navigation() -> (Navigation, Rc<RefCell<Page>>) {
    let page = Rc::new(RefCell::new(Page::default()));
    let scroller = FakeScroller { page: Rc::clone(&page), ids: SECTIONS.to_vec() };
    let nav = Navigation::start(
        Box::new(scroller),
        Some(Box::new(FakeMenu(Rc::clone(&page)))),
        768.0,
    );
    (nav, page)
}

pub fn links_only() -> (Navigation, Rc<RefCell<Page>>) {
    let page = Rc::new(RefCell::new(Page::default()));
    let scroller = FakeScroller { page: Rc::clone(&page), ids: SECTIONS.to_vec() };
    (Navigation::start(Box::new(scroller), None, 768.0), page)
}
