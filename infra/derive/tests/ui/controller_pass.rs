use folio_kernel::domain::registry::Controller;

#[folio_derive::controller(name = "demo")]
pub struct Demo {
    pub clicks: u32,
}

#[folio_derive::controller]
pub struct ScrollTop {
    pub visible: bool,
}

fn main() {
    let demo = Demo::new(DemoState { clicks: 0 });
    let shared = demo.clone();
    shared.with_mut(|state| state.clicks += 1);
    assert_eq!(demo.with(|state| state.clicks), 1);
    assert_eq!(demo.name(), "demo");

    let scroll = ScrollTop::new(ScrollTopState { visible: false });
    assert_eq!(scroll.name(), "scroll_top");
    assert!(scroll.as_any().downcast_ref::<ScrollTop>().is_some());
}
