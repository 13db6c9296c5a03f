use folio_kernel::KernelError;
use folio_theme::{PreferenceStore, ThemeView};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory `localStorage` shared between the test and the controller.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub items: Rc<RefCell<HashMap<String, String>>>,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), KernelError> {
        if self.fail_writes {
            return Err(KernelError::Unavailable { message: "quota".into(), context: None });
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Records what the controller rendered.
#[derive(Debug, Clone, Default)]
pub struct FakeView {
    pub dark: Rc<Cell<bool>>,
    pub icon: Rc<RefCell<Option<String>>>,
    pub has_icon: bool,
}

impl FakeView {
    pub fn with_icon() -> Self {
        Self { has_icon: true, ..Self::default() }
    }

    pub fn icon(&self) -> Option<String> {
        self.icon.borrow().clone()
    }
}

impl ThemeView for FakeView {
    fn set_dark(&self, dark: bool) -> Result<(), KernelError> {
        self.dark.set(dark);
        Ok(())
    }

    fn set_icon(&self, class: &str) {
        if self.has_icon {
            *self.icon.borrow_mut() = Some(class.to_owned());
        }
    }
}
