use folio_kernel::KernelError;
use folio_reveal::Stage;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub type Styles = BTreeMap<String, String>;

/// Inline styles of `len` cards.
#[derive(Debug, Clone)]
pub struct FakeStage {
    pub cards: Rc<RefCell<Vec<Styles>>>,
    pub writes: Rc<RefCell<Vec<(usize, String)>>>,
}

impl FakeStage {
    pub fn new(len: usize) -> Self {
        Self {
            cards: Rc::new(RefCell::new(vec![Styles::new(); len])),
            writes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn style_of(&self, index: usize, property: &str) -> Option<String> {
        self.cards.borrow()[index].get(property).cloned()
    }

    /// How often `property` was written on `index`.
    pub fn writes_of(&self, index: usize, property: &str) -> usize {
        self.writes.borrow().iter().filter(|(i, p)| *i == index && p == property).count()
    }
}

impl Stage for FakeStage {
    fn len(&self) -> usize {
        self.cards.borrow().len()
    }

    fn style(&self, index: usize, property: &str, value: &str) -> Result<(), KernelError> {
        let mut cards = self.cards.borrow_mut();
        let card = cards
            .get_mut(index)
            .ok_or(KernelError::Internal { message: "index".into(), context: None })?;
        card.insert(property.to_owned(), value.to_owned());
        self.writes.borrow_mut().push((index, property.to_owned()));
        Ok(())
    }
}
