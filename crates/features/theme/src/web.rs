use crate::{PreferenceStore, Theme, ThemeError, ThemeView};
use folio_domain::config::PageConfig;
use folio_domain::constants::{DARK_MODE_CLASS, DARK_TOGGLE_ICON_SELECTOR, DARK_TOGGLE_ID};
use folio_kernel::KernelError;
use folio_kernel::web::{self, JsResultExt};
use tracing::{debug, warn};
use web_sys::{Element, HtmlElement, MouseEvent, Storage};

/// `window.localStorage`; reads degrade to "absent" when storage is blocked.
#[derive(Debug)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open() -> Self {
        let storage = web::window().ok().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), KernelError> {
        let Some(storage) = &self.storage else {
            return Err(KernelError::Unavailable { message: "localStorage".into(), context: None });
        };
        storage.set_item(key, value).dom_context(format!("localStorage.setItem({key})"))
    }
}

/// `<body class="dark-mode">` plus the `#darkToggle i` icon, when present.
#[derive(Debug)]
pub struct DocumentTheme {
    body: HtmlElement,
    icon: Option<Element>,
}

impl DocumentTheme {
    /// # Errors
    /// Returns [`KernelError`] when the document has no body.
    pub fn locate() -> Result<Self, KernelError> {
        Ok(Self { body: web::body()?, icon: web::query(DARK_TOGGLE_ICON_SELECTOR)? })
    }
}

impl ThemeView for DocumentTheme {
    fn set_dark(&self, dark: bool) -> Result<(), KernelError> {
        let classes = self.body.class_list();
        if dark {
            classes.add_1(DARK_MODE_CLASS).dom_context("body.classList.add")
        } else {
            classes.remove_1(DARK_MODE_CLASS).dom_context("body.classList.remove")
        }
    }

    fn set_icon(&self, class: &str) {
        if let Some(icon) = &self.icon {
            icon.set_class_name(class);
        }
    }
}

/// Restores the stored theme and wires `#darkToggle`.
///
/// The stored theme is applied even when the toggle control is missing.
///
/// # Errors
/// Returns [`ThemeError`] if the document is unavailable or the listener cannot be attached.
pub fn mount(config: &PageConfig) -> Result<Option<Theme>, ThemeError> {
    let view = DocumentTheme::locate()?;
    let theme = Theme::start(
        Box::new(LocalStorage::open()),
        Box::new(view),
        config.theme.storage_key.clone(),
    );

    match web::by_id(DARK_TOGGLE_ID)? {
        Some(toggle) => {
            let handle = theme.clone();
            web::listen(&toggle, "click", move |_: MouseEvent| {
                let mode = handle.toggle();
                debug!(%mode, "Theme toggled");
            })?;
        },
        None => debug!("#{DARK_TOGGLE_ID} not found; theme toggle disabled"),
    }

    Ok(Some(theme))
}
