//! The DOM contract: ids, selectors and class names the controllers rely on.

// Element ids
pub const DARK_TOGGLE_ID: &str = "darkToggle";
pub const HAMBURGER_ID: &str = "hamburger";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SCROLL_TOP_ID: &str = "scrollTopBtn";
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

// Selectors
pub const DARK_TOGGLE_ICON_SELECTOR: &str = "#darkToggle i";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const FORM_FIELD_SELECTOR: &str = "input, textarea";
pub const STATS_SELECTOR: &str = ".stats";
pub const STAT_VALUE_SELECTOR: &str = ".stat h4";
pub const FADE_IN_SELECTOR: &str = ".skill-category, .project-card, .testimonial-card, .info-card";
pub const SLIDE_UP_SELECTOR: &str = ".project-card, .skill-category, .testimonial-card";

// Classes
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const MENU_OPEN_CLASS: &str = "open";
pub const HAMBURGER_ACTIVE_CLASS: &str = "active";
pub const SCROLL_TOP_VISIBLE_CLASS: &str = "visible";

// Attributes
pub const ARIA_EXPANDED: &str = "aria-expanded";

// Storage
pub const THEME_STORAGE_KEY: &str = "theme";
