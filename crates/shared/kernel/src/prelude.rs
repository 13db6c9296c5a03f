pub use crate::scheduler::{Scheduler, Tick};
pub use crate::{KernelError, KernelErrorExt};
pub use folio_domain::config::PageConfig;
pub use folio_domain::registry::Controller;
#[cfg(feature = "web")]
pub use crate::web::JsResultExt;
