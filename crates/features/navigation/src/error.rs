use std::borrow::Cow;

/// A specialized [`NavigationError`] enum of this crate.
#[folio_derive::folio_error]
pub enum NavigationError {
    /// Browser glue failures (invalid selectors, listener registration).
    #[error("Navigation kernel error{}: {source}", format_context(.context))]
    Kernel { source: folio_kernel::KernelError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal navigation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
