use std::borrow::Cow;

/// A specialized [`ContactError`] enum of this crate.
#[folio_derive::folio_error]
pub enum ContactError {
    /// Browser glue failures (missing form controls, listener registration).
    #[error("Contact kernel error{}: {source}", format_context(.context))]
    Kernel { source: folio_kernel::KernelError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal contact error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
