use std::borrow::Cow;

/// A specialized [`RevealError`] enum of this crate.
#[folio_derive::folio_error]
pub enum RevealError {
    /// Browser glue failures (invalid selectors, rejected observer options).
    #[error("Reveal kernel error{}: {source}", format_context(.context))]
    Kernel { source: folio_kernel::KernelError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal reveal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
