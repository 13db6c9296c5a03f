use std::borrow::Cow;

/// A specialized [`ScrollTopError`] enum of this crate.
#[folio_derive::folio_error]
pub enum ScrollTopError {
    #[error("Scroll-top kernel error{}: {source}", format_context(.context))]
    Kernel { source: folio_kernel::KernelError, context: Option<Cow<'static, str>> },
    #[error("Internal scroll-top error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
