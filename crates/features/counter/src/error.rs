use std::borrow::Cow;

/// A specialized [`CounterError`] enum of this crate.
#[folio_derive::folio_error]
pub enum CounterError {
    #[error("Counter kernel error{}: {source}", format_context(.context))]
    Kernel { source: folio_kernel::KernelError, context: Option<Cow<'static, str>> },
    #[error("Internal counter error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
