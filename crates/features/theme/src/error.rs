use std::borrow::Cow;

/// A specialized [`ThemeError`] enum of this crate.
#[folio_derive::folio_error]
pub enum ThemeError {
    /// Browser glue failures (missing `<body>`, DOM exceptions).
    #[error("Theme kernel error{}: {source}", format_context(.context))]
    Kernel { source: folio_kernel::KernelError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal theme error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
