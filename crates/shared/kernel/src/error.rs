use std::borrow::Cow;

/// A specialized [`KernelError`] enum of this crate.
#[folio_derive::folio_error]
pub enum KernelError {
    /// A DOM call threw; `message` carries the stringified JavaScript value.
    #[error("DOM error{}: {message}", format_context(.context))]
    Dom { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A browser global (`window`, `document`, `localStorage`) is not reachable.
    #[error("Browser API unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The embedded page configuration is not valid JSON for the target type.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal kernel error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
