#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the page infrastructure.
//! This crate removes the boilerplate shared by every controller crate: error enums
//! with context support, and the shared handle that event closures clone.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! folio-derive.workspace = true
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate,
//! but should be copied into consuming crates’ tests as needed.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// A high-level attribute macro for defining crate-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `#[source]` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping upstream errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`).
/// 4. Tuple or unit variants are rejected to keep error wiring explicit.
///
/// # Example
///
/// ```rust,ignore
/// use folio_derive::folio_error;
/// use std::borrow::Cow;
///
/// #[folio_error]
/// pub enum ThemeError {
///     #[error("Kernel error{}: {source}", format_context(.context))]
///     Kernel { source: folio_kernel::KernelError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal theme error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn mount() -> Result<(), ThemeError> {
///     folio_kernel::web::document().context("Resolving document")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a controller handle.
///
/// The annotated struct becomes the controller's state (`<Name>State`), and `<Name>`
/// becomes a cheap, clonable handle around `Rc<RefCell<<Name>State>>` that every event
/// closure of the controller shares:
/// 1. `new`, `with` and `with_mut` accessors on the handle.
/// 2. `folio_domain::registry::Controller` so the facade can report what mounted.
///
/// # Arguments
///
/// * `name = "..."` - Controller name used in logs and mount reports.
///   Defaults to the snake-cased struct name.
///
/// # Example
/// ```rust,ignore
/// #[folio_derive::controller(name = "theme")]
/// pub struct Theme {
///     pub current: Mode,
/// }
///
/// let theme = Theme::new(ThemeState { current: Mode::Light });
/// theme.with_mut(|state| state.current = Mode::Dark);
/// ```
#[proc_macro_attribute]
pub fn controller(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::controller::expand_controller(args.into(), input).into()
}
