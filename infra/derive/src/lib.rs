#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace infrastructure. Currently this
//! crate ships a single attribute, [`macro@trellis_error`], which turns a plain
//! enum into the workspace-standard error type.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining domain-specific error enums.
///
/// The macro removes the boilerplate around the workspace error convention:
/// named-field variants with a `message`/`source` plus an optional
/// `context: Option<Cow<'static, str>>` field, rendered through `thiserror`.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` on the annotated enum.
/// * A companion `<Name>Ext` trait adding `.context(...)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every variant that
///   wraps an upstream error.
/// * `From<Source>` impls for variants with a `source` field, enabling `?`.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is
///   present, for quick fallback errors.
/// * A module-level `format_context` helper used by the `#[error(...)]`
///   format strings. Because of it, define at most one error enum per module.
///
/// # Requirements
///
/// 1. The attribute must be applied to an enum.
/// 2. All variants use named fields; tuple and unit variants are rejected to
///    keep error wiring explicit.
/// 3. Variants wrapping an upstream error carry a `source: T` field (or a
///    field marked `#[source]`/`#[from]`) and a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
/// use trellis_derive::trellis_error;
///
/// #[trellis_error]
/// pub enum StoreError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn open() -> Result<Vec<u8>, StoreError> {
///     std::fs::read("store.bin").context("Opening store")
/// }
/// ```
#[proc_macro_attribute]
pub fn trellis_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
