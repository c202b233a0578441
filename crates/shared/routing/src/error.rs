use std::borrow::Cow;

/// A specialized [`RoutingError`] enum of this crate.
#[trellis_derive::trellis_error]
pub enum RoutingError {
    /// Malformed route template (unclosed placeholder, empty name).
    #[error("Invalid route template{}: {message}", format_context(.context))]
    Template { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
