use std::borrow::Cow;

/// A specialized [`HtmlError`] enum of this crate.
#[trellis_derive::trellis_error]
pub enum HtmlError {
    /// No connected route template can represent the given parameters.
    #[error("No route matches{}: {message}", format_context(.context))]
    NoRoute { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
