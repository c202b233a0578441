use std::borrow::Cow;

/// A specialized [`SourceError`] enum of this crate.
#[trellis_derive::trellis_error]
pub enum SourceError {
    /// The source is disconnected and auto-connect is disabled.
    #[error("Not connected{}: {message}", format_context(.context))]
    NotConnected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The adapter does not implement the requested capability.
    #[error("Unsupported operation{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The backend rejected or failed an operation.
    #[error("Backend failure{}: {message}", format_context(.context))]
    Backend { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Unexpected internal error.
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
