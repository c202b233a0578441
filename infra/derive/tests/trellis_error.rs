use std::borrow::Cow;
use trellis_derive::trellis_error;

#[trellis_error]
pub enum DemoError {
    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Bad input{}: {message}", format_context(.context))]
    BadInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn fail_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn question_mark_converts_source_errors() {
    fn run() -> Result<(), DemoError> {
        fail_io()?;
        Ok(())
    }

    let err = run().expect_err("expected io failure");
    assert!(matches!(err, DemoError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "I/O failure: gone");
}

#[test]
fn context_attaches_to_source_results() {
    let err = fail_io().context("Reading manifest").expect_err("expected io failure");
    assert!(matches!(err, DemoError::Io { context: Some(_), .. }));
    assert_eq!(err.to_string(), "I/O failure (Reading manifest): gone");
}

#[test]
fn context_rewrites_existing_error() {
    let start: Result<(), DemoError> =
        Err(DemoError::BadInput { message: "empty name".into(), context: None });

    let err = start.context("Validating request").expect_err("expected error");
    assert_eq!(err.to_string(), "Bad input (Validating request): empty name");
}

#[test]
fn internal_fallback_from_strings() {
    let from_static: DemoError = "wedged".into();
    assert_eq!(from_static.to_string(), "Internal fault: wedged");

    let from_owned: DemoError = format!("code {}", 7).into();
    assert_eq!(from_owned.to_string(), "Internal fault: code 7");
}

#[test]
fn trellis_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/trellis_error_pass.rs");
}
