use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, DemoError> {
    raw.parse::<i64>().context("Parsing counter target")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (Parsing counter target)"));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");
}
