use super::*;
use crate::compile;
use motif_ir::Pattern;
use pretty_assertions::assert_eq;

fn token_record() -> Value {
    Value::record([("type", Value::string("number")), ("value", Value::Int(5))])
}

#[test]
fn test_failure_is_comparable() {
    let m = compile(|_| Pattern::from(1i64));
    assert_eq!(m.matches(&Value::Int(2)), MatchResult::Failure);
    assert!(m.matches(&Value::Int(2)).bindings().is_none());
    assert_eq!(m.matches(&Value::Int(2)).get("anything"), None);
}

#[test]
fn test_get_by_name_and_token() {
    let m = compile(|cx| Pattern::record([("value", cx.var("n"))]));
    let result = m.matches(&token_record());
    let Some(b) = result.bindings() else {
        panic!("expected match");
    };
    let token = m.tokens().lookup("n");
    assert_eq!(b.get("n"), Some(&Value::Int(5)));
    assert_eq!(token.and_then(|t| b.get_token(t)), Some(&Value::Int(5)));
    assert_eq!(b.get("unknown"), None);
    assert!(b.contains("n"));
}

#[test]
fn test_typed_accessors() {
    let m = compile(|cx| Pattern::record([("type", cx.var("kind")), ("value", cx.var("n"))]));
    let Some(b) = m.matches(&token_record()).into_bindings() else {
        panic!("expected match");
    };
    assert_eq!(b.get_int("n"), Ok(5));
    assert_eq!(b.get_number("n"), Ok(5.0));
    assert_eq!(b.get_str("kind"), Ok("number"));
    assert_eq!(
        b.get_str("n"),
        Err(BindingError::TypeMismatch {
            name: "n".to_owned(),
            expected: "str",
            found: "int",
        })
    );
    assert_eq!(
        b.get_int("missing"),
        Err(BindingError::Unbound {
            name: "missing".to_owned()
        })
    );
}

#[test]
fn test_binding_error_messages() {
    let err = BindingError::TypeMismatch {
        name: "first".to_owned(),
        expected: "number",
        found: "str",
    };
    assert_eq!(
        err.to_string(),
        "variable `first` is bound to a str, expected number"
    );
}

#[test]
fn test_to_record_excludes_rest() {
    let m = compile(|cx| Pattern::seq([cx.var("a"), cx.var("b"), cx.rest()]));
    let subject = Value::list(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let Some(b) = m.matches(&subject).into_bindings() else {
        panic!("expected match");
    };
    assert_eq!(b.len(), 3);
    let record = b.to_record();
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(b.rest(), Some(&Value::list(vec![Value::Int(3)])));
}

#[test]
fn test_debug_uses_names() {
    let m = compile(|cx| cx.var("answer"));
    let result = m.matches(&Value::Int(42));
    assert_eq!(format!("{result:?}"), "Matched({\"answer\": Int(42)})");
}
