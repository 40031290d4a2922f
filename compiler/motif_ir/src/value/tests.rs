use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_strict_eq_scalars_by_value() {
    assert!(Value::Int(1).strict_eq(&Value::Int(1)));
    assert!(Value::string("one").strict_eq(&Value::string("one")));
    assert!(Value::Null.strict_eq(&Value::Null));
    assert!(Value::Int(1).strict_eq(&Value::Float(1.0)));
    assert!(Value::Float(-7.0).strict_eq(&Value::Int(-7)));
    assert!(!Value::Int(1).strict_eq(&Value::Float(1.5)));
    assert!(!Value::Bool(false).strict_eq(&Value::Null));
}

#[test]
fn test_strict_eq_nan_never_equal() {
    assert!(!Value::Float(f64::NAN).strict_eq(&Value::Float(f64::NAN)));
}

#[test]
fn test_strict_eq_containers_by_identity() {
    let a = Value::list(vec![Value::Int(1)]);
    let b = Value::list(vec![Value::Int(1)]);
    assert!(a.strict_eq(&a.clone()));
    assert!(!a.strict_eq(&b));
    // Content equality still holds.
    assert_eq!(a, b);
}

#[test]
fn test_dates_compare_by_instant() {
    let a = Value::date_rfc3339("2024-03-01T12:00:00Z").unwrap_or(Value::Null);
    let b = Value::date_rfc3339("2024-03-01T13:00:00+01:00").unwrap_or(Value::Null);
    assert!(a.as_date().is_some());
    assert!(a.strict_eq(&b));
}

#[test]
fn test_invalid_date_reports_input() {
    let err = Value::date_rfc3339("yesterday").err();
    assert!(matches!(err, Some(PatternError::InvalidDate { ref input, .. }) if input == "yesterday"));
}

#[test]
fn test_regex_structural_eq_by_source() {
    let (Ok(a), Ok(b)) = (Value::regex("^a+$"), Value::regex("^a+$")) else {
        panic!("regex should compile");
    };
    assert!(!a.strict_eq(&b));
    assert_eq!(a, b);
}

#[test]
fn test_invalid_regex() {
    assert!(matches!(
        Value::regex("(unclosed"),
        Err(PatternError::InvalidRegex { .. })
    ));
}

#[test]
fn test_record_keeps_insertion_order() {
    let r = Value::record([
        ("name", Value::string("Sarah")),
        ("tel", Value::string("01234")),
        ("address", Value::string("Nowhere")),
    ]);
    let keys: Vec<&str> = r.as_record().map(|r| r.keys().collect()).unwrap_or_default();
    assert_eq!(keys, vec!["name", "tel", "address"]);
}

#[test]
fn test_record_reinsert_keeps_position() {
    let mut r = RecordValue::new();
    r.insert("a", Value::Int(1));
    r.insert("b", Value::Int(2));
    let old = r.insert("a", Value::Int(3));
    assert_eq!(old, Some(Value::Int(1)));
    assert_eq!(r.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(r.get("a"), Some(&Value::Int(3)));
}

#[test]
fn test_record_eq_ignores_order() {
    let a = Value::record([("x", Value::Int(1)), ("y", Value::Int(2))]);
    let b = Value::record([("y", Value::Int(2)), ("x", Value::Int(1))]);
    assert_eq!(a, b);
}

#[test]
fn test_coerce_text() {
    assert_eq!(Value::Int(42).coerce_text().as_deref(), Some("42"));
    assert_eq!(Value::Bool(true).coerce_text().as_deref(), Some("true"));
    assert_eq!(Value::string("abc").coerce_text().as_deref(), Some("abc"));
    assert_eq!(Value::list(vec![]).coerce_text(), None);
}

#[test]
fn test_display() {
    let v = Value::list(vec![Value::Int(5), Value::string("+"), Value::Float(4.5)]);
    assert_eq!(v.to_string(), "[5, +, 4.5]");
}

#[test]
fn test_as_number_widens_int() {
    assert_eq!(Value::Int(3).as_number(), Some(3.0));
    assert_eq!(Value::Float(0.5).as_number(), Some(0.5));
    assert_eq!(Value::string("3").as_number(), None);
}

#[test]
fn test_strict_eq_int_float_edges() {
    assert!(!Value::Int(i64::MAX).strict_eq(&Value::Float(9.223_372_036_854_775_808e18)));
    assert!(Value::Int(i64::MIN).strict_eq(&Value::Float(-9.223_372_036_854_775_808e18)));
    assert!(!Value::Int(0).strict_eq(&Value::Float(f64::NAN)));
    assert!(!Value::Int(0).strict_eq(&Value::Float(f64::INFINITY)));
}
