use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_same_name_same_token() {
    let mut cx = PatternContext::default();
    let a = cx.variable("x");
    let b = cx.variable("x");
    let c = cx.variable("y");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_builder_runs_once_and_table_is_kept() {
    let mut calls = 0;
    let m = compile(|cx| {
        calls += 1;
        Pattern::seq([cx.var("first"), cx.var("second"), cx.var("first")])
    });
    assert_eq!(calls, 1);
    assert_eq!(m.tokens().len(), 2);
    assert!(m.tokens().lookup("second").is_some());
}

#[test]
fn test_rest_constant_is_shared() {
    let m = compile(|cx| Pattern::seq([cx.rest()]));
    assert_eq!(m.pattern().tokens(), vec![PatternContext::REST]);
}

#[test]
fn test_builder_options_are_recorded() {
    let m = Matcher::builder()
        .sequence_mode(SequenceMode::Search)
        .equality(Equality::Structural)
        .compile(|_| Pattern::seq([]));
    assert_eq!(
        m.options(),
        MatchOptions {
            sequence_mode: SequenceMode::Search,
            equality: Equality::Structural,
        }
    );
}

#[test]
fn test_default_options() {
    let m = compile(|_| Pattern::from(1i64));
    assert_eq!(m.options(), MatchOptions::default());
    assert_eq!(m.options().sequence_mode, SequenceMode::Positional);
    assert_eq!(m.options().equality, Equality::Strict);
}

#[test]
fn test_hand_built_matcher() {
    let mut tokens = TokenTable::new();
    let x = tokens.intern("x");
    let m = Matcher::new(Pattern::Variable(x), tokens, MatchOptions::default());
    assert_eq!(m.matches(&Value::Int(3)).get("x"), Some(&Value::Int(3)));
}

#[test]
fn test_clone_shares_compiled_state() {
    let m = compile(|cx| cx.var("v"));
    let n = m.clone();
    assert!(std::ptr::eq(m.pattern(), n.pattern()));
}

#[test]
fn test_matcher_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Matcher>();
    assert_send_sync::<MatchResult>();
}

#[test]
fn test_matcher_shared_across_threads() {
    let m = compile(|cx| Pattern::seq([cx.var("head"), cx.rest()]));
    let handles: Vec<_> = (0..4i64)
        .map(|i| {
            let m = m.clone();
            std::thread::spawn(move || {
                let subject = Value::list(vec![Value::Int(i), Value::Int(i + 1)]);
                m.matches(&subject).get("head").and_then(Value::as_int)
            })
        })
        .collect();
    let heads: Vec<Option<i64>> = handles
        .into_iter()
        .map(|h| h.join().ok().flatten())
        .collect();
    assert_eq!(heads, vec![Some(0), Some(1), Some(2), Some(3)]);
}

#[test]
fn test_var_reuses_variable_token() {
    let mut cx = PatternContext::default();
    let token = cx.variable("x");
    assert!(matches!(cx.var("x"), Pattern::Variable(t) if t == token));
    assert_eq!(cx.tokens.len(), 1);
}
