//! Property-based tests for the matcher.
//!
//! Generated subjects are substituted into generated pattern shapes, and the
//! tests check:
//! 1. Substitution round-trip: every variable binds the value substituted at
//!    its position
//! 2. Determinism: the same matcher on the same subject gives equal results
//! 3. Agreement: a variable used twice matches iff both positions agree

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use motif_match::{compile, MatchResult, Pattern, PatternContext, Value};
use proptest::prelude::*;

// -- Strategies --

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{0,8}".prop_map(|s: String| Value::string(s)),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::list),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(|entries| Value::record(entries)),
        ]
    })
}

/// A pattern shape: literal scalars, holes, and containers of shapes.
#[derive(Clone, Debug)]
enum Shape {
    Literal(Value),
    Hole,
    List(Vec<Shape>),
    Record(Vec<(String, Shape)>),
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![scalar_strategy().prop_map(Shape::Literal), Just(Shape::Hole)];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::List),
            // Unique keys so each hole stays reachable.
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Shape::Record(m.into_iter().collect())),
        ]
    })
}

/// Build the pattern for `shape` (holes become fresh variables `v0, v1, ...`)
/// and the subject with `fill[i]` at hole `i`.
fn instantiate(
    shape: &Shape,
    cx: &mut PatternContext,
    fill: &[Value],
    next: &mut usize,
) -> (Pattern, Value) {
    match shape {
        Shape::Literal(v) => (Pattern::from(v.clone()), v.clone()),
        Shape::Hole => {
            let i = *next;
            *next += 1;
            let value = fill[i % fill.len()].clone();
            (cx.var(&format!("v{i}")), value)
        }
        Shape::List(items) => {
            let (ps, vs): (Vec<_>, Vec<_>) =
                items.iter().map(|s| instantiate(s, cx, fill, next)).unzip();
            (Pattern::seq(ps), Value::list(vs))
        }
        Shape::Record(entries) => {
            let mut ps = Vec::new();
            let mut vs = Vec::new();
            for (k, s) in entries {
                let (p, v) = instantiate(s, cx, fill, next);
                ps.push((k.clone(), p));
                vs.push((k.clone(), v));
            }
            (Pattern::record(ps), Value::record(vs))
        }
    }
}

proptest! {
    #[test]
    fn substituted_values_are_bound(
        shape in shape_strategy(),
        fill in prop::collection::vec(value_strategy(), 1..6),
    ) {
        let mut subject = Value::Null;
        let mut holes = 0;
        let m = compile(|cx| {
            let (pattern, value) = instantiate(&shape, cx, &fill, &mut holes);
            subject = value;
            pattern
        });

        let result = m.matches(&subject);
        let bindings = result.bindings().expect("substituted subject must match");
        prop_assert_eq!(bindings.len(), holes);
        for i in 0..holes {
            prop_assert_eq!(bindings.get(&format!("v{i}")), Some(&fill[i % fill.len()]));
        }
    }

    #[test]
    fn matching_is_deterministic(
        shape in shape_strategy(),
        fill in prop::collection::vec(value_strategy(), 1..6),
        other in value_strategy(),
    ) {
        let mut subject = Value::Null;
        let m = compile(|cx| {
            let (pattern, value) = instantiate(&shape, cx, &fill, &mut 0);
            subject = value;
            pattern
        });
        prop_assert_eq!(m.matches(&subject), m.matches(&subject));
        prop_assert_eq!(m.matches(&other), m.matches(&other));
    }

    #[test]
    fn repeated_scalar_variable_agreement(a in scalar_strategy(), b in scalar_strategy()) {
        let m = compile(|cx| Pattern::seq([cx.var("same"), cx.var("same")]));
        let result = m.matches(&Value::list(vec![a.clone(), b.clone()]));
        if a.strict_eq(&b) {
            prop_assert_eq!(result.get("same"), Some(&a));
        } else {
            prop_assert_eq!(result, MatchResult::Failure);
        }
    }

    #[test]
    fn rest_captures_everything_after_head(items in prop::collection::vec(scalar_strategy(), 2..10)) {
        let m = compile(|cx| Pattern::seq([cx.var("head"), cx.rest()]));
        let result = m.matches(&Value::list(items.clone()));
        prop_assert_eq!(result.get("head"), Some(&items[0]));
        let rest = result.bindings().and_then(|b| b.rest()).cloned();
        prop_assert_eq!(rest, Some(Value::list(items[1..].to_vec())));
    }
}
