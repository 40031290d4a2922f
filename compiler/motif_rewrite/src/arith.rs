//! Infix arithmetic by precedence-ordered window rewriting.
//!
//! An expression is split on whitespace into `{type, value}` record tokens.
//! Two three-token rules then collapse `number op number` windows, the
//! multiplicative operators (`×`, `*`, `÷`, `/`) before the additive ones
//! (`+`, `-`). Within a rule the leftmost window goes first, so operators of
//! equal precedence associate to the left.

use motif_match::{compile, Bindings, Matcher, Pattern, Value};

use crate::{RewriteConfig, RewriteError, RewriteRule, Rewriter};

pub const NUMBER: &str = "number";
pub const OPERATION: &str = "operation";

/// A `{type, value}` token record.
pub fn token(kind: &str, value: Value) -> Value {
    Value::record([("type", Value::string(kind)), ("value", value)])
}

pub fn number(n: f64) -> Value {
    token(NUMBER, Value::Float(n))
}

pub fn operation(op: &str) -> Value {
    token(OPERATION, Value::string(op))
}

fn is_operator(word: &str) -> bool {
    matches!(word, "×" | "*" | "÷" | "/" | "+" | "-")
}

/// Split an expression into tokens.
///
/// Words that parse as finite numbers become number tokens; the six
/// operators become operation tokens; anything else is an error.
pub fn tokenize(expr: &str) -> Result<Vec<Value>, RewriteError> {
    expr.split_whitespace()
        .enumerate()
        .map(|(position, word)| match word.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(number(n)),
            _ if is_operator(word) => Ok(operation(word)),
            _ => Err(RewriteError::Tokenize {
                word: word.to_owned(),
                position,
            }),
        })
        .collect()
}

/// `number <op> number`, binding `first`, `op` and `second`.
fn binary() -> Matcher {
    compile(|cx| {
        Pattern::seq([
            token_pattern(NUMBER, cx.var("first")),
            token_pattern(OPERATION, cx.var("op")),
            token_pattern(NUMBER, cx.var("second")),
        ])
    })
}

fn token_pattern(kind: &str, value: Pattern) -> Pattern {
    Pattern::record([("type", Pattern::from(kind)), ("value", value)])
}

fn operands(b: &Bindings) -> Result<(f64, &str, f64), RewriteError> {
    Ok((b.get_number("first")?, b.get_str("op")?, b.get_number("second")?))
}

fn finite(rule: &str, first: f64, op: &str, second: f64, n: f64) -> Result<Option<Value>, RewriteError> {
    if n.is_finite() {
        Ok(Some(number(n)))
    } else if matches!(op, "÷" | "/") && second == 0.0 {
        Err(RewriteError::reducer(rule, format!("division by zero in `{first} {op} {second}`")))
    } else {
        Err(RewriteError::reducer(rule, format!("`{first} {op} {second}` is not finite")))
    }
}

fn multiplicative(b: &Bindings) -> Result<Option<Value>, RewriteError> {
    let (first, op, second) = operands(b)?;
    let n = match op {
        "×" | "*" => first * second,
        "÷" | "/" => first / second,
        _ => return Ok(None),
    };
    finite("multiplicative", first, op, second, n)
}

fn additive(b: &Bindings) -> Result<Option<Value>, RewriteError> {
    let (first, op, second) = operands(b)?;
    let n = match op {
        "+" => first + second,
        "-" => first - second,
        _ => return Ok(None),
    };
    finite("additive", first, op, second, n)
}

/// The arithmetic rules in precedence order.
pub fn rules() -> Result<Vec<RewriteRule>, RewriteError> {
    let m = binary();
    Ok(vec![
        RewriteRule::new("multiplicative", m.clone(), multiplicative)?,
        RewriteRule::new("additive", m, additive)?,
    ])
}

pub fn rewriter(config: RewriteConfig) -> Result<Rewriter, RewriteError> {
    Ok(Rewriter::new(rules()?, config))
}

/// Render tokens as a `= 5 + 4 × 3` line.
pub fn display(tokens: &[Value]) -> String {
    let mut line = String::from("=");
    for t in tokens {
        line.push(' ');
        match t.as_record().and_then(|r| r.get("value")) {
            Some(v) => line.push_str(&v.to_string()),
            None => line.push_str(&t.to_string()),
        }
    }
    line
}

/// Evaluate an expression, calling `observer` with every intermediate line.
pub fn evaluate_with<F>(expr: &str, config: RewriteConfig, mut observer: F) -> Result<f64, RewriteError>
where
    F: FnMut(&str),
{
    let tokens = tokenize(expr)?;
    observer(&display(&tokens));
    let tokens = rewriter(config)?.run_with(tokens, |_, tokens| observer(&display(tokens)))?;
    match tokens.as_slice() {
        [only] => only
            .as_record()
            .filter(|r| r.get("type").and_then(Value::as_str) == Some(NUMBER))
            .and_then(|r| r.get("value"))
            .and_then(Value::as_number)
            .ok_or(RewriteError::Incomplete { remaining: 1 }),
        rest => Err(RewriteError::Incomplete { remaining: rest.len() }),
    }
}

pub fn evaluate(expr: &str) -> Result<f64, RewriteError> {
    evaluate_with(expr, RewriteConfig::default(), |_| {})
}
