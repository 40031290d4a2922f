use super::*;

/// Models the dispatcher's shape: one guarded frame per nesting level.
enum Nested {
    Leaf(u64),
    Wrap(Box<Nested>),
}

fn depth(n: &Nested) -> u64 {
    ensure_sufficient_stack(|| match n {
        Nested::Leaf(v) => *v,
        Nested::Wrap(inner) => depth(inner) + 1,
    })
}

fn build(levels: u64) -> Nested {
    let mut node = Nested::Leaf(0);
    for _ in 0..levels {
        node = Nested::Wrap(Box::new(node));
    }
    node
}

/// Dropping a deep `Box` chain recursively would overflow on its own.
fn dismantle(mut node: Nested) {
    while let Nested::Wrap(inner) = node {
        node = *inner;
    }
}

#[test]
fn test_shallow_nesting() {
    let tree = build(16);
    assert_eq!(depth(&tree), 16);
    dismantle(tree);
}

#[test]
fn test_deep_nesting() {
    // Far past what an 8MB main-thread stack survives unguarded.
    let tree = build(200_000);
    assert_eq!(depth(&tree), 200_000);
    dismantle(tree);
}

#[test]
fn test_passes_result_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("no match"));
    assert_eq!(result, Err("no match"));
}
