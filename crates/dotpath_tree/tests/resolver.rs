//! Resolver delegation, panic propagation, and an end-to-end fallback
//! resolver over JSON data sources.

use core::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use dotpath_tree::{Arg, Node};
use serde_json::{Value, json};

#[test]
fn delegates_path_and_arguments_verbatim() {
    let calls = Rc::new(Cell::new(0_u32));
    let seen = Rc::clone(&calls);

    let tree = Node::with_resolver("Root", move |path, args| {
        seen.set(seen.get() + 1);
        (String::from(path), args.to_vec())
    });

    let (path, args) = tree
        .get("leaf")
        .call_with(&[Arg::from(1_u32), Arg::from(true)]);

    assert_eq!(calls.get(), 1);
    assert_eq!(path, "Root.leaf");
    assert_eq!(args, vec![Arg::from(1_u32), Arg::from(true)]);
}

#[test]
fn returns_non_string_results_verbatim() {
    let depths = Node::with_resolver("", |path, _args| path.split('.').count());
    assert_eq!(depths.get("a").get("b").get("c").call(), 3);

    let flags = Node::with_resolver("", |path, _args| path.contains("on"));
    assert!(flags.get("switched").get("on").call());
    assert!(!flags.get("switched").get("off").call());
}

#[test]
fn resolver_panic_leaves_the_tree_reusable() {
    let tree = Node::with_resolver("Root", |path, _args| {
        if path.ends_with("boom") {
            panic!("resolver failure");
        }
        String::from(path)
    });

    let boom = tree.get("boom");
    assert!(catch_unwind(AssertUnwindSafe(|| boom.call())).is_err());

    // caches stay valid and the tree keeps working
    assert_eq!(tree.get("ok").call(), "Root.ok");
    assert!(boom.is_same(&tree.get("boom")));
    assert_eq!(tree.constructions(), 3);
}

/// Walks a dot-joined path through nested JSON objects and arrays.
fn lookup<'v>(source: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(source, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    })
}

#[test]
fn falls_back_through_data_sources() {
    let primary = json!({
        "FirstValue": { "name": "John", "lastName": "Doe" },
        "names": [{ "name": "Johnathan" }, { "name": "Jane" }],
        "isWorking": true,
        "numberInLine": 1,
        "Mother": {
            "Daughter": {
                "Adopted": { "Linda": "Linda" },
            },
        },
    });
    let defaults = json!({
        "Mother": {
            "Daughter": {
                "Adopted": { "Unknown": "Unknown default value" },
            },
        },
    });
    let missing = json!("value not found");

    let tree = Node::with_resolver("", move |path, _args| {
        lookup(&primary, path)
            .or_else(|| lookup(&defaults, path))
            .unwrap_or(&missing)
            .clone()
    });

    // primary source wins when present
    assert_eq!(tree.get("FirstValue").get("name").call(), json!("John"));
    assert_eq!(tree.get("names").at(0).get("name").call(), json!("Johnathan"));
    assert_eq!(tree.get("isWorking").call(), json!(true));
    assert_eq!(tree.get("numberInLine").call(), json!(1));
    assert_eq!(
        tree.get("Mother")
            .get("Daughter")
            .get("Adopted")
            .get("Linda")
            .call(),
        json!("Linda"),
    );

    // the defaults source fills gaps
    assert_eq!(
        tree.get("Mother")
            .get("Daughter")
            .get("Adopted")
            .get("Unknown")
            .call(),
        json!("Unknown default value"),
    );

    // the sentinel covers everything else
    assert_eq!(
        tree.get("Mother")
            .get("Daughter")
            .get("Adopted")
            .get("Other")
            .call(),
        json!("value not found"),
    );
    assert_eq!(tree.get("calling").call(), json!("value not found"));
}
