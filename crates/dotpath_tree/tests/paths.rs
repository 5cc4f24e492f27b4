//! Path composition, argument formatting, and cache behavior of the
//! dynamic tree.

use dotpath_tree::{Arg, Node};

#[test]
fn composes_named_root_paths() {
    let simple = Node::new("Simple");

    assert_eq!(simple.get("FirstValue").call(), "Simple.FirstValue");
    assert_eq!(simple.get("SecondValue").call(), "Simple.SecondValue");
    assert_eq!(simple.get("ThirdValue").call(), "Simple.ThirdValue");
}

#[test]
fn composes_nested_paths() {
    let nested = Node::new("Nested");

    assert_eq!(
        nested.get("Parent").get("Child").get("GrandChild").call(),
        "Nested.Parent.Child.GrandChild",
    );
}

#[test]
fn anonymous_root_has_no_leading_separator() {
    let root = Node::new("");

    assert_eq!(root.get("blah").get("blah").call(), "blah.blah");
    assert_eq!(root.get("x").get("y").call(), "x.y");
}

#[test]
fn index_navigation_stringifies() {
    let root = Node::new("");

    assert_eq!(
        root.get("testing")
            .get("something")
            .at(9)
            .at(2)
            .get("run")
            .call(),
        "testing.something.9.2.run",
    );
}

#[test]
fn splices_sequence_arguments() {
    let hole = Node::new("Down").get("The").get("Rabbit").get("Hole");

    assert_eq!(
        hole.call_with(&[Arg::list(["In", "Wonderland"])]),
        "Down.The.Rabbit.Hole In Wonderland",
    );
}

#[test]
fn expands_mapping_arguments() {
    let hole = Node::new("Down").get("The").get("Rabbit").get("Hole");

    assert_eq!(
        hole.call_with(&[Arg::from("Alice"), Arg::pairs([("In", "Wonderland")])]),
        "Down.The.Rabbit.Hole Alice In-Wonderland",
    );
}

#[test]
fn constructs_once_per_new_key_and_never_again() {
    let complex = Node::new("Complex");
    assert_eq!(complex.constructions(), 1);

    complex.get("FirstValue").get("name").call();
    assert_eq!(complex.constructions(), 3);
    complex
        .get("Mother")
        .get("Son")
        .call_with(&[Arg::from("donny")]);
    assert_eq!(complex.constructions(), 5);
    complex.get("Mother").get("Daughter").get("Sophie").call();
    assert_eq!(complex.constructions(), 7);
    complex.get("Mother").get("Daughter").get("Lora").call();
    assert_eq!(complex.constructions(), 8);
    complex
        .get("Mother")
        .get("Daughter")
        .get("Adopted")
        .get("Linda")
        .call();
    assert_eq!(complex.constructions(), 10);
    complex
        .get("Mother")
        .get("Daughter")
        .get("Adopted")
        .get("Other")
        .call_with(&[Arg::from("virginia")]);
    assert_eq!(complex.constructions(), 11);

    // a full re-navigation of every chain constructs nothing further
    complex.get("FirstValue").get("name").call();
    complex
        .get("Mother")
        .get("Son")
        .call_with(&[Arg::from("donny")]);
    complex.get("Mother").get("Daughter").get("Sophie").call();
    complex.get("Mother").get("Daughter").get("Lora").call();
    complex
        .get("Mother")
        .get("Daughter")
        .get("Adopted")
        .get("Linda")
        .call();
    complex
        .get("Mother")
        .get("Daughter")
        .get("Adopted")
        .get("Other")
        .call_with(&[Arg::from("virginia")]);
    assert_eq!(complex.constructions(), 11);
}

#[test]
fn renavigation_returns_the_same_instance() {
    let root = Node::new("Root");

    let first = root.get("a").get("b");
    let second = root.get("a").get("b");

    assert!(first.is_same(&second));
    assert_eq!(first.call(), second.call());
}

#[test]
fn calling_and_navigating_are_independent() {
    let root = Node::new("Root");
    let child = root.get("child");

    // calling repeatedly does not disturb the cache
    assert_eq!(child.call(), "Root.child");
    assert_eq!(child.call(), "Root.child");
    assert!(root.get("child").is_same(&child));

    // navigating deeper does not consume the call
    let leaf = child.get("leaf");
    assert_eq!(child.call(), "Root.child");
    assert_eq!(leaf.call(), "Root.child.leaf");
}
