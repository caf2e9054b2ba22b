//! Collecting into strings and flattening, registered as free functions under
//! the `collectors` target.

use crate::domain::persons;
use exhibit::example;

#[example]
#[label("Join names with a separator")]
fn single_upper_string() {
    let names = persons()
        .iter()
        .map(|p| p.name.to_uppercase())
        .collect::<Vec<_>>()
        .join(" | ");
    println!("{names}");
}

#[example(label = "Flatten prebuilt nested collections")]
fn flat_map_prebuilt() {
    let foos: Vec<(String, Vec<String>)> = (1..4)
        .map(|i| {
            let name = format!("Foo{i}");
            let bars: Vec<String> = (1..4).map(|j| format!("Bar{j} <- {name}")).collect();
            (name, bars)
        })
        .collect();
    foos.iter()
        .flat_map(|(_, bars)| bars)
        .for_each(|bar| println!("{bar}"));
}

#[example(label = "Flatten nested collections")]
fn flat_map() {
    (1..4)
        .map(|i| format!("Foo{i}"))
        .flat_map(|foo| (1..4).map(move |i| format!("Bar{i} <- {foo}")))
        .for_each(|bar| println!("{bar}"));
}

struct Outer {
    nested: Option<Nested>,
}

struct Nested {
    inner: Option<Inner>,
}

struct Inner {
    foo: Option<String>,
}

#[example(label = "Nested checks without combinators")]
fn nested_checks() {
    let outer = Outer { nested: None };
    if let Some(Nested {
        inner: Some(Inner { foo: Some(foo) }),
    }) = &outer.nested
    {
        println!("{foo}");
    }
}

#[example(label = "Chained optionals")]
fn option_chain() {
    let outer = Outer {
        nested: Some(Nested {
            inner: Some(Inner { foo: None }),
        }),
    };
    let foo = outer
        .nested
        .and_then(|n| n.inner)
        .and_then(|i| i.foo);
    println!("{}", foo.as_deref().unwrap_or("<none>"));
}
