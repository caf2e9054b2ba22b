//! The collector examples again, with each step held in a named closure.

use crate::domain::{Person, persons};
use exhibit::target;

pub struct CollectorsLambdas;

#[target]
impl CollectorsLambdas {
    pub fn main() {
        if let Err(e) = exhibit::run_type::<CollectorsLambdas>() {
            eprintln!("Error: {e}");
        }
    }

    #[label("Collector from supplier, accumulator and finisher")]
    pub fn single_upper_string() {
        let supplier = Vec::<String>::new;
        let accumulator = |mut acc: Vec<String>, p: &Person| {
            acc.push(p.name.to_uppercase());
            acc
        };
        let finisher = |acc: Vec<String>| acc.join(" | ");

        let names = finisher(persons().iter().fold(supplier(), accumulator));
        println!("{names}");
    }

    #[label("Flatten with a closure per level")]
    pub fn flat_map() {
        let bars_of = |foo: String| (1..4).map(move |i| format!("Bar{i} <- {foo}"));
        (1..4)
            .map(|i| format!("Foo{i}"))
            .flat_map(bars_of)
            .for_each(|bar| println!("{bar}"));
    }

    #[label("Optional chain through closures")]
    pub fn option_chain() {
        let nested = |depth: u8| if depth > 1 { Some(depth - 1) } else { None };
        let found = Some(3u8).and_then(nested).and_then(nested).and_then(nested);
        println!("{found:?}");
    }
}
