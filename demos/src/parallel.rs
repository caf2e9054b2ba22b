//! Parallel iterators on the rayon pool.
//!
//! Each line is tagged with the pool thread that produced it, so output
//! order varies from run to run.

use crate::domain::persons;
use exhibit::target;
use rayon::prelude::*;

const CODES: [&str; 5] = ["a1", "a2", "b1", "c2", "c1"];

fn thread() -> String {
    match rayon::current_thread_index() {
        Some(i) => format!("worker-{i}"),
        None => "main".to_string(),
    }
}

pub struct Parallel;

#[target]
impl Parallel {
    pub fn main() {
        if let Err(e) = exhibit::run_type::<Parallel>() {
            eprintln!("Error: {e}");
        }
    }

    #[label("Which thread runs each adapter")]
    pub fn print_thread() {
        CODES[..]
            .par_iter()
            .filter(|s| {
                println!("filter: {s} [{}]", thread());
                true
            })
            .map(|s| {
                println!("map: {s} [{}]", thread());
                s.to_uppercase()
            })
            .for_each(|s| println!("forEach: {s} [{}]", thread()));
    }

    #[label("Parallel sort keeps order for the consumer")]
    pub fn print_thread_sorted() {
        let mut upper: Vec<String> = CODES[..]
            .par_iter()
            .map(|s| {
                println!("map: {s} [{}]", thread());
                s.to_uppercase()
            })
            .collect();
        upper.par_sort_by(|a, b| {
            println!("sort: {a} <> {b} [{}]", thread());
            a.cmp(b)
        });
        upper.iter().for_each(|s| println!("forEach: {s} [{}]", thread()));
    }

    #[label("Fold per thread, then combine")]
    pub fn reduce_parallel() {
        let sum = persons()
            .par_iter()
            .fold(
                || 0,
                |sum, p| {
                    println!("accumulator: sum={sum}; person={p} [{}]", thread());
                    sum + p.age
                },
            )
            .reduce(
                || 0,
                |a, b| {
                    println!("combiner: sum1={a}; sum2={b} [{}]", thread());
                    a + b
                },
            );
        println!("{sum}");
    }
}
