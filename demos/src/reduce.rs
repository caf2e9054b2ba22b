//! Folding a sequence to a single value.

use crate::domain::{Person, persons};
use exhibit::target;

pub struct Reduce;

#[target]
impl Reduce {
    pub fn main() {
        if let Err(e) = exhibit::run_type::<Reduce>() {
            eprintln!("Error: {e}");
        }
    }

    #[label("Oldest person with reduce")]
    pub fn oldest() {
        let oldest = persons()
            .into_iter()
            .reduce(|a, b| if a.age > b.age { a } else { b });
        if let Some(person) = oldest {
            println!("{person}");
        }
    }

    #[label("Fold into an aggregate person")]
    pub fn aggregate() {
        let total = persons()
            .into_iter()
            .fold(Person::new("", 0), |mut acc, p| {
                acc.age += p.age;
                acc.name.push_str(&p.name);
                acc
            });
        println!("name={}; age={}", total.name, total.age);
    }

    #[label("Sum of ages")]
    pub fn age_sum() {
        let sum: u32 = persons().iter().map(|p| p.age).sum();
        println!("{sum}");
    }

    #[label("Checked sum with a default")]
    pub fn checked_sum() {
        let empty: [u64; 0] = [];
        let sum = empty.iter().try_fold(5u64, |acc, n| acc.checked_add(*n));
        println!("Result: {sum:?}");
    }

    /// Fails on purpose so the runner shows a diagnostic and moves on.
    #[label("Parse every code (fails)")]
    pub fn parse_all() -> anyhow::Result<()> {
        let parsed = ["1", "2", "x3"]
            .iter()
            .map(|s| s.parse::<u32>())
            .collect::<Result<Vec<_>, _>>()?;
        println!("{parsed:?}");
        Ok(())
    }
}
