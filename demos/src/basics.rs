//! Iterator fundamentals: adapters, laziness and evaluation order.

use exhibit::target;

const NAMES: [&str; 6] = ["Petr", "Ales", "Best", "Milda", "Alena", "Alfred"];
const CODES: [&str; 5] = ["d2", "a2", "b1", "b3", "c"];

pub struct Basics;

#[target]
impl Basics {
    pub fn main() {
        if let Err(e) = exhibit::run_type::<Basics>() {
            eprintln!("Error: {e}");
        }
    }

    #[label("Filter, uppercase and sort")]
    pub fn sort_and_write_names() {
        let mut names: Vec<String> = NAMES
            .iter()
            .filter(|s| s.starts_with('A'))
            .map(|s| s.to_uppercase())
            .collect();
        names.sort();
        names.iter().for_each(|n| println!("{n}"));
    }

    pub fn write_first() {
        if let Some(first) = NAMES.first() {
            println!("{first}");
        }
    }

    #[label("Range iterator")]
    pub fn int_range() {
        (1..4).for_each(|i| println!("{i}"));
    }

    #[label("Parse suffixes and take the max")]
    pub fn substring_max() {
        let max = ["a1", "a2", "a3"]
            .iter()
            .filter_map(|s| s[1..].parse::<i32>().ok())
            .max();
        if let Some(max) = max {
            println!("{max}");
        }
    }

    pub fn map_object() {
        (1..4).map(|i| format!("a{i}")).for_each(|s| println!("{s}"));
    }

    #[label("Adapters are lazy without a consumer")]
    pub fn lazy_adapters() {
        let _pending = CODES.iter().filter(|s| {
            println!("filter: {s}");
            true
        });
    }

    #[label("Adapters run element by element")]
    pub fn vertical_order() {
        CODES
            .iter()
            .filter(|s| {
                println!("filter: {s}");
                true
            })
            .for_each(|s| println!("forEach: {s}"));
    }

    #[label("any() stops at the first match")]
    pub fn any_short_circuits() {
        let found = CODES
            .iter()
            .map(|s| {
                println!("map: {s}");
                s.to_uppercase()
            })
            .any(|s| {
                println!("anyMatch: {s}");
                s.starts_with('A')
            });
        println!("found: {found}");
    }

    #[label("Filter first, then map")]
    pub fn filter_before_map() {
        CODES
            .iter()
            .filter(|s| {
                println!("filter: {s}");
                s.starts_with('a')
            })
            .map(|s| {
                println!("map: {s}");
                s.to_uppercase()
            })
            .for_each(|s| println!("forEach: {s}"));
    }

    #[label("Re-create an iterator for each consumer")]
    pub fn reusing_iterators() {
        let supplier = || CODES.iter().filter(|s| s.starts_with('a'));
        println!("any: {}", supplier().any(|_| true));
        println!("none: {}", !supplier().any(|_| true));
    }
}
