//! Collecting into lists, maps, statistics and strings.

use crate::domain::{Person, persons};
use exhibit::target;
use std::collections::BTreeMap;

pub struct Advanced;

#[target]
impl Advanced {
    pub fn main() {
        if let Err(e) = exhibit::run_type::<Advanced>() {
            eprintln!("Error: {e}");
        }
    }

    #[label("Collect a filtered list")]
    pub fn collect_list() {
        let filtered: Vec<Person> = persons()
            .into_iter()
            .filter(|p| p.name.starts_with('P'))
            .collect();
        println!("{filtered:?}");
    }

    #[label("Group by age")]
    pub fn group_by_age() {
        for (age, group) in by_age(&persons()) {
            let names: Vec<_> = group.iter().map(|p| p.name.as_str()).collect();
            println!("age {age}: {names:?}");
        }
    }

    #[label("Average age")]
    pub fn average_age() {
        let all = persons();
        let total: u32 = all.iter().map(|p| p.age).sum();
        println!("{}", f64::from(total) / all.len() as f64);
    }

    #[label("Summary statistics")]
    pub fn summary_statistics() {
        let stats = AgeStats::of(&persons());
        println!("{stats:?}");
    }

    #[label("Join into a sentence")]
    pub fn join_sentence() {
        let adults: Vec<_> = persons()
            .into_iter()
            .filter(|p| p.age >= 18)
            .map(|p| p.name)
            .collect();
        println!("In Germany {} are of legal age.", adults.join(" and "));
    }

    #[label("Map with merged duplicate keys")]
    pub fn merge_into_map() {
        let mut names: BTreeMap<u32, String> = BTreeMap::new();
        for p in persons() {
            names
                .entry(p.age)
                .and_modify(|n| {
                    n.push(';');
                    n.push_str(&p.name);
                })
                .or_insert(p.name);
        }
        println!("{names:?}");
    }
}

fn by_age(persons: &[Person]) -> BTreeMap<u32, Vec<&Person>> {
    let mut groups: BTreeMap<u32, Vec<&Person>> = BTreeMap::new();
    for p in persons {
        groups.entry(p.age).or_default().push(p);
    }
    groups
}

#[derive(Debug, PartialEq)]
struct AgeStats {
    count: usize,
    sum: u32,
    min: u32,
    max: u32,
    average: f64,
}

impl AgeStats {
    fn of(persons: &[Person]) -> Self {
        let sum = persons.iter().map(|p| p.age).sum();
        let count = persons.len();
        Self {
            count,
            sum,
            min: persons.iter().map(|p| p.age).min().unwrap_or(0),
            max: persons.iter().map(|p| p.age).max().unwrap_or(0),
            average: if count == 0 {
                0.0
            } else {
                f64::from(sum) / count as f64
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_stats() {
        let stats = AgeStats::of(&persons());
        assert_eq!(stats.count, 4);
        assert_eq!(stats.sum, 76);
        assert_eq!((stats.min, stats.max), (12, 23));
        assert_eq!(stats.average, 19.0);

        assert_eq!(AgeStats::of(&[]).average, 0.0);
    }

    #[test]
    fn test_by_age() {
        let all = persons();
        let groups = by_age(&all);
        assert_eq!(groups[&23].len(), 2);
        assert_eq!(groups.len(), 3);
    }
}
