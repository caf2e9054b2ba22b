//! Grouping books by topic.

use crate::domain::{Topic, library};
use exhibit::target;
use std::collections::BTreeMap;

pub struct Grouping;

#[target]
impl Grouping {
    pub fn main() {
        if let Err(e) = exhibit::run_type::<Grouping>() {
            eprintln!("Error: {e}");
        }
    }

    #[label("Number of books with the same topic in the library")]
    pub fn number_in_topic() {
        for (topic, count) in count_by_topic() {
            println!("- {topic} {count}");
        }
    }

    #[label("Most authors by topic")]
    pub fn most_authors_by_topic() {
        let mut most: BTreeMap<Topic, usize> = BTreeMap::new();
        for book in library() {
            let entry = most.entry(book.topic).or_default();
            *entry = (*entry).max(book.authors.len());
        }
        for (topic, authors) in most {
            println!("- {topic} {authors}");
        }
    }

    #[label("Most popular topic in the library")]
    pub fn most_popular_topic() {
        let popular = count_by_topic()
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map(|(topic, _)| topic);
        if let Some(topic) = popular {
            println!("{topic}");
        }
    }

    #[allow(dead_code)]
    fn books_about(topic: Topic) -> usize {
        library().iter().filter(|b| b.topic == topic).count()
    }
}

fn count_by_topic() -> BTreeMap<Topic, usize> {
    let mut counts = BTreeMap::new();
    for book in library() {
        *counts.entry(book.topic).or_insert(0) += 1;
    }
    counts
}
