//! Shared sample data for the demos.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub fn persons() -> Vec<Person> {
    vec![
        Person::new("Max", 18),
        Person::new("Peter", 23),
        Person::new("Pamela", 23),
        Person::new("David", 12),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    MasteringLambdas,
    Java8InAction,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::MasteringLambdas => write!(f, "MASTERING_LAMBDAS"),
            Topic::Java8InAction => write!(f, "JAVA_8_IN_ACTION"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub topic: Topic,
    pub authors: Vec<&'static str>,
}

/// Two books, the first one shelved twice.
pub fn library() -> Vec<Book> {
    let lambdas = Book {
        topic: Topic::MasteringLambdas,
        authors: vec!["Adam Bien", "Adam Warski", "Petr Bouda"],
    };
    let in_action = Book {
        topic: Topic::Java8InAction,
        authors: vec!["Adam Bien", "Marek Pribyl"],
    };
    vec![lambdas.clone(), lambdas, in_action]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data() {
        assert_eq!(persons().iter().map(|p| p.age).sum::<u32>(), 76);
        assert_eq!(library().len(), 3);
        assert_eq!(Topic::Java8InAction.to_string(), "JAVA_8_IN_ACTION");
    }
}
