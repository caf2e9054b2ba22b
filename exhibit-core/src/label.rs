//! Label resolution

use crate::model::Member;

/// Display label for a member: its attached label when present and
/// non-empty, otherwise its name.
pub fn resolve_label(member: &Member) -> &str {
    match member.label {
        Some(label) if !label.is_empty() => label,
        _ => member.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Invocation;

    fn member(name: &'static str, label: Option<&'static str>) -> Member {
        Member {
            name,
            label,
            invocation: Invocation::Unreachable("test".into()),
        }
    }

    #[test]
    fn test_label_wins_over_name() {
        assert_eq!(resolve_label(&member("greet", Some("Say Hello"))), "Say Hello");
    }

    #[test]
    fn test_missing_label_falls_back_to_name() {
        assert_eq!(resolve_label(&member("greet", None)), "greet");
    }

    #[test]
    fn test_empty_label_is_default() {
        assert_eq!(resolve_label(&member("greet", Some(""))), "greet");
    }
}
