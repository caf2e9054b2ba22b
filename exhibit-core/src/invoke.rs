//! Isolated invocation
//!
//! Calls one member on the current thread and turns every way it can fail
//! into an [`Outcome`]. Panics are caught with `catch_unwind`; aborts
//! (stack overflow, `std::process::abort`) still take the process down.

use crate::error::InvocationError;
use crate::model::{Invocation, Member, Outcome};

/// Call `member` with zero arguments.
pub fn invoke(member: &Member) -> Outcome {
    match &member.invocation {
        Invocation::Static(f) => run_guarded(*f),
        Invocation::Dynamic(f) => run_guarded(|| f()),
        Invocation::Unreachable(reason) => Outcome::Failed(InvocationError::Unreachable {
            reason: reason.to_string(),
        }),
    }
}

fn run_guarded<F>(f: F) -> Outcome
where
    F: FnOnce() -> Result<(), crate::BoxError>,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(Ok(())) => Outcome::Completed,
        Ok(Err(e)) => Outcome::Failed(InvocationError::Failed(e)),
        Err(panic) => {
            let message = if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            Outcome::Failed(InvocationError::Panicked { message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TargetType;

    #[test]
    fn test_completed() {
        let target = TargetType::builder("T")
            .example("ok", || ())
            .build()
            .unwrap();
        assert!(invoke(&target.members()[0]).is_completed());
    }

    #[test]
    fn test_panic_is_captured() {
        let target = TargetType::builder("T")
            .example("boom", || -> () { panic!("kaboom {}", 42) })
            .example("opaque_payload", || -> () { std::panic::panic_any(7u8) })
            .build()
            .unwrap();

        match invoke(&target.members()[0]) {
            Outcome::Failed(InvocationError::Panicked { message }) => {
                assert_eq!(message, "kaboom 42")
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        match invoke(&target.members()[1]) {
            Outcome::Failed(InvocationError::Panicked { message }) => {
                assert_eq!(message, "unknown panic")
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_returned_error() {
        let target = TargetType::builder("T")
            .example("fails", || Err::<(), _>(std::io::Error::other("no input")))
            .build()
            .unwrap();

        match invoke(&target.members()[0]) {
            Outcome::Failed(InvocationError::Failed(e)) => assert_eq!(e.to_string(), "no input"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_unreachable() {
        let target = TargetType::builder("T")
            .unreachable("needs_args", "takes 1 parameter")
            .build()
            .unwrap();

        match invoke(&target.members()[0]) {
            Outcome::Failed(InvocationError::Unreachable { reason }) => {
                assert_eq!(reason, "takes 1 parameter")
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_static_entry() {
        fn static_ok() -> Result<(), crate::BoxError> {
            Ok(())
        }
        let member = crate::Member {
            name: "static_ok",
            label: None,
            invocation: Invocation::Static(static_ok),
        };
        assert!(invoke(&member).is_completed());
    }
}
