//! Target and member model
//!
//! A [`TargetType`] is a named, ordered set of [`Member`]s. Members are built
//! either from compile-time registrations ([`MemberDef`]) or by hand through
//! [`TargetBuilder`].

use crate::error::{BoxError, CatalogError, InvocationError};
use crate::label::resolve_label;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Zero-argument function pointer stored by the registration macros.
pub type ExampleFn = fn() -> Result<(), BoxError>;

/// Conversion from an example's return value into an invocation result.
///
/// Implemented for `()` and for any `Result` whose error converts into
/// [`BoxError`]. The `Ok` value is discarded.
pub trait ExampleReturn {
    /// Convert into the runner's result type
    fn into_result(self) -> Result<(), BoxError>;
}

impl ExampleReturn for () {
    fn into_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> ExampleReturn for Result<T, E>
where
    E: Into<BoxError>,
{
    fn into_result(self) -> Result<(), BoxError> {
        self.map(|_| ()).map_err(Into::into)
    }
}

/// Return value of a macro-registered example, awaiting conversion.
///
/// `ReturnValue(f()).into_outcome()` with both [`ResultReturn`] and
/// [`DiscardReturn`] in scope picks the `Result` conversion whenever the
/// concrete return type is a `Result`, however it is spelled, and discards
/// any other value.
#[doc(hidden)]
pub struct ReturnValue<T>(pub T);

/// `Result` returns: `Err` becomes an invocation failure.
#[doc(hidden)]
pub trait ResultReturn {
    /// Convert into the runner's result type
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl<T, E> ResultReturn for ReturnValue<Result<T, E>>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        self.0.into_result()
    }
}

/// Any other return: the value is dropped.
#[doc(hidden)]
pub trait DiscardReturn {
    /// Convert into the runner's result type
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl<T> DiscardReturn for &ReturnValue<T> {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

/// Static entry emitted by `#[exhibit::target]` and `#[exhibit::example]`.
#[derive(Debug, Clone, Copy)]
pub enum Entry {
    /// Callable with zero arguments
    Call(ExampleFn),
    /// Declared, but cannot be called with zero arguments
    Unreachable(&'static str),
}

/// Member registration record
#[derive(Debug, Clone, Copy)]
pub struct MemberDef {
    /// Function name
    pub name: &'static str,
    /// Optional `#[label]` text
    pub label: Option<&'static str>,
    /// How to call it
    pub entry: Entry,
}

/// How the driver calls a member.
#[derive(Clone)]
pub enum Invocation {
    /// Function pointer from a macro registration
    Static(ExampleFn),
    /// Closure from the builder
    Dynamic(Arc<dyn Fn() -> Result<(), BoxError> + Send + Sync>),
    /// The member exists but has no zero-argument form
    Unreachable(Cow<'static, str>),
}

impl Invocation {
    /// Whether the member can actually be called
    pub fn is_reachable(&self) -> bool {
        !matches!(self, Invocation::Unreachable(_))
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Static(_) => f.write_str("Static(..)"),
            Invocation::Dynamic(_) => f.write_str("Dynamic(..)"),
            Invocation::Unreachable(reason) => f.debug_tuple("Unreachable").field(reason).finish(),
        }
    }
}

impl From<Entry> for Invocation {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Call(f) => Invocation::Static(f),
            Entry::Unreachable(reason) => Invocation::Unreachable(Cow::Borrowed(reason)),
        }
    }
}

/// One procedure belonging to a target type
#[derive(Debug, Clone)]
pub struct Member {
    /// Name, unique within the target
    pub name: &'static str,
    /// Attached label, if any
    pub label: Option<&'static str>,
    /// Callable behind the member
    pub invocation: Invocation,
}

impl Member {
    /// Label shown in the run header
    pub fn display_label(&self) -> &str {
        resolve_label(self)
    }
}

impl From<&MemberDef> for Member {
    fn from(def: &MemberDef) -> Self {
        Self {
            name: def.name,
            label: def.label,
            invocation: def.entry.into(),
        }
    }
}

/// Source position of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Source file
    pub file: &'static str,
    /// Line number
    pub line: u32,
}

/// A named, closed set of zero-argument procedures.
#[derive(Debug, Clone)]
pub struct TargetType {
    name: &'static str,
    module_path: &'static str,
    location: Option<Location>,
    members: Vec<Member>,
}

impl TargetType {
    /// Empty target with the given name
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            module_path: "",
            location: None,
            members: Vec::new(),
        }
    }

    /// Start building a target by hand
    pub fn builder(name: &'static str) -> TargetBuilder {
        TargetBuilder {
            target: TargetType::new(name),
            error: None,
        }
    }

    /// Type identifier
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Module that declared the target (empty for hand-built targets)
    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// Where the target was first registered
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// All declared members in declaration order, excluded ones included
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Look up a member by name
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name == name)
    }

    pub(crate) fn set_origin(&mut self, module_path: &'static str, location: Location) {
        if self.location.is_none() {
            self.module_path = module_path;
            self.location = Some(location);
        }
    }

    /// Append a member, rejecting duplicate names
    pub fn push(&mut self, member: Member) -> Result<(), CatalogError> {
        if self.member(member.name).is_some() {
            return Err(CatalogError::DuplicateMember {
                target: self.name.to_string(),
                member: member.name.to_string(),
            });
        }
        self.members.push(member);
        Ok(())
    }
}

/// Builder for hand-registered targets.
///
/// ```
/// use exhibit_core::TargetType;
///
/// let target = TargetType::builder("Basics")
///     .example("greet", || println!("hello"))
///     .labeled("Say Hello")
///     .build()
///     .unwrap();
/// assert_eq!(target.members()[0].display_label(), "Say Hello");
/// ```
pub struct TargetBuilder {
    target: TargetType,
    error: Option<CatalogError>,
}

impl TargetBuilder {
    /// Register a callable member
    pub fn example<F, R>(self, name: &'static str, f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: ExampleReturn,
    {
        let invocation = Invocation::Dynamic(Arc::new(move || f().into_result()));
        self.member(Member {
            name,
            label: None,
            invocation,
        })
    }

    /// Register a member that exists but cannot be called with zero arguments
    pub fn unreachable(self, name: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        self.member(Member {
            name,
            label: None,
            invocation: Invocation::Unreachable(reason.into()),
        })
    }

    /// Register a prepared member
    pub fn member(mut self, member: Member) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.target.push(member) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Attach a label to the most recently added member
    ///
    /// Labelling before any member is added makes [`build`](Self::build) fail.
    pub fn labeled(mut self, label: &'static str) -> Self {
        match self.target.members.last_mut() {
            Some(last) => last.label = Some(label),
            None => {
                self.error.get_or_insert_with(|| CatalogError::LabelWithoutMember {
                    target: self.target.name.to_string(),
                    label: label.to_string(),
                });
            }
        }
        self
    }

    /// Finish the target
    pub fn build(self) -> Result<TargetType, CatalogError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.target),
        }
    }
}

/// Outcome of calling one member
#[derive(Debug)]
pub enum Outcome {
    /// Returned normally
    Completed,
    /// Panicked, returned an error, or could not be called
    Failed(InvocationError),
}

impl Outcome {
    /// Whether the call completed
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok() -> Result<(), BoxError> {
        Ok(())
    }

    #[test]
    fn test_builder_preserves_order() {
        let target = TargetType::builder("Basics")
            .example("c", || ())
            .example("a", || ())
            .example("b", || ())
            .build()
            .unwrap();

        let names: Vec<_> = target.members().iter().map(|m| m.name).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let err = TargetType::builder("Basics")
            .example("greet", || ())
            .example("greet", || ())
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            CatalogError::DuplicateMember {
                target: "Basics".to_string(),
                member: "greet".to_string(),
            }
        );
    }

    #[test]
    fn test_labeled_applies_to_last_member() {
        let target = TargetType::builder("Basics")
            .example("alpha", || ())
            .example("beta", || ())
            .labeled("Second")
            .build()
            .unwrap();

        assert_eq!(target.member("alpha").unwrap().label, None);
        assert_eq!(target.member("beta").unwrap().label, Some("Second"));
    }

    #[test]
    fn test_label_without_member_rejected() {
        let err = TargetType::builder("Basics")
            .labeled("Orphan")
            .example("greet", || ())
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            CatalogError::LabelWithoutMember {
                target: "Basics".to_string(),
                label: "Orphan".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "label `Orphan` in target `Basics` has no member to attach to"
        );
    }

    #[test]
    fn test_return_dispatch_follows_concrete_type() {
        type Aliased = Result<u8, std::io::Error>;

        fn fails() -> Aliased {
            Err(std::io::Error::other("disk full"))
        }

        let err = ReturnValue(fails()).into_outcome().unwrap_err();
        assert_eq!(err.to_string(), "disk full");

        let ok: Aliased = Ok(3);
        assert!(ReturnValue(ok).into_outcome().is_ok());
        assert!(ReturnValue(Some(1)).into_outcome().is_ok());
        assert!(ReturnValue(()).into_outcome().is_ok());
    }

    #[test]
    fn test_member_from_def() {
        let def = MemberDef {
            name: "greet",
            label: Some("Say Hello"),
            entry: Entry::Call(ok),
        };
        let member = Member::from(&def);
        assert_eq!(member.name, "greet");
        assert!(member.invocation.is_reachable());

        let def = MemberDef {
            name: "helper",
            label: None,
            entry: Entry::Unreachable("takes 1 parameter"),
        };
        let member = Member::from(&def);
        assert!(!member.invocation.is_reachable());
    }

    #[test]
    fn test_example_return_conversions() {
        assert!(().into_result().is_ok());
        assert!(Ok::<u32, std::io::Error>(7).into_result().is_ok());

        let err = Err::<(), _>(std::io::Error::other("nope")).into_result();
        assert_eq!(err.unwrap_err().to_string(), "nope");
    }
}
