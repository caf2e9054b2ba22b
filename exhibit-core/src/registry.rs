//! Registry and Catalog
//!
//! Registration records are collected at link time through `inventory` and
//! folded into a [`Catalog`] on demand. Records are applied in source order
//! (file, then line), so a target's members come out in the order they were
//! written even when inventory iterates them differently.
//!
//! A target is keyed by its short name (`Basics`) unless two types or
//! modules in different places claim that name. Each of those is then keyed
//! by its full path (`demos::first::Basics`) and the short name resolves to
//! nothing. The full path always resolves.

use crate::error::{CatalogError, TypeNotFoundError};
use crate::model::{Location, Member, MemberDef, TargetType};
use std::collections::{BTreeMap, BTreeSet};

/// Impl-block registration emitted by `#[exhibit::target]`
#[derive(Debug, Clone)]
pub struct TargetDef {
    /// Target name (the impl block's self type)
    pub name: &'static str,
    /// Full path of the self type, `module::Type`
    pub path: &'static str,
    /// Associated functions in declaration order
    pub members: &'static [MemberDef],
    /// Source file
    pub file: &'static str,
    /// Source line
    pub line: u32,
    /// Module path
    pub module_path: &'static str,
}

/// Free-function registration emitted by `#[exhibit::example]`
#[derive(Debug, Clone)]
pub struct ExampleDef {
    /// Target the function belongs to; `None` means the enclosing module
    pub target: Option<&'static str>,
    /// The function itself
    pub member: MemberDef,
    /// Source file
    pub file: &'static str,
    /// Source line
    pub line: u32,
    /// Module path
    pub module_path: &'static str,
}

impl ExampleDef {
    /// Explicit target, or the last segment of the module path
    pub fn target_name(&self) -> &'static str {
        self.target
            .unwrap_or_else(|| self.module_path.rsplit("::").next().unwrap_or(self.module_path))
    }

    /// The enclosing module, when this function defines a module target
    pub fn module_target(&self) -> Option<&'static str> {
        match self.target {
            Some(_) => None,
            None => Some(self.module_path),
        }
    }
}

inventory::collect!(TargetDef);
inventory::collect!(ExampleDef);

/// Anchor to prevent LTO from stripping inventory entries
#[used]
#[doc(hidden)]
pub static REGISTRY_ANCHOR: fn() = || {
    for _ in inventory::iter::<TargetDef> {}
    for _ in inventory::iter::<ExampleDef> {}
};

/// Name → target lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    targets: BTreeMap<&'static str, TargetType>,
    /// Full path → key, for registered targets
    paths: BTreeMap<&'static str, &'static str>,
}

impl Catalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of every target registered through the macros
    pub fn from_registry() -> Self {
        Self::from_defs(
            inventory::iter::<TargetDef>.into_iter().collect(),
            inventory::iter::<ExampleDef>.into_iter().collect(),
        )
    }

    fn from_defs(
        mut blocks: Vec<&'static TargetDef>,
        mut free: Vec<&'static ExampleDef>,
    ) -> Self {
        blocks.sort_by_key(|d| (d.file, d.line));
        free.sort_by_key(|d| (d.file, d.line));

        let claims = Claims::collect(&blocks, &free);

        let mut catalog = Self::new();
        for def in blocks {
            let key = claims.key(def.name, def.path);
            let target = catalog.entry(key, Some(def.path));
            target.set_origin(def.module_path, Location { file: def.file, line: def.line });
            for member in def.members {
                add_registered(target, member);
            }
        }
        for def in free {
            let key = match def.module_target() {
                Some(path) => claims.key(def.target_name(), path),
                None => {
                    let name = def.target_name();
                    if claims.is_ambiguous(name) {
                        tracing::warn!(
                            target_name = name,
                            member = def.member.name,
                            "example names an ambiguous target; use the full path"
                        );
                        continue;
                    }
                    catalog.key_of(name).unwrap_or(name)
                }
            };
            let target = catalog.entry(key, def.module_target());
            target.set_origin(def.module_path, Location { file: def.file, line: def.line });
            add_registered(target, &def.member);
        }

        tracing::debug!(targets = catalog.len(), "loaded example registry");
        catalog
    }

    fn entry(&mut self, key: &'static str, path: Option<&'static str>) -> &mut TargetType {
        if let Some(path) = path {
            self.paths.insert(path, key);
        }
        self.targets
            .entry(key)
            .or_insert_with(|| TargetType::new(key))
    }

    fn key_of(&self, name: &str) -> Option<&'static str> {
        match self.targets.get_key_value(name) {
            Some((key, _)) => Some(*key),
            None => self.paths.get(name).copied(),
        }
    }

    /// Add a hand-built target
    pub fn insert(&mut self, target: TargetType) -> Result<(), CatalogError> {
        if self.targets.contains_key(target.name()) {
            return Err(CatalogError::DuplicateTarget(target.name().to_string()));
        }
        self.targets.insert(target.name(), target);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_target(mut self, target: TargetType) -> Result<Self, CatalogError> {
        self.insert(target)?;
        Ok(self)
    }

    /// Resolve a target handle: a registered name or a full type path
    pub fn resolve(&self, name: &str) -> Result<&TargetType, TypeNotFoundError> {
        self.key_of(name)
            .and_then(|key| self.targets.get(key))
            .ok_or_else(|| TypeNotFoundError::new(name))
    }

    /// All targets, ordered by name
    pub fn targets(&self) -> impl Iterator<Item = &TargetType> {
        self.targets.values()
    }

    /// Number of targets
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the catalog has no targets
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Every distinct origin claiming each short target name
struct Claims(BTreeMap<&'static str, BTreeSet<&'static str>>);

impl Claims {
    fn collect(blocks: &[&TargetDef], free: &[&ExampleDef]) -> Self {
        let mut claims: BTreeMap<&'static str, BTreeSet<&'static str>> = BTreeMap::new();
        for def in blocks {
            claims.entry(def.name).or_default().insert(def.path);
        }
        for def in free {
            if let Some(path) = def.module_target() {
                claims.entry(def.target_name()).or_default().insert(path);
            }
        }

        for (name, paths) in &claims {
            if paths.len() > 1 {
                let e = CatalogError::DuplicateTarget(name.to_string());
                tracing::warn!(error = %e, paths = ?paths, "keeping targets apart under their full paths");
            }
        }
        Self(claims)
    }

    fn is_ambiguous(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(|paths| paths.len() > 1)
    }

    /// Short name when unambiguous, otherwise the full path
    fn key(&self, name: &'static str, path: &'static str) -> &'static str {
        if self.is_ambiguous(name) { path } else { name }
    }
}

fn add_registered(target: &mut TargetType, def: &MemberDef) {
    if let Err(e) = target.push(Member::from(def)) {
        tracing::warn!(error = %e, "ignoring repeated registration");
    }
}
