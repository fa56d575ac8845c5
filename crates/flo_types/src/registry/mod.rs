//! Runtime registry of supported signatures.
//!
//! The `TypeRegistry` maps the `TypeId` of every supported `'static` type to
//! its [`TypeFacts`], so classification can be answered for a type that is
//! only known to be `'static`. Lookups of anything else return
//! [`TypeFacts::UNKNOWN`] instead of failing.
//!
//! # Design
//!
//! - Populated once from the `Classify` impls, so both paths always agree
//! - Entries in registration order (`Vec`) for deterministic iteration
//! - `FxHashMap` index for O(1) lookup by `TypeId`
//! - Every `*const`/`*mut` chain up to the depth ceiling, and each chain
//!   below the ceiling behind one outermost `&'static`, `&'static mut` or
//!   `Box` link
//!
//! Not registered: references or boxes nested inside a chain, and in-place
//! blocks (`[T; N]`), whose length makes the set open-ended. `Classify`
//! still resolves those; the registry answers `UNKNOWN`.

use std::any::{type_name, TypeId};
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::{Classify, Kind, TypeFacts};

/// Global type registry singleton.
static GLOBAL_REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// One registered type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    pub type_id: TypeId,
    /// Rust spelling of the type, for diagnostics.
    pub type_name: &'static str,
    pub facts: TypeFacts,
}

/// Table from `TypeId` to classifier facts.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    /// Entries in registration order.
    entries: Vec<RegistryEntry>,

    /// `TypeId` -> index into `entries`.
    by_type: FxHashMap<TypeId, usize>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every scalar in every raw-pointer chain up
    /// to the depth ceiling, plus those chains behind one outer reference or
    /// box.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();

        macro_rules! register_scalars {
            ($($ty:ty => $kind:ident),* $(,)?) => {
                $( register_chain::<$ty>(&mut registry); )*
            };
        }
        for_each_scalar!(register_scalars);

        tracing::debug!(entries = registry.len(), "type registry populated");
        registry
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::with_builtin)
    }

    /// Register `T`.
    ///
    /// Returns `false` if `T` was already present or resolves to
    /// [`TypeFacts::UNKNOWN`]; neither case changes the registry.
    pub fn register<T: Classify + 'static>(&mut self) -> bool {
        let facts = T::FACTS;
        if facts.is_unknown() {
            return false;
        }
        let type_id = TypeId::of::<T>();
        if self.by_type.contains_key(&type_id) {
            return false;
        }
        self.by_type.insert(type_id, self.entries.len());
        self.entries.push(RegistryEntry {
            type_id,
            type_name: type_name::<T>(),
            facts,
        });
        true
    }

    /// Look up the facts of `T`, or `UNKNOWN` if it is not registered.
    #[inline]
    pub fn lookup<T: ?Sized + 'static>(&self) -> TypeFacts {
        self.lookup_id(TypeId::of::<T>())
    }

    /// Look up the facts of a `TypeId`, or `UNKNOWN` if it is not registered.
    pub fn lookup_id(&self, type_id: TypeId) -> TypeFacts {
        self.by_type
            .get(&type_id)
            .map_or(TypeFacts::UNKNOWN, |&index| self.entries[index].facts)
    }

    /// Check if `T` is registered.
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.by_type.contains_key(&TypeId::of::<T>())
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Iterate entries of one depth, in registration order.
    pub fn at_depth(&self, depth: u8) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter().filter(move |e| e.facts.depth == depth)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Each level registers its type, the type behind one outer reference or box,
// and recurses through both raw-pointer links.
fn register_chain<T: Classify + 'static>(registry: &mut TypeRegistry) {
    register_with_outer::<T>(registry);
    register_depth1::<*const T>(registry);
    register_depth1::<*mut T>(registry);
}

fn register_depth1<T: Classify + 'static>(registry: &mut TypeRegistry) {
    register_with_outer::<T>(registry);
    register_depth2::<*const T>(registry);
    register_depth2::<*mut T>(registry);
}

fn register_depth2<T: Classify + 'static>(registry: &mut TypeRegistry) {
    register_with_outer::<T>(registry);
    register_depth3::<*const T>(registry);
    register_depth3::<*mut T>(registry);
}

fn register_depth3<T: Classify + 'static>(registry: &mut TypeRegistry) {
    register_with_outer::<T>(registry);
    registry.register::<*const T>();
    registry.register::<*mut T>();
}

fn register_with_outer<T: Classify + 'static>(registry: &mut TypeRegistry) {
    registry.register::<T>();
    registry.register::<&'static T>();
    registry.register::<&'static mut T>();
    registry.register::<Box<T>>();
}

/// Facts of `value`'s type from the global registry; `UNKNOWN` for any type
/// outside the closed set.
///
/// In-place blocks (`[T; N]`) and references or boxes below the outermost
/// link are not registered and also give `UNKNOWN`; use
/// [`crate::facts_of`] for those.
#[inline]
pub fn facts_of_any<T: ?Sized + 'static>(_value: &T) -> TypeFacts {
    TypeRegistry::global().lookup::<T>()
}

/// Kind of `value`'s type from the global registry; `Kind::Unknown` for any
/// type outside the closed set.
#[inline]
pub fn classify_any<T: ?Sized + 'static>(value: &T) -> Kind {
    facts_of_any(value).kind
}
