//! Compile-time type classification.
//!
//! Given a scalar, or a pointer, reference, in-place block or box chain that
//! ends in one, this crate answers four questions without evaluating the
//! value:
//!
//! - which primitive [`Kind`] the chain ends in,
//! - how many links (`depth`) lead there, up to [`MAX_DEPTH`],
//! - which [`Qualifiers`] the links carry,
//! - how large the final scalar is.
//!
//! # Dispatch
//!
//! The primary path is the [`Classify`] trait: facts are associated constants
//! resolved during monomorphization, so a type outside the closed set is a
//! compile error. [`TypeRegistry`] is the total counterpart: a table keyed by
//! `TypeId`, built once, that answers [`TypeFacts::UNKNOWN`] for any other
//! `'static` type. The registry trades the compile-time guarantee for a
//! runtime lookup and exists for callers that cannot name a `Classify` bound.
//!
//! # Example
//!
//! ```
//! use flo_types::{classify, Kind};
//!
//! let value = 3_i16;
//! let link: *const i16 = &value;
//! let facts = classify!(link);
//! assert_eq!(facts.kind, Kind::I16);
//! assert_eq!(facts.depth, 1);
//! assert_eq!(facts.label(), "const i16 *");
//! ```

/// Invoke `$callback!` with the closed set of scalar types and their kinds.
macro_rules! for_each_scalar {
    ($callback:ident) => {
        $callback! {
            ::core::ffi::c_void => Void,
            bool => Bool,
            char => Char,
            i8 => I8,
            u8 => U8,
            i16 => I16,
            u16 => U16,
            i32 => I32,
            u32 => U32,
            i64 => I64,
            u64 => U64,
            i128 => I128,
            u128 => U128,
            isize => Isize,
            usize => Usize,
            f32 => F32,
            f64 => F64,
        }
    };
}

mod classify;
mod facts;
mod format;
mod kind;
mod qualifiers;
mod registry;

pub use classify::{
    classify_kind, element_size, facts, facts_of, indirection_depth, is_final_link_immutable,
    is_immutable, is_void, Classify,
};
pub use facts::{Link, TypeFacts, MAX_DEPTH, SIGNATURE_COUNT};
pub use kind::Kind;
pub use qualifiers::Qualifiers;
pub use registry::{classify_any, facts_of_any, RegistryEntry, TypeRegistry};

/// Resolve the [`TypeFacts`] of an expression's static type.
///
/// The expression is borrowed, never moved or read.
#[macro_export]
macro_rules! classify {
    ($value:expr) => {
        $crate::facts_of(&$value)
    };
}

/// Print the type label of an expression to stdout.
///
/// ```
/// let bytes = [0_u8; 3];
/// flo_types::printtype!(bytes); // The type of the variable "bytes": u8 *
/// ```
#[macro_export]
macro_rules! printtype {
    ($value:expr) => {
        ::std::println!(
            "The type of the variable \"{}\": {}",
            ::core::stringify!($value),
            $crate::facts_of(&$value)
        )
    };
}

// Size assertions to prevent accidental regressions.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TypeFacts;
    // kind (1) + depth (1) + qualifiers (1) + padding + element_size (8)
    const _: () = assert!(std::mem::size_of::<TypeFacts>() == 16);
}
