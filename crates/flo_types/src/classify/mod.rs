//! Compile-time classification through trait resolution.
//!
//! Every supported type implements [`Classify`], whose associated constant
//! holds the type's facts. Scalars are listed once in `for_each_scalar!`;
//! pointer, reference, array and box types derive their facts from the type
//! they point at, so a chain is resolved link by link during monomorphization
//! and costs nothing at runtime.
//!
//! Types outside the closed set have no `Classify` impl. Use
//! [`crate::facts_of_any`] for a lookup that is total over `'static` types.

use core::ffi::c_void;

use crate::{Kind, Link, TypeFacts};

/// Static facts of a supported type.
pub trait Classify {
    /// Facts resolved for `Self`; [`TypeFacts::UNKNOWN`] past the depth ceiling.
    const FACTS: TypeFacts;
}

macro_rules! impl_classify_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Classify for $ty {
                const FACTS: TypeFacts = TypeFacts::scalar(Kind::$kind);
            }
        )*
    };
}

for_each_scalar!(impl_classify_scalar);

impl<T: Classify> Classify for *const T {
    const FACTS: TypeFacts = T::FACTS.through(Link::Shared);
}

impl<T: Classify> Classify for *mut T {
    const FACTS: TypeFacts = T::FACTS.through(Link::Exclusive);
}

impl<T: Classify> Classify for &T {
    const FACTS: TypeFacts = T::FACTS.through(Link::Shared);
}

impl<T: Classify> Classify for &mut T {
    const FACTS: TypeFacts = T::FACTS.through(Link::Exclusive);
}

// An in-place block owns its elements and counts as one exclusive link.
impl<T: Classify, const N: usize> Classify for [T; N] {
    const FACTS: TypeFacts = T::FACTS.through(Link::Exclusive);
}

impl<T: Classify> Classify for Box<T> {
    const FACTS: TypeFacts = T::FACTS.through(Link::Exclusive);
}

/// Facts of `T`.
#[inline]
pub const fn facts<T: Classify>() -> TypeFacts {
    T::FACTS
}

/// Facts of the static type of `value`. The value itself is never read.
#[inline]
pub const fn facts_of<T: Classify>(_value: &T) -> TypeFacts {
    T::FACTS
}

/// Kind of the scalar `value` ends in.
#[inline]
pub const fn classify_kind<T: Classify>(_value: &T) -> Kind {
    T::FACTS.kind
}

/// Number of links between `value` and its scalar; 0 past the depth ceiling.
#[inline]
pub const fn indirection_depth<T: Classify>(_value: &T) -> u8 {
    T::FACTS.depth
}

/// Check if the scalar behind `value` is reached through a shared link.
#[inline]
pub const fn is_immutable<T: Classify>(_value: &T) -> bool {
    T::FACTS.is_immutable()
}

/// Check if the innermost pointer behind `value` cannot be reseated.
///
/// That pointer is the second link above the scalar, and the bit is set when
/// the link holding it is shared (`*const *mut T` but not `*mut *const T`).
/// At depth 1 the innermost pointer is `value`'s own binding, whose
/// mutability is not part of its type, so this is always false there.
#[inline]
pub const fn is_final_link_immutable<T: Classify>(_value: &T) -> bool {
    T::FACTS.is_final_link_immutable()
}

/// Size of the scalar after dereferencing every link of `value`.
#[inline]
pub const fn element_size<T: Classify>(_value: &T) -> usize {
    T::FACTS.element_size
}

/// Check if `value` is an opaque pointer chain (`*const c_void` and kin).
#[inline]
pub const fn is_void<T: Classify>(_value: &T) -> bool {
    T::FACTS.is(Kind::Void)
}

// `c_void` is only ever inspected behind a pointer.
const _: () = assert!(<*const c_void as Classify>::FACTS.element_size == 1);

#[cfg(test)]
mod tests;
