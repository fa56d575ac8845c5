//! Immutability qualifiers of a classified type.
//!
//! Rust puts mutability on links (`&T` vs `&mut T`, `*const T` vs `*mut T`)
//! rather than on value types, so both bits are derived from the shape of
//! the indirection chain:
//!
//! - **`IMMUTABLE`**: the scalar is reached through a shared link.
//! - **`FINAL_LINK_IMMUTABLE`**: the pointer nearest the scalar sits behind a
//!   shared link, so it cannot be reseated through this chain.

use bitflags::bitflags;

bitflags! {
    /// Qualifier pattern of a type signature.
    ///
    /// A depth-0 signature never carries either bit.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Qualifiers: u8 {
        /// The referenced scalar cannot be written through this chain.
        const IMMUTABLE = 1 << 0;
        /// The innermost pointer cannot be reseated through this chain.
        const FINAL_LINK_IMMUTABLE = 1 << 1;
    }
}

impl Qualifiers {
    /// Every qualifier pattern, in bit order.
    pub const PATTERNS: [Self; 4] = [
        Self::empty(),
        Self::IMMUTABLE,
        Self::FINAL_LINK_IMMUTABLE,
        Self::IMMUTABLE.union(Self::FINAL_LINK_IMMUTABLE),
    ];

    /// Check if the `IMMUTABLE` bit is set.
    #[inline]
    pub const fn is_immutable(self) -> bool {
        self.contains(Self::IMMUTABLE)
    }

    /// Check if the `FINAL_LINK_IMMUTABLE` bit is set.
    #[inline]
    pub const fn is_final_link_immutable(self) -> bool {
        self.contains(Self::FINAL_LINK_IMMUTABLE)
    }
}

#[cfg(test)]
mod tests;
