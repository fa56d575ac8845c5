//! Resolved facts about a type signature.
//!
//! `TypeFacts` bundles everything the classifier knows about a type: the
//! kind of the scalar it ends in, how many links lead there, the qualifier
//! pattern of those links and the scalar's size. Facts for pointer types are
//! built inside-out with [`TypeFacts::through`], one link at a time.

use crate::{Kind, Qualifiers};

/// Deepest supported indirection chain.
pub const MAX_DEPTH: u8 = 4;

/// Number of distinct signatures: every kind at depth 0, two qualifier
/// patterns at depth 1, four at depths 2 through 4.
pub const SIGNATURE_COUNT: usize = Kind::COUNT * (1 + 2 + 4 * (MAX_DEPTH as usize - 1));

/// Mutability of one link in an indirection chain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Link {
    /// `&T` or `*const T`: the target cannot be written through it.
    Shared,
    /// `&mut T`, `*mut T`, or an owning link (`[T; N]`, `Box<T>`).
    Exclusive,
}

impl Link {
    /// Check if the target cannot be written through this link.
    #[inline]
    pub const fn is_shared(self) -> bool {
        matches!(self, Self::Shared)
    }
}

/// Everything the classifier resolves for one type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeFacts {
    /// Kind of the scalar at the end of the chain.
    pub kind: Kind,
    /// Number of links between the value and its scalar, `0..=MAX_DEPTH`.
    pub depth: u8,
    /// Qualifier pattern of the chain.
    pub qualifiers: Qualifiers,
    /// Size of the scalar after dereferencing every link.
    pub element_size: usize,
}

impl TypeFacts {
    /// Sentinel for unsupported types and for chains deeper than `MAX_DEPTH`.
    pub const UNKNOWN: Self = Self {
        kind: Kind::Unknown,
        depth: 0,
        qualifiers: Qualifiers::empty(),
        element_size: 0,
    };

    /// Facts of a bare scalar.
    #[inline]
    pub const fn scalar(kind: Kind) -> Self {
        Self {
            kind,
            depth: 0,
            qualifiers: Qualifiers::empty(),
            element_size: kind.size(),
        }
    }

    /// Build facts directly from their parts.
    ///
    /// Returns `UNKNOWN` when the parts cannot describe a real signature: an
    /// unknown kind, a depth past `MAX_DEPTH`, any qualifier at depth 0, or
    /// `FINAL_LINK_IMMUTABLE` at depth 1.
    pub const fn new(kind: Kind, depth: u8, qualifiers: Qualifiers) -> Self {
        let facts = Self {
            kind,
            depth,
            qualifiers,
            element_size: kind.size(),
        };
        if facts.is_well_formed() {
            facts
        } else {
            Self::UNKNOWN
        }
    }

    // Fields are public: facts built by hand can break any of these.
    const fn is_well_formed(self) -> bool {
        self.kind.is_known()
            && self.depth <= MAX_DEPTH
            && match self.depth {
                0 => self.qualifiers.is_empty(),
                1 => !self.qualifiers.is_final_link_immutable(),
                _ => true,
            }
    }

    /// Facts of a type reaching `self` through one more `link`.
    ///
    /// The first link above the scalar decides `IMMUTABLE`; the second one
    /// decides `FINAL_LINK_IMMUTABLE`. Links further out only add depth.
    pub const fn through(self, link: Link) -> Self {
        if self.is_unknown() || self.depth >= MAX_DEPTH {
            return Self::UNKNOWN;
        }
        let qualifiers = match self.depth {
            0 if link.is_shared() => self.qualifiers.union(Qualifiers::IMMUTABLE),
            1 if link.is_shared() => self.qualifiers.union(Qualifiers::FINAL_LINK_IMMUTABLE),
            _ => self.qualifiers,
        };
        Self {
            kind: self.kind,
            depth: self.depth + 1,
            qualifiers,
            element_size: self.element_size,
        }
    }

    /// Check if these facts describe no real signature: an unknown kind, a
    /// depth past `MAX_DEPTH`, or qualifiers the depth cannot carry.
    #[inline]
    pub const fn is_unknown(self) -> bool {
        !self.is_well_formed()
    }

    /// Check if the scalar at the end of the chain is `kind`.
    #[inline]
    pub const fn is(self, kind: Kind) -> bool {
        self.kind as u8 == kind as u8
    }

    /// Check if at least one link leads to the scalar.
    #[inline]
    pub const fn is_pointer(self) -> bool {
        self.depth > 0
    }

    /// Check if the scalar is reached through a shared link.
    #[inline]
    pub const fn is_immutable(self) -> bool {
        self.qualifiers.is_immutable()
    }

    /// Check if the pointer nearest the scalar sits behind a shared link.
    /// Always false below depth 2.
    #[inline]
    pub const fn is_final_link_immutable(self) -> bool {
        self.qualifiers.is_final_link_immutable()
    }

    /// Dense debugging number of this signature, `1..=SIGNATURE_COUNT`.
    ///
    /// Signatures are numbered by depth, then kind, then qualifier bits.
    /// `UNKNOWN`, and anything else that is not a real signature, is 0.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "SIGNATURE_COUNT fits in u16"
    )]
    pub const fn ordinal(self) -> u16 {
        if self.is_unknown() {
            return 0;
        }
        let Some(kind_index) = self.kind.index() else {
            return 0;
        };
        let mut offset = 1;
        let mut d = 0;
        while d < self.depth {
            offset += Kind::COUNT * patterns_at(d);
            d += 1;
        }
        (offset + kind_index * patterns_at(self.depth) + self.qualifiers.bits() as usize) as u16
    }

    /// Every valid signature, in ordinal order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=MAX_DEPTH).flat_map(|depth| {
            Kind::ALL.into_iter().flat_map(move |kind| {
                Qualifiers::PATTERNS
                    .into_iter()
                    .take(patterns_at(depth))
                    .map(move |qualifiers| Self::new(kind, depth, qualifiers))
            })
        })
    }
}

/// Number of qualifier patterns a signature of `depth` can carry.
const fn patterns_at(depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => 2,
        _ => 4,
    }
}
