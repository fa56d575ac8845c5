//! Allocation records.

use std::fmt;

/// How an allocation record's sizes were obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Provenance {
    /// Neither the allocator nor the static layout could size the block.
    /// Sizes are whatever the probe returned, usually 0.
    Dynamic = 0,
    /// The allocator reported a usable size for the pointee.
    Allocated = 1,
    /// The value is an in-place block whose size is known statically.
    Fixed = 2,
}

impl Provenance {
    pub const ALL: [Self; 3] = [Self::Dynamic, Self::Allocated, Self::Fixed];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Dynamic => "dynamic",
            Self::Allocated => "allocated",
            Self::Fixed => "fixed",
        }
    }

    /// Sizes are statically exact, not an allocator's rounded-up figure.
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Fixed)
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptor of a pointer or in-place block.
///
/// `total_size` of an `Allocated` record is the allocator's usable size,
/// which may exceed what was requested, so the derived `element_count` may
/// exceed the requested count too.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationRecord {
    /// Source text of the inspected expression.
    pub name: &'static str,
    pub method: Provenance,
    pub depth: u8,
    pub element_size: usize,
    pub total_size: usize,
    pub element_count: usize,
}

impl AllocationRecord {
    /// Build a record, deriving `element_count` from the two sizes.
    pub const fn new(
        name: &'static str,
        method: Provenance,
        depth: u8,
        element_size: usize,
        total_size: usize,
    ) -> Self {
        let element_count = if element_size == 0 {
            0
        } else {
            total_size / element_size
        };
        Self {
            name,
            method,
            depth,
            element_size,
            total_size,
            element_count,
        }
    }

    /// Check if the sizes describe real memory.
    ///
    /// `Dynamic` records carry no usable information.
    pub const fn is_trustworthy(&self) -> bool {
        !matches!(self.method, Provenance::Dynamic) && self.element_size > 0
    }
}

impl fmt::Display for AllocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} depth={} element_size={} total_size={} element_count={}",
            self.name,
            self.method,
            self.depth,
            self.element_size,
            self.total_size,
            self.element_count
        )
    }
}

#[cfg(test)]
mod tests;
