//! Building allocation records from classifier facts and a probe.
//!
//! The decision is ordered: the allocator's answer wins, then the static
//! layout of an in-place block, and anything left is `Dynamic`.

use core::ffi::c_void;
use core::mem::{size_of, size_of_val};

use flo_types::Classify;

use crate::{AllocationRecord, NoProbe, Provenance, UsableSize};

/// A classified type with one link that can be followed to memory.
pub trait Indirect: Classify {
    /// The type one link down.
    type Element;

    /// Address presented to the probe.
    ///
    /// The pointee for pointers, references and boxes. The block itself for
    /// in-place blocks. Never dereferenced here.
    fn address(&self) -> *const c_void;
}

impl<T: Classify> Indirect for *const T {
    type Element = T;

    #[inline]
    fn address(&self) -> *const c_void {
        (*self).cast()
    }
}

impl<T: Classify> Indirect for *mut T {
    type Element = T;

    #[inline]
    fn address(&self) -> *const c_void {
        (*self).cast_const().cast()
    }
}

impl<T: Classify> Indirect for &T {
    type Element = T;

    #[inline]
    fn address(&self) -> *const c_void {
        core::ptr::from_ref::<T>(*self).cast()
    }
}

impl<T: Classify> Indirect for &mut T {
    type Element = T;

    #[inline]
    fn address(&self) -> *const c_void {
        core::ptr::from_ref::<T>(&**self).cast()
    }
}

impl<T: Classify> Indirect for Box<T> {
    type Element = T;

    #[inline]
    fn address(&self) -> *const c_void {
        core::ptr::from_ref::<T>(&**self).cast()
    }
}

impl<T: Classify, const N: usize> Indirect for [T; N] {
    type Element = T;

    #[inline]
    fn address(&self) -> *const c_void {
        self.as_ptr().cast()
    }
}

/// Builds [`AllocationRecord`]s using an injected usable-size probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Inspector<P = NoProbe> {
    probe: P,
}

impl<P: UsableSize> Inspector<P> {
    pub const fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Describe `value`, labelled `name`.
    ///
    /// Never fails. With a probe that knows nothing, pointers come back
    /// `Dynamic` and in-place blocks (other than pointer-sized ones) `Fixed`.
    #[tracing::instrument(level = "trace", skip_all, fields(value = name))]
    pub fn inspect<V: Indirect>(&self, name: &'static str, value: &V) -> AllocationRecord {
        let facts = V::FACTS;
        let usable = self.probe.usable_size(value.address());

        let record = if usable > 0 {
            AllocationRecord::new(
                name,
                Provenance::Allocated,
                facts.depth,
                facts.element_size,
                usable,
            )
        } else if is_fixed_block(value) {
            AllocationRecord::new(
                name,
                Provenance::Fixed,
                facts.depth,
                size_of::<V::Element>(),
                size_of_val(value),
            )
        } else {
            AllocationRecord::new(
                name,
                Provenance::Dynamic,
                facts.depth,
                facts.element_size,
                usable,
            )
        };

        tracing::trace!(
            method = %record.method,
            total_size = record.total_size,
            element_count = record.element_count,
            "allocation record built"
        );
        record
    }

    /// Check if the probe knows a block at `value`'s address.
    pub fn is_allocated<V: Indirect>(&self, value: &V) -> bool {
        self.probe.usable_size(value.address()) > 0
    }
}

/// Check if `value` is an in-place block rather than a single link.
///
/// The test compares the footprint of `value` with that of one pointer, so
/// it CONFUSES fixed blocks that happen to be exactly pointer-sized, such as
/// `[u8; 8]`, `[i16; 4]` and `[i32; 2]` on 64-bit targets: 8 bytes is also
/// the size of one pointer. Those report `false` and fall through to the
/// probe. You must already know what kind of 8-byte block you have.
pub fn is_fixed_block<V: Indirect>(value: &V) -> bool {
    size_of_val(value) != size_of::<*const c_void>()
}

/// Number of elements in an in-place block; for a single link, the number
/// of elements that would fit in a pointer's footprint.
pub fn fixed_block_len<V: Indirect>(value: &V) -> usize {
    match size_of::<V::Element>() {
        0 => 0,
        element => size_of_val(value) / element,
    }
}
