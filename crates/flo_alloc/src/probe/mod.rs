//! Allocator usable-size probes.
//!
//! A probe answers one question: how many bytes does the allocator consider
//! usable at this address? Zero means "not a block I know about", which is
//! also the answer on platforms with no such introspection. The inspector
//! takes its probe by value, so tests swap in a [`FixedProbe`].
//!
//! # Platform Support
//!
//! - **Linux**: `malloc_usable_size`
//! - **Apple targets**: `malloc_size`
//! - **Windows**: `_msize`
//! - **Elsewhere**: always 0

use core::ffi::c_void;

use rustc_hash::FxHashMap;

/// Capability to query the usable size of an allocation.
///
/// Implementations must return 0 for addresses they cannot answer for and
/// must not read, write or free the memory at `address`.
pub trait UsableSize {
    fn usable_size(&self, address: *const c_void) -> usize;
}

impl<P: UsableSize + ?Sized> UsableSize for &P {
    #[inline]
    fn usable_size(&self, address: *const c_void) -> usize {
        (**self).usable_size(address)
    }
}

impl<P: UsableSize + ?Sized> UsableSize for Box<P> {
    #[inline]
    fn usable_size(&self, address: *const c_void) -> usize {
        (**self).usable_size(address)
    }
}

/// Probe that knows nothing. Every address reports 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoProbe;

impl UsableSize for NoProbe {
    #[inline]
    fn usable_size(&self, _address: *const c_void) -> usize {
        0
    }
}

/// Probe backed by the system allocator's own bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemProbe {
    _private: (),
}

impl SystemProbe {
    /// Create a probe that asks the system allocator.
    ///
    /// # Safety
    ///
    /// The allocator reads its own block header in front of `address`. Every
    /// address this probe is asked about must be null or the start of a live
    /// block obtained from the system allocator. In-place blocks, statics and
    /// stack values must be inspected with a probe that does not dereference,
    /// such as [`NoProbe`].
    #[allow(unsafe_code, reason = "caller upholds the allocator's contract")]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }

    /// Check if this platform offers usable-size introspection at all.
    pub const fn is_supported() -> bool {
        cfg!(any(
            target_os = "linux",
            target_vendor = "apple",
            target_os = "windows"
        ))
    }
}

impl UsableSize for SystemProbe {
    #[allow(unsafe_code, reason = "FFI call into the system allocator")]
    fn usable_size(&self, address: *const c_void) -> usize {
        if address.is_null() {
            return 0;
        }
        // SAFETY: `SystemProbe::new` obliges the caller to present only null
        // or live system-allocator blocks; null was handled above.
        unsafe { sys::usable_size(address) }
    }
}

#[allow(unsafe_code, reason = "FFI declarations for allocator introspection")]
mod sys {
    use core::ffi::c_void;

    #[cfg(target_os = "linux")]
    pub(super) unsafe fn usable_size(address: *const c_void) -> usize {
        libc::malloc_usable_size(address.cast_mut().cast())
    }

    #[cfg(target_vendor = "apple")]
    pub(super) unsafe fn usable_size(address: *const c_void) -> usize {
        libc::malloc_size(address.cast())
    }

    #[cfg(target_os = "windows")]
    extern "C" {
        fn _msize(memblock: *mut c_void) -> usize;
    }

    #[cfg(target_os = "windows")]
    pub(super) unsafe fn usable_size(address: *const c_void) -> usize {
        _msize(address.cast_mut())
    }

    #[cfg(not(any(
        target_os = "linux",
        target_vendor = "apple",
        target_os = "windows"
    )))]
    pub(super) unsafe fn usable_size(_address: *const c_void) -> usize {
        0
    }
}

/// Deterministic probe answering from a table of known blocks.
///
/// Only exact block addresses are recognised, like a real allocator.
#[derive(Clone, Debug, Default)]
pub struct FixedProbe {
    blocks: FxHashMap<usize, usize>,
}

impl FixedProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a block starting at `address` with `usable` bytes.
    #[must_use]
    pub fn with<T: ?Sized>(mut self, address: *const T, usable: usize) -> Self {
        self.insert(address, usable);
        self
    }

    /// Record a block starting at `address` with `usable` bytes.
    pub fn insert<T: ?Sized>(&mut self, address: *const T, usable: usize) {
        self.blocks.insert(address.cast::<u8>() as usize, usable);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl UsableSize for FixedProbe {
    fn usable_size(&self, address: *const c_void) -> usize {
        self.blocks
            .get(&(address as usize))
            .copied()
            .unwrap_or(0)
    }
}
