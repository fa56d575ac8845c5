//! Allocation descriptors.
//!
//! An [`AllocationRecord`] describes what a pointer or in-place block refers
//! to: element size, total bytes, element count and how those figures were
//! obtained ([`Provenance`]). Static facts come from `flo_types`; the only
//! runtime input is a [`UsableSize`] probe injected into the [`Inspector`].
//!
//! # Example
//!
//! ```
//! use flo_alloc::{allocated_info, Inspector, NoProbe, Provenance};
//!
//! let inspector = Inspector::new(NoProbe);
//! let grid = [0_i16; 8];
//! let record = allocated_info!(inspector, grid);
//! assert_eq!(record.name, "grid");
//! assert_eq!(record.method, Provenance::Fixed);
//! assert_eq!(record.element_count, 8);
//! ```

mod inspect;
mod probe;
mod record;

pub use inspect::{fixed_block_len, is_fixed_block, Indirect, Inspector};
pub use probe::{FixedProbe, NoProbe, SystemProbe, UsableSize};
pub use record::{AllocationRecord, Provenance};

/// Build an [`AllocationRecord`] for an expression, named by its source text.
///
/// With one argument the record is built with [`NoProbe`].
#[macro_export]
macro_rules! allocated_info {
    ($value:expr) => {
        $crate::Inspector::new($crate::NoProbe).inspect(::core::stringify!($value), &$value)
    };
    ($inspector:expr, $value:expr) => {
        $inspector.inspect(::core::stringify!($value), &$value)
    };
}
