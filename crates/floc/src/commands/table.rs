//! `floc table`: every registered type, in ordinal order.
//!
//! Distinct pointer chains can share a signature (`*const *const *mut u8` and
//! `*mut *const *mut u8` both read `u8 *** const`), so ordinals repeat.

use std::fmt::Write as _;

use flo_types::{RegistryEntry, TypeRegistry};

/// Render the registry as a table, optionally restricted to one depth.
pub fn render_table(registry: &TypeRegistry, depth: Option<u8>) -> String {
    let mut rows: Vec<&RegistryEntry> = match depth {
        Some(depth) => registry.at_depth(depth).collect(),
        None => registry.iter().collect(),
    };
    rows.sort_by_key(|entry| entry.facts.ordinal());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<22} {:>5} {:>5}  rust type",
        "ord", "label", "depth", "size"
    );
    for entry in rows {
        let facts = entry.facts;
        let _ = writeln!(
            out,
            "{:>3}  {:<22} {:>5} {:>5}  {}",
            facts.ordinal(),
            facts.label(),
            facts.depth,
            facts.element_size,
            entry.type_name
        );
    }
    out
}

#[tracing::instrument(level = "debug")]
pub fn run_table(depth: Option<u8>) {
    print!("{}", render_table(TypeRegistry::global(), depth));
}
