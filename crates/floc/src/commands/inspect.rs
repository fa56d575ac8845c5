//! `floc inspect`: allocation records for a fixed set of sample values.
//!
//! Heap samples go through the chosen probe. In-place samples always use
//! [`NoProbe`]: their addresses are not allocator blocks, and the system probe
//! must never see them.

use std::fmt::Write as _;
use std::ptr;

use flo_alloc::{
    allocated_info, AllocationRecord, Inspector, NoProbe, SystemProbe, UsableSize,
};

use crate::config::ProbeChoice;

/// Build records for every sample value.
pub fn sample_records(probe: ProbeChoice) -> Vec<AllocationRecord> {
    let mut records = match probe {
        ProbeChoice::None => heap_records(&Inspector::new(NoProbe)),
        ProbeChoice::System => {
            if !SystemProbe::is_supported() {
                tracing::warn!("no allocator introspection on this target; sizes will be 0");
            }
            // SAFETY: `heap_records` presents only null or the starts of live
            // blocks from the default global allocator, which is the system
            // allocator in this binary.
            #[allow(unsafe_code, reason = "system probe over known heap blocks")]
            let inspector = Inspector::new(unsafe { SystemProbe::new() });
            heap_records(&inspector)
        }
    };
    records.extend(in_place_records());
    records
}

fn heap_records<P: UsableSize>(inspector: &Inspector<P>) -> Vec<AllocationRecord> {
    let block = vec![0_i32; 10].into_boxed_slice();
    let ints: *const i32 = block.as_ptr();
    let boxed = Box::new(0.5_f64);
    let null: *const u8 = ptr::null();

    vec![
        allocated_info!(inspector, ints),
        allocated_info!(inspector, boxed),
        allocated_info!(inspector, null),
    ]
}

fn in_place_records() -> Vec<AllocationRecord> {
    let inspector = Inspector::new(NoProbe);
    let shorts = [0_i16; 8];
    let bytes = [0_u8; 8];
    let chars = ['f', 'l', 'o'];

    vec![
        allocated_info!(inspector, shorts),
        allocated_info!(inspector, bytes),
        allocated_info!(inspector, chars),
    ]
}

/// Render records one per line.
pub fn render_records(records: &[AllocationRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{record}");
    }
    out
}

#[tracing::instrument(level = "debug")]
pub fn run_inspect(probe: ProbeChoice) {
    print!("{}", render_records(&sample_records(probe)));
}
