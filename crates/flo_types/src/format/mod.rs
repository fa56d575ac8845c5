//! Type labels for diagnostics.
//!
//! A label is the concatenation, in fixed order, of the qualifier, the kind
//! name, the indirection markers and the final-link marker:
//! `const i32 **`, `u8 ** const`, `f64`. Anything that is not a real
//! signature renders as `<unknown>`.

use std::fmt;

use crate::{Kind, TypeFacts};

const INDIRECTION_MARKERS: [&str; 5] = ["", " *", " **", " ***", " ****"];

impl TypeFacts {
    /// Format these facts as a human-readable label.
    pub fn label(&self) -> String {
        let mut buf = String::new();
        self.format_label_into(&mut buf);
        buf
    }

    /// Format the label into an existing string buffer.
    pub fn format_label_into(&self, buf: &mut String) {
        let markers = match INDIRECTION_MARKERS.get(usize::from(self.depth)) {
            Some(markers) if !self.is_unknown() => markers,
            _ => {
                buf.push_str(Kind::Unknown.name());
                return;
            }
        };
        if self.is_immutable() {
            buf.push_str("const ");
        }
        buf.push_str(self.kind.name());
        buf.push_str(markers);
        if self.is_final_link_immutable() {
            buf.push_str(" const");
        }
    }
}

impl fmt::Display for TypeFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.format_label_into(&mut buf);
        f.write_str(&buf)
    }
}
