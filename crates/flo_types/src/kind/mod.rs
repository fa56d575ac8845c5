//! Primitive kind tag for classifier dispatch.
//!
//! Every supported scalar has exactly one `Kind`. Pointer chains report the
//! kind of the scalar they end in.
//!
//! # Kind Ranges
//!
//! - 0: Opaque region (`c_void`)
//! - 1-2: Boolean and Unicode scalar
//! - 3-14: Integers, narrow first, signed before unsigned
//! - 15-16: Floating point
//! - 255: Unknown (sentinel for every unsupported type)

use std::fmt;

/// Primitive kind discriminant.
///
/// The set is closed: nothing outside `Kind::ALL` is ever classified, and
/// every other type resolves to [`Kind::Unknown`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    // === Opaque (0) ===
    /// Untyped addressable region (`c_void`).
    Void = 0,

    // === Non-numeric scalars (1-2) ===
    /// Boolean.
    Bool = 1,
    /// Unicode scalar value.
    Char = 2,

    // === Integers (3-14) ===
    /// Narrow signed integer.
    I8 = 3,
    /// Narrow unsigned integer (byte).
    U8 = 4,
    /// 16-bit signed integer.
    I16 = 5,
    /// 16-bit unsigned integer.
    U16 = 6,
    /// 32-bit signed integer.
    I32 = 7,
    /// 32-bit unsigned integer.
    U32 = 8,
    /// 64-bit signed integer.
    I64 = 9,
    /// 64-bit unsigned integer.
    U64 = 10,
    /// 128-bit signed integer.
    I128 = 11,
    /// 128-bit unsigned integer.
    U128 = 12,
    /// Pointer-width signed integer.
    Isize = 13,
    /// Pointer-width unsigned integer.
    Usize = 14,

    // === Floating point (15-16) ===
    /// 32-bit float.
    F32 = 15,
    /// 64-bit float.
    F64 = 16,

    // === Sentinel ===
    /// Anything outside the closed set.
    Unknown = 255,
}

impl Kind {
    /// Every classified kind, in discriminant order. Excludes `Unknown`.
    pub const ALL: [Kind; 17] = [
        Self::Void,
        Self::Bool,
        Self::Char,
        Self::I8,
        Self::U8,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::I128,
        Self::U128,
        Self::Isize,
        Self::Usize,
        Self::F32,
        Self::F64,
    ];

    /// Number of classified kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Check if this kind is in the closed set (not `Unknown`).
    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Check if this is the opaque `c_void` kind.
    #[inline]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }

    /// Check if this is the boolean kind.
    #[inline]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Check if this is the Unicode scalar kind.
    #[inline]
    pub const fn is_char(self) -> bool {
        matches!(self, Self::Char)
    }

    /// Check if this kind is an integer of any width.
    #[inline]
    pub const fn is_integer(self) -> bool {
        let v = self as u8;
        v >= 3 && v <= 14
    }

    /// Check if this kind is a signed integer or a float.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::F32
                | Self::F64
        )
    }

    /// Check if this kind is a floating-point type.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Position of this kind in [`Kind::ALL`], or `None` for `Unknown`.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Unknown => None,
            other => Some(other as usize),
        }
    }

    /// In-memory size of one scalar of this kind.
    ///
    /// `Void` counts as one byte, matching `size_of::<c_void>()`. `Unknown`
    /// is zero.
    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            Self::Void => size_of::<core::ffi::c_void>(),
            Self::Bool => size_of::<bool>(),
            Self::Char => size_of::<char>(),
            Self::I8 => size_of::<i8>(),
            Self::U8 => size_of::<u8>(),
            Self::I16 => size_of::<i16>(),
            Self::U16 => size_of::<u16>(),
            Self::I32 => size_of::<i32>(),
            Self::U32 => size_of::<u32>(),
            Self::I64 => size_of::<i64>(),
            Self::U64 => size_of::<u64>(),
            Self::I128 => size_of::<i128>(),
            Self::U128 => size_of::<u128>(),
            Self::Isize => size_of::<isize>(),
            Self::Usize => size_of::<usize>(),
            Self::F32 => size_of::<f32>(),
            Self::F64 => size_of::<f64>(),
            Self::Unknown => 0,
        }
    }

    /// Get the name of this kind as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::I128 => "i128",
            Self::U128 => "u128",
            Self::Isize => "isize",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Unknown => "<unknown>",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kind::{}", self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Kind must stay a single byte
const _: () = assert!(std::mem::size_of::<Kind>() == 1);
