use std::any::type_name;
use std::mem::size_of;

use super::*;
use crate::{Qualifiers, MAX_DEPTH};
use pretty_assertions::assert_eq;

const NONE: Qualifiers = Qualifiers::empty();
const IMM: Qualifiers = Qualifiers::IMMUTABLE;
const FIN: Qualifiers = Qualifiers::FINAL_LINK_IMMUTABLE;
const BOTH: Qualifiers = Qualifiers::IMMUTABLE.union(Qualifiers::FINAL_LINK_IMMUTABLE);

fn check<T: Classify>(kind: Kind, scalar_size: usize, depth: u8, qualifiers: Qualifiers) {
    let facts = T::FACTS;
    let name = type_name::<T>();
    assert_eq!(facts.kind, kind, "kind of {name}");
    assert_eq!(facts.depth, depth, "depth of {name}");
    assert_eq!(facts.qualifiers, qualifiers, "qualifiers of {name}");
    assert_eq!(facts.element_size, scalar_size, "element size of {name}");
}

macro_rules! check_chains {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            let size = size_of::<$ty>();
            let kind = Kind::$kind;

            check::<$ty>(kind, size, 0, NONE);

            check::<*mut $ty>(kind, size, 1, NONE);
            check::<*const $ty>(kind, size, 1, IMM);
            check::<&mut $ty>(kind, size, 1, NONE);
            check::<&$ty>(kind, size, 1, IMM);

            check::<*mut *mut $ty>(kind, size, 2, NONE);
            check::<*mut *const $ty>(kind, size, 2, IMM);
            check::<*const *mut $ty>(kind, size, 2, FIN);
            check::<*const *const $ty>(kind, size, 2, BOTH);
            check::<&&mut $ty>(kind, size, 2, FIN);

            check::<*mut *mut *mut $ty>(kind, size, 3, NONE);
            check::<*const *mut *const $ty>(kind, size, 3, IMM);
            check::<*mut *const *mut $ty>(kind, size, 3, FIN);
            check::<*const *const *const $ty>(kind, size, 3, BOTH);

            check::<*mut *mut *mut *mut $ty>(kind, size, 4, NONE);
            check::<*const *const *mut *const $ty>(kind, size, 4, IMM);
            check::<*mut *mut *const *mut $ty>(kind, size, 4, FIN);
            check::<*mut *const *const *const $ty>(kind, size, 4, BOTH);

            assert_eq!(
                <*const *const *const *const *const $ty as Classify>::FACTS,
                TypeFacts::UNKNOWN,
                "depth 5 of {}",
                type_name::<$ty>(),
            );
        )*
    };
}

#[test]
fn every_kind_at_every_depth() {
    for_each_scalar!(check_chains);
}

#[test]
fn blocks_and_boxes_are_exclusive_links() {
    check::<[i16; 8]>(Kind::I16, 2, 1, NONE);
    check::<[*const u8; 4]>(Kind::U8, 1, 2, IMM);
    check::<[[f32; 2]; 3]>(Kind::F32, 4, 2, NONE);
    check::<Box<u64>>(Kind::U64, 8, 1, NONE);
    check::<*const Box<u64>>(Kind::U64, 8, 2, FIN);
    check::<[i32; 0]>(Kind::I32, 4, 1, NONE);
}

#[test]
fn value_operations_read_static_type() {
    let mut x = 7_i32;
    let p: *mut i32 = &mut x;
    let pp: *const *mut i32 = &p;

    assert_eq!(classify_kind(&x), Kind::I32);
    assert_eq!(indirection_depth(&x), 0);
    assert!(!is_immutable(&x));
    assert!(!is_final_link_immutable(&x));
    assert_eq!(element_size(&x), 4);

    assert_eq!(indirection_depth(&p), 1);
    assert!(!is_immutable(&p));

    // outer link shared, inner pointer mutable
    assert_eq!(indirection_depth(&pp), 2);
    assert!(is_final_link_immutable(&pp));
    assert!(!is_immutable(&pp));
    assert_eq!(element_size(&pp), 4);
}

#[test]
fn qualifier_bits_are_independent_at_depth_two() {
    let x = 1_u32;
    let mut y = 2_u32;
    let mut shared: *const u32 = &x;
    let mut exclusive: *mut u32 = &mut y;

    let a: *mut *mut u32 = &mut exclusive;
    let b: *mut *const u32 = &mut shared;
    let c: *const *mut u32 = &exclusive;
    let d: *const *const u32 = &shared;

    assert_eq!((is_immutable(&a), is_final_link_immutable(&a)), (false, false));
    assert_eq!((is_immutable(&b), is_final_link_immutable(&b)), (true, false));
    assert_eq!((is_immutable(&c), is_final_link_immutable(&c)), (false, true));
    assert_eq!((is_immutable(&d), is_final_link_immutable(&d)), (true, true));
}

#[test]
fn final_link_bit_is_clear_at_depth_one() {
    let mut x = 1_i64;
    let shared_raw: *const i64 = &x;
    let exclusive_raw: *mut i64 = &mut x;
    assert_eq!(
        (is_immutable(&shared_raw), is_final_link_immutable(&shared_raw)),
        (true, false)
    );
    assert_eq!(
        (is_immutable(&exclusive_raw), is_final_link_immutable(&exclusive_raw)),
        (false, false)
    );
    assert!(!facts::<&i64>().is_final_link_immutable());
    assert!(!facts::<&mut i64>().is_final_link_immutable());
    assert!(!facts::<[i64; 2]>().is_final_link_immutable());
    assert!(!facts::<Box<i64>>().is_final_link_immutable());
}

#[test]
fn wrapping_adds_one_level() {
    assert_eq!(facts::<*const u8>().depth, facts::<u8>().depth + 1);
    assert_eq!(facts::<*mut *const u8>().depth, facts::<*const u8>().depth + 1);
    assert_eq!(
        facts::<&*mut *const u8>().depth,
        facts::<*mut *const u8>().depth + 1
    );
    assert_eq!(
        facts::<&mut &*mut *const u8>().depth,
        MAX_DEPTH
    );
    assert_eq!(facts::<*mut &mut &*mut *const u8>().depth, 0);
}

#[test]
fn void_chains() {
    let mut byte = 0_u8;
    let raw: *mut c_void = (&mut byte as *mut u8).cast();
    assert!(is_void(&raw));
    assert_eq!(element_size(&raw), 1);
    assert!(!is_void(&byte));
}

mod proptest_depth {
    use super::super::*;
    use crate::MAX_DEPTH;
    use proptest::prelude::*;

    fn link(shared: bool) -> Link {
        if shared {
            Link::Shared
        } else {
            Link::Exclusive
        }
    }

    proptest! {
        #[test]
        fn depth_grows_by_one_until_ceiling(
            kind_index in 0usize..Kind::COUNT,
            links in proptest::collection::vec(any::<bool>(), 0..=4),
            extra in any::<bool>(),
        ) {
            let facts = links
                .iter()
                .fold(TypeFacts::scalar(Kind::ALL[kind_index]), |f, &s| f.through(link(s)));
            let wrapped = facts.through(link(extra));

            prop_assert_eq!(usize::from(facts.depth), links.len());
            if facts.depth < MAX_DEPTH {
                prop_assert_eq!(wrapped.depth, facts.depth + 1);
                prop_assert_eq!(wrapped.kind, facts.kind);
            } else {
                prop_assert_eq!(wrapped, TypeFacts::UNKNOWN);
            }
        }
    }
}
