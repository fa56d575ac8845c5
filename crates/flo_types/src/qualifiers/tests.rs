use super::*;

#[test]
fn qualifiers_size() {
    assert_eq!(std::mem::size_of::<Qualifiers>(), 1);
}

#[test]
fn bits_are_independent() {
    assert!(Qualifiers::IMMUTABLE.is_immutable());
    assert!(!Qualifiers::IMMUTABLE.is_final_link_immutable());

    assert!(!Qualifiers::FINAL_LINK_IMMUTABLE.is_immutable());
    assert!(Qualifiers::FINAL_LINK_IMMUTABLE.is_final_link_immutable());

    let both = Qualifiers::IMMUTABLE | Qualifiers::FINAL_LINK_IMMUTABLE;
    assert!(both.is_immutable());
    assert!(both.is_final_link_immutable());
}

#[test]
fn patterns_are_distinct() {
    let patterns = Qualifiers::PATTERNS;
    for (i, a) in patterns.iter().enumerate() {
        for b in &patterns[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(Qualifiers::default(), Qualifiers::empty());
}
