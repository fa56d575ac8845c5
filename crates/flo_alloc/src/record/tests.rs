use super::*;
use pretty_assertions::assert_eq;

#[test]
fn provenance_names() {
    let names: Vec<&str> = Provenance::ALL.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["dynamic", "allocated", "fixed"]);
    assert_eq!(Provenance::Allocated.to_string(), "allocated");
    assert!(Provenance::Fixed.is_exact());
    assert!(!Provenance::Allocated.is_exact());
}

#[test]
fn count_is_derived() {
    let record = AllocationRecord::new("xs", Provenance::Allocated, 1, 4, 44);
    assert_eq!(record.element_count, 11);
    assert!(record.element_count * record.element_size <= record.total_size);
}

#[test]
fn zero_element_size_gives_zero_count() {
    let record = AllocationRecord::new("p", Provenance::Dynamic, 0, 0, 0);
    assert_eq!(record.element_count, 0);
    assert!(!record.is_trustworthy());
}

#[test]
fn dynamic_is_never_trustworthy() {
    let record = AllocationRecord::new("p", Provenance::Dynamic, 1, 8, 64);
    assert!(!record.is_trustworthy());
    let record = AllocationRecord::new("p", Provenance::Fixed, 1, 8, 64);
    assert!(record.is_trustworthy());
}

#[test]
fn display_lists_every_field() {
    let record = AllocationRecord::new("grid", Provenance::Fixed, 1, 2, 16);
    assert_eq!(
        record.to_string(),
        "grid: fixed depth=1 element_size=2 total_size=16 element_count=8"
    );
}
