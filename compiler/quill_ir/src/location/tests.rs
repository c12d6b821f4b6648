use super::{Location, LocationError};
use pretty_assertions::assert_eq;

#[test]
fn default_is_invalid() {
    assert_eq!(Location::default(), Location::INVALID);
    assert!(!Location::default().is_valid());
    assert_eq!(Location::INVALID.len(), 0);
}

#[test]
fn new_and_len() {
    let loc = Location::new(3, 7);
    assert!(loc.is_valid());
    assert_eq!(loc.len(), 4);
    assert!(!loc.is_empty());
    assert!(Location::new(5, 5).is_empty());
}

#[test]
fn try_from_range_rejects_overflow() {
    assert_eq!(Location::try_from_range(1..5), Ok(Location::new(1, 5)));
    let big = u32::MAX as usize + 1;
    assert_eq!(
        Location::try_from_range(big..big),
        Err(LocationError::BeginTooLarge(big))
    );
    assert_eq!(
        Location::try_from_range(0..big),
        Err(LocationError::EndTooLarge(big))
    );
}

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", Location::new(1, 9)), "1..9");
    assert_eq!(format!("{}", Location::INVALID), "<invalid>");
}

#[test]
fn to_range_slices_source() {
    let src = "let x = 1;";
    assert_eq!(&src[Location::new(4, 5).to_range()], "x");
}
