use super::*;

#[test]
fn advance_wraps_forward_and_back() {
    assert_eq!(advance(0, 4, true), 1);
    assert_eq!(advance(3, 4, true), 0);
    assert_eq!(advance(0, 4, false), 3);
    assert_eq!(advance(2, 4, false), 1);
}

#[test]
fn advance_on_empty_carousel_stays_at_zero() {
    assert_eq!(advance(0, 0, true), 0);
    assert_eq!(advance(0, 0, false), 0);
}
