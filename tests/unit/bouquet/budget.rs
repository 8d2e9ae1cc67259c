use super::*;

#[test]
fn claims_stop_at_zero() {
    let mut b = LeafBudget::new(2);
    assert!(b.try_claim());
    assert!(b.try_claim());
    assert!(!b.try_claim());
    assert!(!b.try_claim());
    assert_eq!(b.remaining(), 0);
    assert_eq!(b.claimed(), 2);
}

#[test]
fn reset_restores_quota() {
    let mut b = LeafBudget::new(4);
    b.try_claim();
    b.try_claim();
    b.reset();
    assert_eq!(b.remaining(), 4);
    assert_eq!(b.claimed(), 0);
}

#[test]
fn zero_quota_never_grants() {
    let mut b = LeafBudget::new(0);
    assert!(!b.try_claim());
    assert_eq!(b.claimed(), 0);
}
