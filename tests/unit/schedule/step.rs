use super::*;

#[test]
fn tick_fires_requested_handles_once() {
    let mut s = StepScheduler::new();
    let a = s.request_frame();
    let b = s.request_frame();
    assert_ne!(a, b);
    assert_eq!(s.tick(), vec![a, b]);
    assert!(s.tick().is_empty());
    assert_eq!(s.ticks(), 2);
}

#[test]
fn cancelled_handles_never_fire() {
    let mut s = StepScheduler::new();
    let a = s.request_frame();
    let b = s.request_frame();
    s.cancel_frame(a);
    assert_eq!(s.pending(), &[b]);
    assert_eq!(s.tick(), vec![b]);
    // Cancelling after firing is harmless.
    s.cancel_frame(b);
    assert!(s.is_idle());
}

#[test]
fn handles_are_never_reused() {
    let mut s = StepScheduler::new();
    let a = s.request_frame();
    s.tick();
    let b = s.request_frame();
    assert!(b > a);
}
