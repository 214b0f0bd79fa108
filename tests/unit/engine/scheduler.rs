use super::*;

#[test]
fn requests_get_unique_increasing_ids() {
    let mut s = ManualScheduler::new();
    let a = s.request_frame();
    let b = s.request_frame();
    assert!(a < b);
    assert_eq!(s.pending_len(), 2);
}

#[test]
fn take_due_drains_in_request_order() {
    let mut s = ManualScheduler::new();
    let a = s.request_frame();
    let b = s.request_frame();
    assert_eq!(s.take_due(), vec![a, b]);
    assert!(s.take_due().is_empty());
}

#[test]
fn cancelled_requests_never_fire() {
    let mut s = ManualScheduler::new();
    let a = s.request_frame();
    let b = s.request_frame();
    s.cancel(a);
    assert_eq!(s.cancelled_count(), 1);
    assert_eq!(s.take_due(), vec![b]);
}

#[test]
fn cancelling_unknown_id_is_harmless() {
    let mut s = ManualScheduler::new();
    s.cancel(FrameRequestId(99));
    assert_eq!(s.cancelled_count(), 0);
    assert_eq!(s.pending_len(), 0);
}
