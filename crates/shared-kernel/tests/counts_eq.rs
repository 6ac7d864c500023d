// crates/shared-kernel/tests/counts_eq.rs
use text_metrics_shared_kernel::{LineCount, SentenceCount, WordCount};

#[test]
fn eq_with_usize_both_sides() {
    let count = LineCount::from(7);
    assert!(count == 7usize);
    assert!(7usize == count);
}

#[test]
fn ordering_against_usize() {
    let words = WordCount::from(3);
    assert!(words < 4usize);
    assert!(words > 2usize);
    assert!(SentenceCount::ZERO < 1usize);
}
