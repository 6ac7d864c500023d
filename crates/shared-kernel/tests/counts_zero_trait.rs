// crates/shared-kernel/tests/counts_zero_trait.rs
use num_traits::Zero;
use text_metrics_shared_kernel::{CharCount, LineCount, SentenceCount, WordCount};

#[test]
fn zero_trait_consistency() {
    let mut line = LineCount::from(5);
    line.set_zero();
    assert!(line.is_zero());
    assert_eq!(line, LineCount::ZERO);
    assert_eq!(LineCount::zero(), LineCount::ZERO);

    assert_eq!(CharCount::zero(), CharCount::ZERO);
    assert!(SentenceCount::ZERO.is_zero());
    assert_eq!(WordCount::zero(), WordCount::ZERO);
}

#[test]
fn default_matches_zero() {
    assert_eq!(LineCount::default(), LineCount::zero());
    assert!(LineCount::default().is_zero());
    assert_eq!(WordCount::default(), WordCount::zero());
}
