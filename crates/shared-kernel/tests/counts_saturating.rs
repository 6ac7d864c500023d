// crates/shared-kernel/tests/counts_saturating.rs
use text_metrics_shared_kernel::{CharCount, ParagraphCount, WordCount};

#[test]
fn charcount_saturating_add_and_sub() {
    let max = CharCount::from(usize::MAX);
    assert_eq!(max.saturating_add(42), max);
    assert_eq!(CharCount::from(3).saturating_sub(5), CharCount::zero());
    assert_eq!(CharCount::from(2).saturating_add_count(max), max);
    assert_eq!(CharCount::from(2).saturating_sub_count(CharCount::from(3)), CharCount::ZERO);
}

#[test]
fn wordcount_saturating_add_and_sub() {
    let max = WordCount::from(usize::MAX);
    assert_eq!(max.saturating_add(usize::MAX), max);
    assert_eq!(WordCount::from(2).saturating_sub(3), WordCount::zero());
    assert_eq!(WordCount::from(usize::MAX - 1).saturating_add_count(WordCount::from(5)), max);
}

#[test]
fn paragraphcount_never_underflows() {
    assert_eq!(ParagraphCount::from(1).saturating_sub(2), ParagraphCount::ZERO);
}
