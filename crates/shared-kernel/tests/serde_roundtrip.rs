// crates/shared-kernel/tests/serde_roundtrip.rs
use serde::{Deserialize, Serialize};
use text_metrics_shared_kernel::{LineCount, WordCount};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    lines: LineCount,
    words: WordCount,
}

#[test]
fn counts_serialize_as_bare_integers() {
    let original = Wrapper { lines: LineCount::from(42), words: WordCount::from(7) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"lines":42,"words":7}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
