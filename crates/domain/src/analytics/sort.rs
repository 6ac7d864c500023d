// domain analytics sorting utilities
use std::cmp::Ordering;

/// ソート順序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// キー関数による安定ソート
///
/// 同じキーを持つ要素は元の順序を保ちます (`slice::sort_by` は安定ソート)。
pub fn stable_sort_by_key<T, K, F>(items: &mut [T], order: SortOrder, key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by(|a, b| order.apply(key(a).cmp(&key(b))));
}

/// 安定ソート後の先頭要素を返す
///
/// `Iterator::max_by_key` は同値の場合に最後の要素を返すため、
/// 先頭優先のタイブレークはこちらで行います。
pub fn first_after_stable_sort<T, K, F>(items: &[T], order: SortOrder, key: F) -> Option<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut refs: Vec<&T> = items.iter().collect();
    stable_sort_by_key(&mut refs, order, |item| key(item));
    refs.first().copied()
}

// ============================================================================
// Tests
// ============================================================================
