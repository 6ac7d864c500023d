// crates/domain/src/analytics/frequency.rs
//! 単語・文字の出現頻度

use std::{collections::HashMap, hash::Hash};

use serde::Serialize;

use super::{
    sort::{SortOrder, stable_sort_by_key},
    tokenizer::words,
};
use crate::options::CHARACTER_FREQUENCY_LIMIT;

/// 初出順を保持する出現回数表
///
/// 登録済みのキーは必ず 1 以上の回数を持ちます。
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self { entries: Vec::new(), index: HashMap::new() }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<usize> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 初出順に走査する
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// 回数の降順 (同数は初出順)
    #[must_use]
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        stable_sort_by_key(&mut ranked, SortOrder::Descending, |(_, count)| *count);
        ranked
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

impl From<(String, usize)> for WordFrequency {
    fn from((word, count): (String, usize)) -> Self {
        Self { word, count }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharFrequency {
    pub character: char,
    pub count: usize,
}

impl From<(char, usize)> for CharFrequency {
    fn from((character, count): (char, usize)) -> Self {
        Self { character, count }
    }
}

pub(crate) fn word_table(tokens: &[String]) -> FrequencyTable<String> {
    tokens.iter().cloned().collect()
}

/// 最頻出単語を上位 `top_n` 件まで返す
#[must_use]
pub fn most_frequent_words(text: &str, top_n: usize) -> Vec<WordFrequency> {
    top_words_of(&word_table(&words(text)), top_n)
}

pub(crate) fn top_words_of(table: &FrequencyTable<String>, top_n: usize) -> Vec<WordFrequency> {
    table.ranked().into_iter().take(top_n).map(WordFrequency::from).collect()
}

/// 英数字 (`[a-z0-9]`) の出現頻度、上位 50 件
///
/// 句読点や ASCII 以外の文字は数えません。
#[must_use]
pub fn character_frequency(text: &str) -> Vec<CharFrequency> {
    let table: FrequencyTable<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    table
        .ranked()
        .into_iter()
        .take(CHARACTER_FREQUENCY_LIMIT)
        .map(CharFrequency::from)
        .collect()
}

/// 2 回以上出現する単語 (件数の制限なし)
#[must_use]
pub fn duplicate_words(text: &str) -> Vec<WordFrequency> {
    duplicates_of(&word_table(&words(text)))
}

pub(crate) fn duplicates_of(table: &FrequencyTable<String>) -> Vec<WordFrequency> {
    table
        .ranked()
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(WordFrequency::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(frequencies: &[WordFrequency]) -> Vec<(&str, usize)> {
        frequencies.iter().map(|f| (f.word.as_str(), f.count)).collect()
    }

    #[test]
    fn table_counts_in_first_seen_order() {
        let table: FrequencyTable<&str> = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&"b"), Some(2));
        assert_eq!(table.get(&"z"), None);
        let order: Vec<_> = table.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_table() {
        let table: FrequencyTable<String> = FrequencyTable::new();
        assert!(table.is_empty());
        assert!(table.ranked().is_empty());
    }

    #[test]
    fn most_frequent_breaks_ties_by_first_occurrence() {
        let top = most_frequent_words("The cat sat. The cat ran!", 10);
        assert_eq!(pairs(&top), vec![("the", 2), ("cat", 2), ("sat", 1), ("ran", 1)]);
    }

    #[test]
    fn most_frequent_truncates_to_top_n() {
        let top = most_frequent_words("a b c d a", 2);
        assert_eq!(pairs(&top), vec![("a", 2), ("b", 1)]);
        assert!(most_frequent_words("a b c", 0).is_empty());
        assert!(most_frequent_words("", 10).is_empty());
    }

    #[test]
    fn character_frequency_keeps_ascii_alphanumerics() {
        let chars = character_frequency("Aa b! é 1,1");
        let flat: Vec<_> = chars.iter().map(|c| (c.character, c.count)).collect();
        assert_eq!(flat, vec![('a', 2), ('1', 2), ('b', 1)]);
    }

    #[test]
    fn character_frequency_lists_each_alphanumeric_once() {
        let text: String = ('a'..='z').chain('0'..='9').collect::<String>().repeat(2);
        let chars = character_frequency(&text.to_uppercase());
        assert_eq!(chars.len(), 36);
        assert!(chars.len() <= CHARACTER_FREQUENCY_LIMIT);
        assert!(chars.iter().all(|c| c.count == 2));
        assert_eq!(chars[0].character, 'a');
    }

    #[test]
    fn duplicates_are_words_seen_more_than_once() {
        let dups = duplicate_words("to be or not to be, to see");
        assert_eq!(pairs(&dups), vec![("to", 3), ("be", 2)]);
        assert!(duplicate_words("all words unique").is_empty());
    }
}
