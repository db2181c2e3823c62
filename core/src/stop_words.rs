use crate::tokenizer::split_into_words;
use std::collections::BTreeSet;

/// Words ignored both when indexing and when parsing queries. Append-only.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Add every word of `text` to the set. Repeated calls accumulate.
    pub fn insert_text(&mut self, text: &str) {
        for word in split_into_words(text) {
            self.words.insert(word.to_string());
        }
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Words of `text` that are not stop words, in their original order.
    pub fn filter<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_into_words(text)
            .into_iter()
            .filter(|w| !self.contains(w))
            .collect()
    }
}
