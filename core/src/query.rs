use crate::stop_words::StopWords;
use crate::tokenizer::split_into_words;
use std::collections::BTreeSet;

/// A parsed query. Plus terms score documents, minus terms veto them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pub plus: BTreeSet<String>,
    pub minus: BTreeSet<String>,
}

/// Parse `raw` into plus and minus terms, dropping stop words from both.
///
/// A leading `-` marks a minus term; the rest of the word is the term. A lone
/// `-` has nothing after it and is ignored.
pub fn parse_query(raw: &str, stop_words: &StopWords) -> Query {
    let mut query = Query::default();
    for word in split_into_words(raw) {
        match word.strip_prefix('-') {
            Some(term) => {
                if !term.is_empty() && !stop_words.contains(term) {
                    query.minus.insert(term.to_string());
                }
            }
            None => {
                if !stop_words.contains(word) {
                    query.plus.insert(word.to_string());
                }
            }
        }
    }
    query
}
