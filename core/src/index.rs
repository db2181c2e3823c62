use crate::DocId;
use std::collections::BTreeMap;

/// Term to per-document term frequency, plus the number of indexed documents.
///
/// Postings are ordered by document id so iteration is reproducible.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    word_to_document_freqs: BTreeMap<String, BTreeMap<DocId, f64>>,
    document_count: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index the already stop-filtered `words` of one document.
    ///
    /// Each occurrence adds `1 / words.len()` to the term's entry, so a word seen
    /// twice ends up with `2 / words.len()`. A document without words adds no
    /// postings but is still counted. Reusing an id merges into the same entries.
    pub fn add_document(&mut self, document_id: DocId, words: &[&str]) {
        if !words.is_empty() {
            let tf = 1.0 / words.len() as f64;
            for word in words {
                *self
                    .word_to_document_freqs
                    .entry((*word).to_string())
                    .or_default()
                    .entry(document_id)
                    .or_insert(0.0) += tf;
            }
        }
        self.document_count += 1;
    }

    pub fn document_count(&self) -> usize { self.document_count }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize { self.word_to_document_freqs.len() }

    pub fn postings(&self, term: &str) -> Option<&BTreeMap<DocId, f64>> {
        self.word_to_document_freqs.get(term)
    }

    pub fn contains(&self, term: &str, document_id: DocId) -> bool {
        self.postings(term).is_some_and(|p| p.contains_key(&document_id))
    }

    /// Number of distinct documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings(term).map_or(0, BTreeMap::len)
    }

    /// `ln(N / df)`, or `None` when the term is unknown or nothing is indexed.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let df = self.document_frequency(term);
        if df == 0 || self.document_count == 0 {
            return None;
        }
        Some((self.document_count as f64 / df as f64).ln())
    }

    /// Term frequencies stored for one document, keyed by term.
    pub fn term_frequencies(&self, document_id: DocId) -> BTreeMap<&str, f64> {
        self.word_to_document_freqs
            .iter()
            .filter_map(|(term, docs)| docs.get(&document_id).map(|tf| (term.as_str(), *tf)))
            .collect()
    }
}
