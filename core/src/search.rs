use crate::index::InvertedIndex;
use crate::query::{parse_query, Query};
use crate::scorer::{find_all_documents, rank};
use crate::stop_words::StopWords;
use crate::{DocId, Document, MAX_RESULT_DOCUMENT_COUNT};
use tracing::debug;

/// Owns the stop words, the inverted index and the result cap.
#[derive(Debug, Clone)]
pub struct SearchServer {
    stop_words: StopWords,
    index: InvertedIndex,
    max_results: usize,
}

impl Default for SearchServer {
    fn default() -> Self { Self::new() }
}

impl SearchServer {
    pub fn new() -> Self { Self::with_max_results(MAX_RESULT_DOCUMENT_COUNT) }

    pub fn with_max_results(max_results: usize) -> Self {
        Self { stop_words: StopWords::new(), index: InvertedIndex::new(), max_results }
    }

    /// Add the words of `text` to the stop-word set. Documents that are already
    /// indexed keep their terms.
    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.insert_text(text);
        debug!(stop_words = self.stop_words.len(), "stop words updated");
    }

    pub fn add_document(&mut self, document_id: DocId, text: &str) {
        let words = self.stop_words.filter(text);
        self.index.add_document(document_id, &words);
        debug!(
            document_id,
            words = words.len(),
            documents = self.index.document_count(),
            "document indexed"
        );
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Vec<Document> {
        self.find_top_documents_with_limit(raw_query, self.max_results)
    }

    /// Like [`find_top_documents`](Self::find_top_documents) with a smaller cap;
    /// `limit` never exceeds the configured maximum.
    pub fn find_top_documents_with_limit(&self, raw_query: &str, limit: usize) -> Vec<Document> {
        self.find_top_documents_with_total(raw_query, limit).1
    }

    /// Top documents together with how many matched before truncation.
    pub fn find_top_documents_with_total(
        &self,
        raw_query: &str,
        limit: usize,
    ) -> (usize, Vec<Document>) {
        let query = self.parse_query(raw_query);
        let matched = find_all_documents(&self.index, &query);
        let total = matched.len();
        let top = rank(matched, limit.min(self.max_results));
        debug!(
            plus = query.plus.len(),
            minus = query.minus.len(),
            total,
            returned = top.len(),
            "query executed"
        );
        (total, top)
    }

    pub fn parse_query(&self, raw_query: &str) -> Query { parse_query(raw_query, &self.stop_words) }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn max_results(&self) -> usize { self.max_results }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    pub fn index(&self) -> &InvertedIndex { &self.index }
}
