//! TF-IDF relevance over an [`InvertedIndex`] with minus-term exclusion.

use crate::index::InvertedIndex;
use crate::query::Query;
use crate::{DocId, Document};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Every document matching at least one plus term and no minus term, with its
/// summed `tf * idf` relevance, in ascending id order.
pub fn find_all_documents(index: &InvertedIndex, query: &Query) -> Vec<Document> {
    if query.plus.is_empty() || index.document_count() == 0 {
        return Vec::new();
    }

    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    for term in &query.plus {
        let (Some(postings), Some(idf)) = (index.postings(term), index.idf(term)) else {
            continue;
        };
        for (&id, &tf) in postings {
            *relevance.entry(id).or_insert(0.0) += tf * idf;
        }
    }

    relevance
        .into_iter()
        .filter(|(id, _)| !query.minus.iter().any(|term| index.contains(term, *id)))
        .map(|(id, relevance)| Document::new(id, relevance))
        .collect()
}

/// Sort by relevance descending, ties by ascending id, and keep at most `limit`.
pub fn rank(mut documents: Vec<Document>, limit: usize) -> Vec<Document> {
    documents.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    documents.truncate(limit);
    documents
}
