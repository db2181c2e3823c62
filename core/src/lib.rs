//! In-memory TF-IDF document search with plus and minus query terms.
//!
//! The typical lifecycle is configure, build, query: set stop words on a
//! [`SearchServer`], add documents one by one, then call
//! [`SearchServer::find_top_documents`].

pub mod index;
pub mod query;
pub mod scorer;
pub mod search;
pub mod stop_words;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub use index::InvertedIndex;
pub use query::{parse_query, Query};
pub use search::SearchServer;
pub use stop_words::StopWords;

pub type DocId = i32;

/// Default cap on the number of documents returned by a query.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "document_id")]
    pub id: DocId,
    pub relevance: f64,
}

impl Document {
    pub fn new(id: DocId, relevance: f64) -> Self { Self { id, relevance } }
}
