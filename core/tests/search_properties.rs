use search_core::{Document, SearchServer, MAX_RESULT_DOCUMENT_COUNT};

fn sample_server() -> SearchServer {
    let mut server = SearchServer::new();
    server.set_stop_words("and in on with");
    let texts = [
        "white cat and fashionable collar",
        "fluffy cat fluffy tail",
        "groomed dog expressive eyes",
        "groomed starling eugene",
        "fluffy dog with long ears",
        "cat on the mat",
        "dog in the fog",
    ];
    for (id, text) in texts.iter().enumerate() {
        server.add_document(id as i32, text);
    }
    server
}

fn ids(docs: &[Document]) -> Vec<i32> {
    docs.iter().map(|d| d.id).collect()
}

#[test]
fn term_frequencies_sum_to_one_per_document() {
    let server = sample_server();
    for id in 0..7 {
        let sum: f64 = server.index().term_frequencies(id).values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "doc {id} sums to {sum}");
    }
}

#[test]
fn empty_index_returns_nothing() {
    let server = SearchServer::new();
    assert!(server.find_top_documents("cat").is_empty());
    assert!(server.find_top_documents("cat -dog").is_empty());
}

#[test]
fn minus_only_query_returns_nothing() {
    let server = sample_server();
    assert!(server.find_top_documents("-cat").is_empty());
    assert!(server.find_top_documents("-cat -dog").is_empty());
    assert!(server.find_top_documents("").is_empty());
}

#[test]
fn stop_word_only_query_returns_nothing() {
    let server = sample_server();
    assert!(server.find_top_documents("and with").is_empty());
}

#[test]
fn result_length_never_exceeds_cap() {
    let server = sample_server();
    let found = server.find_top_documents("cat dog fluffy groomed");
    assert_eq!(found.len(), MAX_RESULT_DOCUMENT_COUNT);
}

#[test]
fn results_are_sorted_with_id_tie_break() {
    let server = sample_server();
    let found = server.find_top_documents("cat dog fluffy groomed the");
    for pair in found.windows(2) {
        assert!(pair[0].relevance >= pair[1].relevance);
        if pair[0].relevance == pair[1].relevance {
            assert!(pair[0].id < pair[1].id);
        }
    }
}

#[test]
fn equal_relevance_ranks_by_ascending_id() {
    let mut server = SearchServer::new();
    server.add_document(9, "cat");
    server.add_document(3, "cat");
    server.add_document(5, "cat");
    server.add_document(1, "dog");
    assert_eq!(ids(&server.find_top_documents("cat")), vec![3, 5, 9]);
}

#[test]
fn minus_term_excludes_even_full_matches() {
    let server = sample_server();
    let found = server.find_top_documents("fluffy dog ears -long");
    assert!(!ids(&found).contains(&4));
    assert!(ids(&found).contains(&1));
}

#[test]
fn repeated_queries_are_identical() {
    let server = sample_server();
    let first = server.find_top_documents("fluffy groomed cat -collar");
    let second = server.find_top_documents("fluffy groomed cat -collar");
    assert_eq!(first, second);
}

#[test]
fn fluffy_without_dog() {
    let mut server = SearchServer::new();
    server.set_stop_words("and");
    server.add_document(0, "white cat fluffy tail");
    server.add_document(1, "fluffy dog");
    let found = server.find_top_documents("fluffy -dog");
    assert_eq!(ids(&found), vec![0]);
    // fluffy is in both documents, so its idf is zero
    assert_eq!(found[0].relevance, 0.0);

    server.add_document(2, "grey parrot");
    let found = server.find_top_documents("fluffy -dog");
    assert_eq!(ids(&found), vec![0]);
    assert!(found[0].relevance > 0.0);
}

#[test]
fn single_document_scores_zero_but_is_returned() {
    let mut server = SearchServer::new();
    server.add_document(0, "a b c");
    let found = server.find_top_documents("a b c");
    assert_eq!(found, vec![Document::new(0, 0.0)]);
}

#[test]
fn lone_dash_in_query_is_harmless() {
    let mut server = SearchServer::new();
    server.add_document(0, "cat");
    server.add_document(1, "dog");
    assert!(server.parse_query("-").minus.is_empty());
    assert!(server.find_top_documents("-").is_empty());
    assert_eq!(ids(&server.find_top_documents("cat -")), vec![0]);
}

#[test]
fn stop_word_only_document_is_counted_but_not_indexed() {
    let mut server = SearchServer::new();
    server.set_stop_words("and in");
    server.add_document(0, "and in");
    server.add_document(1, "cat");
    server.add_document(2, "");
    assert_eq!(server.document_count(), 3);
    assert!(server.index().term_frequencies(0).is_empty());
    let found = server.find_top_documents("cat");
    assert_eq!(ids(&found), vec![1]);
    assert!((found[0].relevance - 3f64.ln()).abs() < 1e-12);
}

#[test]
fn unknown_terms_contribute_nothing() {
    let server = sample_server();
    assert!(server.find_top_documents("zebra").is_empty());
    let with_unknown = server.find_top_documents("starling zebra");
    assert_eq!(with_unknown, server.find_top_documents("starling"));
}

#[test]
fn reference_ranking() {
    let mut server = SearchServer::new();
    server.set_stop_words("and with");
    server.add_document(0, "white cat and fashionable collar");
    server.add_document(1, "fluffy cat fluffy tail");
    server.add_document(2, "groomed dog expressive eyes");
    let found = server.find_top_documents("fluffy groomed cat");
    assert_eq!(ids(&found), vec![1, 2, 0]);
    let expected = [0.650672, 0.274653, 0.101366];
    for (doc, want) in found.iter().zip(expected) {
        assert!((doc.relevance - want).abs() < 1e-6, "{} vs {want}", doc.relevance);
    }
}

#[test]
fn document_serializes_with_public_field_names() {
    let json = serde_json::to_string(&Document::new(3, 0.5)).unwrap();
    assert_eq!(json, r#"{"document_id":3,"relevance":0.5}"#);
}
