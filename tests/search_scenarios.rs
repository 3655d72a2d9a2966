use seekdex::core::error::ErrorKind;
use seekdex::core::search_server::SearchServer;
use seekdex::core::types::{DocId, DocumentStatus, ExecutionPolicy};
use seekdex::dedup::detector::remove_duplicates;

const POLICIES: [ExecutionPolicy; 2] = [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel];

fn ids(hits: &[seekdex::search::results::ScoredDocument]) -> Vec<i32> {
    hits.iter().map(|h| h.id.value()).collect()
}

#[test]
fn stop_words_are_excluded_from_search() {
    let mut server = SearchServer::new("in the").unwrap();
    server.add_document(42, "cat in the city", DocumentStatus::Active, &[1, 2, 3]).unwrap();

    assert!(server.find_top_documents("in").unwrap().is_empty());
    assert_eq!(ids(&server.find_top_documents("cat").unwrap()), vec![42]);

    let frequencies = server.word_frequencies(42).unwrap();
    assert!(!frequencies.contains_key("in"));
    assert!(!frequencies.contains_key("the"));
}

#[test]
fn minus_word_excludes_document() {
    let mut server = SearchServer::new("in the").unwrap();
    server.add_document(40, "black cat in the street", DocumentStatus::Active, &[]).unwrap();
    server.add_document(41, "black dog the street", DocumentStatus::Active, &[]).unwrap();

    for policy in POLICIES {
        let hits = server
            .find_top_documents_by_status_with(policy, "-dog street", DocumentStatus::Active)
            .unwrap();
        assert_eq!(ids(&hits), vec![40]);
    }
}

#[test]
fn rating_is_truncated_mean() {
    let mut server = SearchServer::new("").unwrap();
    server.add_document(1, "word", DocumentStatus::Active, &[-1, 5, -3, 0]).unwrap();
    server.add_document(2, "word", DocumentStatus::Active, &[]).unwrap();
    assert_eq!(server.document(1).unwrap().rating, 0);
    assert_eq!(server.document(2).unwrap().rating, 0);
}

#[test]
fn duplicate_id_leaves_state_unchanged() {
    let mut server = SearchServer::new("").unwrap();
    server.add_document(1, "cat dog", DocumentStatus::Active, &[1]).unwrap();
    let before = server.word_frequencies(1).unwrap().clone();

    let err = server.add_document(1, "bird fish", DocumentStatus::Banned, &[9]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
    assert_eq!(server.document_count(), 1);
    assert_eq!(server.term_count(), 2);
    assert_eq!(server.word_frequencies(1).unwrap(), &before);
    assert!(server.find_top_documents("bird").unwrap().is_empty());
}

#[test]
fn removed_document_disappears() {
    for policy in POLICIES {
        let mut server = SearchServer::new("").unwrap();
        server.add_document(1, "cat dog", DocumentStatus::Active, &[]).unwrap();
        server.add_document(2, "dog", DocumentStatus::Active, &[]).unwrap();

        server.remove_document_with(policy, 1);
        assert_eq!(server.word_frequencies(1).unwrap_err().kind, ErrorKind::NotFound);
        assert_eq!(server.iter().collect::<Vec<_>>(), vec![DocId(2)]);
        assert!(server.find_top_documents("cat").unwrap().is_empty());
        assert_eq!(server.match_document("dog", 1).unwrap_err().kind, ErrorKind::NotFound);

        // absent ids are ignored, and a freed id can be reused
        server.remove_document_with(policy, 1);
        server.add_document(1, "bird", DocumentStatus::Active, &[]).unwrap();
        assert_eq!(server.document_count(), 2);
    }
}

#[test]
fn ties_are_broken_by_rating() {
    let mut server = SearchServer::new("").unwrap();
    server.add_document(1, "cat", DocumentStatus::Active, &[1]).unwrap();
    server.add_document(2, "cat", DocumentStatus::Active, &[9]).unwrap();
    server.add_document(3, "cat", DocumentStatus::Active, &[5]).unwrap();
    server.add_document(4, "dog", DocumentStatus::Active, &[0]).unwrap();

    for policy in POLICIES {
        let hits = server
            .find_top_documents_with(policy, "cat", |_, _, _| true)
            .unwrap();
        assert_eq!(ids(&hits), vec![2, 3, 1]);
    }
}

#[test]
fn results_are_capped_at_five() {
    let mut server = SearchServer::new("").unwrap();
    for id in 0..20 {
        server.add_document(id, "common word", DocumentStatus::Active, &[id]).unwrap();
    }
    server.add_document(20, "other", DocumentStatus::Active, &[]).unwrap();

    let hits = server.find_top_documents("common").unwrap();
    assert_eq!(ids(&hits), vec![19, 18, 17, 16, 15]);
}

#[test]
fn predicate_sees_id_status_and_rating() {
    let mut server = SearchServer::new("").unwrap();
    server.add_document(1, "cat", DocumentStatus::Irrelevant, &[3]).unwrap();
    server.add_document(2, "cat", DocumentStatus::Active, &[4]).unwrap();
    server.add_document(3, "cat", DocumentStatus::Removed, &[5]).unwrap();

    let hits = server
        .find_top_documents_by("cat", |id, status, rating| {
            id != DocId(3) && status != DocumentStatus::Active && rating > 0
        })
        .unwrap();
    assert_eq!(ids(&hits), vec![1]);
    assert_eq!(ids(&server.find_top_documents_by_status("cat", DocumentStatus::Removed).unwrap()), vec![3]);
}

#[test]
fn invalid_queries_fail_before_lookup() {
    let server = SearchServer::new("").unwrap();
    for query in ["-", "cat -", "--cat", "ca\u{10}t"] {
        for policy in POLICIES {
            let err = server
                .find_top_documents_with(policy, query, |_, _, _| true)
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidArgument, "query {:?}", query);
        }
    }
}

#[test]
fn invalid_stop_words_fail_construction() {
    assert!(SearchServer::new("in t\u{1}he").is_err());
    assert!(SearchServer::with_stop_words(["in", "", "the"]).is_ok());
}

#[test]
fn match_document_across_policies() {
    let mut server = SearchServer::with_stop_words(vec!["and".to_string()]).unwrap();
    server.add_document(3, "tabby cat and fluffy tail", DocumentStatus::Irrelevant, &[]).unwrap();

    for policy in POLICIES {
        let (words, status) = server.match_document_with(policy, "tail tabby dog tail", 3).unwrap();
        assert_eq!(words, vec!["tabby", "tail"]);
        assert_eq!(status, DocumentStatus::Irrelevant);

        let (words, _) = server.match_document_with(policy, "tabby -fluffy", 3).unwrap();
        assert!(words.is_empty());
    }
}

#[test]
fn duplicates_with_different_metadata_are_removed() {
    let mut server = SearchServer::new("").unwrap();
    server.add_document(5, "cat dog dog", DocumentStatus::Active, &[1]).unwrap();
    server.add_document(2, "dog cat", DocumentStatus::Banned, &[9]).unwrap();
    server.add_document(7, "cat bird", DocumentStatus::Active, &[1]).unwrap();

    let removed = remove_duplicates(&mut server);
    assert_eq!(removed, vec![DocId(5)]);
    assert_eq!(server.iter().collect::<Vec<_>>(), vec![DocId(2), DocId(7)]);
}

#[test]
fn hits_serialize_to_json() {
    let mut server = SearchServer::new("").unwrap();
    server.add_document(1, "cat", DocumentStatus::Active, &[4]).unwrap();
    server.add_document(2, "dog", DocumentStatus::Active, &[4]).unwrap();

    let hits = server.find_top_documents("cat").unwrap();
    let json = serde_json::to_value(&hits).unwrap();
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["rating"], 4);
    assert!((json[0]["relevance"].as_f64().unwrap() - 2f64.ln()).abs() < 1e-12);
}
