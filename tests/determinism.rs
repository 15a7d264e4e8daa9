use docsearch::{fallback_documents, match_catalog, similarity, Document, MatchConfig, Matcher};

fn synthetic_catalog(count: u64) -> Vec<Document> {
    (1..=count)
        .map(|i| {
            Document::new(
                i,
                format!("Process note {i}"),
                "DPM",
                format!("Notes on process step {} of {count}", i % 7),
            )
        })
        .collect()
}

#[test]
fn equivalent_queries_match_identically() {
    let docs = fallback_documents();
    let plain = match_catalog("essya", &docs);
    let padded = match_catalog("   essya\t", &docs);
    let shouted = match_catalog("ESSYA", &docs);

    assert_eq!(plain.similar, padded.similar);
    assert_eq!(plain.similar, shouted.similar);
    assert_eq!(plain.exact, shouted.exact);
}

#[test]
fn query_echo_keeps_original_casing() {
    let docs = fallback_documents();
    let lower = match_catalog("mrkt", &docs);
    let upper = match_catalog("  MRKT ", &docs);

    assert_eq!(lower.suggestion, upper.suggestion);
    assert_eq!(lower.query_echo.as_deref(), Some("mrkt"));
    assert_eq!(upper.query_echo.as_deref(), Some("MRKT"));
}

#[test]
fn repeated_runs_are_identical() {
    let docs = synthetic_catalog(150);
    let matcher = Matcher::default();
    let baseline = matcher.match_catalog("proces note 12", &docs);
    for _ in 0..5 {
        assert_eq!(matcher.match_catalog("proces note 12", &docs), baseline);
    }
}

#[test]
fn parallel_classification_matches_sequential() {
    let docs = synthetic_catalog(500);
    let sequential = Matcher::default();
    let parallel = Matcher::new(MatchConfig::default().with_parallel(true)).unwrap();

    for query in ["note 250", "proces note 3", "step 4", "qqqqqqqq", "Process"] {
        assert_eq!(
            sequential.match_catalog(query, &docs),
            parallel.match_catalog(query, &docs),
            "parallel result diverged for {query:?}"
        );
    }
}

#[test]
fn similarity_is_symmetric_and_reflexive() {
    let words = ["", "a", "Essay", "essay", "Marketing Plan", "CLA 2", "naïve café"];
    for a in words {
        assert_eq!(similarity(a, a), 1.0);
        for b in words {
            assert_eq!(similarity(a, b), similarity(b, a), "{a:?} vs {b:?}");
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score));
        }
    }
}
