// Integration tests for topicmatch
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;
use topicmatch::prelude::*;
use topicmatch::{load_config, load_corpus, load_languages, tokenize, MatchKind, Vocabulary};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn sample_corpus() -> Vec<Document> {
    load_corpus(data_path("topics.json")).unwrap()
}

fn sample_languages() -> Vec<LanguageCandidate> {
    load_languages(data_path("languages.json")).unwrap()
}

#[test]
fn test_sample_snapshots_load() {
    let corpus = sample_corpus();
    assert_eq!(corpus.len(), 35);
    assert_eq!(corpus[0].id, DocumentId::Integer(1));
    assert_eq!(corpus[0].name, "todo list");

    let languages = sample_languages();
    assert!(languages.iter().any(|l| l.is_modern));
    assert!(languages.iter().any(|l| !l.is_modern));
}

#[test]
fn test_queries_against_sample_corpus() {
    let corpus = sample_corpus();
    let engine = RecommendationEngine::default();
    let mut rng = StdRng::seed_from_u64(1);

    let cases = [
        ("天気予報を確認したい", "weather app"),
        ("写真を編集したい", "photo app"),
        ("ペットの情報を共有したい", "pet app"),
    ];
    for (query, expected) in cases {
        let topic = engine.select_recommendation(query, &corpus, &mut rng).unwrap();
        assert_eq!(topic.name, expected, "query {}", query);
    }
}

#[test]
fn test_compound_words_match_their_parts() {
    let corpus = sample_corpus();
    let engine = RecommendationEngine::default();

    let ranking = engine.rank_corpus("収支を管理したい", &corpus).unwrap();
    assert_eq!(corpus[ranking.best().unwrap().index].name, "finance app");

    let ranking = engine.rank_corpus("投資をしたい", &corpus).unwrap();
    assert!(ranking.has_match());
    assert_eq!(corpus[ranking.best().unwrap().index].name, "finance app");

    let mut rng = StdRng::seed_from_u64(3);
    let outcome = engine.explain_recommendation("天気を知りたい", &corpus, &mut rng).unwrap();
    assert_eq!(outcome.selection.kind, MatchKind::Best);
    assert_eq!(outcome.document.name, "weather app");
}

#[test]
fn test_every_topic_matches_itself_first() {
    let corpus = sample_corpus();
    let engine = RecommendationEngine::default();

    for (i, doc) in corpus.iter().enumerate() {
        let ranking = engine.rank_corpus(&doc.description, &corpus).unwrap();
        assert_eq!(ranking.len(), corpus.len());
        assert_eq!(ranking.best().unwrap().index, i, "topic {}", doc.name);
        assert!((ranking.max_score() - 1.0).abs() < 1e-5);
        assert!(ranking.iter().all(|s| (0.0..=1.0).contains(&s.score)));
    }
}

#[test]
fn test_fallback_is_uniform_across_seeds() {
    let corpus: Vec<Document> = (0..4u64)
        .map(|i| Document::new(i, format!("topic {}", i), format!("アプリ{}番目の説明", i)))
        .collect();
    let mut counts = [0usize; 4];
    let trials = 4000;

    for seed in 0..trials {
        let mut rng = StdRng::seed_from_u64(seed);
        let topic = select_recommendation("quantum cryptography", &corpus, SelectMode::Best, &mut rng).unwrap();
        match &topic.id {
            DocumentId::Integer(i) => counts[*i as usize] += 1,
            other => panic!("unexpected id {}", other),
        }
    }

    // expected 1000 per topic, sd ~27
    for count in counts {
        assert!((850..=1150).contains(&count), "counts {:?}", counts);
    }
}

#[test]
fn test_top_k_random_never_below_kth_score() {
    let corpus = sample_corpus();
    let engine = RecommendationEngine::new(EngineConfig::default().with_mode(SelectMode::TopKRandom)).unwrap();
    let query = "写真や動画を管理する";
    let ranking = engine.rank_corpus(query, &corpus).unwrap();
    let kth = ranking.top(3)[2].score;
    assert!(ranking.has_match());

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = engine.explain_recommendation(query, &corpus, &mut rng).unwrap();
        assert_eq!(outcome.selection.kind, MatchKind::TopK);
        assert!(ranking.score_of(outcome.selection.index).unwrap() >= kth);
    }
}

#[test]
fn test_vocabulary_is_scoped_to_corpus() {
    let a: Vec<Vec<String>> = ["タスク管理アプリ", "地図アプリ"].iter().map(|t| tokenize(t)).collect();
    let b: Vec<Vec<String>> = ["天気予報アプリ"].iter().map(|t| tokenize(t)).collect();

    let (vocab_a, _) = Vocabulary::build(&a).unwrap();
    let (vocab_b, _) = Vocabulary::build(&b).unwrap();
    assert!(vocab_a.index_of("天気").is_none());
    assert!(vocab_b.index_of("タスク").is_none());

    let (vocab_a2, vectors_a2) = Vocabulary::build(&a).unwrap();
    let (_, vectors_a) = Vocabulary::build(&a).unwrap();
    assert_eq!(vocab_a.terms(), vocab_a2.terms());
    assert_eq!(vectors_a, vectors_a2);
}

#[test]
fn test_empty_corpus_reports_no_topics() {
    let engine = RecommendationEngine::default();
    let mut rng = StdRng::seed_from_u64(0);
    let request = RecommendationRequest {
        free_text: "タスク".to_string(),
        ..Default::default()
    };
    let err = engine.recommend(&request, &[], &sample_languages(), &mut rng).unwrap_err();
    assert_eq!(err, Error::NoTopicsAvailable);
}

#[test]
fn test_language_policy() {
    let corpus = sample_corpus();
    let languages = sample_languages();
    let engine = RecommendationEngine::default();

    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let request = RecommendationRequest {
            free_text: "音楽を再生したい".to_string(),
            programming_language: "わからない".to_string(),
            learning_preference: "modern".to_string(),
            ..Default::default()
        };
        let rec = engine.recommend(&request, &corpus, &languages, &mut rng).unwrap();
        let chosen = languages.iter().find(|l| l.name == rec.language).unwrap();
        assert!(chosen.is_modern);
    }

    let mut rng = StdRng::seed_from_u64(0);
    let explicit = RecommendationRequest {
        free_text: "音楽を再生したい".to_string(),
        programming_language: "Haskell".to_string(),
        learning_preference: "modern".to_string(),
        ..Default::default()
    };
    let rec = engine.recommend(&explicit, &corpus, &languages, &mut rng).unwrap();
    assert_eq!(rec.language, "Haskell");
}

#[test]
fn test_no_modern_language_available() {
    let legacy_only: Vec<LanguageCandidate> = sample_languages().into_iter().filter(|l| !l.is_modern).collect();
    let mut rng = StdRng::seed_from_u64(0);
    let err = select_language(&legacy_only, Some(&LanguageFilter::modern()), &mut rng).unwrap_err();
    assert_eq!(err, Error::NoMatchingLanguage);
}

#[test]
fn test_concurrent_calls_share_engine() {
    let engine = RecommendationEngine::default();
    let corpus = sample_corpus();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let engine = &engine;
                let snapshot = corpus.clone();
                scope.spawn(move || {
                    let mut rng = StdRng::seed_from_u64(t);
                    engine
                        .select_recommendation("天気予報を確認したい", &snapshot, &mut rng)
                        .map(|doc| doc.name.clone())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "weather app");
        }
    });
}

#[test]
fn test_snapshot_files() {
    let dir = tempfile::tempdir().unwrap();

    let corpus_path = dir.path().join("topics.json");
    let mut file = std::fs::File::create(&corpus_path).unwrap();
    write!(
        file,
        r#"[{{"id": "a", "name": "task", "description": "タスク管理アプリ"}},
            {{"id": 2, "name": "map", "description": "地図アプリ"}}]"#
    )
    .unwrap();
    let corpus = load_corpus(&corpus_path).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus[0].id, DocumentId::String("a".to_string()));

    let config_path = dir.path().join("engine.json");
    std::fs::write(&config_path, r#"{"mode": "topk-random", "top_k": 2}"#).unwrap();
    let config = load_config(&config_path).unwrap();
    assert_eq!(config.mode, SelectMode::TopKRandom);
    assert_eq!(config.top_k, 2);

    let bad_path = dir.path().join("bad.json");
    std::fs::write(&bad_path, r#"{"top_k": 0}"#).unwrap();
    assert!(load_config(&bad_path).is_err());
    assert!(load_corpus(dir.path().join("missing.json")).is_err());
}
