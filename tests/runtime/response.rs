//! Integration tests for generating sentences from a loaded store.

use frasario_grammar::SentenceGenerator;
use frasario_runtime::{SentenceResponse, VocabularyStore};
use frasario_runtime::response::SOURCE_TO_TARGET;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const CSV: &str = "\
source,target,category,difficulty
libro,βιβλίο,nouns,1
casa,σπίτι,places,1
rosso,κόκκινο,adjectives,1
mangiare,τρώω,verbs,2
domani,αύριο,time,2
";

fn store() -> VocabularyStore {
    VocabularyStore::from_csv_reader(CSV.as_bytes(), "inline").unwrap()
}

#[test]
fn every_used_word_is_glossed() {
    let store = store();
    let generator = SentenceGenerator::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..50 {
        let sentence = generator.generate(store.entries(), &mut rng).unwrap();
        let response = SentenceResponse::from_sentence(&sentence, store.entries());

        assert_eq!(response.source, sentence.text);
        assert_eq!(response.pattern, sentence.pattern_name);
        assert_eq!(response.direction, SOURCE_TO_TARGET);
        assert!(!response.translation.contains('?'), "{response:?}");
        assert_eq!(
            response.words.split(", ").count(),
            sentence.words_used.len()
        );
    }
}

#[test]
fn filtered_store_still_generates() {
    let store = store().filter(Some("nouns"), None);
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let sentence = SentenceGenerator::new()
        .generate(store.entries(), &mut rng)
        .unwrap();
    assert_eq!(sentence.words_used, ["libro"]);
}

#[test]
fn empty_filter_result_cannot_generate() {
    let store = store().filter(Some("colors"), None);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = SentenceGenerator::new()
        .generate(store.entries(), &mut rng)
        .unwrap_err();
    assert!(err.is_empty_vocabulary());
}
