use proptest::prelude::*;
use text_features::{
    analyze_text, counters, normalize, AnalysisError, NormalizedText, ReadingTime, Sentiment,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn link_sentence() {
    let r = analyze_text("Hello world! Visit https://example.com for more info.", None).unwrap();
    assert_eq!(r.links, vec!["https://example.com"]);
    assert_eq!(r.link_count, 1);
    // the dot inside the domain is a sentence boundary as well
    assert_eq!(r.sentence_count, 3);
    assert_eq!(r.word_count, 7);
    assert_eq!(r.character_count, 47);
    assert_eq!(r.reading_time, ReadingTime { minutes: 0.04, seconds: 2.1 });
    assert!(approx(r.readability_score, 206.835 - 1.015 * (7.0 / 3.0) - 84.6 * (14.0 / 7.0)));
    assert_eq!(r.sentiment, Sentiment::Neutral);
    assert_eq!(r.keywords, vec!["hello", "world!", "visit", "https://example.com", "more"]);
}

#[test]
fn single_word_without_terminator() {
    let r = analyze_text("aaaa", Some(200.0)).unwrap();
    assert_eq!(r.word_count, 1);
    assert_eq!(r.sentence_count, 0);
    assert_eq!(r.readability_score, 0.0);
    assert_eq!(r.keywords, vec!["aaaa"]);
}

#[test]
fn two_hundred_words_take_one_minute() {
    let text = vec!["word"; 200].join(" ");
    let r = analyze_text(&text, None).unwrap();
    assert_eq!(r.word_count, 200);
    assert_eq!(r.reading_time, ReadingTime { minutes: 1.0, seconds: 0.0 });
}

#[test]
fn short_story() {
    let r = analyze_text("The cat sat on the mat. The cat was happy!", None).unwrap();
    assert_eq!(r.word_count, 10);
    assert_eq!(r.sentence_count, 2);
    assert_eq!(r.character_count, 33);
    assert!(approx(r.readability_score, 206.835 - 1.015 * 5.0 - 84.6 * 1.1));
    assert_eq!(r.sentiment, Sentiment::Positive);
    assert_eq!(r.keywords, vec!["cat", "the cat", "sat", "mat.", "happy!"]);
}

#[test]
fn messy_whitespace_is_normalised_first() {
    let r = analyze_text("  Rust is fast.\n\nRust is safe. Rust is fun!  ", None).unwrap();
    assert_eq!(r.word_count, 9);
    assert_eq!(r.sentence_count, 3);
    assert_eq!(r.character_count, 32);
    assert_eq!(r.keywords, vec!["rust", "rust is", "fast.", "safe.", "fun!"]);
}

#[test]
fn reading_time_rounds_the_stored_fraction() {
    // 3 / 200 is stored just below 0.015
    let r = analyze_text("Zebra apple mango", None).unwrap();
    assert_eq!(r.reading_time, ReadingTime { minutes: 0.01, seconds: 0.9 });
}

#[test]
fn empty_string_fails() {
    assert!(matches!(analyze_text("", None), Err(AnalysisError::InvalidInput(_))));
}

// documented quirk, not a guaranteed contract
#[test]
fn whitespace_only_counts_one_word() {
    let r = analyze_text(" \t\n ", None).unwrap();
    assert_eq!(r.word_count, 1);
    assert_eq!(r.character_count, 0);
    assert_eq!(r.reading_time, ReadingTime { minutes: 0.01, seconds: 0.3 });
    assert_eq!(r.keywords, Vec::<String>::new());
}

// documented quirk, not a guaranteed contract
#[test]
fn stop_words_only_still_yield_phrases() {
    let r = analyze_text("the and a to of", None).unwrap();
    assert_eq!(r.keywords, vec!["the and", "the and a", "and a", "and a to", "a to"]);
}

#[test]
fn serialises_with_camel_case_fields() {
    let r = analyze_text("Good morning. See https://a.io now!", None).unwrap();
    let v = serde_json::to_value(&r).unwrap();
    for key in [
        "readingTime", "wordCount", "characterCount", "sentenceCount", "linkCount", "links",
        "readabilityScore", "sentiment", "keywords",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["readingTime"]["minutes"], serde_json::json!(0.03));
    assert_eq!(v["sentiment"], "Positive");
}

proptest! {
    #[test]
    fn normalisation_is_idempotent(s in "\\PC{0,200}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn characters_are_normalised_length_minus_spaces(s in "[a-z .!?\\t\\n]{1,200}") {
        let clean = NormalizedText::new(&s);
        let spaces = clean.as_str().chars().filter(|c| c.is_whitespace()).count();
        let len = clean.as_str().chars().count();
        prop_assert_eq!(counters::character_count(&clean), len - spaces);
    }

    #[test]
    fn keywords_never_exceed_five(s in "[a-z ]{1,300}") {
        let r = analyze_text(&s, None).unwrap();
        prop_assert!(r.keywords.len() <= 5);
    }

    #[test]
    fn no_terminator_means_zero_score(s in "[a-zA-Z ,;]{1,200}") {
        let r = analyze_text(&s, None).unwrap();
        prop_assert_eq!(r.sentence_count, 0);
        prop_assert_eq!(r.readability_score, 0.0);
    }

    #[test]
    fn analysis_is_pure(s in "\\PC{1,200}", wpm in 1.0f64..1000.0) {
        let a = serde_json::to_string(&analyze_text(&s, Some(wpm)).unwrap()).unwrap();
        let b = serde_json::to_string(&analyze_text(&s, Some(wpm)).unwrap()).unwrap();
        prop_assert_eq!(a, b);
    }
}
