use std::collections::BTreeMap;

use super::*;
use crate::model::CharacterProfile;

fn extractor() -> MetricsExtractor {
    MetricsExtractor::new(&Vocabulary::default()).unwrap()
}

const SAMPLES: [&str; 6] = [
    "",
    "Hoofdstuk 1\n\nEldrin liep. Eldrin rende. Eldrin viel.",
    "She walked slowly. \"Come here,\" he said quietly! Was it late?",
    "'a - - - b' 'c' d' e'f 'g",
    "\"Run.\" \"Now!\" \"Go?\"",
    "He was afraid. He felt cold. He was tired and he knew it was over.",
];

#[test]
fn empty_input_yields_zero_basic_metrics() {
    assert_eq!(extractor().basic_metrics(""), BasicMetrics::default());
}

#[test]
fn empty_input_yields_neutral_enhanced_metrics() {
    let metrics = extractor().enhanced_metrics("");

    assert!(metrics.characters.is_empty());
    assert!(metrics.style_issues.is_empty());
    assert_eq!(metrics.pacing.pacing_score, 0.0);
    assert_eq!(metrics.show_vs_tell.show_vs_tell_score, 10.0);
    assert_eq!(metrics.readability_score, 0.0);
    assert_eq!(metrics.engagement_score, 5.0);
}

#[test]
fn basic_metrics_count_words_sentences_dialog_and_adverbs() {
    let metrics =
        extractor().basic_metrics("She walked slowly. \"Come here,\" he said quietly! Was it late?");

    assert_eq!(metrics.words, 11);
    assert_eq!(metrics.sentences, 3);
    assert_eq!(metrics.avg_sentence_words, 3.67);
    assert_eq!(metrics.dialog_word_share, 0.182);
    assert_eq!(metrics.adverb_count, 2);
}

#[test]
fn contractions_count_as_one_word() {
    assert_eq!(extractor().basic_metrics("Don't stop now").words, 3);
}

#[test]
fn text_without_terminator_is_one_sentence() {
    let metrics = extractor().basic_metrics("no punctuation here");
    assert_eq!(metrics.sentences, 1);
    assert_eq!(metrics.avg_sentence_words, 3.0);
}

#[test]
fn dutch_adverb_suffix_is_counted() {
    assert_eq!(
        extractor()
            .basic_metrics("Het was eigenlijk vreselijk en Waarschijnlijk waar.")
            .adverb_count,
        3
    );
}

#[test]
fn basic_metrics_are_pure() {
    let extractor = extractor();
    for text in SAMPLES {
        assert_eq!(extractor.basic_metrics(text), extractor.basic_metrics(text));
    }
}

#[test]
fn ratios_and_scores_stay_in_range() {
    let extractor = extractor();
    for text in SAMPLES {
        let metrics = extractor.enhanced_metrics(text);
        let share = metrics.basic.dialog_word_share;
        assert!((0.0..=1.0).contains(&share), "dialog share {share} for {text:?}");
        assert!((0.0..=1.0).contains(&metrics.pacing.dialog_ratio));
        assert!((0.0..=10.0).contains(&metrics.pacing.pacing_score));
        assert!((0.0..=100.0).contains(&metrics.readability_score));
        assert!((1.0..=10.0).contains(&metrics.engagement_score));
    }
}

#[test]
fn fully_quoted_text_is_all_dialog() {
    let metrics = extractor().basic_metrics("\"Run now.\"");
    assert_eq!(metrics.dialog_word_share, 1.0);
}

#[test]
fn repeated_name_is_a_character_with_mentions() {
    let metrics = extractor().enhanced_metrics("Hoofdstuk 1\n\nEldrin liep. Eldrin rende. Eldrin viel.");

    let eldrin = metrics.characters.get("Eldrin").expect("Eldrin detected");
    assert_eq!(eldrin.mentions, 3);
    assert_eq!(eldrin.sentence_count, 3);
    assert!(!metrics.characters.contains_key("Hoofdstuk"));
}

#[test]
fn single_short_name_is_ignored_but_single_long_name_is_kept() {
    let metrics = extractor().enhanced_metrics("Mira opened the door for Theodora.");

    assert!(!metrics.characters.contains_key("Mira"));
    assert_eq!(metrics.characters["Theodora"].mentions, 1);
}

#[test]
fn short_name_mentioned_twice_is_kept() {
    let metrics = extractor().enhanced_metrics("Mira sat down. Later Mira left.");
    assert_eq!(metrics.characters["Mira"].mentions, 2);
}

#[test]
fn emotions_are_collected_from_character_sentences_in_order() {
    let metrics = extractor()
        .enhanced_metrics("Eldrin was afraid. Mira smiled. Eldrin felt angry and afraid.");

    let eldrin = &metrics.characters["Eldrin"];
    assert_eq!(eldrin.mentions, 2);
    assert_eq!(eldrin.sentence_count, 2);
    assert_eq!(eldrin.emotions, vec!["afraid", "angry", "afraid"]);
}

#[test]
fn long_quote_free_paragraph_is_an_info_dump() {
    let paragraph = vec!["river"; 150].join(" ");
    let issues = extractor().enhanced_metrics(&paragraph).style_issues;
    assert!(
        issues.iter().any(|issue| issue.contains("info-dump")),
        "issues: {issues:?}"
    );

    let quoted = format!("\"{paragraph}\"");
    let issues = extractor().enhanced_metrics(&quoted).style_issues;
    assert!(!issues.iter().any(|issue| issue.contains("info-dump")));
}

#[test]
fn hundred_word_paragraph_is_not_an_info_dump() {
    let paragraph = vec!["river"; 100].join(" ");
    let issues = extractor().enhanced_metrics(&paragraph).style_issues;
    assert!(!issues.iter().any(|issue| issue.contains("info-dump")));
}

#[test]
fn info_dumps_are_counted_per_paragraph() {
    let paragraph = vec!["river"; 120].join(" ");
    let text = format!("{paragraph}\n\n\"Short line,\" she said.\n\n{paragraph}");
    let issues = extractor().enhanced_metrics(&text).style_issues;
    assert!(issues.contains(&"2 possible info-dumps found. Break up with action/dialog.".to_string()));
}

#[test]
fn repeated_words_report_counts_highest_first() {
    let text = format!("{} {}", vec!["rain"; 6].join(" "), vec!["Storm"; 7].join(" "));
    let issues = extractor().enhanced_metrics(&text).style_issues;
    assert!(issues.contains(&"Repeated words: storm (7x), rain (6x)".to_string()));
}

#[test]
fn repeated_words_report_at_most_five() {
    let text = ["amber", "birch", "cedar", "delta", "ember", "fable", "gusto"]
        .iter()
        .map(|word| vec![*word; 6].join(" "))
        .collect::<Vec<String>>()
        .join(" ");
    let issues = extractor().enhanced_metrics(&text).style_issues;

    let repeated = issues
        .iter()
        .find(|issue| issue.starts_with("Repeated words:"))
        .expect("repeated words issue");
    assert_eq!(repeated.matches("(6x)").count(), 5);
    assert!(repeated.contains("amber (6x)"));
    assert!(!repeated.contains("gusto"));
}

#[test]
fn short_words_are_not_reported_as_repeated() {
    let text = vec!["the"; 12].join(" ");
    let issues = extractor().enhanced_metrics(&text).style_issues;
    assert!(!issues.iter().any(|issue| issue.starts_with("Repeated words:")));
}

#[test]
fn dense_adverbs_are_flagged() {
    let issues = extractor().enhanced_metrics("He quickly and quietly left.").style_issues;
    assert!(issues.contains(&"Too many adverbs (2 found). Replace with stronger verbs.".to_string()));
}

#[test]
fn weak_verbs_are_flagged() {
    let issues = extractor()
        .enhanced_metrics("He was there. She had it. They went home.")
        .style_issues;
    assert!(issues.contains(&"Many weak verbs (3). Use more specific actions.".to_string()));
}

#[test]
fn pacing_balances_action_and_description() {
    let pacing = extractor().enhanced_metrics("He ran. She jumped. It was dark.").pacing;

    assert_eq!(pacing.avg_sentence_length, 2.33);
    assert_eq!(pacing.sentence_variety, 1);
    assert_eq!(pacing.action_description_ratio, 2.0);
    assert_eq!(pacing.dialog_ratio, 0.0);
    assert_eq!(pacing.pacing_score, 5.0);
}

#[test]
fn show_vs_tell_counts_both_sides() {
    let show_vs_tell = extractor().enhanced_metrics("She felt cold. He was tired.").show_vs_tell;

    assert_eq!(show_vs_tell.tell_ratio, 33.33);
    assert_eq!(show_vs_tell.show_ratio, 50.0);
    assert_eq!(show_vs_tell.show_vs_tell_score, 3.0);
}

#[test]
fn dutch_prose_feeds_pacing_and_show_vs_tell() {
    let metrics = extractor().enhanced_metrics(
        "Hij rende naar buiten. Zij sprong over het hek en fluisterde iets. Ze voelde zich bang.",
    );

    assert_eq!(metrics.basic.words, 16);
    assert_eq!(metrics.pacing.action_description_ratio, 2.0);
    assert_eq!(metrics.show_vs_tell.tell_ratio, 6.25);
    assert_eq!(metrics.show_vs_tell.show_ratio, 12.5);
    assert_eq!(metrics.show_vs_tell.show_vs_tell_score, 4.0);
}

#[test]
fn readability_is_clamped_for_short_simple_sentences() {
    let metrics = extractor().enhanced_metrics("The cat sat. The dog ran.");
    assert_eq!(metrics.readability_score, 100.0);
}

#[test]
fn readability_drops_with_long_words_and_sentences() {
    let sentence = vec!["extraordinarily"; 60].join(" ");
    let metrics = extractor().enhanced_metrics(&format!("{sentence}."));
    // 206.835 - 1.015 * 60 - 84.6 * 1.0
    assert_eq!(metrics.readability_score, 61.3);
}

#[derive(Debug)]
struct FixedDetector;

impl CharacterDetector for FixedDetector {
    fn detect(&self, _text: &str) -> BTreeMap<String, CharacterProfile> {
        BTreeMap::from([(
            "Narrator".to_string(),
            CharacterProfile {
                mentions: 1,
                ..CharacterProfile::default()
            },
        )])
    }
}

#[test]
fn character_detection_strategy_is_replaceable() {
    let extractor = extractor().with_detector(Box::new(FixedDetector));
    let metrics = extractor.enhanced_metrics("Eldrin liep. Eldrin rende.");

    assert_eq!(metrics.characters.len(), 1);
    assert!(metrics.characters.contains_key("Narrator"));
}

#[test]
fn enhanced_metrics_serialize_basic_fields_flat() {
    let metrics = extractor().enhanced_metrics("Eldrin liep. Eldrin rende.");
    let value = serde_json::to_value(&metrics).unwrap();

    assert_eq!(value["words"], 4);
    assert_eq!(value["sentences"], 2);
    assert!(value["characters"]["Eldrin"]["sentence_count"].is_number());
    assert!(value["pacing"]["pacing_score"].is_number());
    assert!(value["show_vs_tell"]["show_vs_tell_score"].is_number());
}
