use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{BasicMetrics, EnhancedMetrics};
use crate::vocabulary::{Vocabulary, alternation};

mod characters;
mod pacing;
mod scores;
mod style;
#[cfg(test)]
mod tests;

pub use characters::{CapitalizedTokenDetector, CharacterDetector};

const AVG_SENTENCE_DECIMALS: i32 = 2;
const DIALOG_SHARE_DECIMALS: i32 = 3;

#[derive(Debug)]
struct MetricsPatterns {
    word: Regex,
    bare_word: Regex,
    sentence_break: Regex,
    sentence_terminators: Regex,
    dialog_span: Regex,
    adverb: Regex,
    verb_form: Regex,
    paragraph_break: Regex,
    weak_verb: Regex,
    action_verb: Regex,
    description_verb: Regex,
    tell: Regex,
    show: Regex,
    sensory: Regex,
}

impl MetricsPatterns {
    fn new(vocabulary: &Vocabulary) -> Result<Self> {
        Ok(Self {
            word: Regex::new(r"\w+(?:'\w+)?").context("failed to compile word regex")?,
            bare_word: Regex::new(r"\w+").context("failed to compile bare word regex")?,
            sentence_break: Regex::new(r"[.!?]\s+")
                .context("failed to compile sentence break regex")?,
            sentence_terminators: Regex::new(r"[.!?]+")
                .context("failed to compile sentence terminator regex")?,
            dialog_span: Regex::new(r#"(?s)["“”'’].+?["“”'’]"#)
                .context("failed to compile dialog span regex")?,
            adverb: Regex::new(&format!(
                r"(?i)\b\w+(?:{})\b",
                alternation(&vocabulary.adverb_suffixes)
            ))
            .context("failed to compile adverb regex")?,
            verb_form: Regex::new(r"\b\w+(?:ed|ing|s)\b")
                .context("failed to compile verb form regex")?,
            paragraph_break: Regex::new(r"\r?\n[ \t]*\r?\n")
                .context("failed to compile paragraph break regex")?,
            weak_verb: word_list_regex(&vocabulary.weak_verbs)
                .context("failed to compile weak verb regex")?,
            action_verb: word_list_regex(&vocabulary.action_verbs)
                .context("failed to compile action verb regex")?,
            description_verb: word_list_regex(&vocabulary.description_verbs)
                .context("failed to compile description verb regex")?,
            tell: Regex::new(&format!(
                r"(?i)\b(?:{}|(?:{})\s+\w+)\b",
                alternation(&vocabulary.tell_verbs),
                alternation(&vocabulary.tell_linking_verbs)
            ))
            .context("failed to compile tell regex")?,
            show: word_list_regex(&vocabulary.show_verbs)
                .context("failed to compile show regex")?,
            sensory: word_list_regex(&vocabulary.sensory_words)
                .context("failed to compile sensory regex")?,
        })
    }
}

pub(crate) fn word_list_regex(words: &[String]) -> Result<Regex> {
    let pattern = format!(r"(?i)\b(?:{})\b", alternation(words));
    Regex::new(&pattern).with_context(|| format!("invalid word list pattern: {pattern}"))
}

#[derive(Debug)]
pub struct MetricsExtractor {
    patterns: MetricsPatterns,
    detector: Box<dyn CharacterDetector>,
}

impl MetricsExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        Ok(Self {
            patterns: MetricsPatterns::new(vocabulary)?,
            detector: Box::new(CapitalizedTokenDetector::new(vocabulary)?),
        })
    }

    pub fn with_detector(mut self, detector: Box<dyn CharacterDetector>) -> Self {
        self.detector = detector;
        self
    }

    pub fn basic_metrics(&self, text: &str) -> BasicMetrics {
        let words = self.word_count(text);
        let sentences = self.sentences(text);

        let avg_sentence_words = if sentences.is_empty() {
            0.0
        } else {
            let total: usize = sentences
                .iter()
                .map(|sentence| sentence.split_whitespace().count())
                .sum();
            total as f64 / sentences.len() as f64
        };

        BasicMetrics {
            words,
            sentences: sentences.len(),
            avg_sentence_words: round_to(avg_sentence_words, AVG_SENTENCE_DECIMALS),
            dialog_word_share: round_to(self.dialog_share(text, words), DIALOG_SHARE_DECIMALS),
            adverb_count: self.patterns.adverb.find_iter(text).count(),
        }
    }

    pub fn enhanced_metrics(&self, text: &str) -> EnhancedMetrics {
        let basic = self.basic_metrics(text);
        let characters = self.detector.detect(text);
        let pacing = self.pacing(text, basic.words);
        let style_issues = self.style_issues(text, basic.words, basic.adverb_count);
        let show_vs_tell = self.show_vs_tell(text, basic.words);
        let readability_score = self.readability(text);
        let engagement_score = scores::engagement(
            pacing.pacing_score,
            show_vs_tell.show_vs_tell_score,
            style_issues.len(),
        );

        EnhancedMetrics {
            basic,
            characters,
            pacing,
            style_issues,
            show_vs_tell,
            readability_score,
            engagement_score,
        }
    }

    fn word_count(&self, text: &str) -> usize {
        self.patterns.word.find_iter(text).count()
    }

    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut spans = Vec::new();
        let mut start = 0usize;

        for found in self.patterns.sentence_break.find_iter(text) {
            // Terminators are single-byte ASCII.
            let end = found.start() + 1;
            spans.push(&text[start..end]);
            start = found.end();
        }
        spans.push(&text[start..]);

        spans.retain(|span| !span.trim().is_empty());
        spans
    }

    fn terminated_fragments<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.patterns
            .sentence_terminators
            .split(text)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    fn dialog_share(&self, text: &str, total_words: usize) -> f64 {
        if total_words == 0 {
            return 0.0;
        }

        let dialog_words: usize = self
            .patterns
            .dialog_span
            .find_iter(text)
            .map(|span| self.word_count(span.as_str()))
            .sum();

        (dialog_words as f64 / total_words as f64).min(1.0)
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
