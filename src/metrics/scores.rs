use super::{MetricsExtractor, round_to};
use crate::model::ShowVsTell;

const LONG_WORD_MIN_CHARS: usize = 7;

impl MetricsExtractor {
    pub(super) fn show_vs_tell(&self, text: &str, total_words: usize) -> ShowVsTell {
        let tell_count = self.patterns.tell.find_iter(text).count();
        let show_count = self.patterns.show.find_iter(text).count()
            + self.patterns.sensory.find_iter(text).count();
        let per_hundred = 100.0 / total_words.max(1) as f64;

        ShowVsTell {
            tell_ratio: round_to(tell_count as f64 * per_hundred, 2),
            show_ratio: round_to(show_count as f64 * per_hundred, 2),
            show_vs_tell_score: show_tell_score(show_count, tell_count),
        }
    }

    pub(super) fn readability(&self, text: &str) -> f64 {
        let words = text.split_whitespace().collect::<Vec<&str>>();
        let sentence_count = self.terminated_fragments(text).len();
        if words.is_empty() || sentence_count == 0 {
            return 0.0;
        }

        let avg_words_per_sentence = words.len() as f64 / sentence_count as f64;
        let long_words = words
            .iter()
            .filter(|word| word.chars().count() >= LONG_WORD_MIN_CHARS)
            .count();
        let long_word_ratio = long_words as f64 / words.len() as f64;

        let score = 206.835 - 1.015 * avg_words_per_sentence - 84.6 * long_word_ratio;
        round_to(score, 1).clamp(0.0, 100.0)
    }
}

fn show_tell_score(show_count: usize, tell_count: usize) -> f64 {
    if tell_count == 0 {
        return 10.0;
    }
    round_to(show_count as f64 / tell_count as f64 * 2.0, 1).min(10.0)
}

pub(super) fn engagement(pacing_score: f64, show_tell_score: f64, issue_count: usize) -> f64 {
    let issue_penalty = (issue_count as f64 * 0.5).min(3.0);
    let engagement = (pacing_score + show_tell_score) / 2.0 - issue_penalty;
    round_to(engagement, 1).clamp(1.0, 10.0)
}
