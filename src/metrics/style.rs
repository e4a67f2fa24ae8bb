use std::collections::HashMap;

use super::MetricsExtractor;

const ADVERB_SHARE_LIMIT: f64 = 0.05;
const REPEATED_WORD_MIN_LEN: usize = 4;
const REPEATED_WORD_MIN_COUNT: usize = 6;
const REPEATED_WORD_REPORT_CAP: usize = 5;
const WEAK_VERB_SHARE_LIMIT: f64 = 0.3;
const INFO_DUMP_MIN_WORDS: usize = 101;
const QUOTE_MARKS: [char; 4] = ['"', '“', '”', '„'];

impl MetricsExtractor {
    pub(super) fn style_issues(
        &self,
        text: &str,
        total_words: usize,
        adverb_count: usize,
    ) -> Vec<String> {
        let mut issues = Vec::new();

        if adverb_count as f64 > total_words as f64 * ADVERB_SHARE_LIMIT {
            issues.push(format!(
                "Too many adverbs ({adverb_count} found). Replace with stronger verbs."
            ));
        }

        let repeated = self.repeated_words(text);
        if !repeated.is_empty() {
            let listed = repeated
                .iter()
                .map(|(word, count)| format!("{word} ({count}x)"))
                .collect::<Vec<String>>()
                .join(", ");
            issues.push(format!("Repeated words: {listed}"));
        }

        let weak_count = self.patterns.weak_verb.find_iter(text).count();
        let verb_estimate = self.patterns.verb_form.find_iter(text).count() + weak_count;
        if weak_count as f64 > verb_estimate as f64 * WEAK_VERB_SHARE_LIMIT {
            issues.push(format!(
                "Many weak verbs ({weak_count}). Use more specific actions."
            ));
        }

        let info_dumps = self
            .patterns
            .paragraph_break
            .split(text)
            .filter(|paragraph| is_info_dump(paragraph))
            .count();
        if info_dumps > 0 {
            issues.push(format!(
                "{info_dumps} possible info-dumps found. Break up with action/dialog."
            ));
        }

        issues
    }

    fn repeated_words(&self, text: &str) -> Vec<(String, usize)> {
        let mut counts = HashMap::<String, usize>::new();
        let mut first_seen = Vec::<String>::new();

        for token in self.patterns.bare_word.find_iter(text) {
            let word = token.as_str().to_lowercase();
            if word.chars().count() < REPEATED_WORD_MIN_LEN {
                continue;
            }
            let count = counts.entry(word.clone()).or_default();
            if *count == 0 {
                first_seen.push(word);
            }
            *count += 1;
        }

        let mut repeated = first_seen
            .into_iter()
            .filter_map(|word| {
                let count = counts.get(&word).copied().unwrap_or(0);
                (count >= REPEATED_WORD_MIN_COUNT).then_some((word, count))
            })
            .collect::<Vec<(String, usize)>>();

        repeated.sort_by(|a, b| b.1.cmp(&a.1));
        repeated.truncate(REPEATED_WORD_REPORT_CAP);
        repeated
    }
}

fn is_info_dump(paragraph: &str) -> bool {
    paragraph.split_whitespace().count() >= INFO_DUMP_MIN_WORDS
        && !paragraph.contains(QUOTE_MARKS)
}
