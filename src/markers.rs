use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{MarkerCategory, TimeMarker};
use crate::vocabulary::{Vocabulary, alternation};

#[derive(Debug)]
pub struct TimeMarkerExtractor {
    rules: Vec<(MarkerCategory, Regex)>,
}

impl TimeMarkerExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let months = alternation(&vocabulary.months);
        let patterns = [
            (
                MarkerCategory::Date,
                r"\b(?:\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{4})\b".to_string(),
            ),
            (
                MarkerCategory::MonthDay,
                format!(r"(?i)\b(?:\d{{1,2}}\s+(?:{months})|(?:{months})\s+\d{{1,2}})\b"),
            ),
            (
                MarkerCategory::Relative,
                format!(
                    r"(?i)\b(?:{})\b",
                    alternation(&vocabulary.relative_time_words)
                ),
            ),
            (MarkerCategory::Time, r"\b\d{1,2}:\d{2}\b".to_string()),
            (
                MarkerCategory::Weekday,
                format!(r"(?i)\b(?:{})\b", alternation(&vocabulary.weekdays)),
            ),
            (
                MarkerCategory::Age,
                format!(
                    r"(?i)\b\d{{1,3}}\s+(?:{})\b",
                    alternation(&vocabulary.age_phrases)
                ),
            ),
        ];

        let mut rules = Vec::with_capacity(patterns.len());
        for (category, pattern) in patterns {
            let regex = Regex::new(&pattern).with_context(|| {
                format!("failed to compile {} marker regex", category.as_str())
            })?;
            rules.push((category, regex));
        }

        Ok(Self { rules })
    }

    pub fn extract(&self, text: &str) -> Vec<TimeMarker> {
        self.rules
            .iter()
            .filter_map(|(category, regex)| {
                let mut distinct = Vec::<&str>::new();
                for found in regex.find_iter(text) {
                    if !distinct.contains(&found.as_str()) {
                        distinct.push(found.as_str());
                    }
                }

                (!distinct.is_empty()).then(|| TimeMarker {
                    category: *category,
                    matched_text: distinct.join(", "),
                })
            })
            .collect()
    }
}
