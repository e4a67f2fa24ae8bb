use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Debug;

use anyhow::{Context, Result};
use regex::Regex;

use super::word_list_regex;
use crate::model::CharacterProfile;
use crate::vocabulary::Vocabulary;

const MIN_REPEATED_MENTIONS: usize = 2;
const MIN_SINGLE_MENTION_LEN: usize = 5;

pub trait CharacterDetector: Debug + Send + Sync {
    fn detect(&self, text: &str) -> BTreeMap<String, CharacterProfile>;
}

#[derive(Debug)]
pub struct CapitalizedTokenDetector {
    candidate: Regex,
    token: Regex,
    sentence_terminators: Regex,
    emotion: Regex,
    stop_words: HashSet<String>,
}

impl CapitalizedTokenDetector {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        Ok(Self {
            candidate: Regex::new(r"\b\p{Lu}\p{Ll}{2,}\b")
                .context("failed to compile capitalized token regex")?,
            token: Regex::new(r"\w+").context("failed to compile token regex")?,
            sentence_terminators: Regex::new(r"[.!?]+")
                .context("failed to compile sentence terminator regex")?,
            emotion: word_list_regex(&vocabulary.emotion_words)
                .context("failed to compile emotion regex")?,
            stop_words: vocabulary
                .stop_words
                .iter()
                .map(|word| word.trim().to_string())
                .collect(),
        })
    }

    fn candidate_counts<'a>(&self, text: &'a str) -> HashMap<&'a str, usize> {
        let mut counts = HashMap::<&str, usize>::new();
        for found in self.candidate.find_iter(text) {
            let name = found.as_str();
            if self.stop_words.contains(name) {
                continue;
            }
            *counts.entry(name).or_default() += 1;
        }
        counts
    }

    fn mentions_name(&self, sentence: &str, name_lower: &str) -> bool {
        self.token
            .find_iter(sentence)
            .any(|token| token.as_str().to_lowercase() == name_lower)
    }
}

impl CharacterDetector for CapitalizedTokenDetector {
    fn detect(&self, text: &str) -> BTreeMap<String, CharacterProfile> {
        let sentences = self
            .sentence_terminators
            .split(text)
            .filter(|sentence| !sentence.trim().is_empty())
            .collect::<Vec<&str>>();

        self.candidate_counts(text)
            .into_iter()
            .filter(|(name, count)| is_likely_character(name, *count))
            .map(|(name, mentions)| {
                let name_lower = name.to_lowercase();
                let mut profile = CharacterProfile {
                    mentions,
                    ..CharacterProfile::default()
                };

                for sentence in &sentences {
                    if !self.mentions_name(sentence, &name_lower) {
                        continue;
                    }
                    profile.sentence_count += 1;
                    profile.emotions.extend(
                        self.emotion
                            .find_iter(sentence)
                            .map(|found| found.as_str().to_string()),
                    );
                }

                (name.to_string(), profile)
            })
            .collect()
    }
}

fn is_likely_character(name: &str, count: usize) -> bool {
    count >= MIN_REPEATED_MENTIONS
        || (count >= 1 && name.chars().count() >= MIN_SINGLE_MENTION_LEN)
}
