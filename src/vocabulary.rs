use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub chapter_words: Vec<String>,
    pub stop_words: Vec<String>,
    pub emotion_words: Vec<String>,
    pub action_verbs: Vec<String>,
    pub description_verbs: Vec<String>,
    pub weak_verbs: Vec<String>,
    pub tell_verbs: Vec<String>,
    pub tell_linking_verbs: Vec<String>,
    pub show_verbs: Vec<String>,
    pub sensory_words: Vec<String>,
    pub adverb_suffixes: Vec<String>,
    pub months: Vec<String>,
    pub weekdays: Vec<String>,
    pub relative_time_words: Vec<String>,
    pub age_phrases: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            chapter_words: owned(&["hoofdstuk", "chapter"]),
            stop_words: owned(&[
                "Het", "De", "Een", "Maar", "En", "Of", "Dan", "Dus", "Want", "Omdat", "Toen",
                "Als", "Dat", "Dit", "Die", "Deze", "Wel", "Niet", "Ook", "Nog", "Al", "Zo",
                "Zeer", "Hij", "Zij", "Wij", "Jij", "Hun", "Haar", "Zijn", "Wat", "Waar",
                "Wie", "Hoe", "Waarom", "Nee", "The", "And", "But", "Then", "When",
                "What", "Where", "Why", "How", "This", "That", "These", "Those", "There",
                "They", "She", "Her", "His", "Him", "You", "Your", "Yes", "Not", "With",
                "From", "After", "Before", "While", "Hoofdstuk", "Chapter", "Deel", "Part",
                "Sectie", "Section", "Epiloog", "Epilogue", "Proloog", "Prologue",
            ]),
            emotion_words: owned(&[
                "afraid",
                "happy",
                "sad",
                "angry",
                "frustrated",
                "excited",
                "nervous",
                "calm",
                "tense",
                "joyful",
                "unhappy",
                "anxious",
                "proud",
                "ashamed",
                "disappointed",
                "scared",
                "worried",
                "confused",
                "surprised",
                "shocked",
                "bang",
                "blij",
                "verdrietig",
                "boos",
                "gefrustreerd",
                "opgewonden",
                "nerveus",
                "kalm",
                "gespannen",
                "ongelukkig",
                "angstig",
                "trots",
                "beschaamd",
                "teleurgesteld",
                "bezorgd",
                "verward",
                "verrast",
                "geschokt",
            ]),
            action_verbs: owned(&[
                "ran",
                "jumped",
                "grabbed",
                "shouted",
                "screamed",
                "fought",
                "hit",
                "pushed",
                "pulled",
                "threw",
                "rushed",
                "leaped",
                "struck",
                "slammed",
                "burst",
                "charged",
                "rende",
                "sprong",
                "greep",
                "schreeuwde",
                "gilde",
                "vocht",
                "sloeg",
                "duwde",
                "trok",
                "gooide",
                "stormde",
                "smeet",
            ]),
            description_verbs: owned(&[
                "was", "had", "seemed", "stood", "lay", "sat", "looked", "felt", "thought", "knew",
                "appeared", "remained", "leek", "stond", "lag", "zat", "keek", "voelde", "dacht",
                "wist", "bleef",
            ]),
            weak_verbs: owned(&[
                "was", "had", "went", "came", "did", "made", "got", "put", "took", "ging", "kwam",
                "deed", "maakte", "kreeg", "zette", "nam", "werd",
            ]),
            tell_verbs: owned(&[
                "felt",
                "thought",
                "knew",
                "understood",
                "realized",
                "voelde",
                "dacht",
                "wist",
                "begreep",
                "besefte",
            ]),
            tell_linking_verbs: owned(&["was", "seemed", "appeared", "leek", "scheen"]),
            show_verbs: owned(&[
                "looked",
                "listened",
                "smelled",
                "tasted",
                "felt",
                "grabbed",
                "whispered",
                "shouted",
                "trembled",
                "sweated",
                "glanced",
                "stared",
                "reached",
                "touched",
                "smiled",
                "frowned",
                "keek",
                "luisterde",
                "rook",
                "proefde",
                "voelde",
                "greep",
                "fluisterde",
                "schreeuwde",
                "trilde",
                "zweette",
                "staarde",
                "reikte",
                "raakte",
                "glimlachte",
                "fronste",
            ]),
            sensory_words: owned(&[
                "saw", "heard", "smelled", "tasted", "felt", "warm", "cold", "soft", "rough",
                "sweet", "sour", "bright", "dark", "loud", "quiet", "zag", "hoorde", "rook",
                "proefde", "koud", "zacht", "ruw", "zoet", "zuur", "helder", "donker", "luid",
                "stil",
            ]),
            adverb_suffixes: owned(&["ly", "lijk"]),
            months: owned(&[
                "jan", "feb", "mrt", "mar", "apr", "mei", "may", "jun", "jul", "aug", "sep",
                "okt", "oct", "nov", "dec", "januari", "februari", "maart", "april", "juni",
                "juli", "augustus", "september", "oktober", "november", "december", "january",
                "february", "march", "june", "july", "august", "october",
            ]),
            weekdays: owned(&[
                "maandag",
                "dinsdag",
                "woensdag",
                "donderdag",
                "vrijdag",
                "zaterdag",
                "zondag",
                "monday",
                "tuesday",
                "wednesday",
                "thursday",
                "friday",
                "saturday",
                "sunday",
            ]),
            relative_time_words: owned(&[
                "vandaag",
                "gisteren",
                "morgen",
                "eergisteren",
                "overmorgen",
                "vroeger",
                "later",
                "binnenkort",
                "toen",
                "nu",
                "today",
                "yesterday",
                "tomorrow",
                "tonight",
            ]),
            age_phrases: owned(&["jaar oud", "years old", "year old"]),
        }
    }
}

impl Vocabulary {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let vocabulary = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse vocabulary {}", path.display()))?;
        Ok(vocabulary)
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

pub(crate) fn alternation(words: &[String]) -> String {
    let mut words = words
        .iter()
        .map(|word| word.trim())
        .filter(|word| !word.is_empty())
        .collect::<Vec<&str>>();

    if words.is_empty() {
        return r"[^\s\S]".to_string();
    }

    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.dedup();

    words
        .iter()
        .map(|word| {
            word.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<String>>()
                .join(r"\s+")
        })
        .collect::<Vec<String>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use regex::Regex;

    use super::*;

    #[test]
    fn alternation_prefers_longer_words_and_escapes() {
        let words = owned(&["jan", "januari", "a.b"]);
        assert_eq!(alternation(&words), r"januari|a\.b|jan");
    }

    #[test]
    fn alternation_of_empty_list_never_matches() {
        let pattern = Regex::new(&format!(r"\b(?:{})\b", alternation(&[]))).unwrap();
        assert!(!pattern.is_match("any text at all"));
        assert!(!pattern.is_match(""));
    }

    #[test]
    fn multi_word_phrases_match_across_whitespace() {
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(&owned(&["jaar oud"]))))
            .unwrap();
        assert!(pattern.is_match("12 jaar   oud"));
    }

    #[test]
    fn partial_json_keeps_default_lists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");
        fs::write(&path, r#"{"chapter_words": ["kapitel"]}"#).unwrap();

        let vocabulary = Vocabulary::from_json_file(&path).unwrap();
        assert_eq!(vocabulary.chapter_words, vec!["kapitel".to_string()]);
        assert_eq!(vocabulary.weak_verbs, Vocabulary::default().weak_verbs);
    }

    #[test]
    fn malformed_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let error = Vocabulary::from_json_file(&path).unwrap_err();
        assert!(error.to_string().contains("broken.json"));
    }
}
