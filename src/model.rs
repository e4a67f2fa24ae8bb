use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManuscriptSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BasicMetrics {
    pub words: usize,
    pub sentences: usize,
    pub avg_sentence_words: f64,
    pub dialog_word_share: f64,
    pub adverb_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CharacterProfile {
    pub mentions: usize,
    pub emotions: Vec<String>,
    pub sentence_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PacingMetrics {
    pub avg_sentence_length: f64,
    pub sentence_variety: usize,
    pub action_description_ratio: f64,
    pub dialog_ratio: f64,
    pub pacing_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShowVsTell {
    pub tell_ratio: f64,
    pub show_ratio: f64,
    pub show_vs_tell_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnhancedMetrics {
    #[serde(flatten)]
    pub basic: BasicMetrics,
    pub characters: BTreeMap<String, CharacterProfile>,
    pub pacing: PacingMetrics,
    pub style_issues: Vec<String>,
    pub show_vs_tell: ShowVsTell,
    pub readability_score: f64,
    pub engagement_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerCategory {
    Date,
    MonthDay,
    Relative,
    Time,
    Weekday,
    Age,
}

impl MarkerCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerCategory::Date => "date",
            MarkerCategory::MonthDay => "month_day",
            MarkerCategory::Relative => "relative",
            MarkerCategory::Time => "time",
            MarkerCategory::Weekday => "weekday",
            MarkerCategory::Age => "age",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeMarker {
    pub category: MarkerCategory,
    pub matched_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionMetrics {
    Basic(BasicMetrics),
    Enhanced(EnhancedMetrics),
}

impl SectionMetrics {
    pub fn basic(&self) -> &BasicMetrics {
        match self {
            SectionMetrics::Basic(metrics) => metrics,
            SectionMetrics::Enhanced(metrics) => &metrics.basic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionAnalysis {
    pub title: String,
    pub metrics: SectionMetrics,
    pub time_markers: Vec<TimeMarker>,
}
