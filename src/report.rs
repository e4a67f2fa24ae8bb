use serde::Serialize;

use crate::metrics::round_to;
use crate::model::SectionAnalysis;

pub const REPORT_MANIFEST_VERSION: u32 = 1;
const NO_MARKERS: &str = "(none)";

#[derive(Debug, Clone, Serialize)]
pub struct SourceDocument {
    pub path: String,
    pub sha256: String,
    pub byte_count: usize,
    pub section_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub index: usize,
    pub source: String,
    #[serde(flatten)]
    pub analysis: SectionAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub total_sections: usize,
    pub total_words: usize,
    pub avg_sentence_length: f64,
}

impl MetricsSummary {
    pub fn from_sections(sections: &[SectionReport]) -> Self {
        if sections.is_empty() {
            return Self::default();
        }

        let total_words = sections
            .iter()
            .map(|section| section.analysis.metrics.basic().words)
            .sum();
        let avg_sum: f64 = sections
            .iter()
            .map(|section| section.analysis.metrics.basic().avg_sentence_words)
            .sum();

        Self {
            total_sections: sections.len(),
            total_words,
            avg_sentence_length: round_to(avg_sum / sections.len() as f64, 2),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ManuscriptReport {
    pub manifest_version: u32,
    pub run_id: String,
    pub generated_at: String,
    pub metrics_mode: String,
    pub sources: Vec<SourceDocument>,
    pub summary: MetricsSummary,
    pub timeline: String,
    pub sections: Vec<SectionReport>,
}

impl ManuscriptReport {
    pub fn build(
        run_id: String,
        generated_at: String,
        metrics_mode: &str,
        sources: Vec<SourceDocument>,
        sections: Vec<SectionReport>,
    ) -> Self {
        Self {
            manifest_version: REPORT_MANIFEST_VERSION,
            run_id,
            generated_at,
            metrics_mode: metrics_mode.to_string(),
            summary: MetricsSummary::from_sections(&sections),
            timeline: render_timeline(&sections),
            sources,
            sections,
        }
    }
}

pub fn render_timeline(sections: &[SectionReport]) -> String {
    sections
        .iter()
        .map(|section| {
            let markers = &section.analysis.time_markers;
            let rendered = if markers.is_empty() {
                NO_MARKERS.to_string()
            } else {
                markers
                    .iter()
                    .map(|marker| format!("{}:{}", marker.category.as_str(), marker.matched_text))
                    .collect::<Vec<String>>()
                    .join("; ")
            };
            format!("* {}: {}", section.analysis.title, rendered)
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BasicMetrics, MarkerCategory, SectionMetrics, TimeMarker};

    fn section(
        index: usize,
        title: &str,
        words: usize,
        avg: f64,
        markers: Vec<TimeMarker>,
    ) -> SectionReport {
        SectionReport {
            index,
            source: "draft.txt".to_string(),
            analysis: SectionAnalysis {
                title: title.to_string(),
                metrics: SectionMetrics::Basic(BasicMetrics {
                    words,
                    avg_sentence_words: avg,
                    ..BasicMetrics::default()
                }),
                time_markers: markers,
            },
        }
    }

    #[test]
    fn timeline_lists_markers_or_none() {
        let sections = vec![
            section(
                1,
                "Hoofdstuk 1",
                10,
                5.0,
                vec![
                    TimeMarker {
                        category: MarkerCategory::Relative,
                        matched_text: "Gisteren".to_string(),
                    },
                    TimeMarker {
                        category: MarkerCategory::Time,
                        matched_text: "14:30, 16:00".to_string(),
                    },
                ],
            ),
            section(2, "Hoofdstuk 2", 20, 8.0, Vec::new()),
        ];

        assert_eq!(
            render_timeline(&sections),
            "* Hoofdstuk 1: relative:Gisteren; time:14:30, 16:00\n* Hoofdstuk 2: (none)"
        );
    }

    #[test]
    fn summary_totals_words_and_averages_sentence_length() {
        let sections = vec![
            section(1, "A", 10, 5.0, Vec::new()),
            section(2, "B", 20, 8.25, Vec::new()),
            section(3, "C", 5, 2.0, Vec::new()),
        ];

        let summary = MetricsSummary::from_sections(&sections);
        assert_eq!(summary.total_sections, 3);
        assert_eq!(summary.total_words, 35);
        assert_eq!(summary.avg_sentence_length, 5.08);
    }

    #[test]
    fn summary_of_no_sections_is_zero() {
        assert_eq!(MetricsSummary::from_sections(&[]), MetricsSummary::default());
    }

    #[test]
    fn section_report_flattens_analysis() {
        let value = serde_json::to_value(section(4, "Hoofdstuk 4", 3, 3.0, Vec::new())).unwrap();
        assert_eq!(value["index"], 4);
        assert_eq!(value["title"], "Hoofdstuk 4");
        assert_eq!(value["metrics"]["words"], 3);
        assert!(value["time_markers"].as_array().unwrap().is_empty());
    }
}
