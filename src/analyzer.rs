use anyhow::Result;

use crate::markers::TimeMarkerExtractor;
use crate::metrics::{CharacterDetector, MetricsExtractor};
use crate::model::{
    BasicMetrics, EnhancedMetrics, ManuscriptSection, SectionAnalysis, SectionMetrics, TimeMarker,
};
use crate::split::SectionSplitter;
use crate::vocabulary::Vocabulary;

#[derive(Debug)]
pub struct Analyzer {
    vocabulary: Vocabulary,
    splitter: SectionSplitter,
    metrics: MetricsExtractor,
    markers: TimeMarkerExtractor,
}

impl Analyzer {
    pub fn new(vocabulary: Vocabulary) -> Result<Self> {
        Ok(Self {
            splitter: SectionSplitter::new(&vocabulary)?,
            metrics: MetricsExtractor::new(&vocabulary)?,
            markers: TimeMarkerExtractor::new(&vocabulary)?,
            vocabulary,
        })
    }

    pub fn with_default_vocabulary() -> Result<Self> {
        Self::new(Vocabulary::default())
    }

    pub fn with_character_detector(mut self, detector: Box<dyn CharacterDetector>) -> Self {
        self.metrics = self.metrics.with_detector(detector);
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn split(&self, text: &str) -> Vec<ManuscriptSection> {
        self.splitter.split(text)
    }

    pub fn basic_metrics(&self, content: &str) -> BasicMetrics {
        self.metrics.basic_metrics(content)
    }

    pub fn enhanced_metrics(&self, content: &str) -> EnhancedMetrics {
        self.metrics.enhanced_metrics(content)
    }

    pub fn extract_time_markers(&self, content: &str) -> Vec<TimeMarker> {
        self.markers.extract(content)
    }

    pub fn analyze_section(&self, section: &ManuscriptSection, enhanced: bool) -> SectionAnalysis {
        let metrics = if enhanced {
            SectionMetrics::Enhanced(self.enhanced_metrics(&section.content))
        } else {
            SectionMetrics::Basic(self.basic_metrics(&section.content))
        };

        SectionAnalysis {
            title: section.title.clone(),
            metrics,
            time_markers: self.extract_time_markers(&section.content),
        }
    }
}
