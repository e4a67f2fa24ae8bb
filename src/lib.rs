pub mod analyzer;
pub mod markers;
pub mod metrics;
pub mod model;
pub mod normalize;
pub mod report;
pub mod split;
pub mod vocabulary;

pub use analyzer::Analyzer;
pub use model::{
    BasicMetrics, CharacterProfile, EnhancedMetrics, ManuscriptSection, MarkerCategory,
    PacingMetrics, SectionAnalysis, SectionMetrics, ShowVsTell, TimeMarker,
};
pub use normalize::{NormalizeError, normalize, normalize_file};
pub use vocabulary::Vocabulary;
