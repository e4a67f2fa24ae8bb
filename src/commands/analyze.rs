use anyhow::{Result, bail};
use manuscript_analyzer::Analyzer;
use manuscript_analyzer::report::{ManuscriptReport, SectionReport, SourceDocument};
use tracing::{debug, info, warn};

use super::sources::{LoadedSource, build_analyzer, load_sources};
use crate::cli::{AnalyzeArgs, MetricsMode};
use crate::util::{RunClock, write_json_pretty};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let clock = RunClock::start();

    info!(
        run_id = %clock.run_id(),
        files = args.files.len(),
        metrics = args.metrics.as_str(),
        "starting analysis"
    );

    let analyzer = build_analyzer(args.vocabulary.as_deref())?;
    let sources = load_sources(&args.files)?;
    let report = build_report(&analyzer, &sources, args.metrics, &clock)?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.output_dir.join(clock.report_file_name()));
    write_json_pretty(&output_path, &report)?;

    info!(
        path = %output_path.display(),
        sections = report.summary.total_sections,
        words = report.summary.total_words,
        avg_sentence_length = report.summary.avg_sentence_length,
        "wrote manuscript report"
    );

    Ok(())
}

fn build_report(
    analyzer: &Analyzer,
    sources: &[LoadedSource],
    mode: MetricsMode,
    clock: &RunClock,
) -> Result<ManuscriptReport> {
    let enhanced = matches!(mode, MetricsMode::Enhanced);
    let mut documents = Vec::with_capacity(sources.len());
    let mut sections = Vec::<SectionReport>::new();

    for source in sources {
        let source_name = source.path.display().to_string();
        let split = analyzer.split(&source.text);
        if split.is_empty() {
            warn!(path = %source_name, "no sections found");
        }

        for section in &split {
            let analysis = analyzer.analyze_section(section, enhanced);
            debug!(
                title = %analysis.title,
                words = analysis.metrics.basic().words,
                markers = analysis.time_markers.len(),
                "analyzed section"
            );
            sections.push(SectionReport {
                index: sections.len() + 1,
                source: source_name.clone(),
                analysis,
            });
        }

        documents.push(SourceDocument {
            path: source_name,
            sha256: source.sha256.clone(),
            byte_count: source.byte_count,
            section_count: split.len(),
        });
    }

    if sections.is_empty() {
        bail!("no sections found in {} input file(s)", sources.len());
    }

    Ok(ManuscriptReport::build(
        clock.run_id(),
        clock.started_at(),
        mode.as_str(),
        documents,
        sections,
    ))
}
