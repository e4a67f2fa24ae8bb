use anyhow::Result;
use manuscript_analyzer::Analyzer;
use serde::Serialize;
use tracing::{info, warn};

use super::sources::{LoadedSource, build_analyzer, load_sources};
use crate::cli::SplitArgs;
use crate::util::render_json_pretty;

#[derive(Debug, Serialize)]
struct SectionListing {
    index: usize,
    source: String,
    title: String,
    words: usize,
    content_chars: usize,
}

pub fn run(args: SplitArgs) -> Result<()> {
    let analyzer = build_analyzer(args.vocabulary.as_deref())?;
    let sources = load_sources(&args.files)?;
    let listings = list_sections(&analyzer, &sources);

    if args.json {
        print!("{}", render_json_pretty(&listings)?);
    } else {
        for listing in &listings {
            info!(
                index = listing.index,
                source = %listing.source,
                title = %listing.title,
                words = listing.words,
                "section"
            );
        }
    }

    info!(
        files = sources.len(),
        sections = listings.len(),
        "split completed"
    );
    Ok(())
}

fn list_sections(analyzer: &Analyzer, sources: &[LoadedSource]) -> Vec<SectionListing> {
    let mut listings = Vec::new();

    for source in sources {
        let sections = analyzer.split(&source.text);
        if sections.is_empty() {
            warn!(path = %source.path.display(), "no sections found");
        }

        for section in sections {
            listings.push(SectionListing {
                index: listings.len() + 1,
                source: source.path.display().to_string(),
                words: analyzer.basic_metrics(&section.content).words,
                content_chars: section.content.chars().count(),
                title: section.title,
            });
        }
    }

    listings
}
