use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use manuscript_analyzer::{Analyzer, Vocabulary, normalize};
use tracing::info;

use crate::util::sha256_bytes;

#[derive(Debug)]
pub struct LoadedSource {
    pub path: PathBuf,
    pub text: String,
    pub sha256: String,
    pub byte_count: usize,
}

pub fn build_analyzer(vocabulary_path: Option<&Path>) -> Result<Analyzer> {
    let vocabulary = match vocabulary_path {
        Some(path) => {
            info!(path = %path.display(), "loading vocabulary");
            Vocabulary::from_json_file(path)?
        }
        None => Vocabulary::default(),
    };

    Analyzer::new(vocabulary).context("failed to compile vocabulary patterns")
}

pub fn load_sources(files: &[PathBuf]) -> Result<Vec<LoadedSource>> {
    files.iter().map(|path| load_source(path)).collect()
}

fn load_source(path: &Path) -> Result<LoadedSource> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    let text = normalize(&bytes, extension)
        .with_context(|| format!("failed to extract text from {}", path.display()))?;

    info!(
        path = %path.display(),
        bytes = bytes.len(),
        chars = text.chars().count(),
        "loaded manuscript"
    );

    Ok(LoadedSource {
        path: path.to_path_buf(),
        sha256: sha256_bytes(&bytes),
        byte_count: bytes.len(),
        text,
    })
}
