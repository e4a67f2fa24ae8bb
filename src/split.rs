use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::model::ManuscriptSection;
use crate::vocabulary::{Vocabulary, alternation};

pub const LEAD_SECTION_TITLE: &str = "Prologue/Lead";

#[derive(Debug)]
pub struct SectionSplitter {
    heading_line: Regex,
    blank_block_break: Regex,
}

impl SectionSplitter {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let chapter_words = alternation(&vocabulary.chapter_words);
        Ok(Self {
            heading_line: Regex::new(&format!(
                r"(?imR)^[ \t]*((?:{chapter_words})[ \t]+\d+|#+[ \t]+\S.*?)[ \t]*$"
            ))
            .context("failed to compile heading line regex")?,
            blank_block_break: Regex::new(r"(?:\r?\n){3,}")
                .context("failed to compile blank block regex")?,
        })
    }

    pub fn split(&self, text: &str) -> Vec<ManuscriptSection> {
        let headings = self.heading_line.captures_iter(text).collect::<Vec<_>>();
        if headings.is_empty() {
            let sections = self.split_blank_blocks(text);
            debug!(sections = sections.len(), "no heading lines, split on blank blocks");
            return sections;
        }

        let mut sections = Vec::with_capacity(headings.len() + 1);

        let first_start = headings[0].get(0).map(|m| m.start()).unwrap_or(0);
        let lead = text[..first_start].trim();
        if !lead.is_empty() {
            sections.push(ManuscriptSection {
                title: LEAD_SECTION_TITLE.to_string(),
                content: lead.to_string(),
            });
        }

        for (index, captures) in headings.iter().enumerate() {
            let (Some(line), Some(title)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            let body_end = headings
                .get(index + 1)
                .and_then(|next| next.get(0))
                .map(|m| m.start())
                .unwrap_or(text.len());

            sections.push(ManuscriptSection {
                title: title.as_str().trim().to_string(),
                content: text[line.end()..body_end].trim().to_string(),
            });
        }

        debug!(
            headings = headings.len(),
            sections = sections.len(),
            "split on heading lines"
        );
        sections
    }

    fn split_blank_blocks(&self, text: &str) -> Vec<ManuscriptSection> {
        self.blank_block_break
            .split(text)
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .enumerate()
            .map(|(index, block)| ManuscriptSection {
                title: format!("Section {}", index + 1),
                content: block.to_string(),
            })
            .collect()
    }
}
