use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;
use zip::ZipArchive;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("unsupported manuscript format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("docx archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("docx XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("docx is missing part: {0}")]
    MissingPart(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    PlainText,
    Docx,
}

impl SourceFormat {
    fn from_extension(extension: &str) -> Result<Self, NormalizeError> {
        let normalized = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "txt" | "text" | "md" | "markdown" => Ok(Self::PlainText),
            "docx" => Ok(Self::Docx),
            _ => Err(NormalizeError::UnsupportedFormat(normalized)),
        }
    }
}

pub fn normalize(bytes: &[u8], extension: &str) -> Result<String, NormalizeError> {
    match SourceFormat::from_extension(extension)? {
        SourceFormat::PlainText => Ok(decode_text(bytes)),
        SourceFormat::Docx => extract_docx_text(bytes),
    }
}

pub fn normalize_file(path: &Path) -> Result<String, NormalizeError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    // Reject before touching the filesystem.
    SourceFormat::from_extension(extension)?;

    let bytes = fs::read(path)?;
    normalize(&bytes, extension)
}

fn decode_text(bytes: &[u8]) -> String {
    let (text, _encoding, _malformed) = encoding_rs::UTF_8.decode(bytes);
    text.into_owned()
}

fn extract_docx_text(bytes: &[u8]) -> Result<String, NormalizeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = Vec::new();
    match archive.by_name(DOCX_BODY_PART) {
        Ok(mut part) => {
            part.read_to_end(&mut xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(NormalizeError::MissingPart(DOCX_BODY_PART.to_string()));
        }
        Err(error) => return Err(error.into()),
    }

    let xml = decode_text(&xml);
    paragraphs_from_document_xml(&xml)
}

#[derive(Debug, Default)]
struct OpenParagraph {
    text: String,
    nested: Vec<String>,
}

fn paragraphs_from_document_xml(xml: &str) -> Result<String, NormalizeError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::<String>::new();
    let mut open = Vec::<OpenParagraph>::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match word_element(e.name().as_ref()) {
                Some(b"p") => open.push(OpenParagraph::default()),
                Some(b"t") => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match word_element(e.name().as_ref()) {
                Some(b"p") => close_paragraph(OpenParagraph::default(), &mut open, &mut paragraphs),
                Some(b"tab") => push_text(&mut open, "\t"),
                Some(b"br" | b"cr") => push_text(&mut open, "\n"),
                _ => {}
            },
            Event::Text(e) => {
                if in_text {
                    push_text(&mut open, &String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::GeneralRef(e) => {
                if in_text {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    if let Some(resolved) = resolve_entity(&entity) {
                        push_text(&mut open, &resolved);
                    }
                }
            }
            Event::End(e) => match word_element(e.name().as_ref()) {
                Some(b"p") => {
                    if let Some(paragraph) = open.pop() {
                        close_paragraph(paragraph, &mut open, &mut paragraphs);
                    }
                }
                Some(b"t") => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

// Text-box paragraphs follow the paragraph that anchors them.
fn close_paragraph(
    paragraph: OpenParagraph,
    open: &mut [OpenParagraph],
    paragraphs: &mut Vec<String>,
) {
    let target = match open.last_mut() {
        Some(parent) => &mut parent.nested,
        None => paragraphs,
    };
    target.push(paragraph.text);
    target.extend(paragraph.nested);
}

fn push_text(open: &mut [OpenParagraph], text: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.text.push_str(text);
    }
}

fn word_element(name: &[u8]) -> Option<&[u8]> {
    name.strip_prefix(b"w:")
}

fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(decimal) = entity.strip_prefix('#') {
        decimal.parse::<u32>().ok()?
    } else {
        return None;
    };

    char::from_u32(code).map(|c| c.to_string())
}
