//! Plain-text extraction from uploaded PDF, DOCX and TXT documents.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOC_MIME: &str = "application/msword";
pub const TEXT_MIME: &str = "text/plain";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File buffer is empty")]
    Empty,

    #[error("Invalid PDF file format (missing PDF header)")]
    NotPdf,

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("PDF appears to be empty or contains only images (no extractable text). Please use a PDF with selectable text.")]
    PdfWithoutText,

    #[error("Failed to extract text from DOCX file: {0}")]
    Docx(String),

    #[error("DOC files are not supported. Please convert to DOCX, PDF, or TXT format.")]
    LegacyDoc,

    #[error("Unsupported file type: {0}. Only PDF, DOCX, and TXT files are supported.")]
    Unsupported(String),

    #[error("No text content found in file")]
    NoText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Doc,
    Text,
}

impl DocumentKind {
    /// Picks the document kind from the declared content type. A missing or
    /// generic content type falls back to the file extension.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Result<Self, ExtractError> {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            PDF_MIME => return Ok(DocumentKind::Pdf),
            DOCX_MIME => return Ok(DocumentKind::Docx),
            DOC_MIME => return Ok(DocumentKind::Doc),
            TEXT_MIME => return Ok(DocumentKind::Text),
            "" | "application/octet-stream" => {}
            other => return Err(ExtractError::Unsupported(other.to_string())),
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "doc" => Ok(DocumentKind::Doc),
            "txt" => Ok(DocumentKind::Text),
            _ => Err(ExtractError::Unsupported(
                file_name.unwrap_or("unknown").to_string(),
            )),
        }
    }
}

/// Extracts the text of a document. CPU bound; run it off the async runtime.
pub fn extract_text(kind: DocumentKind, data: &[u8]) -> Result<String, ExtractError> {
    if data.is_empty() {
        return Err(ExtractError::Empty);
    }

    let text = match kind {
        DocumentKind::Pdf => extract_pdf_text(data)?,
        DocumentKind::Docx => extract_docx_text(data)?,
        DocumentKind::Doc => return Err(ExtractError::LegacyDoc),
        DocumentKind::Text => String::from_utf8_lossy(data).into_owned(),
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text.to_string())
}

fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractError> {
    if !data.starts_with(b"%PDF") {
        return Err(ExtractError::NotPdf);
    }

    let text =
        pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    if text.trim().is_empty() {
        return Err(ExtractError::PdfWithoutText);
    }
    Ok(text)
}

/// Reads `word/document.xml` and emits one line per `w:p` paragraph.
fn extract_docx_text(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(docx_error)?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    let mut reader = Reader::from_str(&xml);
    let mut buf = Vec::new();
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" => current.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    lines.push(current.trim_end().to_string());
                    current.clear();
                }
                b"w:t" => in_text_run = false,
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                current.push_str(&e.xml_content().map_err(docx_error)?);
            }
            Ok(Event::GeneralRef(e)) if in_text_run => {
                let name = e.decode().map_err(docx_error)?;
                if let Some(c) = resolve_entity(&name) {
                    current.push_str(&c);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(docx_error(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(lines.join("\n"))
}

fn docx_error(e: impl std::fmt::Display) -> ExtractError {
    ExtractError::Docx(e.to_string())
}

/// Resolves `&name;` references: the five predefined XML entities and
/// numeric character references.
fn resolve_entity(name: &str) -> Option<String> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse().ok()?,
        };
        return char::from_u32(value).map(String::from);
    }
    quick_xml::escape::resolve_predefined_entity(name).map(str::to_string)
}
