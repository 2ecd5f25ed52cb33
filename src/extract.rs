//! Per-page text extraction and text-file writing.
//!
//! Extraction failures are not fatal: a page that cannot be converted
//! becomes an empty page in the output and the run still succeeds.
//! Only sink errors (create or write) abort the conversion.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, error};

use crate::encoding::TextEncoding;
use crate::error::{Error, Result};
use crate::options::{Eol, ExtractOptions, LayoutMode};
use crate::pages::PageRange;
use crate::session::DocumentSession;

/// Extract the selected pages and write them to `out_path`.
///
/// The output file is created before any extraction work so that sink
/// problems surface even when the document itself is unreadable page
/// by page. Each page is followed by a form feed when page breaks are
/// enabled, the last page included.
pub fn run_extraction(
    session: &DocumentSession,
    range: PageRange,
    options: &ExtractOptions,
    encoding: TextEncoding,
    out_path: &Path,
) -> Result<()> {
    let file = File::create(out_path)
        .map_err(|e| Error::OutputOpen(format!("'{}': {}", out_path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    debug!(
        "extracting pages {}..{} with {:?} layout as {} to '{}'",
        range.first,
        range.last,
        options.layout,
        encoding.name(),
        out_path.display()
    );

    if options.insert_bom {
        writer.write_all(encoding.bom_bytes())?;
    }

    for text in page_texts(session, range, options.layout) {
        let text = convert_eol(&text, options.eol);
        writer.write_all(&encoding.encode(&text))?;
        if options.page_breaks {
            writer.write_all(&encoding.encode("\u{c}"))?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Text of every page in `range`, in order. Pages that fail to extract
/// come back as empty strings.
fn page_texts(session: &DocumentSession, range: PageRange, layout: LayoutMode) -> Vec<String> {
    if range.is_empty() {
        return Vec::new();
    }
    match layout {
        LayoutMode::Raw => raw_page_texts(session, range),
        _ => engine_page_texts(session, range),
    }
}

/// Content-stream-order extraction, straight from the parsed document.
fn raw_page_texts(session: &DocumentSession, range: PageRange) -> Vec<String> {
    let doc = session.document();
    range
        .pages()
        .map(|page| match doc.extract_text(&[page]) {
            Ok(text) => text,
            Err(e) => {
                error!("failed to extract text from page {}: {}", page, e);
                String::new()
            }
        })
        .collect()
}

/// Reading-order extraction through the layout engine. The engine works
/// from the raw bytes and stops at the first page it cannot handle, so
/// pages past a bad one are reported individually and left empty.
fn engine_page_texts(session: &DocumentSession, range: PageRange) -> Vec<String> {
    let extracted = match session.password() {
        Some(pw) => pdf_extract::extract_text_from_mem_by_pages_encrypted(session.bytes(), pw),
        None => pdf_extract::extract_text_from_mem_by_pages(session.bytes()),
    };
    let pages = match extracted {
        Ok(pages) => pages,
        Err(e) => {
            error!("text extraction failed: {}", e);
            return vec![String::new(); range.len() as usize];
        }
    };

    range
        .pages()
        .map(|page| match pages.get(page as usize - 1) {
            Some(text) => text.clone(),
            None => {
                error!("failed to extract text from page {}", page);
                String::new()
            }
        })
        .collect()
}

/// Rewrite the engine's newlines to the configured line ending.
fn convert_eol(text: &str, eol: Eol) -> String {
    match eol {
        Eol::Unix => text.to_string(),
        _ => text.replace('\n', eol.as_str()),
    }
}
