/*!
 * Common test utilities for the adscribe test suite
 */

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

use adscribe::errors::ParseError;
use adscribe::pdf::{DocumentGeometry, GeometrySource, UnderlineSegment, WordBox};

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Build a word box with a 12-unit line height
pub fn word(page: usize, x0: f32, y0: f32, x1: f32, text: &str) -> WordBox {
    WordBox {
        page,
        x0,
        y0,
        x1,
        y1: y0 + 12.0,
        text: text.to_string(),
    }
}

/// Build an underline stroke
pub fn underline(page: usize, y: f32, x0: f32, x1: f32) -> UnderlineSegment {
    UnderlineSegment { page, y, x0, x1 }
}

/// Assemble a document from word and underline lists
pub fn geometry(
    words: Vec<WordBox>,
    underlines: Vec<UnderlineSegment>,
    page_count: usize,
) -> DocumentGeometry {
    DocumentGeometry {
        words,
        underlines,
        page_count,
    }
}

/// Geometry source serving a fixed in-memory document, standing in for the
/// pdfium backend
pub struct FixtureGeometrySource {
    geometry: DocumentGeometry,
}

impl FixtureGeometrySource {
    pub fn new(geometry: DocumentGeometry) -> Self {
        FixtureGeometrySource { geometry }
    }
}

impl GeometrySource for FixtureGeometrySource {
    fn collect(&self, _pdf_path: &Path) -> Result<DocumentGeometry, ParseError> {
        Ok(self.geometry.clone())
    }
}

/// Geometry source that always fails to open, standing in for a corrupt or
/// missing PDF
pub struct FailingGeometrySource;

impl GeometrySource for FailingGeometrySource {
    fn collect(&self, pdf_path: &Path) -> Result<DocumentGeometry, ParseError> {
        Err(ParseError::PdfOpen(format!("{:?}: fixture failure", pdf_path)))
    }
}

/// A canonical single-page script layout:
///
/// ```text
/// 0036  (바로) 그가 천천히 돌아선다     <- underlined narration
///       창밖으로 비가 내린다            <- underlined continuation
/// (천둥 소리)                           <- sound effect, not underlined
/// 0112  문이 열리고 수진이 들어온다     <- underlined narration
/// 0230  (멀리서) 장면 설명 지문         <- stage direction only, no underline
/// ```
pub fn sample_script_page() -> DocumentGeometry {
    let words = vec![
        // Region 1 at y=100
        word(0, 50.0, 100.0, 80.0, "0036"),
        word(0, 90.0, 100.0, 130.0, "(바로)"),
        word(0, 140.0, 100.0, 170.0, "그가"),
        word(0, 180.0, 100.0, 220.0, "천천히"),
        word(0, 230.0, 100.0, 280.0, "돌아선다"),
        word(0, 90.0, 120.0, 140.0, "창밖으로"),
        word(0, 150.0, 120.0, 180.0, "비가"),
        word(0, 190.0, 120.0, 230.0, "내린다"),
        word(0, 90.0, 140.0, 130.0, "(천둥"),
        word(0, 140.0, 140.0, 170.0, "소리)"),
        // Region 2 at y=200
        word(0, 50.0, 200.0, 80.0, "0112"),
        word(0, 90.0, 200.0, 130.0, "문이"),
        word(0, 140.0, 200.0, 180.0, "열리고"),
        word(0, 190.0, 200.0, 230.0, "수진이"),
        word(0, 240.0, 200.0, 290.0, "들어온다"),
        // Region 3 at y=300: stage direction only
        word(0, 50.0, 300.0, 80.0, "0230"),
        word(0, 90.0, 300.0, 140.0, "(멀리서)"),
        word(0, 150.0, 300.0, 190.0, "장면"),
        word(0, 200.0, 300.0, 240.0, "설명"),
        word(0, 250.0, 300.0, 290.0, "지문"),
    ];

    let underlines = vec![
        // Region 1: both narration lines underlined (word bottoms at 112/132)
        underline(0, 114.0, 140.0, 280.0),
        underline(0, 134.0, 90.0, 230.0),
        // Region 2: narration underlined (word bottoms at 212)
        underline(0, 214.0, 90.0, 290.0),
    ];

    geometry(words, underlines, 1)
}

/// Expected ground-truth underlined text for `sample_script_page`
pub const SAMPLE_UNDERLINED_TEXT: &str =
    "그가 천천히 돌아선다 창밖으로 비가 내린다 문이 열리고 수진이 들어온다";
