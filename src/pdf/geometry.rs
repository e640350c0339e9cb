/*!
 * Raw page geometry collection.
 *
 * The parser works on two flat per-document lists: word bounding boxes and
 * horizontal underline strokes, each tagged with its source page index. How
 * those lists are obtained is behind the `GeometrySource` trait so the
 * clustering and region logic can be exercised against fixture geometry;
 * `PdfiumGeometrySource` is the production implementation.
 *
 * All coordinates use a top-left origin with y growing downward. The pdfium
 * backend converts from PDF bottom-left page coordinates at collection time.
 */

use std::path::Path;

use pdfium_render::prelude::*;

use crate::errors::ParseError;

/// Maximum endpoint y-delta for a stroke to count as horizontal
const HORIZONTAL_TOLERANCE: f32 = 1.0;

/// One word-level text box on a page.
#[derive(Debug, Clone)]
pub struct WordBox {
    /// Source page index (0-based)
    pub page: usize,
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
    /// Word text
    pub text: String,
}

/// One detected horizontal underline stroke.
#[derive(Debug, Clone)]
pub struct UnderlineSegment {
    /// Source page index (0-based)
    pub page: usize,
    /// Stroke y-position
    pub y: f32,
    /// Left end of the horizontal span
    pub x0: f32,
    /// Right end of the horizontal span
    pub x1: f32,
}

/// Flat geometry for a whole document.
#[derive(Debug, Clone, Default)]
pub struct DocumentGeometry {
    /// All word boxes, across all pages
    pub words: Vec<WordBox>,
    /// All underline strokes, across all pages
    pub underlines: Vec<UnderlineSegment>,
    /// Number of pages in the document
    pub page_count: usize,
}

/// Source of per-page word boxes and underline strokes.
///
/// Implementations must fail fatally (no partial output) when the document
/// cannot be opened.
pub trait GeometrySource {
    /// Collect word boxes and underline strokes for every page of the document.
    fn collect(&self, pdf_path: &Path) -> Result<DocumentGeometry, ParseError>;
}

/// Production geometry source backed by the pdfium library.
///
/// The pdfium binding is established per collection call, so constructing
/// this source never fails even when the native library is absent.
#[derive(Debug, Default)]
pub struct PdfiumGeometrySource;

impl PdfiumGeometrySource {
    /// Create a new pdfium-backed geometry source.
    pub fn new() -> Self {
        PdfiumGeometrySource
    }

    fn bind() -> Result<Pdfium, ParseError> {
        let bindings = Pdfium::bind_to_system_library()
            .or_else(|_| {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            })
            .map_err(|e| ParseError::Geometry(format!("failed to bind pdfium library: {}", e)))?;

        Ok(Pdfium::new(bindings))
    }

    /// Split a text run into whitespace-delimited words, apportioning the
    /// run's horizontal span per character. Character cells inside a run are
    /// approximated as equal-width; this keeps word x-spans usable for the
    /// underline overlap test without per-glyph metrics.
    fn split_segment_words(
        page: usize,
        text: &str,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        words: &mut Vec<WordBox>,
    ) {
        let char_count = text.chars().count();
        if char_count == 0 {
            return;
        }
        let char_width = (x1 - x0) / char_count as f32;

        let mut current = String::new();
        let mut word_start = 0usize;
        let mut flush = |word: &mut String, start: usize, end: usize| {
            if !word.is_empty() {
                words.push(WordBox {
                    page,
                    x0: x0 + start as f32 * char_width,
                    y0,
                    x1: x0 + end as f32 * char_width,
                    y1,
                    text: std::mem::take(word),
                });
            }
        };

        for (offset, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                flush(&mut current, word_start, offset);
                word_start = offset + 1;
            } else {
                if current.is_empty() {
                    word_start = offset;
                }
                current.push(ch);
            }
        }
        flush(&mut current, word_start, char_count);
    }
}

impl GeometrySource for PdfiumGeometrySource {
    fn collect(&self, pdf_path: &Path) -> Result<DocumentGeometry, ParseError> {
        let pdfium = Self::bind()?;
        let document = pdfium
            .load_pdf_from_file(pdf_path, None)
            .map_err(|e| ParseError::PdfOpen(format!("{:?}: {}", pdf_path, e)))?;

        let mut geometry = DocumentGeometry::default();

        for (page_index, page) in document.pages().iter().enumerate() {
            let page_height = page.height().value;

            // Word boxes from text runs, converted to top-left origin
            let text = page
                .text()
                .map_err(|e| ParseError::Geometry(format!("page {}: {}", page_index, e)))?;

            for segment in text.segments().iter() {
                let content = segment.text();
                if content.trim().is_empty() {
                    continue;
                }

                let bounds = segment.bounds();
                let x0 = bounds.left().value;
                let x1 = bounds.right().value;
                let y0 = page_height - bounds.top().value;
                let y1 = page_height - bounds.bottom().value;

                Self::split_segment_words(
                    page_index,
                    &content,
                    x0,
                    y0.min(y1),
                    x1,
                    y0.max(y1),
                    &mut geometry.words,
                );
            }

            // Underline strokes: path objects whose bounds collapse to a
            // horizontal line
            for object in page.objects().iter() {
                if object.object_type() != PdfPageObjectType::Path {
                    continue;
                }

                let Ok(bounds) = object.bounds() else {
                    continue;
                };

                let left = bounds.left().value;
                let right = bounds.right().value;
                let top = page_height - bounds.top().value;
                let bottom = page_height - bounds.bottom().value;

                if (bottom - top).abs() < HORIZONTAL_TOLERANCE && right > left {
                    geometry.underlines.push(UnderlineSegment {
                        page: page_index,
                        y: top.min(bottom),
                        x0: left,
                        x1: right,
                    });
                }
            }

            geometry.page_count += 1;
        }

        Ok(geometry)
    }
}
