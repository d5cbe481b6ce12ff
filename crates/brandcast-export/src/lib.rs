//! Export formatters over the session state.
//!
//! All four output formats (HTML, print-oriented HTML, Word-compatible DOC,
//! CSV) walk the same neutral block structure produced by [`render`], so the
//! per-shape dispatch exists exactly once instead of one hand-maintained copy
//! per formatter. Every export is a pure function of the session state: the
//! same state yields byte-identical output, except for the dated footer in
//! the print documents.
//!
//! Model and user text is written as-is. Exports are locally saved files,
//! never served, so no HTML escaping is applied; CSV fields get RFC-4180
//! quoting and nothing else.

pub mod csv;
pub mod doc;
pub mod html;
pub mod print;
pub mod render;

pub use csv::{export_analysis_csv, export_content_csv};
pub use doc::{export_analysis_doc, export_content_doc, DOC_MIME_TYPE};
pub use html::{export_analysis_html, export_content_html};
pub use print::{export_analysis_print_html, export_content_print_html};

/// Fixed export filenames, per export subject and format.
pub const ANALYSIS_HTML_FILENAME: &str = "Brand_Analysis.html";
pub const ANALYSIS_DOC_FILENAME: &str = "Brand_Analysis.doc";
pub const ANALYSIS_CSV_FILENAME: &str = "Brand_Analysis.csv";
pub const CONTENT_HTML_FILENAME: &str = "Generated_Content.html";
pub const CONTENT_DOC_FILENAME: &str = "Generated_Content.doc";
pub const CONTENT_CSV_FILENAME: &str = "Generated_Content.csv";
