//! Word-compatible export: the HTML body wrapped in the Office XML
//! namespaces, prefixed with a UTF-8 BOM, saved with a `.doc` extension.

use brandcast_core::session::SessionState;

use crate::html::{analysis_body, content_body};

/// MIME type to declare when handing the bytes to anything that cares.
pub const DOC_MIME_TYPE: &str = "application/msword";

const WORD_STYLE: &str = "\
body { font-family: Calibri, Arial, sans-serif; font-size: 11pt; }\n\
h1 { font-size: 18pt; }\n\
h2 { font-size: 14pt; color: #4a3580; }\n\
h3 { font-size: 12pt; }";

fn document(title: &str, body: &str) -> String {
    format!(
        "\u{feff}<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
         xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
         xmlns=\"http://www.w3.org/TR/REC-html40\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\n{WORD_STYLE}\n</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Word-compatible document for the brand analysis.
#[must_use]
pub fn export_analysis_doc(state: &SessionState) -> String {
    document("Brand Analysis", &analysis_body(state))
}

/// Word-compatible document for the generated content.
#[must_use]
pub fn export_content_doc(state: &SessionState) -> String {
    document("Generated Content", &content_body(state))
}
