//! Print-oriented HTML export, meant for a browser print dialog ("save as
//! PDF"). Same body as the HTML export with print CSS and a dated footer.

use brandcast_core::session::SessionState;
use chrono::Utc;

use crate::html::{analysis_body, content_body};

const PRINT_STYLE: &str = "\
body { font-family: Georgia, 'Times New Roman', serif; color: #111; \
margin: 1.5cm; line-height: 1.5; }\n\
h1 { font-size: 20pt; border-bottom: 2px solid #333; padding-bottom: 4pt; }\n\
h2 { font-size: 14pt; margin-top: 18pt; page-break-after: avoid; }\n\
h3 { font-size: 11pt; page-break-after: avoid; }\n\
p, ul { font-size: 10.5pt; }\n\
.item { page-break-inside: avoid; margin-bottom: 14pt; }\n\
.footer { margin-top: 24pt; font-size: 9pt; color: #555; \
border-top: 1px solid #ccc; padding-top: 6pt; }\n\
@media print { body { margin: 0; } }";

fn document(title: &str, body: &str) -> String {
    let footer = format!(
        "<p class=\"footer\">Generated on {}</p>\n",
        Utc::now().format("%B %d, %Y")
    );
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{PRINT_STYLE}\n</style>\n</head>\n\
         <body>\n{body}{footer}</body>\n</html>\n"
    )
}

/// Print-styled document for the brand analysis.
#[must_use]
pub fn export_analysis_print_html(state: &SessionState) -> String {
    document("Brand Analysis", &analysis_body(state))
}

/// Print-styled document for the generated content.
#[must_use]
pub fn export_content_print_html(state: &SessionState) -> String {
    document("Generated Content", &content_body(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_document_has_dated_footer() {
        let html = export_analysis_print_html(&SessionState::new());
        assert!(html.contains("Generated on "));
        assert!(html.contains("@media print"));
    }

    #[test]
    fn same_day_exports_are_identical() {
        let state = SessionState::new();
        assert_eq!(
            export_content_print_html(&state),
            export_content_print_html(&state)
        );
    }
}
