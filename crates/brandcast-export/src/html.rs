//! Styled HTML export for browsing the results locally.

use brandcast_core::session::SessionState;
use brandcast_core::GeneratedItem;

use crate::render::{analysis_sections, item_blocks, Block, Section};

const STYLE: &str = "\
body { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; \
max-width: 860px; margin: 2rem auto; padding: 0 1.5rem; color: #1a202c; \
line-height: 1.6; }\n\
h1 { font-size: 1.8rem; border-bottom: 3px solid #6b46c1; padding-bottom: 0.4rem; }\n\
h2 { font-size: 1.3rem; color: #6b46c1; margin-top: 2rem; }\n\
h3 { font-size: 1.05rem; margin-bottom: 0.2rem; }\n\
p { margin: 0.35rem 0; }\n\
ul { margin: 0.2rem 0 0.8rem 1.4rem; }\n\
.meta { color: #718096; font-size: 0.9rem; margin-bottom: 0.8rem; }\n\
.item { border: 1px solid #e2e8f0; border-radius: 8px; padding: 1rem 1.4rem; \
margin: 1.2rem 0; }";

pub(crate) fn blocks_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Subheading(text) => {
                out.push_str(&format!("<h3>{text}</h3>\n"));
            }
            Block::Text { label, value } => {
                if label.is_empty() {
                    out.push_str(&format!("<p>{value}</p>\n"));
                } else {
                    out.push_str(&format!("<p><strong>{label}:</strong> {value}</p>\n"));
                }
            }
            Block::Items { label, values } => {
                out.push_str(&format!("<p><strong>{label}:</strong></p>\n<ul>\n"));
                for value in values {
                    out.push_str(&format!("<li>{value}</li>\n"));
                }
                out.push_str("</ul>\n");
            }
        }
    }
    out
}

pub(crate) fn sections_html(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        if section.blocks.is_empty() {
            continue;
        }
        out.push_str(&format!("<h2>{}</h2>\n", section.title));
        out.push_str(&blocks_html(&section.blocks));
    }
    out
}

pub(crate) fn item_html(item: &GeneratedItem) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"item\">\n");
    out.push_str(&format!(
        "<h2>{}. {}</h2>\n",
        item.content_number, item.title
    ));
    out.push_str(&format!(
        "<p class=\"meta\">{} | {} | {}</p>\n",
        item.platform,
        item.content_type,
        item.structure()
    ));
    out.push_str(&blocks_html(&item_blocks(item)));
    out.push_str("</div>\n");
    out
}

pub(crate) fn analysis_body(state: &SessionState) -> String {
    let mut body = String::from("<h1>Brand Analysis</h1>\n");
    body.push_str(&sections_html(&analysis_sections(&state.stage1)));
    body
}

pub(crate) fn content_body(state: &SessionState) -> String {
    let mut body = String::from("<h1>Generated Content</h1>\n");
    for item in &state.stage2.items {
        body.push_str(&item_html(item));
    }
    body
}

fn document(title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{style}\n</style>\n</head>\n\
         <body>\n{body}</body>\n</html>\n"
    )
}

/// Self-contained HTML document for the brand analysis.
#[must_use]
pub fn export_analysis_html(state: &SessionState) -> String {
    document("Brand Analysis", STYLE, &analysis_body(state))
}

/// Self-contained HTML document for the generated content.
#[must_use]
pub fn export_content_html(state: &SessionState) -> String {
    document("Generated Content", STYLE, &content_body(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandcast_core::content::ContentBody;

    fn state_with_item() -> SessionState {
        let mut state = SessionState::new();
        state.commit_generation(
            1,
            vec!["post".to_string()],
            vec!["linkedin".to_string()],
            vec![GeneratedItem {
                id: "content-1".to_string(),
                content_number: 1,
                content_type: "Social Posts".to_string(),
                platform: "LinkedIn".to_string(),
                title: "Morning routine".to_string(),
                caption: None,
                hashtags: vec!["coffee".to_string()],
                body: ContentBody::Single {
                    hook: "Start here.".to_string(),
                    body: "The rest.".to_string(),
                    cta: "Try it.".to_string(),
                },
            }],
        );
        state
    }

    #[test]
    fn content_html_carries_item_fields() {
        let html = export_content_html(&state_with_item());
        assert!(html.contains("<h2>1. Morning routine</h2>"));
        assert!(html.contains("LinkedIn | Social Posts | single"));
        assert!(html.contains("<strong>Hook:</strong> Start here."));
        assert!(html.contains("<li>coffee</li>"));
    }

    #[test]
    fn analysis_html_without_profile_has_no_sections() {
        let html = export_analysis_html(&SessionState::new());
        assert!(html.contains("<h1>Brand Analysis</h1>"));
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn export_is_a_pure_function_of_state() {
        let state = state_with_item();
        assert_eq!(export_content_html(&state), export_content_html(&state));
    }
}
