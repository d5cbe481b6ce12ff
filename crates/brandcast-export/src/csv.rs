//! CSV export. Every field is quoted and embedded quotes are doubled; no
//! other escaping is applied.

use brandcast_core::session::SessionState;

use crate::render::{analysis_sections, item_blocks, Block};

const ANALYSIS_HEADER: &str = "\"Section\",\"Field\",\"Content\"";
const CONTENT_HEADER: &str = "\"Content Number\",\"Title\",\"Platform\",\
\"Content Type\",\"Structure\",\"Full Content\",\"Hashtags\"";

fn field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn row(values: &[&str]) -> String {
    values.iter().map(|v| field(v)).collect::<Vec<_>>().join(",")
}

/// `Section,Field,Content` rows for the brand analysis. Subheadings become
/// a prefix on the field column of the rows under them.
#[must_use]
pub fn export_analysis_csv(state: &SessionState) -> String {
    let mut lines = vec![ANALYSIS_HEADER.to_string()];

    for section in analysis_sections(&state.stage1) {
        let mut context = String::new();
        for block in &section.blocks {
            match block {
                Block::Subheading(text) => {
                    context.clone_from(text);
                }
                Block::Text { label, value } => {
                    lines.push(row(&[
                        &section.title,
                        &field_name(&context, label),
                        value,
                    ]));
                }
                Block::Items { label, values } => {
                    let name = field_name(&context, label);
                    for value in values {
                        lines.push(row(&[&section.title, &name, value]));
                    }
                }
            }
        }
    }

    lines.join("\n") + "\n"
}

fn field_name(context: &str, label: &str) -> String {
    match (context.is_empty(), label.is_empty()) {
        (true, _) => label.to_string(),
        (false, true) => context.to_string(),
        (false, false) => format!("{context} / {label}"),
    }
}

/// One row per generated item. `Full Content` is the flattened block text;
/// hashtags get their own column and are dropped from the flattened body.
#[must_use]
pub fn export_content_csv(state: &SessionState) -> String {
    let mut lines = vec![CONTENT_HEADER.to_string()];

    for item in &state.stage2.items {
        let mut blocks = item_blocks(item);
        blocks.retain(|block| !matches!(block, Block::Items { label, .. } if label == "Hashtags"));

        lines.push(row(&[
            &item.content_number.to_string(),
            &item.title,
            &item.platform,
            &item.content_type,
            item.structure().as_str(),
            &crate::render::flatten_blocks(&blocks),
            &item.hashtags.join(" "),
        ]));
    }

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandcast_core::content::{ContentBody, GeneratedItem};

    #[test]
    fn embedded_quotes_are_doubled_and_wrapped() {
        assert_eq!(field("plain"), "\"plain\"");
        assert_eq!(field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn content_csv_has_one_row_per_item() {
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
                title: "The \"big\" idea".to_string(),
                caption: None,
                hashtags: vec!["growth".to_string(), "brand".to_string()],
                body: ContentBody::Single {
                    hook: "Hook line.".to_string(),
                    body: "Body line.".to_string(),
                    cta: String::new(),
                },
            }],
        );

        let csv = export_content_csv(&state);
        assert!(csv.starts_with(&format!("{CONTENT_HEADER}\n")));
        // Quoted fields may contain newlines, so match on content instead of
        // splitting lines.
        assert!(csv.contains("\"1\",\"The \"\"big\"\" idea\",\"LinkedIn\""));
        assert!(csv.contains("Hook: Hook line.\nContent: Body line."));
        assert!(csv.ends_with("\"growth brand\"\n"));
    }

    #[test]
    fn content_csv_keeps_hashtags_out_of_full_content() {
        let mut state = SessionState::new();
        state.commit_generation(
            1,
            vec![],
            vec![],
            vec![GeneratedItem {
                id: "content-1".to_string(),
                content_number: 1,
                content_type: "Ad Copy".to_string(),
                platform: "Facebook".to_string(),
                title: "t".to_string(),
                caption: None,
                hashtags: vec!["sale".to_string()],
                body: ContentBody::Ad {
                    headline: "H".to_string(),
                    primary_text: String::new(),
                    description: String::new(),
                    cta: String::new(),
                    ad_format: String::new(),
                },
            }],
        );
        let csv = export_content_csv(&state);
        assert!(!csv.contains("Hashtags: sale"));
        assert!(csv.ends_with("\"sale\"\n"));
    }

    #[test]
    fn analysis_csv_without_profile_is_header_only() {
        let csv = export_analysis_csv(&SessionState::new());
        assert_eq!(csv, format!("{ANALYSIS_HEADER}\n"));
    }
}
