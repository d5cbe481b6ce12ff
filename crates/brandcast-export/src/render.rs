//! Shared rendering dispatch: session state to a neutral block structure.
//!
//! Blocks with empty values are never emitted, which is what makes
//! missing-model-field rendering a silent omission rather than an error.

use brandcast_core::content::{ContentBody, GeneratedItem, ScriptSegment};
use brandcast_core::session::Stage1State;

/// One renderable unit. Formatters map these to their target syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A minor heading inside a section (slide, frame, tweet, article
    /// section, ...).
    Subheading(String),
    /// A labelled line of text. Empty label means plain paragraph.
    Text { label: String, value: String },
    /// A labelled list.
    Items { label: String, values: Vec<String> },
}

/// A titled group of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub blocks: Vec<Block>,
}

fn push_text(blocks: &mut Vec<Block>, label: &str, value: &str) {
    if !value.trim().is_empty() {
        blocks.push(Block::Text {
            label: label.to_string(),
            value: value.to_string(),
        });
    }
}

fn push_items(blocks: &mut Vec<Block>, label: &str, values: &[String]) {
    if !values.is_empty() {
        blocks.push(Block::Items {
            label: label.to_string(),
            values: values.to_vec(),
        });
    }
}

fn push_segment(blocks: &mut Vec<Block>, heading: String, segment: &ScriptSegment) {
    blocks.push(Block::Subheading(heading));
    push_text(blocks, "Voiceover", &segment.voiceover);
    push_text(blocks, "Visual", &segment.visual);
    if let Some(overlay) = &segment.text_overlay {
        push_text(blocks, "Text overlay", overlay);
    }
}

fn segment_heading(name: &str, timing: &str) -> String {
    if timing.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({timing})")
    }
}

/// The per-shape dispatch. Every formatter renders items through this one
/// function; shape fields the model omitted simply produce no block.
#[must_use]
pub fn item_blocks(item: &GeneratedItem) -> Vec<Block> {
    let mut blocks = Vec::new();

    match &item.body {
        ContentBody::Single { hook, body, cta } => {
            push_text(&mut blocks, "Hook", hook);
            push_text(&mut blocks, "Content", body);
            push_text(&mut blocks, "CTA", cta);
        }
        ContentBody::MultiSlide { slides } => {
            for slide in slides {
                let kind = slide.kind.as_deref().unwrap_or("content");
                blocks.push(Block::Subheading(format!(
                    "Slide {} ({kind})",
                    slide.slide_number
                )));
                push_text(&mut blocks, "Headline", &slide.headline);
                if let Some(subheadline) = &slide.subheadline {
                    push_text(&mut blocks, "Subheadline", subheadline);
                }
                if let Some(content) = &slide.content {
                    push_text(&mut blocks, "", content);
                }
                if let Some(cta) = &slide.cta {
                    push_text(&mut blocks, "CTA", cta);
                }
                push_text(&mut blocks, "Visual", &slide.visual_direction);
            }
        }
        ContentBody::DataVisual {
            subtitle,
            data_points,
            visual_structure,
            color_scheme,
        } => {
            push_text(&mut blocks, "Subtitle", subtitle);
            for point in data_points {
                blocks.push(Block::Subheading(point.statistic.clone()));
                push_text(&mut blocks, "", &point.description);
                push_text(&mut blocks, "Source", &point.source);
            }
            push_text(&mut blocks, "Visual structure", visual_structure);
            push_text(&mut blocks, "Color scheme", color_scheme);
        }
        ContentBody::Thread { tweets } => {
            for tweet in tweets {
                push_text(
                    &mut blocks,
                    &format!("Tweet {} ({}/280)", tweet.tweet_number, tweet.character_count),
                    &tweet.content,
                );
            }
        }
        ContentBody::VideoScript { script } => {
            push_segment(
                &mut blocks,
                segment_heading("Hook", &script.hook.timing),
                &script.hook,
            );
            for (i, segment) in script.content.iter().enumerate() {
                push_segment(
                    &mut blocks,
                    segment_heading(&format!("Segment {}", i + 1), &segment.timing),
                    segment,
                );
            }
            push_segment(
                &mut blocks,
                segment_heading("CTA", &script.cta.timing),
                &script.cta,
            );
        }
        ContentBody::StoryFrames { frames } => {
            for frame in frames {
                let kind = if frame.kind.is_empty() {
                    "content"
                } else {
                    frame.kind.as_str()
                };
                blocks.push(Block::Subheading(format!(
                    "Frame {} ({kind})",
                    frame.frame_number
                )));
                push_text(&mut blocks, "", &frame.text);
                push_text(&mut blocks, "Visual", &frame.visual);
                push_text(&mut blocks, "Interactive", &frame.interactive);
            }
        }
        ContentBody::Email {
            subject_line,
            preheader,
            body,
            ps,
        } => {
            push_text(&mut blocks, "Subject", subject_line);
            push_text(&mut blocks, "Preheader", preheader);
            push_text(&mut blocks, "", &body.greeting);
            push_text(&mut blocks, "", &body.opening);
            push_text(&mut blocks, "", &body.main_content);
            push_items(&mut blocks, "Benefits", &body.benefits);
            push_text(&mut blocks, "CTA", &body.cta);
            push_text(&mut blocks, "", &body.closing);
            push_text(&mut blocks, "", ps);
        }
        ContentBody::LongForm {
            meta_description,
            introduction,
            sections,
            conclusion,
            cta,
            keywords,
        } => {
            push_text(&mut blocks, "Meta description", meta_description);
            push_text(&mut blocks, "", introduction);
            for section in sections {
                blocks.push(Block::Subheading(section.heading.clone()));
                push_text(&mut blocks, "", &section.content);
                push_items(&mut blocks, "Key points", &section.key_points);
            }
            push_text(&mut blocks, "Conclusion", conclusion);
            push_text(&mut blocks, "CTA", cta);
            push_items(&mut blocks, "Keywords", keywords);
        }
        ContentBody::Ad {
            headline,
            primary_text,
            description,
            cta,
            ad_format,
        } => {
            push_text(&mut blocks, "Headline", headline);
            push_text(&mut blocks, "Primary text", primary_text);
            push_text(&mut blocks, "Description", description);
            push_text(&mut blocks, "CTA", cta);
            push_text(&mut blocks, "Ad format", ad_format);
        }
    }

    if let Some(caption) = &item.caption {
        push_text(&mut blocks, "Caption", caption);
    }
    push_items(&mut blocks, "Hashtags", &item.hashtags);

    blocks
}

/// Flatten blocks to plain text (one line per block) for CSV export.
#[must_use]
pub fn flatten_blocks(blocks: &[Block]) -> String {
    let mut lines = Vec::with_capacity(blocks.len());
    for block in blocks {
        match block {
            Block::Subheading(text) => lines.push(format!("[{text}]")),
            Block::Text { label, value } => {
                if label.is_empty() {
                    lines.push(value.clone());
                } else {
                    lines.push(format!("{label}: {value}"));
                }
            }
            Block::Items { label, values } => {
                lines.push(format!("{label}: {}", values.join("; ")));
            }
        }
    }
    lines.join("\n")
}

/// The brand-analysis export, grouped into titled sections.
#[must_use]
pub fn analysis_sections(stage1: &Stage1State) -> Vec<Section> {
    let mut sections = Vec::new();
    let Some(profile) = &stage1.profile else {
        return sections;
    };

    let mut overview = Vec::new();
    push_text(&mut overview, "Website", &stage1.website_url);
    push_text(&mut overview, "Vertical", &stage1.vertical);
    push_text(&mut overview, "Business nature", &profile.business_nature);
    push_text(&mut overview, "Mission", &profile.mission);
    push_text(&mut overview, "Vision", &profile.vision);
    push_items(&mut overview, "Core values", &profile.values);
    sections.push(Section {
        title: "Brand Fundamentals".to_string(),
        blocks: overview,
    });

    let audience = &profile.target_audience;
    let mut audience_blocks = Vec::new();
    push_text(&mut audience_blocks, "Demographics", &audience.demographic);
    push_text(&mut audience_blocks, "Psychographics", &audience.psychographic);
    push_items(&mut audience_blocks, "Pain points", &audience.pain_points);
    push_items(&mut audience_blocks, "Aspirations", &audience.aspirations);
    push_text(&mut audience_blocks, "Content habits", &audience.content_habits);
    push_text(&mut audience_blocks, "Summary", &audience.summary);
    sections.push(Section {
        title: "Target Audience".to_string(),
        blocks: audience_blocks,
    });

    let mut value_blocks = Vec::new();
    push_text(&mut value_blocks, "Primary", &profile.unique_value.primary);
    push_items(&mut value_blocks, "Supporting points", &profile.unique_value.supporting);
    push_items(&mut value_blocks, "Proof points", &profile.unique_value.proof_points);
    sections.push(Section {
        title: "Unique Value Proposition".to_string(),
        blocks: value_blocks,
    });

    let voice = &profile.brand_voice;
    let mut voice_blocks = Vec::new();
    push_text(&mut voice_blocks, "Description", &voice.description);
    push_items(&mut voice_blocks, "Tone attributes", &voice.tone_attributes);
    push_items(&mut voice_blocks, "Do", &voice.do_statements);
    push_items(&mut voice_blocks, "Don't", &voice.dont_statements);
    push_text(&mut voice_blocks, "Example", &voice.example);
    sections.push(Section {
        title: "Brand Voice".to_string(),
        blocks: voice_blocks,
    });

    let mut advantage_blocks = Vec::new();
    for advantage in &profile.competitive_advantages {
        advantage_blocks.push(Block::Subheading(advantage.advantage.clone()));
        push_text(&mut advantage_blocks, "", &advantage.description);
        push_text(&mut advantage_blocks, "Impact", &advantage.impact);
    }
    sections.push(Section {
        title: "Competitive Advantages".to_string(),
        blocks: advantage_blocks,
    });

    let mut priority_blocks = Vec::new();
    for priority in &profile.strategic_priorities {
        let heading = if priority.timeline.is_empty() {
            priority.priority.clone()
        } else {
            format!("{} ({})", priority.priority, priority.timeline)
        };
        priority_blocks.push(Block::Subheading(heading));
        push_text(&mut priority_blocks, "", &priority.description);
        push_text(&mut priority_blocks, "Impact", &priority.impact);
    }
    sections.push(Section {
        title: "Strategic Priorities".to_string(),
        blocks: priority_blocks,
    });

    let context = &profile.industry_context;
    let mut context_blocks = Vec::new();
    push_items(&mut context_blocks, "Trends", &context.trends);
    push_items(&mut context_blocks, "Opportunities", &context.opportunities);
    push_items(&mut context_blocks, "Challenges", &context.challenges);
    sections.push(Section {
        title: "Industry Context".to_string(),
        blocks: context_blocks,
    });

    let mut campaign_blocks = Vec::new();
    for campaign in &stage1.campaigns {
        campaign_blocks.push(Block::Subheading(campaign.name.clone()));
        push_text(&mut campaign_blocks, "Objective", &campaign.objective);
        push_text(&mut campaign_blocks, "", &campaign.description);
        push_text(&mut campaign_blocks, "Target segment", &campaign.target_segment);
        push_text(&mut campaign_blocks, "Key message", &campaign.key_message);
        push_items(&mut campaign_blocks, "Platforms", &campaign.platforms);
        push_items(&mut campaign_blocks, "Content types", &campaign.content_types);
        push_text(&mut campaign_blocks, "Duration", &campaign.duration);
        push_items(&mut campaign_blocks, "KPIs", &campaign.kpis);
        push_text(&mut campaign_blocks, "Budget", &campaign.budget);
    }
    sections.push(Section {
        title: "Campaign Recommendations".to_string(),
        blocks: campaign_blocks,
    });

    sections
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
