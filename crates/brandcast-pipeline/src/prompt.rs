//! Prompt construction for each pipeline stage.
//!
//! Pure string formatting: every prompt embeds a literal JSON-shape template
//! so the model has an exact target to fill in. The templates are the wire
//! contract the extractor and serde types on the other side expect.

use brandcast_core::catalog::{ContentKind, Platform, Structure};
use brandcast_core::profile::BrandProfile;

/// JSON schema embedded in the stage-1 analysis prompt. `{vertical}` is
/// substituted with the business vertical before sending.
const BRAND_SCHEMA: &str = r#"{
  "businessNature": "Detailed 2-3 sentence description of what the business does",
  "mission": "Compelling 2-3 sentence mission statement",
  "vision": "Inspiring 1-2 sentence vision statement",
  "values": ["Value 1", "Value 2", "Value 3", "Value 4", "Value 5", "Value 6", "Value 7"],
  "targetAudience": {
    "demographic": "Detailed demographic profile with age, location, role, income",
    "psychographic": "Values, motivations, behaviors, lifestyle",
    "painPoints": ["Pain point 1", "Pain point 2", "Pain point 3"],
    "aspirations": ["Aspiration 1", "Aspiration 2", "Aspiration 3"],
    "contentHabits": "How and where they consume content",
    "summary": "Concise summary of primary target audience"
  },
  "uniqueValue": {
    "primary": "Main unique value proposition (1-2 sentences)",
    "supporting": ["Supporting point 1", "Supporting point 2", "Supporting point 3"],
    "proofPoints": ["Evidence 1", "Evidence 2", "Evidence 3"]
  },
  "brandVoice": {
    "description": "Comprehensive 3-4 sentence description of brand voice",
    "toneAttributes": ["Attribute 1", "Attribute 2", "Attribute 3", "Attribute 4"],
    "doStatements": ["Do: Statement 1", "Do: Statement 2", "Do: Statement 3"],
    "dontStatements": ["Don't: Statement 1", "Don't: Statement 2", "Don't: Statement 3"],
    "example": "Brief example of how the brand would communicate"
  },
  "competitiveAdvantages": [
    {"advantage": "Competitive advantage name", "description": "Why this matters and how it differentiates", "impact": "Business impact of this advantage"},
    {"advantage": "Second advantage", "description": "Why this matters", "impact": "Business impact"},
    {"advantage": "Third advantage", "description": "Why this matters", "impact": "Business impact"}
  ],
  "strategicPriorities": [
    {"priority": "Priority name", "description": "What this involves", "timeline": "12 months", "impact": "Expected business impact"},
    {"priority": "Second priority", "description": "What this involves", "timeline": "24 months", "impact": "Expected impact"},
    {"priority": "Third priority", "description": "What this involves", "timeline": "Ongoing", "impact": "Expected impact"}
  ],
  "industryContext": {
    "trends": ["Trend 1 in {vertical}", "Trend 2", "Trend 3"],
    "opportunities": ["Opportunity 1", "Opportunity 2", "Opportunity 3"],
    "challenges": ["Challenge 1", "Challenge 2", "Challenge 3"]
  }
}"#;

/// JSON schema embedded in the stage-1 campaign prompt. Six template entries;
/// the model may return up to ten.
const CAMPAIGNS_SCHEMA: &str = r#"{
  "campaigns": [
    {
      "name": "Campaign name (creative and memorable)",
      "objective": "awareness",
      "description": "Detailed 2-3 sentence description",
      "targetSegment": "Specific audience segment",
      "keyMessage": "Core message",
      "platforms": ["Platform 1", "Platform 2", "Platform 3"],
      "contentTypes": ["Content type 1", "Content type 2", "Content type 3"],
      "duration": "3 months",
      "kpis": ["KPI 1 with target", "KPI 2", "KPI 3"],
      "budget": "Medium"
    },
    {"name": "Second campaign", "objective": "engagement", "description": "Description", "targetSegment": "Target", "keyMessage": "Message", "platforms": ["Platform 1", "Platform 2"], "contentTypes": ["Type 1", "Type 2"], "duration": "6 months", "kpis": ["KPI 1", "KPI 2"], "budget": "High"},
    {"name": "Third campaign", "objective": "conversion", "description": "Description", "targetSegment": "Target", "keyMessage": "Message", "platforms": ["Platform 1"], "contentTypes": ["Type 1"], "duration": "3 months", "kpis": ["KPI 1", "KPI 2"], "budget": "Low"},
    {"name": "Fourth campaign", "objective": "retention", "description": "Description", "targetSegment": "Target", "keyMessage": "Message", "platforms": ["Platform 1"], "contentTypes": ["Type 1"], "duration": "Ongoing", "kpis": ["KPI 1"], "budget": "Medium"},
    {"name": "Fifth campaign", "objective": "awareness", "description": "Description", "targetSegment": "Target", "keyMessage": "Message", "platforms": ["Platform 1", "Platform 2"], "contentTypes": ["Type 1", "Type 2"], "duration": "6 months", "kpis": ["KPI 1", "KPI 2"], "budget": "High"},
    {"name": "Sixth campaign", "objective": "engagement", "description": "Description", "targetSegment": "Target", "keyMessage": "Message", "platforms": ["Platform 1"], "contentTypes": ["Type 1"], "duration": "3 months", "kpis": ["KPI 1"], "budget": "Low"}
  ]
}"#;

/// Stage-1 prompt: brand fundamentals analysis for a website.
#[must_use]
pub fn brand_analysis_prompt(website_url: &str, vertical: &str, notes: &str) -> String {
    let context = if notes.trim().is_empty() {
        String::new()
    } else {
        format!("\n\nADDITIONAL CONTEXT:\n{notes}")
    };
    let schema = BRAND_SCHEMA.replace("{vertical}", vertical);

    format!(
        "You are an ELITE Brand Strategy Consultant analyzing: {website_url}, \
         Industry: {vertical}{context}\n\n\
         Generate EXACT JSON (NO markdown, NO backticks):\n{schema}"
    )
}

/// Stage-1 prompt: campaign recommendations seeded with the parsed profile.
#[must_use]
pub fn campaign_prompt(profile: &BrandProfile, vertical: &str) -> String {
    format!(
        "You are a MASTER Marketing Campaign Strategist for {vertical}.\n\n\
         Brand: {mission}\n\
         Target: {target}\n\
         UVP: {uvp}\n\n\
         Generate 6-10 campaigns as EXACT JSON (NO markdown):\n{CAMPAIGNS_SCHEMA}",
        mission = profile.mission,
        target = profile.target_audience.summary,
        uvp = profile.unique_value.primary,
    )
}

/// Stage-2 prompt: one content piece of the kind's shape for a platform.
#[must_use]
pub fn content_prompt(
    number: u32,
    kind: &ContentKind,
    platform: &Platform,
    profile: &BrandProfile,
    vertical: &str,
) -> String {
    let task = shape_task(kind.structure, platform);
    let template = shape_template(number, kind, platform);

    format!(
        "{task} for {vertical}.\n\n\
         Brand: {mission}\n\
         Target: {target}\n\
         Voice: {voice}\n\n\
         Generate EXACT JSON (NO markdown, NO backticks, NO explanations):\n{template}\n\n\
         CRITICAL: Output ONLY valid JSON. No markdown. No text before or after.",
        mission = profile.mission,
        target = profile.target_audience.summary,
        voice = profile.brand_voice.description,
    )
}

fn shape_task(structure: Structure, platform: &Platform) -> String {
    match structure {
        Structure::Single => "Create a social media post".to_string(),
        Structure::MultiSlide => format!("Create a 5-slide carousel for {}", platform.label),
        Structure::DataVisual => {
            "Create data-heavy infographic content with 5+ statistics".to_string()
        }
        Structure::Thread => {
            "Create an 8-tweet thread. CRITICAL: Each tweet MUST be under 280 characters"
                .to_string()
        }
        Structure::VideoScript => {
            "Create a short-form video script with timing, voiceover, and visual directions"
                .to_string()
        }
        Structure::StoryFrames => "Create 5 story frames for ephemeral content".to_string(),
        Structure::Email => {
            "Create an email campaign with subject, preheader, body, and P.S.".to_string()
        }
        Structure::LongForm => "Create a blog article structure with SEO".to_string(),
        Structure::Ad => "Create high-converting ad copy".to_string(),
    }
}

/// The shape-specific JSON template, headed by the identity fields every
/// shape shares.
fn shape_template(number: u32, kind: &ContentKind, platform: &Platform) -> String {
    let header = format!(
        "{{\n  \"contentNumber\": {number},\n  \"contentType\": \"{kind}\",\n  \"platform\": \"{platform}\",\n  \"contentStructure\": \"{structure}\",\n",
        kind = kind.label,
        platform = platform.label,
        structure = kind.structure,
    );

    let body = match kind.structure {
        Structure::Single => {
            r#"  "title": "Post title",
  "hook": "Opening hook (20-40 words)",
  "body": "Main content (80-150 words)",
  "cta": "Call to action (10-20 words)",
  "hashtags": ["tag1", "tag2", "tag3", "tag4", "tag5"]
}"#
        }
        Structure::MultiSlide => {
            r#"  "title": "Carousel title",
  "slides": [
    {"slideNumber": 1, "type": "cover", "headline": "Main headline", "subheadline": "Supporting text", "visualDirection": "Visual description"},
    {"slideNumber": 2, "headline": "Slide 2 title", "content": "Slide 2 content (30-40 words)", "visualDirection": "Visual description"},
    {"slideNumber": 3, "headline": "Slide 3 title", "content": "Slide 3 content (30-40 words)", "visualDirection": "Visual description"},
    {"slideNumber": 4, "headline": "Slide 4 title", "content": "Slide 4 content (30-40 words)", "visualDirection": "Visual description"},
    {"slideNumber": 5, "type": "cta", "headline": "CTA headline", "cta": "Call to action", "visualDirection": "Visual description"}
  ],
  "caption": "Post caption (100-150 words)",
  "hashtags": ["tag1", "tag2", "tag3", "tag4", "tag5"]
}"#
        }
        Structure::DataVisual => {
            r#"  "title": "Infographic title",
  "subtitle": "Supporting subtitle",
  "dataPoints": [
    {"statistic": "75%", "description": "What this stat means", "source": "Data source"},
    {"statistic": "3.5x", "description": "Growth metric", "source": "Data source"},
    {"statistic": "$2.4M", "description": "Financial insight", "source": "Data source"},
    {"statistic": "500K+", "description": "Volume metric", "source": "Data source"},
    {"statistic": "92%", "description": "Percentage insight", "source": "Data source"}
  ],
  "visualStructure": "How to organize visually",
  "colorScheme": "Color suggestions",
  "caption": "Post caption",
  "hashtags": ["tag1", "tag2", "tag3", "tag4", "tag5"]
}"#
        }
        Structure::Thread => {
            r#"  "title": "Thread topic",
  "tweets": [
    {"tweetNumber": 1, "content": "Hook tweet (under 280 chars)", "characterCount": 0},
    {"tweetNumber": 2, "content": "Tweet 2 (under 280 chars)", "characterCount": 0},
    {"tweetNumber": 3, "content": "Tweet 3 (under 280 chars)", "characterCount": 0},
    {"tweetNumber": 4, "content": "Tweet 4 (under 280 chars)", "characterCount": 0},
    {"tweetNumber": 5, "content": "Tweet 5 (under 280 chars)", "characterCount": 0},
    {"tweetNumber": 6, "content": "Tweet 6 (under 280 chars)", "characterCount": 0},
    {"tweetNumber": 7, "content": "Tweet 7 (under 280 chars)", "characterCount": 0},
    {"tweetNumber": 8, "content": "CTA tweet (under 280 chars)", "characterCount": 0}
  ]
}"#
        }
        Structure::VideoScript => {
            r#"  "title": "Video concept",
  "script": {
    "hook": {"timing": "0-3 sec", "voiceover": "Opening line", "visual": "What viewer sees", "textOverlay": "On-screen text"},
    "content": [
      {"timing": "3-10 sec", "voiceover": "Segment 1", "visual": "Visual", "textOverlay": "Text"},
      {"timing": "10-20 sec", "voiceover": "Segment 2", "visual": "Visual", "textOverlay": "Text"},
      {"timing": "20-30 sec", "voiceover": "Segment 3", "visual": "Visual", "textOverlay": "Text"}
    ],
    "cta": {"timing": "30-35 sec", "voiceover": "CTA", "visual": "Final visual", "textOverlay": "CTA text"}
  },
  "caption": "Video caption",
  "hashtags": ["tag1", "tag2", "tag3", "tag4", "tag5"]
}"#
        }
        Structure::StoryFrames => {
            r#"  "title": "Story series title",
  "frames": [
    {"frameNumber": 1, "type": "opener", "text": "Frame 1 text (15 words)", "visual": "Visual", "interactive": "Poll/Question"},
    {"frameNumber": 2, "type": "content", "text": "Frame 2 text", "visual": "Visual", "interactive": "Element"},
    {"frameNumber": 3, "type": "content", "text": "Frame 3 text", "visual": "Visual", "interactive": "Element"},
    {"frameNumber": 4, "type": "content", "text": "Frame 4 text", "visual": "Visual", "interactive": "Element"},
    {"frameNumber": 5, "type": "cta", "text": "CTA text", "visual": "Visual", "interactive": "Swipe up"}
  ],
  "hashtags": ["tag1", "tag2"]
}"#
        }
        Structure::Email => {
            r#"  "title": "Email campaign name",
  "subjectLine": "Subject (40-50 chars)",
  "preheader": "Preheader text (80-100 chars)",
  "body": {
    "greeting": "Hi [Name],",
    "opening": "Opening paragraph",
    "mainContent": "Main content",
    "benefits": ["Benefit 1", "Benefit 2", "Benefit 3"],
    "cta": "CTA button text",
    "closing": "Closing"
  },
  "ps": "P.S. Additional note"
}"#
        }
        Structure::LongForm => {
            r#"  "title": "SEO blog title",
  "metaDescription": "Meta description (150-160 chars)",
  "introduction": "Introduction (150 words)",
  "sections": [
    {"heading": "Section 1", "content": "Content (200 words)", "keyPoints": ["Point 1", "Point 2"]},
    {"heading": "Section 2", "content": "Content (200 words)", "keyPoints": ["Point 1", "Point 2"]},
    {"heading": "Section 3", "content": "Content (200 words)", "keyPoints": ["Point 1", "Point 2"]}
  ],
  "conclusion": "Conclusion (150 words)",
  "cta": "CTA",
  "keywords": ["keyword1", "keyword2", "keyword3"]
}"#
        }
        Structure::Ad => {
            r#"  "title": "Ad campaign",
  "headline": "Ad headline (40 chars)",
  "primaryText": "Main ad copy (125 words)",
  "description": "Additional description",
  "cta": "Button text",
  "adFormat": "Single image"
}"#
        }
    };

    format!("{header}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandcast_core::catalog::{content_kind, platform};
    use brandcast_core::profile::{
        BrandProfile, BrandVoice, IndustryContext, TargetAudience, UniqueValue,
    };

    fn sample_profile() -> BrandProfile {
        BrandProfile {
            business_nature: String::new(),
            mission: "Better mornings.".to_string(),
            vision: String::new(),
            values: vec![],
            target_audience: TargetAudience {
                demographic: String::new(),
                psychographic: String::new(),
                pain_points: vec![],
                aspirations: vec![],
                content_habits: String::new(),
                summary: "Urban coffee enthusiasts".to_string(),
            },
            unique_value: UniqueValue {
                primary: "Lab-tested burrs.".to_string(),
                supporting: vec![],
                proof_points: vec![],
            },
            brand_voice: BrandVoice {
                description: "Warm and precise.".to_string(),
                tone_attributes: vec![],
                do_statements: vec![],
                dont_statements: vec![],
                example: String::new(),
            },
            competitive_advantages: vec![],
            strategic_priorities: vec![],
            industry_context: IndustryContext::default(),
        }
    }

    #[test]
    fn analysis_prompt_embeds_url_vertical_and_notes() {
        let prompt =
            brand_analysis_prompt("https://example.com", "Food & Beverage", "family business");
        assert!(prompt.contains("https://example.com"));
        assert!(prompt.contains("Industry: Food & Beverage"));
        assert!(prompt.contains("ADDITIONAL CONTEXT:\nfamily business"));
        assert!(prompt.contains("\"businessNature\""));
        assert!(prompt.contains("Trend 1 in Food & Beverage"));
    }

    #[test]
    fn analysis_prompt_omits_context_block_without_notes() {
        let prompt = brand_analysis_prompt("https://example.com", "Retail", "  ");
        assert!(!prompt.contains("ADDITIONAL CONTEXT"));
    }

    #[test]
    fn campaign_prompt_seeds_profile_fields() {
        let prompt = campaign_prompt(&sample_profile(), "Retail");
        assert!(prompt.contains("Brand: Better mornings."));
        assert!(prompt.contains("Target: Urban coffee enthusiasts"));
        assert!(prompt.contains("UVP: Lab-tested burrs."));
        assert!(prompt.contains("\"campaigns\""));
    }

    #[test]
    fn content_prompt_template_matches_shape() {
        let profile = sample_profile();
        let kind = content_kind("thread").unwrap();
        let plat = platform("twitter").unwrap();
        let prompt = content_prompt(3, kind, plat, &profile, "Retail");
        assert!(prompt.contains("\"contentNumber\": 3"));
        assert!(prompt.contains("\"contentStructure\": \"thread\""));
        assert!(prompt.contains("\"platform\": \"Twitter/X\""));
        assert!(prompt.contains("8-tweet thread"));
        assert!(prompt.contains("Voice: Warm and precise."));
    }

    #[test]
    fn every_shape_template_is_valid_json() {
        let plat = platform("linkedin").unwrap();
        for kind in &brandcast_core::CONTENT_KINDS {
            let template = shape_template(1, kind, plat);
            let value: serde_json::Value = serde_json::from_str(&template)
                .unwrap_or_else(|e| panic!("template for {} not valid JSON: {e}", kind.id));
            assert_eq!(value["contentStructure"], kind.structure.as_str());
        }
    }
}
