//! Brand profile and campaign types produced by the research stage.
//!
//! Field names follow the camelCase JSON the model is instructed to emit.
//! Collections default to empty so a response missing an optional list still
//! deserializes; downstream rendering omits what is absent.

use serde::{Deserialize, Serialize};

/// The model's structured opinion about a business, produced once per
/// analysis run. Immutable once committed to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    #[serde(default)]
    pub business_nature: String,
    pub mission: String,
    #[serde(default)]
    pub vision: String,
    #[serde(default)]
    pub values: Vec<String>,
    pub target_audience: TargetAudience,
    pub unique_value: UniqueValue,
    pub brand_voice: BrandVoice,
    #[serde(default)]
    pub competitive_advantages: Vec<CompetitiveAdvantage>,
    #[serde(default)]
    pub strategic_priorities: Vec<StrategicPriority>,
    #[serde(default)]
    pub industry_context: IndustryContext,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAudience {
    #[serde(default)]
    pub demographic: String,
    #[serde(default)]
    pub psychographic: String,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub aspirations: Vec<String>,
    #[serde(default)]
    pub content_habits: String,
    /// Concise one-line summary fed back into later prompts.
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueValue {
    /// The main value proposition, fed back into later prompts.
    pub primary: String,
    #[serde(default)]
    pub supporting: Vec<String>,
    #[serde(default)]
    pub proof_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandVoice {
    pub description: String,
    #[serde(default)]
    pub tone_attributes: Vec<String>,
    #[serde(default)]
    pub do_statements: Vec<String>,
    #[serde(default)]
    pub dont_statements: Vec<String>,
    #[serde(default)]
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAdvantage {
    pub advantage: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicPriority {
    pub priority: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryContext {
    #[serde(default)]
    pub trends: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
}

/// One recommended marketing campaign. Produced six-to-ten per batch call,
/// tied to the profile of the same run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub name: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target_segment: String,
    #[serde(default)]
    pub key_message: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub content_types: Vec<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub kpis: Vec<String>,
    #[serde(default)]
    pub budget: String,
}
