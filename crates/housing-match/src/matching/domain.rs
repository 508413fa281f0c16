use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::normalizer;
use super::scoring::CompatibilityBreakdown;

/// One resident's completed preference questionnaire.
///
/// Every field is optional. Legacy numeric fields (`socialLevel`, `noiseLevel`, ...) coexist
/// with the categorical `*Type` labels; the normalizer decides which one wins. A field of the
/// wrong JSON type reads as unanswered rather than failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    #[serde(default, deserialize_with = "lenient_label")]
    pub room_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub gender_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_accessibility")]
    pub accessible: Option<AccessibilityAnswer>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub social_level_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub social_level: Option<f64>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub noise_level_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub noise_level: Option<f64>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub commute_distance_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub commute_distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub kitchen_importance_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub kitchen_importance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_label")]
    pub community_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_priorities")]
    pub priorities: Option<PriorityRanks>,
}

/// Accessibility answers arrive either as a checkbox or as a select label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccessibilityAnswer {
    Flag(bool),
    Label(String),
}

/// Importance rank per scoring dimension, 1 being the most important.
///
/// Ranks are used directly as factor weights. Missing or zero ranks fall back to the neutral
/// weight, so a partial record never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRanks {
    #[serde(default, deserialize_with = "lenient_rank")]
    pub location: Option<u8>,
    #[serde(default, deserialize_with = "lenient_rank")]
    pub privacy: Option<u8>,
    #[serde(default, deserialize_with = "lenient_rank")]
    pub amenities: Option<u8>,
    #[serde(default, deserialize_with = "lenient_rank")]
    pub social: Option<u8>,
}

impl PriorityRanks {
    pub fn new(location: u8, privacy: u8, amenities: u8, social: u8) -> Self {
        Self {
            location: Some(location),
            privacy: Some(privacy),
            amenities: Some(amenities),
            social: Some(social),
        }
    }

    pub fn rank(&self, dimension: PriorityDimension) -> Option<u8> {
        match dimension {
            PriorityDimension::Location => self.location,
            PriorityDimension::Privacy => self.privacy,
            PriorityDimension::Amenities => self.amenities,
            PriorityDimension::Social => self.social,
        }
    }
}

/// The closed set of dimensions a resident can rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityDimension {
    Location,
    Privacy,
    Amenities,
    Social,
}

impl PriorityDimension {
    pub const ALL: [PriorityDimension; 4] = [
        PriorityDimension::Location,
        PriorityDimension::Privacy,
        PriorityDimension::Amenities,
        PriorityDimension::Social,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PriorityDimension::Location => "location",
            PriorityDimension::Privacy => "privacy",
            PriorityDimension::Amenities => "amenities",
            PriorityDimension::Social => "social",
        }
    }
}

/// Gender policy of a residence, and the normalized requirement of a resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GenderPolicy {
    CoEd,
    AllMale,
    AllFemale,
}

impl GenderPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            GenderPolicy::CoEd => "co-ed",
            GenderPolicy::AllMale => "all-male",
            GenderPolicy::AllFemale => "all-female",
        }
    }

    pub const fn is_co_ed(self) -> bool {
        matches!(self, GenderPolicy::CoEd)
    }
}

impl From<String> for GenderPolicy {
    fn from(value: String) -> Self {
        normalizer::gender_policy(Some(&value))
    }
}

impl From<GenderPolicy> for String {
    fn from(value: GenderPolicy) -> Self {
        value.label().to_string()
    }
}

/// One housing option from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// 0-10, higher is quieter.
    pub quietness: f64,
    /// 0-10, higher is more social.
    pub social: f64,
    /// Minutes, on the same scale as the commute answer.
    pub distance_to_campus: f64,
    pub room_type: String,
    pub gender_type: GenderPolicy,
    #[serde(default)]
    pub is_accessible: bool,
    #[serde(default)]
    pub has_kitchen: bool,
    #[serde(default = "general_community")]
    pub community_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

pub(crate) fn general_community() -> String {
    normalizer::GENERAL_COMMUNITY.to_string()
}

/// A candidate paired with its compatibility score for one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: u8,
    pub breakdown: CompatibilityBreakdown,
}

impl ScoredCandidate {
    pub fn new(candidate: Candidate, breakdown: CompatibilityBreakdown) -> Self {
        Self {
            score: breakdown.score(),
            candidate,
            breakdown,
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn lenient_rank<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_f64().and_then(whole_rank),
        Some(Value::String(raw)) => raw.trim().parse::<f64>().ok().and_then(whole_rank),
        _ => None,
    })
}

/// `2` and `2.0` are the same rank; fractional or out-of-range values are not ranks.
fn whole_rank(value: f64) -> Option<u8> {
    let in_range = value.is_finite() && value.fract() == 0.0 && (0.0..=255.0).contains(&value);
    in_range.then_some(value as u8)
}

fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(label)) => Some(label),
        _ => None,
    })
}

fn lenient_priorities<'de, D>(deserializer: D) -> Result<Option<PriorityRanks>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(ranks @ Value::Object(_)) => PriorityRanks::deserialize(ranks).ok(),
        _ => None,
    })
}

fn lenient_accessibility<'de, D>(deserializer: D) -> Result<Option<AccessibilityAnswer>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => Some(AccessibilityAnswer::Flag(flag)),
        Some(Value::String(label)) => Some(AccessibilityAnswer::Label(label)),
        _ => None,
    })
}
