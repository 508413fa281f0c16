//! Maps categorical questionnaire answers onto fixed ordinal scales.
//!
//! Scale steps are not evenly spaced; they reflect how strongly residents perceive each label.
//! Every resolver is total: absent or unrecognized input resolves to the scale default.

use tracing::debug;

use super::domain::{
    AccessibilityAnswer, GenderPolicy, PriorityDimension, PriorityRanks, QuizResponse,
};

/// Weight applied to a dimension the resident did not rank.
pub const NEUTRAL_WEIGHT: u32 = 5;

/// Community label that earns partial credit against any named preference.
pub const GENERAL_COMMUNITY: &str = "general";

/// A label-to-value lookup table with a fallback.
#[derive(Debug)]
pub struct OrdinalScale {
    pub name: &'static str,
    entries: &'static [(&'static str, f64)],
    pub default: f64,
}

impl OrdinalScale {
    pub fn lookup(&self, label: &str) -> Option<f64> {
        let label = normalize_label(label);
        self.entries
            .iter()
            .find(|(key, _)| *key == label)
            .map(|(_, value)| *value)
    }

    pub fn value_for(&self, label: Option<&str>) -> f64 {
        let Some(label) = label else {
            return self.default;
        };

        self.lookup(label).unwrap_or_else(|| {
            debug!(scale = self.name, label, default = self.default, "unrecognized answer");
            self.default
        })
    }

    /// Explicit numeric override first, then the label, then the default.
    ///
    /// Zero and non-finite overrides count as absent, matching how the questionnaire
    /// serializes unanswered legacy fields.
    pub fn resolve(&self, numeric: Option<f64>, label: Option<&str>) -> f64 {
        numeric
            .filter(|value| value.is_finite() && *value != 0.0)
            .unwrap_or_else(|| self.value_for(label))
    }
}

pub static SOCIAL_LEVEL: OrdinalScale = OrdinalScale {
    name: "social level",
    entries: &[
        ("very-social", 9.0),
        ("moderately-social", 7.0),
        ("somewhat-social", 5.0),
        ("minimal-social", 2.0),
    ],
    default: 5.0,
};

/// 10 is quiet.
pub static NOISE_LEVEL: OrdinalScale = OrdinalScale {
    name: "noise level",
    entries: &[
        ("very-quiet", 9.0),
        ("quiet", 7.0),
        ("moderate", 5.0),
        ("somewhat-loud", 3.0),
        ("loud", 1.0),
    ],
    default: 5.0,
};

/// Minutes.
pub static COMMUTE_DISTANCE: OrdinalScale = OrdinalScale {
    name: "commute distance",
    entries: &[
        ("under-5min", 3.0),
        ("5-10min", 7.0),
        ("10-15min", 12.0),
        ("15-20min", 17.0),
        ("over-20min", 25.0),
    ],
    default: 10.0,
};

pub static IMPORTANCE: OrdinalScale = OrdinalScale {
    name: "importance",
    entries: &[
        ("essential", 10.0),
        ("yes-required", 10.0),
        ("very-important", 8.0),
        ("important", 6.0),
        ("preferred", 6.0),
        ("nice-to-have", 4.0),
        ("not-important", 2.0),
        ("no-preference", 5.0),
    ],
    default: 5.0,
};

/// Only an explicit "yes" makes accessibility a hard requirement; "preferred" does not.
pub fn accessibility_required(answer: Option<&AccessibilityAnswer>) -> bool {
    match answer {
        Some(AccessibilityAnswer::Flag(flag)) => *flag,
        Some(AccessibilityAnswer::Label(label)) => label == "yes" || label == "yes-required",
        None => false,
    }
}

/// Residents who do not state a binary gender impose no gender constraint.
pub fn gender_policy(label: Option<&str>) -> GenderPolicy {
    let Some(label) = label else {
        return GenderPolicy::CoEd;
    };

    match label.trim().to_ascii_lowercase().as_str() {
        "male" | "all-male" => GenderPolicy::AllMale,
        "female" | "all-female" => GenderPolicy::AllFemale,
        _ => GenderPolicy::CoEd,
    }
}

/// Community preference after collapsing the "no preference" spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommunityPreference {
    NoPreference,
    Named(String),
}

pub fn community_preference(label: Option<&str>) -> CommunityPreference {
    match label.map(str::trim) {
        None | Some("") => CommunityPreference::NoPreference,
        Some(label) if normalize_label(label) == "no-preference" => {
            CommunityPreference::NoPreference
        }
        Some(label) => CommunityPreference::Named(label.to_string()),
    }
}

/// Per-dimension factor weights derived from the priority ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityWeights {
    pub location: u32,
    pub privacy: u32,
    pub amenities: u32,
    pub social: u32,
}

impl PriorityWeights {
    pub const fn neutral() -> Self {
        Self {
            location: NEUTRAL_WEIGHT,
            privacy: NEUTRAL_WEIGHT,
            amenities: NEUTRAL_WEIGHT,
            social: NEUTRAL_WEIGHT,
        }
    }

    pub fn from_ranks(ranks: Option<&PriorityRanks>) -> Self {
        let weight = |dimension: PriorityDimension| {
            ranks
                .and_then(|ranks| ranks.rank(dimension))
                .filter(|rank| *rank > 0)
                .map(u32::from)
                .unwrap_or(NEUTRAL_WEIGHT)
        };

        Self {
            location: weight(PriorityDimension::Location),
            privacy: weight(PriorityDimension::Privacy),
            amenities: weight(PriorityDimension::Amenities),
            social: weight(PriorityDimension::Social),
        }
    }

    pub fn for_dimension(&self, dimension: PriorityDimension) -> u32 {
        match dimension {
            PriorityDimension::Location => self.location,
            PriorityDimension::Privacy => self.privacy,
            PriorityDimension::Amenities => self.amenities,
            PriorityDimension::Social => self.social,
        }
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Canonical numeric view of a questionnaire, consumed by the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    pub room_type: Option<String>,
    pub gender: GenderPolicy,
    pub accessibility_required: bool,
    pub social_level: f64,
    pub noise_level: f64,
    pub commute_minutes: f64,
    pub kitchen_importance: f64,
    pub community: CommunityPreference,
    pub weights: PriorityWeights,
}

impl NormalizedResponse {
    /// Same answers with every dimension weighted equally.
    pub fn with_neutral_weights(&self) -> Self {
        Self {
            weights: PriorityWeights::neutral(),
            ..self.clone()
        }
    }
}

pub fn normalize(response: &QuizResponse) -> NormalizedResponse {
    NormalizedResponse {
        room_type: response
            .room_type
            .as_deref()
            .map(str::trim)
            .filter(|room| !room.is_empty())
            .map(str::to_string),
        gender: gender_policy(response.gender_type.as_deref()),
        accessibility_required: accessibility_required(response.accessible.as_ref()),
        social_level: SOCIAL_LEVEL.resolve(
            response.social_level,
            response.social_level_type.as_deref(),
        ),
        noise_level: NOISE_LEVEL.resolve(
            response.noise_level,
            response.noise_level_type.as_deref(),
        ),
        commute_minutes: COMMUTE_DISTANCE.resolve(
            response.commute_distance,
            response.commute_distance_type.as_deref(),
        ),
        kitchen_importance: IMPORTANCE.resolve(
            response.kitchen_importance,
            response.kitchen_importance_type.as_deref(),
        ),
        community: community_preference(response.community_type.as_deref()),
        weights: PriorityWeights::from_ranks(response.priorities.as_ref()),
    }
}

/// Trimmed, lowercased, inner whitespace collapsed to hyphens ("No Preference" -> "no-preference").
pub(crate) fn normalize_label(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase()
}
