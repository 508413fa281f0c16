mod gates;
mod rules;

pub use gates::HardGate;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Candidate, QuizResponse};
use super::normalizer::{normalize, NormalizedResponse};

/// Independently weighted contributions to a compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    RoomType,
    SocialFit,
    NoiseFit,
    LocationFit,
    Amenities,
    Community,
}

impl MatchFactor {
    pub const fn label(self) -> &'static str {
        match self {
            MatchFactor::RoomType => "room type",
            MatchFactor::SocialFit => "social fit",
            MatchFactor::NoiseFit => "noise fit",
            MatchFactor::LocationFit => "location fit",
            MatchFactor::Amenities => "amenities",
            MatchFactor::Community => "community",
        }
    }
}

/// Discrete contribution to a score, kept so every ranking can be audited.
///
/// `weight` is `None` for flat factors that do not follow the priority ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: MatchFactor,
    pub weight: Option<u32>,
    pub earned: f64,
    pub possible: f64,
    pub notes: String,
}

/// Full scoring trail for one (response, candidate) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    pub candidate_id: String,
    pub rejected_by: Option<HardGate>,
    pub components: Vec<FactorScore>,
}

impl CompatibilityBreakdown {
    pub fn earned(&self) -> f64 {
        self.components.iter().map(|component| component.earned).sum()
    }

    pub fn possible(&self) -> f64 {
        self.components
            .iter()
            .map(|component| component.possible)
            .sum()
    }

    /// Integer percentage in `0..=100`; zero for hard-gate rejections and empty denominators.
    pub fn score(&self) -> u8 {
        if self.rejected_by.is_some() {
            return 0;
        }

        let possible = self.possible();
        if possible <= 0.0 {
            return 0;
        }

        let percentage = (self.earned() / possible) * 100.0;
        if !percentage.is_finite() {
            return 0;
        }
        percentage.clamp(0.0, 100.0).round() as u8
    }

    pub fn component(&self, factor: MatchFactor) -> Option<&FactorScore> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }

    pub fn rationale(&self) -> String {
        if let Some(gate) = &self.rejected_by {
            return format!("not eligible: {}", gate.summary());
        }

        let details = self
            .components
            .iter()
            .map(|component| component.notes.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        format!("{}% compatible: {}", self.score(), details)
    }
}

/// Score a normalized response against one candidate, keeping the factor trail.
pub fn evaluate(response: &NormalizedResponse, candidate: &Candidate) -> CompatibilityBreakdown {
    if let Some(gate) = gates::check(response, candidate) {
        debug!(candidate = %candidate.id, gate = gate.label(), "candidate rejected by hard gate");
        return CompatibilityBreakdown {
            candidate_id: candidate.id.clone(),
            rejected_by: Some(gate),
            components: Vec::new(),
        };
    }

    CompatibilityBreakdown {
        candidate_id: candidate.id.clone(),
        rejected_by: None,
        components: rules::score_factors(response, candidate),
    }
}

/// Compatibility of `candidate` for `response` as an integer in `0..=100`.
pub fn score(response: &QuizResponse, candidate: &Candidate) -> u8 {
    evaluate(&normalize(response), candidate).score()
}
