//! Display rules applied to ranked output: minimum thresholds, primary/alternative ordering,
//! and the public view of a match.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::domain::{GenderPolicy, ScoredCandidate};

/// Minimum score shown for single and double rooms.
pub const STANDARD_THRESHOLD: u8 = 75;
/// Shared rooms are harder to fill, so weaker matches are still shown.
pub const SHARED_ROOM_THRESHOLD: u8 = 60;

pub fn minimum_threshold(room_type: Option<&str>) -> u8 {
    match room_type.map(|room| room.trim().to_ascii_lowercase()).as_deref() {
        Some("triple") | Some("quad") => SHARED_ROOM_THRESHOLD,
        _ => STANDARD_THRESHOLD,
    }
}

/// Matches needed before the search stops: one per roommate in a shared room.
pub fn required_matches(room_type: Option<&str>) -> usize {
    match room_type.map(|room| room.trim().to_ascii_lowercase()).as_deref() {
        Some("triple") => 2,
        Some("quad") => 3,
        _ => 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Confidence of a deterministic score. The rule-based scorer has no second
    /// opinion to corroborate it, so it never rises above `Medium`.
    pub fn classify(score: u8) -> Self {
        Self::classify_with_model(score, ConfidenceLevel::Medium)
    }

    /// Combines a score with the confidence reported by a scoring model.
    /// `High` needs both a score of 85 and a confident model; a doubtful model
    /// widens the `Low` band up to 79.
    pub fn classify_with_model(score: u8, model: ConfidenceLevel) -> Self {
        match (score, model) {
            (85..=u8::MAX, ConfidenceLevel::High) => ConfidenceLevel::High,
            (0..=74, _) | (75..=79, ConfidenceLevel::Low) => ConfidenceLevel::Low,
            _ => ConfidenceLevel::Medium,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// A ranked candidate tagged with the pass that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedMatch {
    pub scored: ScoredCandidate,
    pub is_alternative: bool,
}

/// Drops results under `threshold` and orders primary matches ahead of alternatives.
pub fn present(
    threshold: u8,
    primary: Vec<ScoredCandidate>,
    alternatives: Vec<ScoredCandidate>,
) -> Vec<PresentedMatch> {
    let tagged = primary
        .into_iter()
        .map(|scored| PresentedMatch {
            scored,
            is_alternative: false,
        })
        .chain(alternatives.into_iter().map(|scored| PresentedMatch {
            scored,
            is_alternative: true,
        }));

    let mut presented = tagged
        .filter(|entry| entry.scored.score >= threshold)
        .collect::<Vec<_>>();
    order_matches(&mut presented);
    presented
}

/// Primary before alternative, then descending score. Stable within equal scores.
pub fn order_matches(matches: &mut [PresentedMatch]) {
    matches.sort_by_key(|entry| (entry.is_alternative, Reverse(entry.scored.score)));
}

/// Public payload for one recommended residence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub candidate_id: String,
    pub name: String,
    pub room_type: String,
    pub gender_type: GenderPolicy,
    pub community_type: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub amenities: Vec<String>,
    pub compatibility_score: u8,
    pub confidence: ConfidenceLevel,
    pub rationale: String,
    pub is_alternative: bool,
}

impl From<PresentedMatch> for MatchView {
    fn from(value: PresentedMatch) -> Self {
        let PresentedMatch {
            scored,
            is_alternative,
        } = value;
        let rationale = scored.breakdown.rationale();
        let candidate = scored.candidate;

        Self {
            candidate_id: candidate.id,
            name: candidate.name,
            room_type: candidate.room_type,
            gender_type: candidate.gender_type,
            community_type: candidate.community_type,
            description: candidate.description,
            image_url: candidate.image_url,
            tags: candidate.tags,
            amenities: candidate.amenities,
            compatibility_score: scored.score,
            confidence: ConfidenceLevel::classify(scored.score),
            rationale,
            is_alternative,
        }
    }
}
