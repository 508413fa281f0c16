//! Resident-to-housing compatibility matching.
//!
//! Data flows one way: a [`QuizResponse`] is normalized onto fixed scales, each [`Candidate`]
//! is scored against it, and the ranker sorts and truncates the scored set. Presentation rules
//! (thresholds, alternative matches) and the service facade sit on top of the pure engine.

pub mod domain;
pub mod normalizer;
pub mod presentation;
pub mod ranker;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub(crate) use domain::general_community;
pub use domain::{
    AccessibilityAnswer, Candidate, GenderPolicy, PriorityDimension, PriorityRanks, QuizResponse,
    ScoredCandidate,
};
pub use normalizer::{normalize, NormalizedResponse, PriorityWeights};
pub use presentation::{ConfidenceLevel, MatchView, PresentedMatch};
pub use ranker::{rank, DEFAULT_RANK_LIMIT};
pub use router::match_router;
pub use scoring::{evaluate, score, CompatibilityBreakdown, FactorScore, HardGate, MatchFactor};
pub use service::{MatchReport, MatchService};
