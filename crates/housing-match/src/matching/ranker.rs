use std::cmp::Reverse;

use super::domain::{Candidate, QuizResponse, ScoredCandidate};
use super::normalizer::{normalize, NormalizedResponse};
use super::scoring::evaluate;

/// Number of results returned when the caller does not ask for a limit.
pub const DEFAULT_RANK_LIMIT: usize = 5;

/// Top `limit` candidates for `response`, best first.
///
/// Ties keep catalog order.
pub fn rank(
    response: &QuizResponse,
    candidates: &[Candidate],
    limit: usize,
) -> Vec<ScoredCandidate> {
    rank_normalized(&normalize(response), candidates, limit)
}

pub fn rank_normalized(
    response: &NormalizedResponse,
    candidates: &[Candidate],
    limit: usize,
) -> Vec<ScoredCandidate> {
    let mut scored = candidates
        .iter()
        .map(|candidate| {
            let breakdown = evaluate(response, candidate);
            (breakdown.score(), candidate, breakdown)
        })
        .collect::<Vec<_>>();

    // `sort_by_key` is stable.
    scored.sort_by_key(|(score, _, _)| Reverse(*score));
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|(_, candidate, breakdown)| ScoredCandidate::new(candidate.clone(), breakdown))
        .collect()
}
