use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::QuizResponse;
use super::normalizer::normalize;
use super::presentation::{minimum_threshold, present, required_matches, MatchView};
use super::ranker::rank_normalized;
use crate::catalog::{CandidateCatalog, CatalogError};
use crate::config::MatchConfig;

/// Service composing the catalog, ranker, and presentation rules.
pub struct MatchService<C> {
    catalog: Arc<C>,
    default_limit: usize,
}

/// Recommendation payload returned to the questionnaire flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub room_type: Option<String>,
    pub threshold: u8,
    pub candidates_considered: usize,
    pub alternatives_used: bool,
    pub matches: Vec<MatchView>,
}

impl MatchReport {
    pub fn primary_matches(&self) -> impl Iterator<Item = &MatchView> {
        self.matches.iter().filter(|view| !view.is_alternative)
    }
}

impl<C> MatchService<C>
where
    C: CandidateCatalog + 'static,
{
    pub fn new(catalog: Arc<C>, config: &MatchConfig) -> Self {
        Self {
            catalog,
            default_limit: config.default_limit.max(1),
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank the catalog for `response` and apply the display threshold.
    ///
    /// A shared room needs one match per roommate. When fewer primary results clear the
    /// threshold, the catalog is ranked again with every priority weighted equally, and the
    /// residences that clear the threshold only on that pass are added flagged as alternatives.
    pub fn recommend(
        &self,
        response: &QuizResponse,
        limit: Option<usize>,
    ) -> Result<MatchReport, CatalogError> {
        let candidates = self.catalog.candidates()?;
        let limit = limit
            .filter(|limit| *limit > 0)
            .unwrap_or(self.default_limit);
        let threshold = minimum_threshold(response.room_type.as_deref());
        let required = required_matches(response.room_type.as_deref());

        let normalized = normalize(response);
        let primary = rank_normalized(&normalized, &candidates, candidates.len());
        let qualifying = primary
            .iter()
            .filter(|scored| scored.score >= threshold)
            .count();

        let alternatives = if qualifying >= required {
            Vec::new()
        } else {
            info!(
                threshold,
                qualifying,
                required,
                candidates = candidates.len(),
                "too few primary matches cleared the threshold; ranking with priorities relaxed"
            );
            let matched = primary
                .iter()
                .filter(|scored| scored.score >= threshold)
                .map(|scored| scored.candidate.id.clone())
                .collect::<HashSet<_>>();
            rank_normalized(&normalized.with_neutral_weights(), &candidates, candidates.len())
                .into_iter()
                .filter(|scored| !matched.contains(&scored.candidate.id))
                .collect()
        };

        let mut presented = present(threshold, primary, alternatives);
        presented.truncate(limit);
        let alternatives_used = presented.iter().any(|entry| entry.is_alternative);

        info!(
            threshold,
            candidates = candidates.len(),
            matches = presented.len(),
            alternatives_used,
            "recommendation ready"
        );

        Ok(MatchReport {
            generated_at: Utc::now(),
            room_type: response.room_type.clone(),
            threshold,
            candidates_considered: candidates.len(),
            alternatives_used,
            matches: presented.into_iter().map(MatchView::from).collect(),
        })
    }
}
