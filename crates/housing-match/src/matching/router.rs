use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::domain::{Candidate, QuizResponse, ScoredCandidate};
use super::normalizer::normalize;
use super::presentation::ConfidenceLevel;
use super::ranker::rank;
use super::scoring::{evaluate, CompatibilityBreakdown};
use super::service::{MatchReport, MatchService};
use crate::catalog::CandidateCatalog;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub response: QuizResponse,
    pub candidate: Candidate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u8,
    pub confidence: ConfidenceLevel,
    pub rationale: String,
    pub breakdown: CompatibilityBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    pub response: QuizResponse,
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub limit: usize,
    pub matches: Vec<ScoredCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub response: QuizResponse,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Router builder exposing the scoring, ranking, and recommendation endpoints.
pub fn match_router<C>(service: Arc<MatchService<C>>) -> Router
where
    C: CandidateCatalog + 'static,
{
    Router::new()
        .route("/api/v1/match/score", post(score_handler))
        .route("/api/v1/match/rank", post(rank_handler::<C>))
        .route("/api/v1/match/recommend", post(recommend_handler::<C>))
        .with_state(service)
}

pub(crate) async fn score_handler(Json(request): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let breakdown = evaluate(&normalize(&request.response), &request.candidate);
    let score = breakdown.score();

    Json(ScoreResponse {
        score,
        confidence: ConfidenceLevel::classify(score),
        rationale: breakdown.rationale(),
        breakdown,
    })
}

pub(crate) async fn rank_handler<C>(
    State(service): State<Arc<MatchService<C>>>,
    Json(request): Json<RankRequest>,
) -> Json<RankResponse>
where
    C: CandidateCatalog + 'static,
{
    let limit = request
        .limit
        .filter(|limit| *limit > 0)
        .unwrap_or(service.default_limit());
    let matches = rank(&request.response, &request.candidates, limit);

    Json(RankResponse { limit, matches })
}

pub(crate) async fn recommend_handler<C>(
    State(service): State<Arc<MatchService<C>>>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<MatchReport>, AppError>
where
    C: CandidateCatalog + 'static,
{
    let report = service.recommend(&request.response, request.limit)?;
    Ok(Json(report))
}
