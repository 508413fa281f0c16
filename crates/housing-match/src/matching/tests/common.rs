use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{CandidateCatalog, CatalogError, StaticCatalog};
use crate::config::MatchConfig;
use crate::matching::domain::{
    AccessibilityAnswer, Candidate, GenderPolicy, PriorityRanks, QuizResponse,
};
use crate::matching::service::MatchService;

pub(super) fn candidate(id: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: format!("{id} hall"),
        quietness: 5.0,
        social: 5.0,
        distance_to_campus: 10.0,
        room_type: "double".to_string(),
        gender_type: GenderPolicy::CoEd,
        is_accessible: false,
        has_kitchen: false,
        community_type: "general".to_string(),
        description: "Traditional corridor-style hall".to_string(),
        image_url: None,
        tags: vec!["central".to_string()],
        amenities: vec!["laundry".to_string()],
    }
}

/// Questionnaire used throughout: a very social resident who still wants a quiet floor.
pub(super) fn worked_response() -> QuizResponse {
    QuizResponse {
        room_type: Some("double".to_string()),
        gender_type: Some("female".to_string()),
        accessible: Some(AccessibilityAnswer::Flag(false)),
        social_level_type: Some("very-social".to_string()),
        noise_level_type: Some("quiet".to_string()),
        commute_distance_type: Some("5-10min".to_string()),
        priorities: Some(PriorityRanks::new(1, 2, 3, 4)),
        ..QuizResponse::default()
    }
}

pub(super) fn worked_candidate() -> Candidate {
    Candidate {
        room_type: "double".to_string(),
        gender_type: GenderPolicy::CoEd,
        is_accessible: true,
        social: 8.0,
        quietness: 6.0,
        distance_to_campus: 7.0,
        has_kitchen: true,
        community_type: "general".to_string(),
        ..candidate("maple")
    }
}

/// Response with no priorities and a candidate that sits exactly on every preference.
pub(super) fn mirrored_pair() -> (QuizResponse, Candidate) {
    let response = QuizResponse {
        room_type: Some("suite".to_string()),
        gender_type: Some("prefer-not-to-say".to_string()),
        accessible: Some(AccessibilityAnswer::Label("yes".to_string())),
        social_level_type: Some("moderately-social".to_string()),
        noise_level_type: Some("very-quiet".to_string()),
        commute_distance_type: Some("10-15min".to_string()),
        kitchen_importance_type: Some("essential".to_string()),
        ..QuizResponse::default()
    };

    let candidate = Candidate {
        room_type: "suite".to_string(),
        social: 7.0,
        quietness: 2.0,
        distance_to_campus: 12.0,
        is_accessible: true,
        has_kitchen: true,
        ..candidate("mirror")
    };

    (response, candidate)
}

pub(super) fn catalog() -> Vec<Candidate> {
    vec![
        Candidate {
            social: 9.0,
            quietness: 4.0,
            distance_to_campus: 7.0,
            has_kitchen: true,
            ..candidate("birch")
        },
        Candidate {
            room_type: "single".to_string(),
            social: 2.0,
            quietness: 9.0,
            distance_to_campus: 25.0,
            ..candidate("cedar")
        },
        Candidate {
            gender_type: GenderPolicy::AllMale,
            social: 9.0,
            quietness: 4.0,
            distance_to_campus: 7.0,
            ..candidate("dogwood")
        },
        Candidate {
            gender_type: GenderPolicy::AllFemale,
            social: 8.0,
            quietness: 5.0,
            distance_to_campus: 5.0,
            ..candidate("elm")
        },
        worked_candidate(),
    ]
}

pub(super) fn match_service(candidates: Vec<Candidate>) -> MatchService<StaticCatalog> {
    MatchService::new(
        Arc::new(StaticCatalog::new(candidates)),
        &MatchConfig::default(),
    )
}

pub(super) struct OfflineCatalog;

impl CandidateCatalog for OfflineCatalog {
    fn candidates(&self) -> Result<Vec<Candidate>, CatalogError> {
        Err(CatalogError::Unavailable("catalog offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
