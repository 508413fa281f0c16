use housing_match::catalog::{CatalogError, StaticCatalog};
use housing_match::error::AppError;
use housing_match::matching::{Candidate, GenderPolicy, QuizResponse};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured catalog, or the built-in sample when none is configured.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<StaticCatalog, CatalogError> {
    match path {
        Some(path) => StaticCatalog::from_csv_path(path),
        None => {
            info!("no catalog configured; serving the built-in sample catalog");
            Ok(StaticCatalog::new(demo_catalog()))
        }
    }
}

pub(crate) fn load_response(path: &Path) -> Result<QuizResponse, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::json(format!("invalid questionnaire in {}", path.display()), err)
    })
}

pub(crate) fn demo_catalog() -> Vec<Candidate> {
    vec![
        residence(
            "north-apartments",
            "North Apartments",
            ResidenceProfile {
                quietness: 6.0,
                social: 6.0,
                distance_to_campus: 12.0,
                room_type: "apartment",
                gender_type: GenderPolicy::CoEd,
                is_accessible: true,
                has_kitchen: true,
                community_type: "general",
            },
            "Four-person apartments with full kitchens on the north side of campus",
            &["apartment", "upperclass"],
            &["kitchen", "laundry", "elevator"],
        ),
        residence(
            "orchard-hill",
            "Orchard Hill",
            ResidenceProfile {
                quietness: 8.0,
                social: 4.0,
                distance_to_campus: 15.0,
                room_type: "double",
                gender_type: GenderPolicy::CoEd,
                is_accessible: false,
                has_kitchen: false,
                community_type: "honors",
            },
            "Quiet hilltop corridor halls with an honors residential program",
            &["quiet", "honors"],
            &["study lounge", "laundry"],
        ),
        residence(
            "southwest-towers",
            "Southwest Towers",
            ResidenceProfile {
                quietness: 3.0,
                social: 9.0,
                distance_to_campus: 7.0,
                room_type: "double",
                gender_type: GenderPolicy::CoEd,
                is_accessible: true,
                has_kitchen: false,
                community_type: "general",
            },
            "High-rise towers next to the dining commons and the busiest social scene",
            &["social", "dining"],
            &["elevator", "laundry", "fitness room"],
        ),
        residence(
            "central-residence",
            "Central Residence",
            ResidenceProfile {
                quietness: 7.0,
                social: 6.0,
                distance_to_campus: 4.0,
                room_type: "single",
                gender_type: GenderPolicy::AllFemale,
                is_accessible: true,
                has_kitchen: false,
                community_type: "arts",
            },
            "Singles in a women's hall with an arts living-learning community",
            &["arts", "central"],
            &["studio space", "laundry"],
        ),
        residence(
            "sylvan-suites",
            "Sylvan Suites",
            ResidenceProfile {
                quietness: 7.0,
                social: 7.0,
                distance_to_campus: 17.0,
                room_type: "suite",
                gender_type: GenderPolicy::CoEd,
                is_accessible: false,
                has_kitchen: true,
                community_type: "general",
            },
            "Wooded suites with shared common rooms and kitchenettes",
            &["suite", "nature"],
            &["kitchenette", "common room"],
        ),
        residence(
            "northeast-quad",
            "Northeast Quad",
            ResidenceProfile {
                quietness: 5.0,
                social: 7.0,
                distance_to_campus: 9.0,
                room_type: "triple",
                gender_type: GenderPolicy::AllMale,
                is_accessible: false,
                has_kitchen: false,
                community_type: "stem",
            },
            "Traditional triples around a grass quad, close to the science buildings",
            &["stem", "traditional"],
            &["laundry"],
        ),
    ]
}

struct ResidenceProfile {
    quietness: f64,
    social: f64,
    distance_to_campus: f64,
    room_type: &'static str,
    gender_type: GenderPolicy,
    is_accessible: bool,
    has_kitchen: bool,
    community_type: &'static str,
}

fn residence(
    id: &str,
    name: &str,
    profile: ResidenceProfile,
    description: &str,
    tags: &[&str],
    amenities: &[&str],
) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        quietness: profile.quietness,
        social: profile.social,
        distance_to_campus: profile.distance_to_campus,
        room_type: profile.room_type.to_string(),
        gender_type: profile.gender_type,
        is_accessible: profile.is_accessible,
        has_kitchen: profile.has_kitchen,
        community_type: profile.community_type.to_string(),
        description: description.to_string(),
        image_url: None,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        amenities: amenities.iter().map(|item| item.to_string()).collect(),
    }
}
