use super::super::domain::Candidate;
use super::super::normalizer::{
    normalize_label, CommunityPreference, NormalizedResponse, GENERAL_COMMUNITY,
};
use super::{FactorScore, MatchFactor};

/// Per-unit-weight maximum of every priority-weighted factor.
const UNIT_MAX: f64 = 10.0;
const ROOM_CLOSE_CREDIT: f64 = 7.0;
const ROOM_MISMATCH_CREDIT: f64 = 3.0;
const KITCHEN_IMPORTANCE_CUTOFF: f64 = 7.0;
const KITCHEN_CREDIT: f64 = 3.0;
const ACCESSIBLE_CREDIT: f64 = 2.0;
/// Scale the resident's noise tolerance is flipped on to compare with quietness.
const QUIETNESS_PIVOT: f64 = 11.0;
const COMMUNITY_POINTS: f64 = 40.0;
const GENERAL_COMMUNITY_POINTS: f64 = 20.0;

pub(crate) fn score_factors(response: &NormalizedResponse, candidate: &Candidate) -> Vec<FactorScore> {
    let weights = response.weights;
    let mut components = vec![
        room_type(response, candidate, weights.privacy),
        social_fit(response, candidate, weights.social),
        // Noise shares the social weight: both describe the atmosphere of the building.
        noise_fit(response, candidate, weights.social),
        location_fit(response, candidate, weights.location),
        amenities(response, candidate, weights.amenities),
    ];

    if let Some(component) = community(response, candidate) {
        components.push(component);
    }

    components
}

fn weighted(factor: MatchFactor, weight: u32, unit_score: f64, notes: String) -> FactorScore {
    let multiplier = f64::from(weight);
    FactorScore {
        factor,
        weight: Some(weight),
        earned: unit_score * multiplier,
        possible: UNIT_MAX * multiplier,
        notes,
    }
}

fn closeness(difference: f64) -> f64 {
    (UNIT_MAX - difference).max(0.0)
}

fn room_type(response: &NormalizedResponse, candidate: &Candidate, weight: u32) -> FactorScore {
    let offered = candidate.room_type.trim();
    let (unit_score, notes) = match response.room_type.as_deref() {
        Some(wanted) if wanted.eq_ignore_ascii_case(offered) => {
            (UNIT_MAX, format!("{offered} room matches the requested type"))
        }
        Some(wanted) if is_suite_apartment_pair(wanted, offered) => (
            ROOM_CLOSE_CREDIT,
            format!("{offered} is comparable to the requested {wanted}"),
        ),
        Some(wanted) => (
            ROOM_MISMATCH_CREDIT,
            format!("{offered} room instead of the requested {wanted}"),
        ),
        None => (
            ROOM_MISMATCH_CREDIT,
            format!("{offered} room (no room type requested)"),
        ),
    };

    weighted(MatchFactor::RoomType, weight, unit_score, notes)
}

fn is_suite_apartment_pair(wanted: &str, offered: &str) -> bool {
    let wanted = wanted.to_ascii_lowercase();
    let offered = offered.to_ascii_lowercase();
    matches!(
        (wanted.as_str(), offered.as_str()),
        ("suite", "apartment") | ("apartment", "suite")
    )
}

fn social_fit(response: &NormalizedResponse, candidate: &Candidate, weight: u32) -> FactorScore {
    let difference = (candidate.social - response.social_level).abs();
    let unit_score = closeness(difference);
    let notes = format!(
        "social level {} against a preferred {}",
        candidate.social, response.social_level
    );

    weighted(MatchFactor::SocialFit, weight, unit_score, notes)
}

fn noise_fit(response: &NormalizedResponse, candidate: &Candidate, weight: u32) -> FactorScore {
    let preferred_quietness = QUIETNESS_PIVOT - response.noise_level;
    let difference = (candidate.quietness - preferred_quietness).abs();
    let unit_score = closeness(difference);
    let notes = format!(
        "quietness {} against a preferred {}",
        candidate.quietness, preferred_quietness
    );

    weighted(MatchFactor::NoiseFit, weight, unit_score, notes)
}

fn location_fit(response: &NormalizedResponse, candidate: &Candidate, weight: u32) -> FactorScore {
    let difference = (candidate.distance_to_campus - response.commute_minutes).abs();
    let unit_score = (UNIT_MAX - difference / 2.0).max(0.0);
    let notes = format!(
        "{} min from campus against a preferred {} min",
        candidate.distance_to_campus, response.commute_minutes
    );

    weighted(MatchFactor::LocationFit, weight, unit_score, notes)
}

/// Tops out at 5 of the nominal 10 per unit weight; the denominator stays at 10.
fn amenities(response: &NormalizedResponse, candidate: &Candidate, weight: u32) -> FactorScore {
    let mut unit_score = 0.0;
    let mut matched = Vec::new();

    if response.kitchen_importance >= KITCHEN_IMPORTANCE_CUTOFF && candidate.has_kitchen {
        unit_score += KITCHEN_CREDIT;
        matched.push("kitchen");
    }

    if response.accessibility_required && candidate.is_accessible {
        unit_score += ACCESSIBLE_CREDIT;
        matched.push("accessible");
    }

    let notes = if matched.is_empty() {
        "no requested amenities matched".to_string()
    } else {
        format!("amenities matched: {}", matched.join(", "))
    };

    weighted(MatchFactor::Amenities, weight, unit_score, notes)
}

/// Only contributes, to either side of the ratio, when a community is actually requested.
fn community(response: &NormalizedResponse, candidate: &Candidate) -> Option<FactorScore> {
    let CommunityPreference::Named(wanted) = &response.community else {
        return None;
    };

    let offered = normalize_label(&candidate.community_type);
    let (earned, notes) = if offered == normalize_label(wanted) {
        (COMMUNITY_POINTS, format!("{} community as requested", candidate.community_type))
    } else if offered == GENERAL_COMMUNITY {
        (
            GENERAL_COMMUNITY_POINTS,
            format!("general community, partial credit toward {wanted}"),
        )
    } else {
        (0.0, format!("{} community instead of {wanted}", candidate.community_type))
    };

    Some(FactorScore {
        factor: MatchFactor::Community,
        weight: None,
        earned,
        possible: COMMUNITY_POINTS,
        notes,
    })
}
