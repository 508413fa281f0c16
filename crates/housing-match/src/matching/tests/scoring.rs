use super::common::*;
use crate::matching::domain::{AccessibilityAnswer, Candidate, GenderPolicy, QuizResponse};
use crate::matching::normalizer::normalize;
use crate::matching::scoring::{evaluate, score, HardGate, MatchFactor};

fn earned_and_possible(
    response: &QuizResponse,
    candidate: &Candidate,
    factor: MatchFactor,
) -> (f64, f64) {
    let breakdown = evaluate(&normalize(response), candidate);
    let component = breakdown
        .component(factor)
        .unwrap_or_else(|| panic!("{} component present", factor.label()));
    (component.earned, component.possible)
}

#[test]
fn worked_example_scores_each_factor() {
    let breakdown = evaluate(&normalize(&worked_response()), &worked_candidate());

    assert_eq!(breakdown.rejected_by, None);
    let parts = breakdown
        .components
        .iter()
        .map(|component| (component.factor, component.earned, component.possible))
        .collect::<Vec<_>>();
    assert_eq!(
        parts,
        vec![
            (MatchFactor::RoomType, 20.0, 20.0),
            (MatchFactor::SocialFit, 36.0, 40.0),
            (MatchFactor::NoiseFit, 32.0, 40.0),
            (MatchFactor::LocationFit, 10.0, 10.0),
            (MatchFactor::Amenities, 0.0, 30.0),
        ]
    );
    assert_eq!(breakdown.earned(), 98.0);
    assert_eq!(breakdown.possible(), 140.0);
    assert_eq!(breakdown.score(), 70);
    assert_eq!(score(&worked_response(), &worked_candidate()), 70);
}

#[test]
fn single_sex_mismatch_is_rejected() {
    let candidate = Candidate {
        gender_type: GenderPolicy::AllMale,
        ..worked_candidate()
    };

    let breakdown = evaluate(&normalize(&worked_response()), &candidate);

    assert_eq!(
        breakdown.rejected_by,
        Some(HardGate::Gender {
            required: GenderPolicy::AllFemale,
            offered: GenderPolicy::AllMale,
        })
    );
    assert_eq!(breakdown.score(), 0);
    assert!(breakdown.components.is_empty());
}

#[test]
fn co_ed_on_either_side_passes_the_gender_gate() {
    let response = QuizResponse {
        gender_type: Some("non-binary".to_string()),
        ..worked_response()
    };
    for policy in [
        GenderPolicy::AllMale,
        GenderPolicy::AllFemale,
        GenderPolicy::CoEd,
    ] {
        let candidate = Candidate {
            gender_type: policy,
            ..worked_candidate()
        };
        assert!(score(&response, &candidate) > 0, "{} rejected", policy.label());
    }

    assert_eq!(score(&worked_response(), &worked_candidate()), 70);
}

#[test]
fn accessibility_requirement_rejects_inaccessible_candidates() {
    let response = QuizResponse {
        accessible: Some(AccessibilityAnswer::Flag(true)),
        ..worked_response()
    };
    let candidate = Candidate {
        is_accessible: false,
        ..worked_candidate()
    };

    let breakdown = evaluate(&normalize(&response), &candidate);

    assert_eq!(breakdown.rejected_by, Some(HardGate::Accessibility));
    assert_eq!(breakdown.score(), 0);
}

#[test]
fn preferred_accessibility_is_not_a_gate() {
    let response = QuizResponse {
        accessible: Some(AccessibilityAnswer::Label("preferred".to_string())),
        ..worked_response()
    };
    let candidate = Candidate {
        is_accessible: false,
        ..worked_candidate()
    };

    assert!(score(&response, &candidate) > 0);
}

#[test]
fn gender_gate_is_checked_before_accessibility() {
    let response = QuizResponse {
        accessible: Some(AccessibilityAnswer::Flag(true)),
        ..worked_response()
    };
    let candidate = Candidate {
        gender_type: GenderPolicy::AllMale,
        is_accessible: false,
        ..worked_candidate()
    };

    let breakdown = evaluate(&normalize(&response), &candidate);

    assert!(matches!(
        breakdown.rejected_by,
        Some(HardGate::Gender { .. })
    ));
}

#[test]
fn exact_room_type_outscores_a_mismatch() {
    let response = worked_response();
    let double = worked_candidate();
    let single = Candidate {
        room_type: "single".to_string(),
        ..worked_candidate()
    };

    assert_eq!(
        earned_and_possible(&response, &double, MatchFactor::RoomType),
        (20.0, 20.0)
    );
    assert_eq!(
        earned_and_possible(&response, &single, MatchFactor::RoomType),
        (6.0, 20.0)
    );
    assert!(score(&response, &double) > score(&response, &single));
}

#[test]
fn room_type_comparison_ignores_case() {
    let candidate = Candidate {
        room_type: "Double".to_string(),
        ..worked_candidate()
    };

    assert_eq!(
        earned_and_possible(&worked_response(), &candidate, MatchFactor::RoomType),
        (20.0, 20.0)
    );
}

#[test]
fn suite_and_apartment_earn_close_credit_both_ways() {
    let wants_suite = QuizResponse {
        room_type: Some("suite".to_string()),
        priorities: None,
        ..worked_response()
    };
    let apartment = Candidate {
        room_type: "apartment".to_string(),
        ..worked_candidate()
    };
    assert_eq!(
        earned_and_possible(&wants_suite, &apartment, MatchFactor::RoomType),
        (35.0, 50.0)
    );

    let wants_apartment = QuizResponse {
        room_type: Some("apartment".to_string()),
        priorities: None,
        ..worked_response()
    };
    let suite = Candidate {
        room_type: "suite".to_string(),
        ..worked_candidate()
    };
    assert_eq!(
        earned_and_possible(&wants_apartment, &suite, MatchFactor::RoomType),
        (35.0, 50.0)
    );
}

#[test]
fn closer_social_level_never_scores_lower() {
    let response = worked_response();
    let mut previous = 0;
    for social in [0.0, 2.0, 4.0, 6.0, 8.0, 9.0] {
        let candidate = Candidate {
            social,
            ..worked_candidate()
        };
        let current = score(&response, &candidate);
        assert!(
            current >= previous,
            "social {social} scored {current} after {previous}"
        );
        previous = current;
    }
}

#[test]
fn distant_values_floor_at_zero() {
    let response = worked_response();
    let candidate = Candidate {
        social: -20.0,
        distance_to_campus: 90.0,
        ..worked_candidate()
    };

    assert_eq!(
        earned_and_possible(&response, &candidate, MatchFactor::SocialFit),
        (0.0, 40.0)
    );
    assert_eq!(
        earned_and_possible(&response, &candidate, MatchFactor::LocationFit),
        (0.0, 10.0)
    );
}

#[test]
fn missing_priorities_weight_every_factor_neutrally() {
    let response = QuizResponse {
        priorities: None,
        ..worked_response()
    };

    let breakdown = evaluate(&normalize(&response), &worked_candidate());

    assert!(breakdown
        .components
        .iter()
        .all(|component| component.weight == Some(5) && component.possible == 50.0));
    assert_eq!(breakdown.possible(), 250.0);
}

#[test]
fn mirrored_candidate_reaches_the_attainable_maximum() {
    let (response, candidate) = mirrored_pair();

    let breakdown = evaluate(&normalize(&response), &candidate);

    assert_eq!(breakdown.earned(), 225.0);
    assert_eq!(breakdown.possible(), 250.0);
    assert_eq!(breakdown.score(), 90);

    for other in catalog() {
        assert!(score(&response, &other) <= breakdown.score());
    }
}

#[test]
fn amenities_credit_kitchen_and_accessibility() {
    let (response, candidate) = mirrored_pair();
    assert_eq!(
        earned_and_possible(&response, &candidate, MatchFactor::Amenities),
        (25.0, 50.0)
    );

    let no_kitchen = Candidate {
        has_kitchen: false,
        ..candidate
    };
    assert_eq!(
        earned_and_possible(&response, &no_kitchen, MatchFactor::Amenities),
        (10.0, 50.0)
    );
}

#[test]
fn community_factor_only_applies_when_requested() {
    let response = QuizResponse {
        community_type: Some("honors".to_string()),
        ..worked_response()
    };
    let honors = Candidate {
        community_type: "Honors".to_string(),
        ..worked_candidate()
    };
    let general = worked_candidate();
    let arts = Candidate {
        community_type: "arts".to_string(),
        ..worked_candidate()
    };

    assert_eq!(
        earned_and_possible(&response, &honors, MatchFactor::Community),
        (40.0, 40.0)
    );
    assert_eq!(
        earned_and_possible(&response, &general, MatchFactor::Community),
        (20.0, 40.0)
    );
    assert_eq!(
        earned_and_possible(&response, &arts, MatchFactor::Community),
        (0.0, 40.0)
    );

    let unrequested = evaluate(&normalize(&worked_response()), &honors);
    assert!(unrequested.component(MatchFactor::Community).is_none());

    let no_preference = QuizResponse {
        community_type: Some("no-preference".to_string()),
        ..worked_response()
    };
    let breakdown = evaluate(&normalize(&no_preference), &honors);
    assert!(breakdown.component(MatchFactor::Community).is_none());
}

#[test]
fn empty_questionnaire_still_scores_in_range() {
    let value = score(&QuizResponse::default(), &candidate("plain"));

    assert!(value <= 100);
    assert!(value > 0);
}

#[test]
fn rationale_reflects_gate_or_factors() {
    let rejected = evaluate(
        &normalize(&worked_response()),
        &Candidate {
            gender_type: GenderPolicy::AllMale,
            ..worked_candidate()
        },
    );
    assert_eq!(
        rejected.rationale(),
        "not eligible: requires all-female housing but the residence is all-male"
    );

    let accepted = evaluate(&normalize(&worked_response()), &worked_candidate());
    let rationale = accepted.rationale();
    assert!(rationale.starts_with("70% compatible: "));
    assert!(rationale.contains("double room matches the requested type"));
    assert!(rationale.contains("no requested amenities matched"));
}

#[test]
fn breakdown_serializes_gate_tag() {
    let rejected = evaluate(
        &normalize(&QuizResponse {
            accessible: Some(AccessibilityAnswer::Flag(true)),
            ..QuizResponse::default()
        }),
        &candidate("closed"),
    );

    let json = serde_json::to_value(&rejected).expect("serialize breakdown");

    assert_eq!(json["rejected_by"]["gate"], "accessibility");
    assert_eq!(json["candidate_id"], "closed");
}
