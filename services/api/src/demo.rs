use crate::infra::{demo_catalog, load_catalog, load_response};
use clap::Args;
use housing_match::catalog::StaticCatalog;
use housing_match::config::MatchConfig;
use housing_match::error::AppError;
use housing_match::matching::{
    AccessibilityAnswer, MatchReport, MatchService, PriorityRanks, QuizResponse,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional catalog CSV to use instead of the built-in sample residences.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Maximum number of matches to print.
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Candidate catalog CSV
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Questionnaire response as JSON
    #[arg(long)]
    pub(crate) response: PathBuf,
    /// Maximum number of matches to return
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print the report as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        catalog,
        response,
        limit,
        json,
    } = args;

    let catalog = StaticCatalog::from_csv_path(catalog)?;
    let response = load_response(&response)?;
    let service = MatchService::new(Arc::new(catalog), &MatchConfig::default());
    let report = service.recommend(&response, limit)?;

    if json {
        println!("{}", report_json(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { catalog, limit } = args;

    let catalog = load_catalog(catalog.as_deref())?;
    let service = MatchService::new(Arc::new(catalog), &MatchConfig::default());

    println!("Housing match demo");
    for (label, response) in demo_responses() {
        println!("\nQuestionnaire: {}", label);
        let report = service.recommend(&response, limit)?;
        render_report(&report);
    }

    println!(
        "\nSample catalog: {} residences available",
        demo_catalog().len()
    );
    Ok(())
}

fn demo_responses() -> Vec<(&'static str, QuizResponse)> {
    vec![
        (
            "social first-year who wants to be near the dining commons",
            QuizResponse {
                room_type: Some("double".to_string()),
                gender_type: Some("prefer-not-to-say".to_string()),
                accessible: Some(AccessibilityAnswer::Flag(false)),
                social_level_type: Some("very-social".to_string()),
                noise_level_type: Some("moderate".to_string()),
                commute_distance_type: Some("5-10min".to_string()),
                kitchen_importance_type: Some("not-important".to_string()),
                community_type: Some("no-preference".to_string()),
                priorities: Some(PriorityRanks::new(2, 4, 3, 1)),
                ..QuizResponse::default()
            },
        ),
        (
            "upperclass resident who cooks and needs an accessible unit",
            QuizResponse {
                room_type: Some("apartment".to_string()),
                gender_type: Some("female".to_string()),
                accessible: Some(AccessibilityAnswer::Label("yes-required".to_string())),
                social_level_type: Some("somewhat-social".to_string()),
                noise_level_type: Some("quiet".to_string()),
                commute_distance_type: Some("10-15min".to_string()),
                kitchen_importance_type: Some("essential".to_string()),
                priorities: Some(PriorityRanks::new(3, 2, 4, 1)),
                ..QuizResponse::default()
            },
        ),
    ]
}

fn report_json(report: &MatchReport) -> Result<String, AppError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| AppError::json("failed to serialize the recommendation report", err))
}

fn render_report(report: &MatchReport) {
    println!(
        "Considered {} residences | minimum score {}%",
        report.candidates_considered, report.threshold
    );

    if report.matches.is_empty() {
        println!("No residences met the minimum score.");
        return;
    }

    if report.alternatives_used {
        println!("Too few primary matches cleared the threshold; adding alternatives with priorities relaxed.");
    }

    for view in &report.matches {
        let marker = if view.is_alternative {
            " [alternative]"
        } else {
            ""
        };
        println!(
            "- {} ({}, {}): {}% {} confidence{}",
            view.name,
            view.room_type,
            view.gender_type.label(),
            view.compatibility_score,
            view.confidence.label(),
            marker
        );
        println!("  {}", view.rationale);
    }
}
