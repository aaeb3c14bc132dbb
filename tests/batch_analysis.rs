use jobanalyzer::analysis::extract_budget;
use jobanalyzer::input::parse_records;
use jobanalyzer::{AnalyzerConfig, BudgetTier, JobAnalyzer, Taxonomy};
use serde_json::{json, Value};

fn batch() -> Vec<Value> {
    vec![
        json!({
            "id": "react-1",
            "title": "React Developer Needed",
            "description": "Looking for a React developer to build a modern web application",
            "budget": "$500-1000",
            "client_history": "Established client",
            "proposals": 15
        }),
        json!({
            "id": "wp-1",
            "title": "WordPress WooCommerce store",
            "description": "Set up WooCommerce with Elementor",
            "budget": "$300",
            "proposals": "60"
        }),
        json!({
            "id": "broken",
            "title": "Broken record",
            "description": 12.5e3,
            "notes": {"nested": true}
        }),
        json!({
            "id": "ml-1",
            "title": "Machine learning model",
            "description": "Train a PyTorch model, data analysis with pandas",
            "budget": "$8,000",
            "proposals": 3
        }),
        json!({
            "id": "logo-1",
            "title": "Logo",
            "description": "Need a logo for a bakery",
            "budget": "$40",
            "proposals": 30
        }),
    ]
}

#[test]
fn malformed_record_is_skipped_not_fatal() {
    let report = JobAnalyzer::default().analyze_batch(&batch());

    assert_eq!(report.total_jobs, 4);
    let ids: Vec<_> = report
        .processed_jobs
        .iter()
        .map(|j| j.job_id.as_str())
        .collect();
    assert_eq!(ids, vec!["react-1", "wp-1", "ml-1", "logo-1"]);
}

#[test]
fn every_job_respects_invariants() {
    let taxonomy = Taxonomy::standard();
    let report = JobAnalyzer::default().analyze_batch(&batch());

    for job in &report.processed_jobs {
        assert!((1..=10).contains(&job.opportunity_score));
        assert!(taxonomy.contains(&job.category, &job.subcategory));
    }
}

#[test]
fn report_aggregates() {
    let report = JobAnalyzer::default().analyze_batch(&batch());

    assert_eq!(report.categories.get("web_development.frontend"), Some(&1));
    assert_eq!(report.categories.get("web_development.wordpress"), Some(&1));
    assert_eq!(report.categories.get("ai_ml.machine_learning"), Some(&1));
    assert_eq!(report.categories.get("design.graphic_design"), Some(&1));

    assert_eq!(report.budgets.get(&BudgetTier::Medium), Some(&1));
    assert_eq!(report.budgets.get(&BudgetTier::Small), Some(&1));
    assert_eq!(report.budgets.get(&BudgetTier::Large), Some(&1));
    assert_eq!(report.budgets.get(&BudgetTier::Micro), Some(&1));

    let distribution = &report.competition.distribution;
    assert_eq!((distribution.low, distribution.medium, distribution.high), (1, 2, 1));
    assert!((report.competition.average_proposals - 27.0).abs() < 1e-9);

    let scores: Vec<_> = report.opportunities.iter().map(|o| o.score).collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
    assert!(report.opportunities.iter().all(|o| o.score >= 7));
    assert!(report.top_skills.len() <= 10);
}

#[test]
fn end_to_end_sample_job() {
    let report = JobAnalyzer::default().analyze_batch(&batch()[..1]);
    let job = &report.processed_jobs[0];

    assert_eq!(job.category, "web_development");
    assert_eq!(job.subcategory, "frontend");
    assert_eq!(job.budget, BudgetTier::Medium);
    assert_eq!(job.opportunity_score, 10);
    assert_eq!(report.opportunities[0].job_id, "react-1");
    assert_eq!(report.opportunities[0].category, "web_development.frontend");
}

#[test]
fn report_serializes_to_json() {
    let report = JobAnalyzer::new(AnalyzerConfig::default()).analyze_batch(&batch());
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["total_jobs"], 4);
    assert_eq!(value["budgets"]["medium"], 1);
    assert_eq!(value["processed_jobs"][0]["budget"], "medium");
    assert!(value["competition"]["distribution"]["low"].is_number());
    assert!(value["top_skills"].is_array());
}

#[test]
fn jsonl_input_round_trips_through_analyzer() {
    let input = batch()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    let records = parse_records(&input).unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(JobAnalyzer::default().analyze_batch(&records).total_jobs, 4);
}

#[test]
fn budget_tiers_are_monotonic() {
    let order = |tier: BudgetTier| match tier {
        BudgetTier::Micro => 0,
        BudgetTier::Small => 1,
        BudgetTier::Medium => 2,
        BudgetTier::Large => 3,
        BudgetTier::Unknown => unreachable!(),
    };

    let mut previous = 0;
    for amount in (0..12_000u64).step_by(7) {
        let rank = order(extract_budget(&format!("${}", amount)));
        assert!(rank >= previous, "tier dropped at ${}", amount);
        previous = rank;
    }
}
