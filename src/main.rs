use std::io::Read;

use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use jobanalyzer::config::{parse_min_score, parse_top_skills};
use jobanalyzer::input::{parse_records, read_records, sample_records};
use jobanalyzer::{AnalysisReport, AnalyzerConfig, Config, JobAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "jobanalyzer")]
#[command(version = "0.1.0")]
#[command(about = "Classify freelance job posts and rank bidding opportunities")]
struct Args {
    /// Input file with job posts (JSON array or JSON Lines); reads stdin when omitted
    #[arg(short, long)]
    input: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Minimum opportunity score for the shortlist (1-10)
    #[arg(long, value_parser = min_score_arg)]
    min_score: Option<u8>,

    /// Number of skills listed in the top skills table
    #[arg(long, value_parser = top_skills_arg)]
    top_skills: Option<usize>,

    /// Analyze the built-in sample job instead of reading input
    #[arg(long)]
    sample: bool,
}

fn min_score_arg(value: &str) -> Result<u8, String> {
    parse_min_score(value).map_err(|e| e.to_string())
}

fn top_skills_arg(value: &str) -> Result<usize, String> {
    parse_top_skills(value).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("jobanalyzer=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration, CLI flags win over the environment
    let config = Config::from_env()?;
    let analyzer_config = AnalyzerConfig {
        min_opportunity_score: args.min_score.unwrap_or(config.min_opportunity_score),
        top_skills_limit: args.top_skills.unwrap_or(config.top_skills_limit),
    };

    let records = if args.sample {
        sample_records()
    } else if let Some(ref path) = args.input {
        read_records(path)?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        parse_records(&buf)?
    };

    tracing::info!("Analyzing {} job posts", records.len());

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} jobs")?
            .progress_chars("#>-"),
    );

    let analyzer = JobAnalyzer::new(analyzer_config);
    let report = analyzer.analyze_batch_with_progress(&records, &pb);

    output_report(&report, analyzer.config(), &args)?;

    Ok(())
}

fn output_report(report: &AnalysisReport, config: &AnalyzerConfig, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "text" => format_text(report, config),
        "markdown" => format_markdown(report, config),
        _ => report.to_json_pretty()?,
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &AnalysisReport, config: &AnalyzerConfig) -> String {
    let mut output = String::new();

    output.push_str("\n=== Job Market Analysis ===\n\n");
    output.push_str(&format!("Jobs analyzed: {}\n", report.total_jobs));
    output.push_str(&format!(
        "Average proposals: {:.1}\n",
        report.competition.average_proposals
    ));
    output.push_str(&format!(
        "Competition: {} low / {} medium / {} high\n",
        report.competition.distribution.low,
        report.competition.distribution.medium,
        report.competition.distribution.high
    ));

    if !report.categories.is_empty() {
        output.push_str("\nCategories:\n");
        for (category, count) in &report.categories {
            output.push_str(&format!("  - {}: {}\n", category, count));
        }
    }

    if !report.budgets.is_empty() {
        output.push_str("\nBudgets:\n");
        for (tier, count) in &report.budgets {
            output.push_str(&format!("  - {}: {}\n", tier, count));
        }
    }

    if !report.top_skills.is_empty() {
        output.push_str("\nTop Skills:\n");
        for skill in &report.top_skills {
            output.push_str(&format!("  - {}: {}\n", skill.skill, skill.count));
        }
    }

    output.push_str(&format!(
        "\nOpportunities (score >= {}):\n",
        config.min_opportunity_score
    ));
    if report.opportunities.is_empty() {
        output.push_str("  none\n");
    }
    for opp in &report.opportunities {
        output.push_str(&format!(
            "  + [{}/10] {} ({}, {} budget, {} proposals)\n",
            opp.score, opp.title, opp.category, opp.budget, opp.proposals
        ));
    }

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &AnalysisReport, config: &AnalyzerConfig) -> String {
    let mut output = String::new();

    output.push_str("# Job Market Analysis\n\n");
    output.push_str("## Summary\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Jobs Analyzed | {} |\n", report.total_jobs));
    output.push_str(&format!(
        "| Average Proposals | {:.1} |\n",
        report.competition.average_proposals
    ));
    output.push_str(&format!(
        "| Low / Medium / High Competition | {} / {} / {} |\n",
        report.competition.distribution.low,
        report.competition.distribution.medium,
        report.competition.distribution.high
    ));

    if !report.categories.is_empty() {
        output.push_str("\n## Categories\n\n");
        output.push_str("| Category | Jobs |\n|----------|------|\n");
        for (category, count) in &report.categories {
            output.push_str(&format!("| {} | {} |\n", category, count));
        }
    }

    if !report.budgets.is_empty() {
        output.push_str("\n## Budgets\n\n");
        output.push_str("| Tier | Jobs |\n|------|------|\n");
        for (tier, count) in &report.budgets {
            output.push_str(&format!("| {} | {} |\n", tier, count));
        }
    }

    if !report.top_skills.is_empty() {
        output.push_str("\n## Top Skills\n\n");
        output.push_str("| Skill | Jobs |\n|-------|------|\n");
        for skill in &report.top_skills {
            output.push_str(&format!("| {} | {} |\n", skill.skill, skill.count));
        }
    }

    output.push_str(&format!(
        "\n## Opportunities (score >= {})\n\n",
        config.min_opportunity_score
    ));
    if report.opportunities.is_empty() {
        output.push_str("_No jobs cleared the threshold._\n");
    } else {
        output.push_str("| Score | Job | Category | Budget | Proposals |\n");
        output.push_str("|-------|-----|----------|--------|-----------|\n");
        for opp in &report.opportunities {
            output.push_str(&format!(
                "| {}/10 | {} | {} | {} | {} |\n",
                opp.score, opp.title, opp.category, opp.budget, opp.proposals
            ));
        }
    }

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
