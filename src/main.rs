//! Decision Compass command-line entry point.
//!
//! Usage: `decision-compass <scenario-file> [strategy] [risk-weight] [--all-strategies]`
//!
//! Scores the scenario once at the chosen risk weight, then sweeps the
//! configured risk weights and prints how the scores move. With
//! `--all-strategies` every registered strategy is also scored side by side.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use decision_compass::adapters::FileScenarioSource;
use decision_compass::application::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult,
    RunSensitivityCommand, RunSensitivityHandler, RunSensitivityResult,
};
use decision_compass::config::AppConfig;
use decision_compass::domain::analysis::available_strategies;
use decision_compass::ports::ScenarioSource;

#[derive(Parser)]
#[command(name = "decision-compass")]
#[command(author, version, about = "Risk-aware multi-criteria decision scoring", long_about = None)]
struct Cli {
    /// Scenario document (`.json`, otherwise YAML)
    scenario: PathBuf,

    /// Strategy identifier; defaults to the configured strategy
    strategy: Option<String>,

    /// Risk weight; defaults to the configured weight
    #[arg(allow_negative_numbers = true, value_parser = parse_risk_weight)]
    risk_weight: Option<f64>,

    /// Also score the scenario with every registered strategy
    #[arg(long)]
    all_strategies: bool,
}

fn parse_risk_weight(raw: &str) -> Result<f64, String> {
    let weight: f64 = raw.parse().map_err(|e| format!("{}", e))?;
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(format!("risk weight must be a finite number, got {}", raw))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init()?;

    let strategy = cli
        .strategy
        .unwrap_or_else(|| config.analysis.default_strategy.clone());
    let risk_weight = cli
        .risk_weight
        .unwrap_or(config.analysis.default_risk_weight);

    let source: Arc<dyn ScenarioSource> = Arc::new(FileScenarioSource::new(cli.scenario));

    let evaluation = EvaluateDecisionHandler::new(Arc::clone(&source)).handle(
        EvaluateDecisionCommand {
            strategy: strategy.clone(),
            risk_weight,
        },
    )?;
    print_decision(&evaluation, risk_weight);

    if cli.all_strategies {
        compare_strategies(&source, &evaluation, risk_weight)?;
    }

    let sweep = RunSensitivityHandler::new(source).handle(RunSensitivityCommand {
        strategy,
        risk_weights: config.analysis.sweep_weights.clone(),
    })?;
    print_sweep(&sweep, &evaluation);

    Ok(())
}

fn print_decision(result: &EvaluateDecisionResult, risk_weight: f64) {
    let decision = &result.decision;
    println!(
        "Strategy: {} (risk weight {:.2})",
        result.strategy.display_name(),
        risk_weight
    );

    for ranked in &decision.ranking {
        println!("Option: {}", ranked.name);
        if let Some(per_criterion) = decision.breakdown.get(&ranked.name) {
            let sorted: BTreeMap<_, _> = per_criterion.iter().collect();
            for (criterion, value) in sorted {
                println!("  {}: {:.2}", criterion, value);
            }
        }
        println!("  Total Score: {:.3}", ranked.score);
    }

    let names: Vec<_> = decision.ranking.iter().map(|r| r.name.as_str()).collect();
    println!("Ranking: {}", names.join(", "));
}

fn compare_strategies(
    source: &Arc<dyn ScenarioSource>,
    evaluation: &EvaluateDecisionResult,
    risk_weight: f64,
) -> Result<(), Box<dyn Error>> {
    let names: Vec<_> = evaluation
        .decision
        .ranking
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    let handler = EvaluateDecisionHandler::new(Arc::clone(source));

    println!();
    println!("Strategy comparison (risk weight {:.2}):", risk_weight);
    println!("{:>20}  {}  winner", "strategy", names.join("  "));
    for id in available_strategies() {
        let result = handler.handle(EvaluateDecisionCommand {
            strategy: id.to_string(),
            risk_weight,
        })?;
        let row: Vec<String> = names
            .iter()
            .map(|name| {
                let score = result.decision.scores.get(*name).copied().unwrap_or_default();
                format!("{:>width$.3}", score, width = name.len())
            })
            .collect();
        let winner = result.decision.winner().map(|w| w.name.as_str()).unwrap_or("-");
        println!(
            "{:>20}  {}  {}",
            result.strategy.display_name(),
            row.join("  "),
            winner
        );
    }

    Ok(())
}

fn print_sweep(sweep: &RunSensitivityResult, evaluation: &EvaluateDecisionResult) {
    let names: Vec<_> = evaluation
        .decision
        .ranking
        .iter()
        .map(|r| r.name.as_str())
        .collect();

    println!();
    println!("Sensitivity ({}):", sweep.strategy.display_name());
    println!("{:>8}  {}", "weight", names.join("  "));
    for point in sweep.report.iter() {
        let row: Vec<String> = names
            .iter()
            .map(|name| {
                let score = point.scores.get(*name).copied().unwrap_or_default();
                format!("{:>width$.3}", score, width = name.len())
            })
            .collect();
        println!("{:>8.2}  {}", point.risk_weight, row.join("  "));
    }

    if sweep.report.has_rank_reversal() {
        println!("Leader changes across the sweep:");
        for (weight, leader) in sweep.report.leaders() {
            println!("  {:.2} -> {}", weight, leader);
        }
    }
}
