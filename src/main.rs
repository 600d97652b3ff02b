use skirmish::{BattleSummary, Scenario, ScenarioRunner, SimulationResult, TurnRng};
use std::env;
use std::path::Path;

fn main() {
    let scenario = match load_scenario() {
        Ok(scenario) => scenario,
        Err(e) => {
            println!("Error loading scenario: {}", e);
            return;
        }
    };

    println!("=== Skirmish ===");
    for combatant in &scenario.combatants {
        println!(
            "  {} enters with {} vitality and {} resource",
            combatant.name, combatant.vitality, combatant.resource
        );
    }
    println!();

    let summary = match run_scenario(&scenario) {
        Ok(summary) => summary,
        Err(e) => {
            println!("Error executing scenario: {}", e);
            return;
        }
    };

    for event in &summary.events {
        if let Some(text) = event.format() {
            println!("{}", text);
            println!();
        }
    }

    match &summary.victor {
        Some(name) => println!("{} wins the battle!", name),
        None => println!("The script ended with no victor."),
    }

    println!();
    println!("Final standings:");
    for report in &summary.reports {
        println!(
            "  {}: {} vitality, {} resource{}",
            report.name,
            report.vitality,
            report.resource,
            if report.has_won { " (winner)" } else { "" }
        );
    }
}

/// Optional path argument selects a RON scenario file; otherwise the
/// built-in exhibition match runs.
fn load_scenario() -> SimulationResult<Scenario> {
    match env::args().nth(1) {
        Some(path) => Ok(Scenario::load(Path::new(&path))?),
        None => Ok(Scenario::grudge_match()),
    }
}

fn run_scenario(scenario: &Scenario) -> SimulationResult<BattleSummary> {
    let mut runner = ScenarioRunner::new(scenario, TurnRng::new_random());
    Ok(runner.run()?)
}
