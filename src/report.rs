//! Plain-text and JSON renderings of a finished run

use std::fmt::Write;

use serde::Serialize;

use crate::config::Config;
use crate::engine::{RunState, RunSummary};

const TITLE_WIDTH: usize = 50;
const VALUES_PER_ROW: usize = 10;

pub fn render(summary: &RunSummary, config: &Config, elapsed_secs: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:^width$}", "Simulation Results", width = TITLE_WIDTH);
    let _ = writeln!(
        out,
        "\nIt took {} generations to complete the simulation",
        summary.generations
    );
    let _ = writeln!(
        out,
        "\nYears: ~{:.1} years",
        summary.years(config.generations_per_year)
    );
    let _ = writeln!(out, "\nTime For Simulation to Run: {elapsed_secs:.4} secs");
    let _ = writeln!(
        out,
        "\nThe largest rat ever populated was {}g",
        summary.largest_weight
    );
    let _ = writeln!(out, "\n{}", outcome_line(summary, config));

    let _ = writeln!(out, "\nEvery Generation Average:\n");
    for row in summary.mean_history.chunks(VALUES_PER_ROW) {
        let line: Vec<String> = row.iter().map(u64::to_string).collect();
        let _ = writeln!(out, "{}", line.join("\t"));
    }
    out
}

fn outcome_line(summary: &RunSummary, config: &Config) -> String {
    match summary.state {
        RunState::Converged => format!("Goal weight of {}g reached", config.goal_weight),
        RunState::GenerationLimitReached => format!(
            "Generation limit of {} reached before the goal weight of {}g",
            config.generation_limit, config.goal_weight
        ),
        RunState::Running => "Simulation stopped while still running".to_string(),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    state: RunState,
    generations: u32,
    years: f64,
    elapsed_secs: f64,
    goal_weight: u64,
    largest_weight: u64,
    mean_history: &'a [u64],
}

pub fn to_json(
    summary: &RunSummary,
    config: &Config,
    elapsed_secs: f64,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        state: summary.state,
        generations: summary.generations,
        years: summary.years(config.generations_per_year),
        elapsed_secs,
        goal_weight: config.goal_weight,
        largest_weight: summary.largest_weight,
        mean_history: &summary.mean_history,
    })
}
