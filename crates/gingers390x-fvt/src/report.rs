/*
[INPUT]:  Scenario outcomes as suites execute
[OUTPUT]: Styled terminal summary and exit-code decision
[POS]:    Reporting layer - run results
[UPDATE]: When adding outcome fields or changing the summary format
*/

use std::time::Duration;

use chrono::{DateTime, Local};
use console::style;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStatus {
    Passed,
    Failed,
    Skipped,
}

/// Result of one executed scenario
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub suite: &'static str,
    pub name: &'static str,
    pub status: ScenarioStatus,
    /// Failure cause or skip reason
    pub detail: Option<String>,
    pub duration: Duration,
}

impl ScenarioOutcome {
    pub fn passed(suite: &'static str, name: &'static str, duration: Duration) -> Self {
        Self {
            suite,
            name,
            status: ScenarioStatus::Passed,
            detail: None,
            duration,
        }
    }

    pub fn failed(
        suite: &'static str,
        name: &'static str,
        detail: String,
        duration: Duration,
    ) -> Self {
        Self {
            suite,
            name,
            status: ScenarioStatus::Failed,
            detail: Some(detail),
            duration,
        }
    }

    pub fn skipped(suite: &'static str, name: &'static str, reason: String) -> Self {
        Self {
            suite,
            name,
            status: ScenarioStatus::Skipped,
            detail: Some(reason),
            duration: Duration::ZERO,
        }
    }
}

/// Accumulated outcomes of one FVT run
#[derive(Debug)]
pub struct RunReport {
    run_id: Uuid,
    started_at: DateTime<Local>,
    outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Local::now(),
            outcomes: Vec::new(),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn record(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    pub fn count(&self, status: ScenarioStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == status)
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(ScenarioStatus::Failed) > 0
    }

    /// Machine-readable form of the run, for CI artifacts
    pub fn to_json(&self) -> serde_json::Value {
        let scenarios: Vec<serde_json::Value> = self
            .outcomes
            .iter()
            .map(|outcome| {
                serde_json::json!({
                    "suite": outcome.suite,
                    "name": outcome.name,
                    "status": match outcome.status {
                        ScenarioStatus::Passed => "passed",
                        ScenarioStatus::Failed => "failed",
                        ScenarioStatus::Skipped => "skipped",
                    },
                    "detail": outcome.detail,
                    "duration_secs": outcome.duration.as_secs_f64(),
                })
            })
            .collect();

        serde_json::json!({
            "run_id": self.run_id.to_string(),
            "started_at": self.started_at.to_rfc3339(),
            "scenarios": scenarios,
        })
    }

    /// Write the JSON report to `path`
    pub fn write_json(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let body = serde_json::to_string_pretty(&self.to_json())?;
        std::fs::write(path, body)?;
        Ok(())
    }

    /// Print the per-scenario results and totals
    pub fn print_summary(&self) {
        println!();
        println!(
            "{} {} ({})",
            style("FVT run").bold(),
            self.run_id,
            style(self.started_at.format("%Y-%m-%d %H:%M:%S")).dim()
        );

        for outcome in &self.outcomes {
            let tag = match outcome.status {
                ScenarioStatus::Passed => style("PASS").green(),
                ScenarioStatus::Failed => style("FAIL").red().bold(),
                ScenarioStatus::Skipped => style("SKIP").yellow(),
            };
            println!(
                "  {} {}::{} ({:.1?})",
                tag, outcome.suite, outcome.name, outcome.duration
            );
            if let Some(detail) = &outcome.detail {
                println!("       {}", style(detail).dim());
            }
        }

        println!(
            "{} passed, {} failed, {} skipped",
            self.count(ScenarioStatus::Passed),
            self.count(ScenarioStatus::Failed),
            self.count(ScenarioStatus::Skipped),
        );
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
