/*
[INPUT]:  Scenario context (client, fixtures, poller) and suite selection
[OUTPUT]: Executed scenarios recorded into the run report
[POS]:    Execution layer - sequential suite orchestration
[UPDATE]: When adding suites or changing cancellation behavior
*/

use std::future::Future;
use std::time::Instant;

use anyhow::bail;
use gingers390x_adapter::{GingerClient, TaskPoller};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::Fixtures;
use crate::report::{RunReport, ScenarioOutcome};
use crate::suites;

/// Suites in execution order
pub const SUITES: &[&str] = &[
    "lunscan",
    "fcluns",
    "nwdevices",
    "storagedevices",
    "cio_ignore",
];

/// Everything a scenario needs, passed in explicitly
pub struct ScenarioContext {
    pub client: GingerClient,
    pub fixtures: Fixtures,
    pub poller: TaskPoller,
    pub shutdown: CancellationToken,
}

/// A scenario passes (`Ok(None)`), skips with a reason (`Ok(Some(..))`),
/// or fails with the error that broke it.
pub type ScenarioResult = anyhow::Result<Option<String>>;

/// Run the named suites sequentially against the console
pub async fn run_suites(
    ctx: &ScenarioContext,
    suite_names: &[String],
    report: &mut RunReport,
) -> anyhow::Result<()> {
    for name in suite_names {
        if ctx.shutdown.is_cancelled() {
            warn!(suite = name.as_str(), "run cancelled, remaining suites not executed");
            break;
        }
        info!(suite = name.as_str(), "running suite");
        match name.as_str() {
            "lunscan" => suites::lunscan::run(ctx, report).await,
            "fcluns" => suites::fcluns::run(ctx, report).await,
            "nwdevices" => suites::nwdevices::run(ctx, report).await,
            "storagedevices" => suites::storagedevices::run(ctx, report).await,
            "cio_ignore" => suites::cioignore::run(ctx, report).await,
            other => bail!("unknown suite: {other}"),
        }
    }
    Ok(())
}

/// Execute one scenario and record its outcome
///
/// Skips immediately when the run has been cancelled, so Ctrl-C takes
/// effect between scenarios rather than mid-assertion.
pub(crate) async fn record<Fut>(
    ctx: &ScenarioContext,
    report: &mut RunReport,
    suite: &'static str,
    name: &'static str,
    scenario: Fut,
) where
    Fut: Future<Output = ScenarioResult>,
{
    if ctx.shutdown.is_cancelled() {
        report.record(ScenarioOutcome::skipped(suite, name, "run cancelled".to_string()));
        return;
    }

    let start = Instant::now();
    let outcome = match scenario.await {
        Ok(None) => {
            info!(suite, name, "scenario passed");
            ScenarioOutcome::passed(suite, name, start.elapsed())
        }
        Ok(Some(reason)) => {
            info!(suite, name, reason = reason.as_str(), "scenario skipped");
            ScenarioOutcome::skipped(suite, name, reason)
        }
        Err(err) => {
            warn!(suite, name, error = %err, "scenario failed");
            ScenarioOutcome::failed(suite, name, format!("{err:#}"), start.elapsed())
        }
    };
    report.record(outcome);
}
