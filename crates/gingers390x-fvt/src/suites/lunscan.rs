/*
[INPUT]:  Scenario context (no fixture needed)
[OUTPUT]: Recorded outcomes for the lunscan resource
[POS]:    Scenario layer - LUN scanning toggle and trigger
[UPDATE]: When the lunscan resource changes
*/

use anyhow::ensure;
use gingers390x_adapter::TaskStatus;

use crate::report::RunReport;
use crate::runner::{ScenarioContext, record};

const SUITE: &str = "lunscan";

pub async fn run(ctx: &ScenarioContext, report: &mut RunReport) {
    record(ctx, report, SUITE, "get_scan_status", async {
        ctx.client.lunscan_status().await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "enable_scan", async {
        let task = ctx.client.enable_lunscan().await?;
        ctx.poller
            .wait(&ctx.client, &task.id, TaskStatus::Finished)
            .await?;
        let status = ctx.client.lunscan_status().await?;
        ensure!(status.current, "scanning still disabled after enable: {status:?}");
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "trigger_scan", async {
        let task = ctx.client.trigger_lunscan().await?;
        ctx.poller
            .wait(&ctx.client, &task.id, TaskStatus::Finished)
            .await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "disable_scan", async {
        let task = ctx.client.disable_lunscan().await?;
        ctx.poller
            .wait(&ctx.client, &task.id, TaskStatus::Finished)
            .await?;
        let status = ctx.client.lunscan_status().await?;
        ensure!(!status.current, "scanning still enabled after disable: {status:?}");
        Ok(None)
    })
    .await;
}
