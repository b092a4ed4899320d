/*
[INPUT]:  Scenario context with the optional cio_ignore fixture
[OUTPUT]: Recorded outcomes for the cio_ignore resource
[POS]:    Scenario layer - ignore list queries and removals
[UPDATE]: When the cio_ignore resource changes
*/

use gingers390x_adapter::TaskStatus;

use crate::report::RunReport;
use crate::runner::{ScenarioContext, record};

const SUITE: &str = "cio_ignore";

pub async fn run(ctx: &ScenarioContext, report: &mut RunReport) {
    record(ctx, report, SUITE, "list_ignored_devices", async {
        ctx.client.cio_ignore_list().await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "remove_devices", async {
        let devices = ctx
            .fixtures
            .cio_ignore
            .as_ref()
            .map(|fixture| fixture.remove_devices.clone())
            .unwrap_or_default();
        if devices.is_empty() {
            return Ok(Some("no removable devices in fixture".to_string()));
        }

        let task = ctx.client.remove_ignored_devices(&devices).await?;
        ctx.poller
            .wait(&ctx.client, &task.id, TaskStatus::Finished)
            .await?;
        Ok(None)
    })
    .await;

    // Invalid ids make the task itself fail; that terminal state is the
    // expected outcome here.
    record(ctx, report, SUITE, "remove_invalid_devices_fails", async {
        let devices = vec![
            "invalid_device".to_string(),
            "0.1.0900-0.0.0001".to_string(),
            "  ".to_string(),
        ];
        let task = ctx.client.remove_ignored_devices(&devices).await?;
        ctx.poller
            .wait(&ctx.client, &task.id, TaskStatus::Failed)
            .await?;
        Ok(None)
    })
    .await;
}
