/*
[INPUT]:  Scenario context with the optional nwdevices fixture
[OUTPUT]: Recorded outcomes for the nwdevices resource
[POS]:    Scenario layer - CCW network device list/configure/unconfigure
[UPDATE]: When the nwdevices resource changes
*/

use anyhow::ensure;
use gingers390x_adapter::TaskStatus;

use crate::report::RunReport;
use crate::runner::{ScenarioContext, record};
use crate::suites::expect_rejected;

const SUITE: &str = "nwdevices";

/// Configured devices carry the interface prefix, bus ids do not.
fn bus_id(device: &str) -> &str {
    device.strip_prefix("enccw").unwrap_or(device)
}

pub async fn run(ctx: &ScenarioContext, report: &mut RunReport) {
    record(ctx, report, SUITE, "list_devices", async {
        ctx.client.list_network_devices(None).await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "list_configured_devices", async {
        ctx.client.list_network_devices(Some(true)).await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "list_unconfigured_devices", async {
        ctx.client.list_network_devices(Some(false)).await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "get_first_device", async {
        let devices = ctx.client.list_network_devices(None).await?;
        let Some(first) = devices.first() else {
            return Ok(Some("no network i/o devices defined".to_string()));
        };
        let device = ctx.client.get_network_device(&first.name).await?;
        ensure!(device.name == first.name, "device lookup returned {}", device.name);
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "get_unknown_device_rejected", async {
        expect_rejected(
            ctx.client.get_network_device("invalid_device").await,
            "lookup of unknown device",
        )?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "configure_device", async {
        let Some(device) = ctx
            .fixtures
            .nwdevices
            .as_ref()
            .and_then(|fixture| fixture.unconfigured_device.clone())
        else {
            return Ok(Some("no unconfigured device in fixture".to_string()));
        };

        let task = ctx.client.configure_network_device(&device).await?;
        ctx.poller
            .wait(&ctx.client, &task.id, TaskStatus::Finished)
            .await?;

        let name = format!("enccw{}", bus_id(&device));
        let configured = ctx.client.get_network_device(&name).await?;
        ensure!(
            configured.state != "Unconfigured",
            "device {device} still un-configured: {configured:?}"
        );
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "configure_unknown_device_rejected", async {
        expect_rejected(
            ctx.client.configure_network_device("invalid_device").await,
            "configure of unknown device",
        )?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "unconfigure_device", async {
        let Some(device) = ctx
            .fixtures
            .nwdevices
            .as_ref()
            .and_then(|fixture| fixture.configured_device.clone())
        else {
            return Ok(Some("no configured device in fixture".to_string()));
        };

        let task = ctx.client.unconfigure_network_device(&device).await?;
        ctx.poller
            .wait(&ctx.client, &task.id, TaskStatus::Finished)
            .await?;

        let unconfigured = ctx.client.get_network_device(bus_id(&device)).await?;
        ensure!(
            unconfigured.state == "Unconfigured",
            "device {device} still configured: {unconfigured:?}"
        );
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "unconfigure_unknown_device_rejected", async {
        expect_rejected(
            ctx.client.unconfigure_network_device("invalid_device").await,
            "unconfigure of unknown device",
        )?;
        Ok(None)
    })
    .await;
}
