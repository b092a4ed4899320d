/*
[INPUT]:  Scenario context with the optional storagedevices fixture
[OUTPUT]: Recorded outcomes for the storagedevices resource
[POS]:    Scenario layer - DASD-ECKD and zFCP online/offline
[UPDATE]: When the storagedevices resource changes
*/

use anyhow::ensure;
use gingers390x_adapter::StorageDeviceType;

use crate::config::StorageDeviceFixture;
use crate::report::RunReport;
use crate::runner::{ScenarioContext, record};
use crate::suites::expect_rejected;

const SUITE: &str = "storagedevices";

fn fixture_device(
    ctx: &ScenarioContext,
    pick: impl Fn(&StorageDeviceFixture) -> Option<String>,
) -> Option<String> {
    ctx.fixtures.storagedevices.as_ref().and_then(pick)
}

pub async fn run(ctx: &ScenarioContext, report: &mut RunReport) {
    record(ctx, report, SUITE, "list_devices", async {
        ctx.client.list_storage_devices(None).await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "list_dasd_eckd_devices", async {
        let devices = ctx
            .client
            .list_storage_devices(Some(StorageDeviceType::DasdEckd))
            .await?;
        ensure!(
            devices.iter().all(|device| !device.device.is_empty()),
            "listing returned a device without a bus id"
        );
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "list_zfcp_devices", async {
        ctx.client
            .list_storage_devices(Some(StorageDeviceType::Zfcp))
            .await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "get_first_device", async {
        let devices = ctx.client.list_storage_devices(None).await?;
        let Some(first) = devices.first() else {
            return Ok(Some("no storage i/o devices defined".to_string()));
        };
        let device = ctx.client.get_storage_device(&first.device).await?;
        ensure!(
            device.device == first.device,
            "device lookup returned {}",
            device.device
        );
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "get_unknown_device_rejected", async {
        expect_rejected(
            ctx.client.get_storage_device("invalid_device").await,
            "lookup of unknown device",
        )?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "dasd_eckd_online", async {
        let Some(device) = fixture_device(ctx, |f| f.offline_dasdeckd_device.clone()) else {
            return Ok(Some("no offline dasd-eckd device in fixture".to_string()));
        };
        let updated = ctx.client.bring_storage_device_online(&device).await?;
        ensure!(updated.status == "online", "device {device} not online: {updated:?}");
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "dasd_eckd_offline", async {
        let Some(device) = fixture_device(ctx, |f| f.online_dasdeckd_device.clone()) else {
            return Ok(Some("no online dasd-eckd device in fixture".to_string()));
        };
        let updated = ctx.client.bring_storage_device_offline(&device).await?;
        ensure!(updated.status == "offline", "device {device} not offline: {updated:?}");
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "zfcp_online", async {
        let Some(device) = fixture_device(ctx, |f| f.offline_zfcp_device.clone()) else {
            return Ok(Some("no offline zfcp device in fixture".to_string()));
        };
        let updated = ctx.client.bring_storage_device_online(&device).await?;
        ensure!(updated.status == "online", "device {device} not online: {updated:?}");
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "zfcp_offline", async {
        let Some(device) = fixture_device(ctx, |f| f.online_zfcp_device.clone()) else {
            return Ok(Some("no online zfcp device in fixture".to_string()));
        };
        let updated = ctx.client.bring_storage_device_offline(&device).await?;
        ensure!(updated.status == "offline", "device {device} not offline: {updated:?}");
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "online_unknown_device_rejected", async {
        expect_rejected(
            ctx.client.bring_storage_device_online("invalid_device").await,
            "online action on unknown device",
        )?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "offline_unknown_device_rejected", async {
        expect_rejected(
            ctx.client.bring_storage_device_offline("invalid_device").await,
            "offline action on unknown device",
        )?;
        Ok(None)
    })
    .await;
}
