/*
[INPUT]:  Scenario context with the optional fcluns fixture
[OUTPUT]: Recorded outcomes for the fcluns resource
[POS]:    Scenario layer - FC LUN add/list/get/remove
[UPDATE]: When the fcluns resource changes
*/

use anyhow::ensure;
use gingers390x_adapter::AddFcLunRequest;

use crate::report::RunReport;
use crate::runner::{ScenarioContext, record};
use crate::suites::expect_rejected;

const SUITE: &str = "fcluns";

pub async fn run(ctx: &ScenarioContext, report: &mut RunReport) {
    record(ctx, report, SUITE, "list_luns", async {
        ctx.client.list_fc_luns().await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "add_incomplete_lun_rejected", async {
        let request = AddFcLunRequest {
            hba_id: String::new(),
            remote_wwpn: "0x500507680b244ac1".to_string(),
            lun_id: "0xc101000000000000".to_string(),
        };
        expect_rejected(ctx.client.add_fc_lun(&request).await, "add with empty hbaId")?;
        Ok(None)
    })
    .await;

    // Full lifecycle in one scenario so nothing depends on run order.
    record(ctx, report, SUITE, "add_get_remove_lun", async {
        let Some(fixture) = &ctx.fixtures.fcluns else {
            return Ok(Some("no fcluns fixture configured".to_string()));
        };
        let request = AddFcLunRequest {
            hba_id: fixture.hba_id.clone(),
            remote_wwpn: fixture.remote_wwpn.clone(),
            lun_id: fixture.lun_id.clone(),
        };
        let resource = request.resource_id();

        ctx.client.add_fc_lun(&request).await?;
        let lun = ctx.client.get_fc_lun(&resource).await?;
        ensure!(
            lun.hba_id == fixture.hba_id,
            "fetched LUN belongs to adapter {}, expected {}",
            lun.hba_id,
            fixture.hba_id
        );
        ctx.client.remove_fc_lun(&resource).await?;
        Ok(None)
    })
    .await;

    record(ctx, report, SUITE, "remove_unknown_lun_rejected", async {
        expect_rejected(
            ctx.client.remove_fc_lun("bad:lun:id").await,
            "remove of unknown LUN",
        )?;
        Ok(None)
    })
    .await;
}
