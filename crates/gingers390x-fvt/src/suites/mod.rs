/*
[INPUT]:  Scenario context and console responses
[OUTPUT]: Recorded scenario outcomes per console resource
[POS]:    Scenario layer - one module per plugin resource
[UPDATE]: When adding scenarios or suites
*/

pub mod cioignore;
pub mod fcluns;
pub mod lunscan;
pub mod nwdevices;
pub mod storagedevices;

use anyhow::bail;
use gingers390x_adapter::Result;

/// Assert that the console rejected a request with 400
pub(crate) fn expect_rejected<T: std::fmt::Debug>(result: Result<T>, what: &str) -> anyhow::Result<()> {
    match result {
        Err(err) if err.api_status() == Some(400) => Ok(()),
        Err(err) => bail!("{what}: expected a 400 rejection, got: {err}"),
        Ok(value) => bail!("{what}: expected a 400 rejection, got success: {value:?}"),
    }
}
