/*
[INPUT]:  Crate modules for configuration, reporting, and suite execution
[OUTPUT]: Public FVT runner crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod report;
pub mod runner;
pub mod suites;

pub use config::FvtConfig;
pub use report::{RunReport, ScenarioOutcome, ScenarioStatus};
pub use runner::{ScenarioContext, run_suites, SUITES};
