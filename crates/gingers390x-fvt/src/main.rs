/*
[INPUT]:  CLI arguments, YAML run configuration, OS shutdown signals
[OUTPUT]: Executed FVT suites with a styled report and exit status
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use gingers390x_adapter::{ClientConfig, GingerClient, LoginRequest, TaskPoller};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gingers390x_fvt::config::FvtConfig;
use gingers390x_fvt::report::RunReport;
use gingers390x_fvt::runner::{SUITES, ScenarioContext, run_suites};

#[derive(Parser, Debug)]
#[command(
    name = "gingers390x-fvt",
    version,
    about = "Functional verification runner for the s390x device-management plugin"
)]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Suite to run; repeatable, defaults to all suites
    #[arg(long = "suite", value_name = "NAME")]
    suites: Vec<String>,
    #[arg(long = "list-suites")]
    list_suites: bool,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Also write the run log to a file in this directory
    #[arg(long = "log-dir", value_name = "PATH")]
    log_dir: Option<PathBuf>,
    /// Write a machine-readable report to this file
    #[arg(long = "report-json", value_name = "PATH")]
    report_json: Option<PathBuf>,
    /// Skip the confirmation prompt before mutating device state
    #[arg(long = "yes")]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if args.list_suites {
        for suite in SUITES {
            println!("{suite}");
        }
        return Ok(());
    }

    let _guard = init_tracing(&args.log_level, args.log_dir.as_deref())?;

    let config_path = args
        .config_path
        .ok_or_else(|| anyhow!("--config is required to run suites"))?;
    let config = load_config(&config_path)?;

    let suite_names: Vec<String> = if args.suites.is_empty() {
        SUITES.iter().map(|suite| suite.to_string()).collect()
    } else {
        args.suites
    };
    info!(
        config_path = %config_path.display(),
        suites = ?suite_names,
        "starting gingers390x-fvt"
    );

    if !args.yes && !confirm_run(&config.console.base_url)? {
        info!("run aborted at confirmation prompt");
        return Ok(());
    }

    let client_config = ClientConfig {
        accept_invalid_certs: config.console.accept_invalid_certs,
        ..ClientConfig::default()
    };
    let client = GingerClient::with_config(&config.console.base_url, client_config)
        .context("build console client")?;

    client
        .login(&LoginRequest {
            username: config.console.username.clone(),
            password: config.console.password.clone(),
        })
        .await
        .context("log in to console")?;

    let shutdown = CancellationToken::new();
    setup_signal_handlers(shutdown.clone());

    let ctx = ScenarioContext {
        client,
        fixtures: config.fixtures.clone(),
        poller: TaskPoller::new(
            Duration::from_secs(config.console.poll_interval_secs),
            config.console.poll_attempts,
        ),
        shutdown,
    };

    let mut report = RunReport::new();
    run_suites(&ctx, &suite_names, &mut report)
        .await
        .context("run suites")?;

    if let Err(err) = ctx.client.logout().await {
        warn!(error = %err, "logout failed");
    }

    report.print_summary();
    if let Some(path) = &args.report_json {
        report.write_json(path).context("write json report")?;
        info!(path = %path.display(), "json report written");
    }
    if report.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(log_level: &str, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;

    match log_dir {
        Some(dir) => {
            let file_name = format!(
                "fvt-{}.log",
                chrono::Local::now().format("%Y%m%d-%H%M%S")
            );
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(None)
        }
    }
}

fn load_config(path: &Path) -> Result<FvtConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    FvtConfig::from_file(path_str).context("load config")
}

fn confirm_run(base_url: &str) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "This run changes device state on {base_url}. Continue?"
        ))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT, finishing current scenario");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM, finishing current scenario");
                    shutdown.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
