use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use charfeed::cli::Cli;
use charfeed::config::{Config, ConfigStore};
use charfeed::dump::{run_dump, DumpOutcome};
use charfeed::logging::{init_stderr_tracing, init_tui_tracing};
use charfeed::query::GraphQlClient;
use charfeed::shutdown::ShutdownHandle;
use charfeed::ui::runtime;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let path = cli.config_path();
    let mut config = Config::load_from(&path)?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let shutdown = ShutdownHandle::new();

    if let Some(pages) = cli.dump {
        init_stderr_tracing();
        let client = GraphQlClient::new(&config.api).context("Failed to build query client")?;
        let outcome = tokio_runtime.block_on(async {
            shutdown.listen_for_ctrl_c();
            let mut stdout = io::stdout().lock();
            tokio::select! {
                result = run_dump(Arc::new(client), &config.feed, pages, &mut stdout) => result.map(Some),
                _ = shutdown.wait() => Ok(None),
            }
        })?;
        return Ok(outcome.map_or(ExitCode::from(130), |outcome: DumpOutcome| outcome.exit_code()));
    }

    init_tui_tracing();
    tracing::info!(path = %path.display(), endpoint = %config.api.endpoint, "Starting charfeed");
    {
        let _enter = tokio_runtime.enter();
        shutdown.listen_for_ctrl_c();
    }
    let store = ConfigStore::new(config, path);
    runtime::run(&tokio_runtime, store, |config| cli.apply_overrides(config), shutdown)?;
    Ok(ExitCode::SUCCESS)
}
