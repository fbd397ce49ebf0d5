// ABOUTME: Entry point for the berth CLI application.
// ABOUTME: Parses arguments, connects to the runtime once and dispatches to views and commands.

mod cli;

use berth::commands::{self, ContainerAction, Outcome};
use berth::config::{self, Config};
use berth::error::Result;
use berth::output::{Output, OutputMode};
use berth::runtime::{self, BollardRuntime};
use berth::types::ContainerId;
use berth::views;
use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let output = Output::new(mode);

    match run(cli, output).await {
        Ok(code) => code,
        Err(e) => {
            Output::new(mode).error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, mut output: Output) -> Result<ExitCode> {
    let cwd = env::current_dir()?;

    if let Commands::Init { force } = cli.command {
        let path = config::init_config(&cwd, force)?;
        output.progress(&format!("Created {}", path.display()));
        return Ok(ExitCode::SUCCESS);
    }

    let config =
        Config::resolve(cli.config.as_deref(), &cwd)?.with_overrides(cli.runtime, cli.socket);
    let runtime =
        runtime::connect(&config.runtime_config(), config.timeout, config.pull_timeout).await?;
    tracing::debug!(runtime = %runtime.runtime_type(), "connected");

    match cli.command {
        Commands::Init { .. } => Ok(ExitCode::SUCCESS),
        Commands::Dashboard => {
            let dashboard = views::build_dashboard(&runtime).await;
            output.dashboard(&dashboard);
            Ok(exit_code(dashboard.is_degraded()))
        }
        Commands::Images { query } => {
            let view =
                views::build_images_view(&runtime, query.as_deref(), config.search.limit).await;
            output.images(&view);
            Ok(exit_code(view.images.is_degraded()))
        }
        Commands::Launch => {
            let menu = views::build_launch_menu(&runtime, &config.launch.host).await;
            output.launch_menu(&menu);
            Ok(exit_code(menu.is_degraded()))
        }
        Commands::Start { id } => {
            container_action(&runtime, &config, &output, &id, ContainerAction::Start).await
        }
        Commands::Stop { id } => {
            container_action(&runtime, &config, &output, &id, ContainerAction::Stop).await
        }
        Commands::Rm { id } => {
            container_action(&runtime, &config, &output, &id, ContainerAction::Remove).await
        }
        Commands::Run { image, name, ports } => {
            output.start_timer();
            output.progress(&format!("Running container from image {image}..."));
            let outcome =
                commands::run_container(&runtime, &image, name.as_deref(), &ports).await?;
            report(&output, &outcome)
        }
        Commands::Pull { image } => {
            output.start_timer();
            output.progress(&format!("Pulling image '{image}'... This may take a while."));
            let outcome = commands::pull_image(&runtime, &image).await?;
            report(&output, &outcome)
        }
        Commands::Rmi { image } => {
            let outcome = commands::remove_image(&runtime, &image).await?;
            report(&output, &outcome)
        }
        Commands::Prune => {
            output.start_timer();
            let outcome = commands::prune(&runtime, config.prune.volumes).await?;
            report(&output, &outcome)
        }
        Commands::Logs { id, tail } => {
            let tail = tail.unwrap_or(config.logs.tail);
            let view = views::build_container_logs(&runtime, &ContainerId::new(id), tail).await?;
            output.logs(&view);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Inspect { id } => {
            let view = views::build_container_details(&runtime, &ContainerId::new(id)).await?;
            output.details(&view);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn container_action(
    runtime: &BollardRuntime,
    config: &Config,
    output: &Output,
    id: &str,
    action: ContainerAction,
) -> Result<ExitCode> {
    let outcome = commands::perform_container_action(
        runtime,
        &ContainerId::new(id),
        action,
        config.stop.timeout,
    )
    .await?;
    report(output, &outcome)
}

fn report(output: &Output, outcome: &Outcome) -> Result<ExitCode> {
    output.outcome(outcome);
    Ok(ExitCode::SUCCESS)
}

/// A view whose top-level call failed was already rendered with its
/// error; only the exit status is left to set.
fn exit_code(degraded: bool) -> ExitCode {
    if degraded {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
