use ci_trigger::{Application, TriggerError, get_configuration};

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Asks Travis CI to build a downstream project.
#[derive(Parser)]
#[command(name = "ci-trigger")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name of the configured trigger to run
    #[arg(value_name = "TRIGGER")]
    trigger: Option<String>,

    /// Commit to mention in the build message
    #[arg(long, env = "CI_TRIGGER_COMMIT")]
    commit: Option<String>,

    /// Repository whose HEAD is used when no commit is given
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Resolve everything but do not contact Travis
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG and CI_TRIGGER_COMMIT may come from .env
    dotenvy::dotenv().ok();

    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_local() {
                error!("{} (no request was sent)", e);
            } else {
                error!("{}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), TriggerError> {
    let configuration = get_configuration()?;
    let application = Application::build(configuration)?;
    let task = application.task(cli.trigger.as_deref())?;
    let commits = application.commit_sources(cli.commit, cli.repo);

    if cli.dry_run {
        let planned = task.plan(&commits)?;
        info!(
            "Dry run: would request a build of {} on {} with message \"{}\"",
            planned.request.project(),
            planned.request.branch().as_str(),
            planned.message()
        );
        return Ok(());
    }

    task.run(application.client(), &commits).await?;
    Ok(())
}
