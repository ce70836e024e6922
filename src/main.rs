use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use release_check::command::{run_commit, run_release};
use release_check::config::{AuditConfig, Overrides};
use release_check::report::Reporter;
use release_check::version::registries::PypiRegistry;

#[derive(Parser)]
#[command(name = "release-check")]
#[command(version, about = "Check that project versions agree and are not yet on PyPI")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Project root the version sources are resolved against
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// JSON config file (defaults to <root>/release-check.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Package name on the registry
    #[arg(long, global = true)]
    package: Option<String>,

    /// Registry base URL
    #[arg(long, global = true)]
    registry_url: Option<String>,

    /// Registry request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Check that all version sources agree
    Commitcheck,
    /// Check that all version sources agree and the version is unpublished
    Releasecheck,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_logging(verbose: u8, format: LogFormat) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format);
    let mut reporter = Reporter::stdio("PyPI");

    let config = match AuditConfig::load(&cli.root, cli.config.as_deref()) {
        Ok(config) => config.apply(Overrides {
            package: cli.package,
            registry_url: cli.registry_url,
            timeout_ms: cli.timeout_ms,
        }),
        Err(err) => return Ok(ExitCode::from(reporter.error(&err)?)),
    };

    let code = match cli.command {
        Command::Commitcheck => run_commit(&cli.root, &config, &mut reporter)?,
        Command::Releasecheck => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(run_release(
                &cli.root,
                &config,
                |config| PypiRegistry::from_config(&config.registry),
                &mut reporter,
            ))?,
    };

    Ok(ExitCode::from(code))
}
