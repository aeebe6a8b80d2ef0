use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use tracing_subscriber::EnvFilter;

use share_probe::cli::Cli;
use share_probe::config::{Config, ConfigLoader, FileConfigLoader};
use share_probe::output::{OutputFormat, OutputFormatter, Report, Status};
use share_probe::probe;
use share_probe::transport::MountedShareTransport;
use share_probe::EXIT_UNKNOWN;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            e.exit()
        }
        Err(e) => {
            let detail = e.to_string();
            let first_line = detail.lines().next().unwrap_or("invalid arguments");
            println!("{}: {}", Status::Unknown, first_line.trim_start_matches("error: "));
            std::process::exit(EXIT_UNKNOWN);
        }
    };

    init_tracing(cli.verbose);

    // sampled once so every object in a run is aged against the same instant
    let now = chrono::Local::now().timestamp();

    let (report, format) = run(&cli, now);
    tracing::info!(status = %report.status, "check finished");

    match format.formatter().format(&report) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            println!("{}: {e}", Status::Unknown);
            std::process::exit(EXIT_UNKNOWN);
        }
    }
    std::process::exit(report.status.exit_code());
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("share_probe={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> share_probe::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    cli.config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn run(cli: &Cli, now: i64) -> (Report, OutputFormat) {
    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            return (Report::from(&e), cli.format.unwrap_or_default());
        }
    };
    let format = cli.output_format(&config);

    let invocation = match cli.resolve(&config) {
        Ok(invocation) => invocation,
        Err(e) => return (Report::from(&e), format),
    };

    let transport = MountedShareTransport::new(&invocation.mount_root, invocation.target);
    let report = match probe::run(&transport, &invocation.request, now) {
        Ok(outcome) => Report::from(outcome),
        Err(e) => {
            tracing::debug!(error = ?e, "check failed");
            Report::from(&e)
        }
    };
    (report, format)
}
