use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use voltbench::*;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Measure how far a miner's actual core voltage drifts from the requested voltage.
#[derive(Parser)]
#[command(name = "voltbench")]
#[command(version = version::VERSION)]
struct Cli {
    /// Device IP address (prompted when omitted)
    #[arg(long)]
    address: Option<String>,

    /// Collection duration in minutes (prompted when omitted)
    #[arg(long)]
    duration: Option<String>,

    /// Seconds between samples (prompted when omitted)
    #[arg(long)]
    interval: Option<String>,

    /// Optional TOML file with fallback address, API path, timeout and default timing
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print only the JSON summary
    #[arg(long)]
    json_only: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let bench_config = config::BenchConfig::load(cli.config.as_deref())?;

    let overrides = input::InputOverrides {
        address: cli.address,
        duration_minutes: cli.duration,
        interval_secs: cli.interval,
    };
    let run = {
        let stdin = std::io::stdin();
        let mut stdin = stdin.lock();
        let mut stdout = std::io::stdout();
        input::resolve_run(&mut stdin, &mut stdout, &overrides, &bench_config)?
    };
    let plan = run.plan();

    let url = run.status_url(&bench_config.device.api_path);
    let device = client::DeviceClient::new(url, bench_config.request_timeout())?;
    tracing::info!(
        url = device.url(),
        duration_secs = run.duration_secs,
        interval_secs = run.interval_secs,
        total_samples = plan.total_samples,
        "starting run"
    );

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", reporter::banner(&run, &plan))?;
    let series = sampler::collect(&device, &run, &mut stdout).await?;

    match analyzer::analyze(&series, run.interval_secs) {
        Ok(report) => {
            writeln!(stdout, "{}", reporter::render(&report, cli.json_only)?)?;
        }
        Err(e) => {
            tracing::info!(operation = "analyze", "{}", e);
            writeln!(stdout, "{}", e)?;
        }
    }

    Ok(())
}
