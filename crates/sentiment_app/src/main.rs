mod platform;

use std::path::PathBuf;

use clap::Parser;

use platform::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "sentiment_app")]
#[command(about = "Analyze the sentiment of a news article")]
struct Cli {
    /// RON configuration file; missing files fall back to defaults
    #[arg(long, default_value = platform::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Base URL of the sentiment service (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,
    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
    /// Number of background orbs (overrides the config file)
    #[arg(long)]
    orbs: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::run_app(platform::LaunchOptions {
        config_path: cli.config,
        base_url: cli.base_url,
        log: cli.log,
        orb_count: cli.orbs,
    })
}
