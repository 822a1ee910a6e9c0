use anyhow::{Context, Result};
use clap::Parser;

use vantage_engine::logging::{init_logging, LoggingConfig};
use vantage_engine::DeviceProfile;
use vantage_tier::{settings_for, QualityTier};

mod cli;
mod report;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    if let Some(name) = &cli.tier {
        let tier: QualityTier = name.parse().context("invalid --tier value")?;
        let settings = settings_for(tier);
        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&settings).context("failed to encode preset")?
            );
        } else {
            let text = report::render_settings(tier, &settings).context("failed to render preset")?;
            print!("{text}");
        }
        return Ok(());
    }

    let provider = cli.provider();
    let profile = DeviceProfile::detect(&provider, &cli.policy());

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&profile).context("failed to encode profile")?
        );
    } else {
        let text = report::render_profile(&profile).context("failed to render report")?;
        print!("{text}");
    }

    Ok(())
}
