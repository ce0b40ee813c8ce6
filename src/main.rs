//! Video Trimmer CLI
//!
//! Cuts a time range out of a video with `ffmpeg -ss <start> -i <input>
//! -t <duration> -c copy <output>`, writing `MP4_<yyyyMMdd_HHmmss>.mp4` into
//! the destination directory.
//!
//! # Usage
//!
//! ```bash
//! trimmer trim --input video.mp4 --start-ms 20000 --end-ms 30000 --dest-dir clips/
//! trimmer command --input video.mp4 --output out.mp4 --start-ms 0 --end-ms 61000
//! trimmer display-time 3661000
//! trimmer check --ffmpeg /opt/ffmpeg/bin/ffmpeg
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use video_trimmer::adapters::TomlConfigAdapter;
use video_trimmer::app::DefaultAppContainer;
use video_trimmer::cli::{commands, Cli, Commands};
use video_trimmer::config_initialization::{initialize_configuration_hierarchy, ConfigOverrides};
use video_trimmer::utils::logging::init_logging;
use video_trimmer::TrimmerError;

/// Main entry point for the trimmer CLI
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        error!("{:#}", err);
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<TrimmerError>()
            .map(TrimmerError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let overrides = ConfigOverrides::from(&cli);
    let config = TomlConfigAdapter::new();
    let settings = initialize_configuration_hierarchy(&config, &overrides)
        .await
        .map_err(TrimmerError::from)
        .context("Failed to load configuration")?;

    init_logging(settings.log_level, settings.json_logs)?;
    info!("Starting video trimmer");

    let container = DefaultAppContainer::new(&settings);

    match cli.command {
        Commands::Trim(args) => {
            commands::trim(args, &settings, &container).await?;
        }
        Commands::Command(args) => commands::command(args)?,
        Commands::DisplayTime(args) => commands::display_time(args)?,
        Commands::Check(_) => {
            commands::check(&container)
                .await
                .context("ffmpeg binary check failed")?;
        }
    }

    Ok(())
}
