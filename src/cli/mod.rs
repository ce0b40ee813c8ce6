//! CLI module for the trimmer
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config_initialization::ConfigOverrides;

pub mod args;
pub mod commands;

/// Video Trimmer
///
/// Cuts a time range out of a video by stream-copying it through ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "trimmer")]
#[command(about = "Trim a video range with ffmpeg stream copy")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file (TOML, `[trimmer]` table)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Trim a range out of a video file
    Trim(args::TrimArgs),
    /// Print the ffmpeg arguments a trim would use, without running it
    Command(args::CommandArgs),
    /// Format a millisecond duration the way the trimmer UI labels it
    DisplayTime(args::DisplayTimeArgs),
    /// Check that the ffmpeg binary can be executed
    Check(args::CheckArgs),
}

impl From<&Cli> for ConfigOverrides {
    fn from(cli: &Cli) -> Self {
        let (ffmpeg_path, destination_dir) = match &cli.command {
            Commands::Trim(args) => (args.ffmpeg.clone(), args.dest_dir.clone()),
            Commands::Check(args) => (args.ffmpeg.clone(), None),
            Commands::Command(_) | Commands::DisplayTime(_) => (None, None),
        };

        ConfigOverrides {
            config_file: cli.config.clone(),
            ffmpeg_path,
            destination_dir,
            log_level: cli.log_level.clone(),
            json_logs: cli.json_logs.then_some(true),
        }
    }
}
