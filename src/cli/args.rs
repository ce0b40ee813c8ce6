//! Command-line argument definitions

use clap::Args;

/// Arguments for the trim command
#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Range start in milliseconds
    #[arg(short, long)]
    pub start_ms: u64,

    /// Range end in milliseconds (exclusive)
    #[arg(short, long)]
    pub end_ms: u64,

    /// Directory the MP4_<timestamp>.mp4 output is written to
    #[arg(short, long)]
    pub dest_dir: Option<String>,

    /// ffmpeg binary to run
    #[arg(long)]
    pub ffmpeg: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the command subcommand
#[derive(Args, Debug)]
pub struct CommandArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Output file path
    #[arg(short, long)]
    pub output: String,

    /// Range start in milliseconds
    #[arg(short, long)]
    pub start_ms: u64,

    /// Range end in milliseconds (exclusive)
    #[arg(short, long)]
    pub end_ms: u64,

    /// Print the argument vector as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the display-time command
#[derive(Args, Debug)]
pub struct DisplayTimeArgs {
    /// Duration in milliseconds
    pub millis: u64,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// ffmpeg binary to probe
    #[arg(long)]
    pub ffmpeg: Option<String>,
}
