use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imgdim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the pixel dimensions of BMP, GIF, PNG, JPEG, WebP and TIFF files", long_about = None)]
pub struct Cli {
    /// Files or directories to inspect
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Worker threads (0 = one per CPU)
    #[arg(short = 'j', long, default_value = "0")]
    pub threads: usize,

    /// Also list files whose dimensions could not be read
    #[arg(short, long)]
    pub all: bool,

    /// Emit a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
