use std::path::PathBuf;

use clap::Parser;

use crate::engine::Config;
use crate::marker::Marker;

#[derive(Parser, Debug)]
#[command(name = "check", version, about = "Verify that sections of text files stay in sync", long_about = None)]
pub struct Args {
    /// Files to compare; the first file is the baseline
    pub files: Vec<PathBuf>,

    /// Marker that begins the section to check, else from start of file
    #[arg(short = 's', long = "start-marker")]
    pub start_marker: Option<String>,

    /// Marker that ends the section to check, else to end of file
    #[arg(short = 'e', long = "end-marker")]
    pub end_marker: Option<String>,

    /// Turn on verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command-line markers are always literal strings; pattern markers are a
/// library-only feature.
pub fn build_config(args: &Args) -> Config {
    Config {
        start_marker: args.start_marker.as_deref().map(Marker::from),
        end_marker: args.end_marker.as_deref().map(Marker::from),
        ..Config::default()
    }
}
