use std::process;

use clap::Parser;

use textsync::{build_config, check, Args};

// Diagnostics go to stderr, never stdout. Every failure exits with code 10.

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.files.len() < 2 {
        eprintln!("Error: check requires at least two files");
        process::exit(10);
    }

    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: The file {} does not exist", path.display());
            process::exit(10);
        }
    }

    if args.verbose {
        eprintln!("Comparing:");
        for path in &args.files {
            eprintln!("  {}", path.display());
        }
    }

    let config = build_config(&args);
    match check(&args.files, &config).await {
        Ok(message) => {
            if args.verbose {
                eprintln!("{message}");
            }
        }
        Err(err) => {
            eprintln!("files do not match: {err}");
            process::exit(10);
        }
    }
}
