//! Diet
//!
//! Loads a JSON dataset and prints a nutrition report as JSON on stdout.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use diet::build_info;
use diet::dataset::Dataset;
use diet::report::Report;

/// Dataset path from the first argument, `DIET_DATA_PATH`, or the default
fn get_dataset_path() -> PathBuf {
    if let Some(arg) = std::env::args_os().nth(1) {
        return PathBuf::from(arg);
    }

    std::env::var("DIET_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
                    path = grandparent.to_path_buf();
                }
            }

            path.push("data");
            path.push("diet.json");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, the report owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("diet=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let path = get_dataset_path();
    eprintln!("Dataset path: {}", path.display());

    let dataset = Dataset::load(&path)?;
    let food = dataset.build()?;
    let report = Report::build(&food, &dataset)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
