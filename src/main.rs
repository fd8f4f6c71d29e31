//! Floodpath CLI - compute waypoint paths over a surface and its
//! smoothed variants.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use floodpath::PipelineConfig;

#[derive(Parser)]
#[command(name = "floodpath")]
#[command(about = "Minimum-barrier paths through waypoints on a sampled surface")]
struct Args {
    /// Pipeline configuration file (TOML)
    config: PathBuf,

    /// Print every path coordinate instead of a summary
    #[arg(long)]
    full: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("floodpath=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = match PipelineConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Surface {}, {} waypoints, {} smoothing passes",
        config.surface.display(),
        config.points.len(),
        config.smooth.len()
    );

    let paths = match floodpath::run(&config) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for (i, path) in paths.iter().enumerate() {
        let label = if i == 0 {
            "base surface".to_string()
        } else {
            format!("smoothed variant {}", i)
        };
        println!(
            "variant {} ({}): {} points, peak value {:.6}",
            i,
            label,
            path.len(),
            path.peak
        );
        if args.full {
            for point in &path.points {
                let fields: Vec<String> = point.iter().map(|c| format!("{:.6}", c)).collect();
                println!("  {}", fields.join(" "));
            }
        }
    }

    ExitCode::SUCCESS
}
