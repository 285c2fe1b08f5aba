//! Command-line arguments.

use clap::Parser;
use fitness_tracker::metrics::OutputFormat;
use fitness_tracker::AppConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fitness-tracker")]
#[command(version)]
#[command(about = "Compute distance, speed and calories from workout sensor packages")]
#[command(long_about = "
fitness-tracker reads sensor packages (SWM, RUN, WLK) and prints one
summary line per workout, in input order.

Without --config it reads workouts.toml from the user config directory,
or falls back to the built-in sample packages.

Example usage:
  fitness-tracker                          # Report on the sample packages
  fitness-tracker --config week.toml       # Report on packages from a file
  fitness-tracker --format json --keep-going
")]
pub struct Cli {
    /// Config file with the packages to process
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output line format (overrides the config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Skip failing packages instead of aborting the run
    #[arg(short, long)]
    pub keep_going: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.keep_going {
            config.keep_going = true;
        }
    }
}
