pub mod commands;
pub mod output;

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  # Basic run, print to screen
  prochariot -i /path/to/bakta/

  # Save output to a file
  prochariot -i /data/run1/ -s \"K. pneumoniae\" > report.json

  # Inspect what would be sent to the model
  prochariot -i /data/run2/ --payload-only | jq '.[0]'";

#[derive(Parser, Debug)]
#[command(
    name = "prochariot",
    version,
    about = "LLM-guided analysis of prokaryotic genomes",
    long_about = "proChariot reads a Bakta annotation output directory, condenses the \
                  annotation table into JSON and asks a large language model for a \
                  narrative analysis, printed to stdout as a JSON report.",
    after_help = EXAMPLES
)]
pub struct Cli {
    #[command(flatten)]
    pub analyze: commands::analyze::AnalyzeArgs,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
