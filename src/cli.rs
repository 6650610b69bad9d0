use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Apply component metadata rules to Gradle Module Metadata files
#[derive(Parser, Debug)]
#[command(name = "metadata-rules")]
#[command(version)]
#[command(
    about = "Apply component metadata rules to Gradle Module Metadata files",
    long_about = "Apply component metadata rules to Gradle Module Metadata (.module) files.\n\n\
                  Without --remove or a config file, the built-in rule strips hamcrest-core \
                  from every variant of junit:junit."
)]
pub struct Args {
    /// Module metadata files to rewrite
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Path to a config file (defaults to ./metadata-rules.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Remove dependencies with this module name from every variant
    /// Can be specified multiple times: -r hamcrest-core -r commons-logging
    #[arg(short, long = "remove", value_name = "NAME")]
    pub remove: Vec<String>,

    /// Only apply --remove rules to this component (GROUP:MODULE[:VERSION])
    #[arg(short, long, value_name = "GROUP:MODULE[:VERSION]", requires = "remove")]
    pub module: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Rewrite every input file in place
    #[arg(long)]
    pub in_place: bool,

    /// Write nothing; exit with 1 when any file would change
    #[arg(long, conflicts_with_all = ["output", "in_place"])]
    pub check: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        let args = Self::parse();
        if let Err(message) = args.validate() {
            Self::command()
                .error(ErrorKind::ArgumentConflict, message)
                .exit();
        }
        args
    }

    /// Checks combinations clap cannot express on its own.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.files.len() > 1 && !self.in_place && !self.check {
            if self.output.is_some() {
                return Err("--output can only be used with a single input file".to_string());
            }
            return Err(
                "Multiple input files require --in-place or --check".to_string(),
            );
        }
        Ok(())
    }
}
