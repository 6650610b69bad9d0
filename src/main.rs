mod cli;

use cli::Args;
use metadata_rules::config::{self, ConfigFile};
use metadata_rules::prelude::*;
use std::path::Path;
use std::process;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let registry = config::build_registry(config.as_ref(), &args.remove, args.module.as_deref())?;

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let use_case = RewriteMetadataUseCase::new(
        FileSystemReader::new(),
        GradleModuleFormat::new(),
        progress_reporter,
        registry,
    );

    let response = use_case.execute(RewriteRequest::new(args.files.clone()))?;

    if args.check {
        return Ok(if response.has_rewrites() {
            ExitCode::RewritesPending
        } else {
            ExitCode::Success
        });
    }

    if args.in_place {
        for document in response.modified_documents() {
            FileSystemWriter::new(document.path.clone()).present(&document.content)?;
        }
        return Ok(ExitCode::Success);
    }

    // Single input, validated by the CLI layer
    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };
    for document in &response.documents {
        presenter.present(&document.content)?;
    }

    Ok(ExitCode::Success)
}

/// Explicit `--config` wins; otherwise the working directory is searched.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}
