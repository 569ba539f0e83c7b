mod cli;

use cli::Args;
use depgraph::adapters::outbound::console::StderrProgressReporter;
use depgraph::adapters::outbound::filesystem::FileSystemReader;
use depgraph::adapters::outbound::network::PyPiMetadataFetcher;
use depgraph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use depgraph::application::use_cases::QueryDependenciesUseCase;
use depgraph::config::{self, ConfigFile};
use depgraph::shared::error::ExitCode;
use depgraph::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let query = args.to_query(&config)?;

    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or_default(),
    };
    let show_graph = args.show_graph || config.show_graph.unwrap_or(false);
    let output = args.output.clone().or_else(|| config.output.clone());

    let use_case = QueryDependenciesUseCase::new(
        FileSystemReader::new(),
        PyPiMetadataFetcher::new()?,
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(query)?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&response, show_graph)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(output.map(PathBuf::from)));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise look for one in the working directory.
fn load_config(explicit: Option<&str>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(Path::new(path)),
        None => Ok(config::discover_config(Path::new("."))?.unwrap_or_default()),
    }
}
