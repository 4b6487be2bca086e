mod cli;

use cli::Args;
use owo_colors::OwoColorize;
use sbom_model::adapters::outbound::console::StderrProgressReporter;
use sbom_model::adapters::outbound::filesystem::FileSystemReader;
use sbom_model::application::dto::CodecRequest;
use sbom_model::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use sbom_model::application::use_cases::ProcessDocumentsUseCase;
use sbom_model::config::{discover_config, load_config_from_path, Settings, CONFIG_FILENAME};
use sbom_model::shared::error::ExitCode;
use sbom_model::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\n{} {}", "Caused by:".yellow(), err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

fn run(args: Args) -> Result<ExitCode> {
    let command = args.command;
    let common = command.common();

    let config = match common.config.as_deref() {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => {
            let discovered = discover_config(Path::new("."))?;
            if discovered.is_some() && !common.quiet {
                eprintln!("📄 Auto-discovered config file: {}", CONFIG_FILENAME);
            }
            discovered
        }
    };
    let settings = Settings::resolve(
        command.overrides(),
        config.as_ref(),
        command.default_format(),
    );

    let request = CodecRequest::builder()
        .sources(command.sources())
        .kind(settings.kind)
        .unknown_fields(settings.unknown_fields)
        .mode(command.mode())
        .build()?;

    let progress_reporter = if common.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let use_case = ProcessDocumentsUseCase::new(FileSystemReader::new(), progress_reporter);
    let response = use_case.execute(request)?;

    if !common.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatter = FormatterFactory::create(settings.format, settings.pretty);
    let output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(common.output.as_deref()));
    presenter.present(&output)?;

    if response.has_failures() {
        Ok(ExitCode::InvalidDocuments)
    } else {
        Ok(ExitCode::Success)
    }
}
