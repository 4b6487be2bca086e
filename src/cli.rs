use clap::{Parser, Subcommand};

use sbom_model::application::dto::{DocumentSource, OutputFormat, ProcessingMode};
use sbom_model::config::CliOverrides;
use sbom_model::document_model::codec::RecordKind;

/// Decode, check and normalize SBOM metadata, service and member documents
#[derive(Parser, Debug)]
#[command(name = "sbom-model")]
#[command(version)]
#[command(about = "Decode, check and normalize SBOM metadata, service and member documents", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode documents and report which ones are valid
    Check(CheckArgs),
    /// Decode documents and re-encode them in canonical JSON form
    Normalize(NormalizeArgs),
}

/// Options shared by every subcommand
#[derive(clap::Args, Debug)]
pub struct CommonArgs {
    /// Input documents ('-' reads standard input)
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<String>,

    /// Record kind: member, metadata or service (detected when omitted)
    #[arg(short, long)]
    pub kind: Option<RecordKind>,

    /// Reject top-level keys that the record does not define
    #[arg(long)]
    pub deny_unknown: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path (defaults to ./sbom-model.config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only print errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Check(args) => &args.common,
            Command::Normalize(args) => &args.common,
        }
    }

    pub fn mode(&self) -> ProcessingMode {
        match self {
            Command::Check(_) => ProcessingMode::Check,
            Command::Normalize(_) => ProcessingMode::Normalize,
        }
    }

    /// Format used when neither the CLI nor the config file picks one
    pub fn default_format(&self) -> OutputFormat {
        match self {
            Command::Check(_) => OutputFormat::Markdown,
            Command::Normalize(_) => OutputFormat::Json,
        }
    }

    pub fn overrides(&self) -> CliOverrides {
        let common = self.common();
        match self {
            Command::Check(args) => CliOverrides {
                format: args.format,
                kind: common.kind,
                deny_unknown: common.deny_unknown,
                pretty: false,
            },
            // normalize always emits JSON
            Command::Normalize(args) => CliOverrides {
                format: Some(OutputFormat::Json),
                kind: common.kind,
                deny_unknown: common.deny_unknown,
                pretty: args.pretty,
            },
        }
    }

    pub fn sources(&self) -> Vec<DocumentSource> {
        self.common()
            .inputs
            .iter()
            .map(|input| DocumentSource::from_arg(input))
            .collect()
    }
}
