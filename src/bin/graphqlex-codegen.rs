//! generate a typed graphqlex client module from a schema and operations
//!
//! the generated typescript module holds:
//! - the runtime and generated-type imports
//! - the `api` holder with `setApi` / `initApi`
//! - the input shape map used by `trimInput`
//! - one function per operation and one document constant per fragment

use anyhow::{bail, Context, Result};
use clap::Parser;
use graphqlex_codegen::{fetch_schema, generate_from_sources, read_sources, CodegenConfig};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "graphqlex-codegen")]
#[command(about = "Generate typed graphqlex client functions from GraphQL operations", long_about = None)]
struct Args {
    /// Schema SDL file (repeatable; definitions are concatenated)
    #[arg(long = "schema", value_name = "FILE")]
    schema: Vec<PathBuf>,

    /// Fetch the schema SDL from this URL instead of reading files
    #[arg(long, conflicts_with = "schema")]
    url: Option<String>,

    /// Bearer token sent when fetching the schema
    #[arg(long, requires = "url")]
    token: Option<String>,

    /// Operation document file (repeatable)
    #[arg(long = "documents", value_name = "FILE", required = true)]
    documents: Vec<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(long)]
    out: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Module providing Api, gql, and trimInput
    #[arg(long)]
    runtime_module: Option<String>,

    /// Module the generated types are imported from
    #[arg(long)]
    types_path: Option<String>,

    /// Drop the operation kind suffix when the name already ends with it
    #[arg(long)]
    dedupe_operation_suffix: bool,

    /// Never append the operation kind suffix to type names
    #[arg(long)]
    omit_operation_suffix: bool,

    /// Suffix appended to synthesized operation result type names
    #[arg(long)]
    operation_result_suffix: Option<String>,

    /// Scalar marking a field that returns no data
    #[arg(long)]
    void_type_name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("codegen failed: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let schema_sources = match &args.url {
        Some(url) => vec![fetch_schema(url, args.token.as_deref())
            .with_context(|| format!("failed to load schema from {url}"))?],
        None if args.schema.is_empty() => bail!("--schema or --url is required"),
        None => read_sources(&args.schema).context("failed to load schema")?,
    };
    let document_sources = read_sources(&args.documents).context("failed to load documents")?;

    let output =
        generate_from_sources(&schema_sources, &document_sources, &config).map_err(|err| {
            let context = if err.is_schema_error() {
                "invalid schema"
            } else {
                "failed to generate operations"
            };
            anyhow::Error::new(err).context(context)
        })?;

    // written only after the whole module generated
    match &args.out {
        Some(path) => fs::write(path, &output.content)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", output.content),
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<CodegenConfig> {
    let mut config = match &args.config {
        Some(path) => CodegenConfig::from_file(path)?,
        None => CodegenConfig::new(),
    };
    if let Some(module) = &args.runtime_module {
        config = config.with_runtime_module(module);
    }
    if let Some(path) = &args.types_path {
        config = config.with_types_path(path);
    }
    if args.dedupe_operation_suffix {
        config = config.with_dedupe_operation_suffix(true);
    }
    if args.omit_operation_suffix {
        config = config.with_omit_operation_suffix(true);
    }
    if let Some(suffix) = &args.operation_result_suffix {
        config = config.with_operation_result_suffix(suffix);
    }
    if let Some(name) = &args.void_type_name {
        config = config.with_void_type_name(name);
    }
    config.validate()?;
    Ok(config)
}
