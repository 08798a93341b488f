//! Weaver CLI - classify relational metadata and generate a graph schema
//!
//! Usage:
//!   weaver analyze --snapshot introspection.json
//!   weaver analyze --connection dev --format json
//!   weaver generate --snapshot introspection.json --output schema.yaml
//!
//! Examples:
//!   weaver analyze --snapshot examples.json
//!   weaver generate --connection production > schema.yaml

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};

use weaver::classify::{ClassificationReport, SchemaAnalyzer};
use weaver::config::Settings;
use weaver::metadata::{
    MetadataProvider, SnapshotProvider, TableMetadata, WorkerMetadataProvider,
};
use weaver::model::{DisabledClassifier, WorkerClassifier, ZeroShotClassifier};
use weaver::schema::generate;
use weaver::worker::{WorkerClient, WorkerError};

#[derive(Parser)]
#[command(name = "weaver")]
#[command(about = "Weaver - infers a property-graph schema from relational metadata")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify each table and print a per-table report
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Report format
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },

    /// Generate the graph-schema document
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Write the YAML document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Read tables from a JSON introspection snapshot instead of a database
    #[arg(long, conflicts_with = "connection")]
    snapshot: Option<PathBuf>,

    /// Named connection from weaver.toml (defaults to the first one)
    #[arg(short, long)]
    connection: Option<String>,

    /// Skip the zero-shot model and use heuristic fallbacks only
    #[arg(long)]
    no_model: bool,
}

#[derive(Clone, ValueEnum)]
enum ReportFormat {
    /// Human-readable text blocks
    Text,
    /// A JSON array of reports
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _logger = match flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { source, format } => cmd_analyze(source, format).await,
        Commands::Generate { source, output } => cmd_generate(source, output).await,
    }
}

async fn cmd_analyze(source: SourceArgs, format: ReportFormat) -> ExitCode {
    let (tables, analyzer) = match load_pipeline(&source).await {
        Ok(pipeline) => pipeline,
        Err(code) => return code,
    };

    let results = analyzer.analyze_tables(&tables).await;
    let reports: Vec<ClassificationReport> = results.iter().map(Into::into).collect();

    match format {
        ReportFormat::Text => {
            for report in &reports {
                println!("{}", report.render_text());
            }
        }
        ReportFormat::Json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing reports: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

async fn cmd_generate(source: SourceArgs, output: Option<PathBuf>) -> ExitCode {
    let (tables, analyzer) = match load_pipeline(&source).await {
        Ok(pipeline) => pipeline,
        Err(code) => return code,
    };

    let results = analyzer.analyze_tables(&tables).await;
    let schema = generate(&results);

    let yaml = match schema.to_yaml() {
        Ok(yaml) => yaml,
        Err(e) => {
            eprintln!("Error serializing schema: {e}");
            return ExitCode::FAILURE;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &yaml) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            println!("Wrote {}", path.display());
        }
        None => print!("{yaml}"),
    }

    ExitCode::SUCCESS
}

/// Resolve the metadata source and classifier from CLI args and settings.
async fn load_pipeline(
    source: &SourceArgs,
) -> Result<(Vec<TableMetadata>, SchemaAnalyzer), ExitCode> {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return Err(ExitCode::FAILURE);
        }
    };

    let use_model = settings.model.enabled && !source.no_model;

    if let Some(path) = &source.snapshot {
        let provider = match SnapshotProvider::from_file(path) {
            Ok(provider) => provider,
            Err(e) => {
                eprintln!("Error reading snapshot '{}': {}", path.display(), e);
                return Err(ExitCode::FAILURE);
            }
        };

        let tables = match provider.fetch_all().await {
            Ok(tables) => tables,
            Err(e) => {
                report_metadata_error(&e);
                return Err(ExitCode::FAILURE);
            }
        };

        let classifier: Arc<dyn ZeroShotClassifier> = if use_model {
            spawn_model_classifier(&settings).await
        } else {
            Arc::new(DisabledClassifier)
        };

        return Ok((tables, SchemaAnalyzer::new(classifier)));
    }

    // Live introspection through the worker.
    let (name, connection) = match &source.connection {
        Some(name) => match settings.get_connection(name) {
            Ok(connection) => (name.as_str(), connection),
            Err(e) => {
                eprintln!("{e}");
                return Err(ExitCode::FAILURE);
            }
        },
        None => match settings.default_connection() {
            Some(found) => found,
            None => {
                eprintln!("No connections configured; add one to weaver.toml or pass --snapshot");
                return Err(ExitCode::FAILURE);
            }
        },
    };

    let connection_string = match connection.resolved_connection_string() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error resolving connection '{name}': {e}");
            return Err(ExitCode::FAILURE);
        }
    };

    let client = match WorkerClient::spawn_with_settings(&settings).await {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("Error starting worker: {e}");
            return Err(ExitCode::FAILURE);
        }
    };

    let mut provider = WorkerMetadataProvider::new(
        client.clone(),
        connection.driver.clone(),
        connection_string,
    )
    .with_sample_limit(settings.analysis.sample_rows);
    if let Some(schema) = &connection.default_schema {
        provider = provider.with_schema(schema.clone());
    }

    let tables = match provider.fetch_all().await {
        Ok(tables) => tables,
        Err(e) => {
            report_metadata_error(&e);
            return Err(ExitCode::FAILURE);
        }
    };

    let classifier: Arc<dyn ZeroShotClassifier> = if use_model {
        Arc::new(WorkerClassifier::new(client))
    } else {
        Arc::new(DisabledClassifier)
    };

    Ok((tables, SchemaAnalyzer::new(classifier)))
}

/// Spawn a worker just for the model when metadata comes from a snapshot.
///
/// A spawn failure degrades to heuristics; it is logged once, not fatal.
async fn spawn_model_classifier(settings: &Settings) -> Arc<dyn ZeroShotClassifier> {
    match WorkerClient::spawn_with_settings(settings).await {
        Ok(client) => Arc::new(WorkerClassifier::new(Arc::new(client))),
        Err(e) => {
            log::warn!("model worker unavailable, using heuristic fallbacks: {e}");
            Arc::new(DisabledClassifier)
        }
    }
}

/// Print a metadata failure, distinguishing unreachable databases from
/// errors the worker reported.
fn report_metadata_error(err: &WorkerError) {
    if err.is_connection_failure() {
        eprintln!("Could not connect to the source database: {err}");
    } else {
        eprintln!("Introspection failed: {err}");
    }
}
