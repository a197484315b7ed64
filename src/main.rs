//! naucse command line: inspect, validate and freeze the course catalog.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing_subscriber::EnvFilter;

use naucse::catalog::discovery::{CourseDiscovery, RootScan};
use naucse::catalog::{resolver, Catalog, CourseSource};
use naucse::config;
use naucse::settings::Settings;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "naucse",
    about = "Course catalog tooling for naucse content roots",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Content root (overrides NAUCSE_ROOT_PATH)
    #[clap(long, global = true)]
    root: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Command {
    /// List the resolved catalog, including courses excluded by the
    /// trusted-repo check and why
    List {
        /// Output format
        #[clap(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Validate the course configuration and exit non-zero on errors
    Check,

    /// Write the resolved catalog manifest for the static-site pipeline
    Freeze {
        /// Output directory
        #[clap(long, default_value = "_build")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let mut settings = Settings::from_env();
    if let Some(root) = cli.root.clone() {
        settings.root_path = root;
    }

    match cli.command {
        Command::List { format } => cmd_list(&settings, format),
        Command::Check => cmd_check(&settings),
        Command::Freeze { out } => cmd_freeze(&settings, &out),
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_catalog(settings: &Settings) -> Result<Catalog> {
    let declarations = config::load_declarations(&settings.root_path)?;
    let discovered = RootScan::new(&settings.root_path).list_courses()?;
    let catalog = resolver::resolve(&declarations, &discovered, &settings.trust)?;
    Ok(catalog)
}

#[derive(Tabled)]
struct CourseRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Repository")]
    repository: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn cmd_list(settings: &Settings, format: OutputFormat) -> Result<()> {
    let catalog = resolve_catalog(settings)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        OutputFormat::Table => {
            let mut rows: Vec<CourseRow> = catalog
                .iter()
                .map(|entry| CourseRow {
                    slug: entry.slug.clone(),
                    source: match entry.source {
                        CourseSource::Declared => "declared".into(),
                        CourseSource::Discovered => "discovered".into(),
                    },
                    repository: entry
                        .repo
                        .as_ref()
                        .map(|repo| repo.checked_url())
                        .unwrap_or_else(|| "-".into()),
                    status: "ok".into(),
                })
                .collect();
            for excluded in catalog.excluded() {
                rows.push(CourseRow {
                    slug: excluded.slug.clone(),
                    source: "declared".into(),
                    repository: excluded.repo.checked_url(),
                    status: format!("excluded: {}", excluded.reason),
                });
            }

            let mut table = Table::new(rows);
            table
                .with(Style::sharp())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            println!("{table}");
            println!(
                "{} courses, {} excluded, curated homepage: {}",
                catalog.len(),
                catalog.excluded().len(),
                catalog.has_curated_homepage()
            );
        }
    }
    Ok(())
}

fn cmd_check(settings: &Settings) -> Result<()> {
    let catalog = resolve_catalog(settings)
        .context("course configuration is invalid")?;

    for excluded in catalog.excluded() {
        eprintln!(
            "warning: course '{}' excluded: {} ({})",
            excluded.slug,
            excluded.reason,
            excluded.repo.checked_url()
        );
    }
    println!(
        "ok: {} courses resolved, {} excluded",
        catalog.len(),
        catalog.excluded().len()
    );
    Ok(())
}

fn cmd_freeze(settings: &Settings, out: &Path) -> Result<()> {
    let catalog = resolve_catalog(settings)?;

    fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory {}", out.display()))?;
    let manifest_path = out.join("courses.json");
    let manifest = serde_json::to_vec_pretty(&catalog)?;
    fs::write(&manifest_path, manifest)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    println!("wrote {}", manifest_path.display());
    Ok(())
}
