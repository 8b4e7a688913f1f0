//! Operator command line
//!
//! Every command goes through the same decorated storages a server would
//! use, so lookups delegate and imports emit events exactly as configured.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dtr_domain::constants::DEFAULT_PAGE_LIMIT;
use dtr_domain::ports::RegistryStorage;
use dtr_domain::{
    CursorCodec, DescriptorFilter, PaginationRequest, PaginationResult, ShellDescriptor,
};
use dtr_infrastructure::config::loader::to_toml;
use dtr_infrastructure::di::ProviderCatalog;
use dtr_infrastructure::{AppConfig, ConfigLoader, RegistryContext, init_registries};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Command line interface of the descriptor registry
#[derive(Parser, Debug)]
#[command(name = "dtr")]
#[command(about = "Descriptor registry storage pipeline")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Which registry a lookup targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LookupTarget {
    Shell,
    Submodel,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List registered storage backends and event sinks
    Providers,
    /// Print the effective configuration as TOML
    Config,
    /// Look up one descriptor, delegating to peers when configured
    Lookup {
        /// Registry to query
        #[arg(value_enum)]
        target: LookupTarget,
        /// Descriptor id
        id: String,
    },
    /// Insert shell descriptors from a JSON array and print the first page
    Import {
        /// JSON file holding an array of shell descriptors
        file: PathBuf,
        /// Page size of the listing printed afterwards
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
    },
}

/// Load configuration for the given optional path
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Run one command against `config`, writing the result to `out`
pub async fn execute<W: Write>(command: Command, config: AppConfig, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Providers => print_providers(out),
        Command::Config => {
            writeln!(out, "{}", to_toml(&config)?)?;
            Ok(())
        }
        Command::Lookup { target, id } => lookup(config, target, &id, out).await,
        Command::Import { file, limit } => import(config, &file, limit, out).await,
    }
}

fn print_providers<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let catalog = ProviderCatalog::collect();
    let sections = [
        ("Shell storages", &catalog.shell_storages),
        ("Submodel storages", &catalog.submodel_storages),
        ("Event sinks", &catalog.event_sinks),
    ];
    for (title, entries) in sections {
        writeln!(out, "{title}:")?;
        for (name, description) in entries {
            writeln!(out, "  {name:<12} {description}")?;
        }
    }
    Ok(())
}

async fn lookup<W: Write>(
    config: AppConfig,
    target: LookupTarget,
    id: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let context = init_registries(config).await?;
    let rendered = match target {
        LookupTarget::Shell => context
            .shell_storage()
            .get(id)
            .await
            .map(|d| serde_json::to_string_pretty(&d)),
        LookupTarget::Submodel => context
            .submodel_storage()
            .get(id)
            .await
            .map(|d| serde_json::to_string_pretty(&d)),
    };
    context.shutdown().await;

    let json = rendered
        .with_context(|| format!("{target:?} descriptor lookup failed for '{id}'"))??;
    writeln!(out, "{json}")?;
    Ok(())
}

async fn import<W: Write>(
    config: AppConfig,
    file: &Path,
    limit: u32,
    out: &mut W,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let descriptors: Vec<ShellDescriptor> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of shell descriptors", file.display()))?;
    if descriptors.is_empty() {
        bail!("{} holds no shell descriptors", file.display());
    }

    let context = init_registries(config).await?;
    let (imported, page) = import_shells(&context, descriptors, limit).await?;

    writeln!(out, "Imported {imported} shell descriptors")?;
    for descriptor in &page.items {
        writeln!(out, "  {}", descriptor.id)?;
    }
    if let Some(cursor) = page.cursor {
        let last = CursorCodec::decode(&cursor)?;
        writeln!(out, "Next cursor: {cursor} (after '{last}')")?;
    }
    Ok(())
}

/// Insert `descriptors` in order and list the first page of the result
///
/// The context is shut down before returning, on failure as well, so events
/// queued for the descriptors stored so far are delivered.
pub async fn import_shells(
    context: &RegistryContext,
    descriptors: Vec<ShellDescriptor>,
    limit: u32,
) -> anyhow::Result<(usize, PaginationResult<ShellDescriptor>)> {
    let result = insert_and_list(context, descriptors, limit).await;
    context.shutdown().await;
    result
}

async fn insert_and_list(
    context: &RegistryContext,
    descriptors: Vec<ShellDescriptor>,
    limit: u32,
) -> anyhow::Result<(usize, PaginationResult<ShellDescriptor>)> {
    let shells = context.shell_storage();
    let mut imported = 0usize;
    for descriptor in descriptors {
        let id = descriptor.id.clone();
        shells
            .insert(descriptor)
            .await
            .with_context(|| format!("Failed to import shell descriptor '{id}'"))?;
        imported += 1;
    }
    let page = shells
        .get_all(PaginationRequest::first(limit), &DescriptorFilter::allow_all())
        .await?;
    Ok((imported, page))
}
