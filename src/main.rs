//! XCAP CLI - Command-line tool for rls-services documents.
//!
//! This is the main entry point for the xcap command-line application.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use xcap::prelude::*;
use xcap::rls;

/// xcap - read and write XCAP rls-services documents
#[derive(Parser)]
#[command(name = "xcap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "XCAP_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the services of an rls-services document
    RlsList {
        /// Input rls-services document
        #[arg(short, long)]
        input: PathBuf,

        /// Print the services as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a document and write it back in canonical form
    RlsNormalize {
        /// Input rls-services document
        #[arg(short, long)]
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Write field values without XML escaping
        #[arg(long)]
        legacy: bool,
    },

    /// Append a service to a document
    RlsAdd {
        /// Existing rls-services document (a new one is created if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Service URI
        #[arg(short, long)]
        uri: String,

        /// Resource-list reference
        #[arg(short, long, conflicts_with = "list")]
        resource_list: Option<String>,

        /// Name of a list in the user's resource-lists document
        #[arg(short, long, requires = "xui")]
        list: Option<String>,

        /// XCAP User Identifier owning the resource-lists document
        #[arg(short, long, env = "XCAP_XUI")]
        xui: Option<String>,

        /// Event package (repeatable)
        #[arg(short, long = "package")]
        packages: Vec<String>,
    },

    /// Print the XCAP path of an rls-services document
    RlsPath {
        /// XCAP User Identifier (global document if omitted)
        #[arg(short, long, env = "XCAP_XUI")]
        xui: Option<String>,

        /// Document name
        #[arg(short, long, default_value = rls::DEFAULT_DOCUMENT)]
        document: String,

        /// XCAP root URI to prefix
        #[arg(short, long, env = "XCAP_ROOT")]
        root: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::RlsList { input, json } => {
            cmd_rls_list(&input, json)?;
        }
        Commands::RlsNormalize { input, output, legacy } => {
            cmd_rls_normalize(&input, &output, legacy)?;
        }
        Commands::RlsAdd {
            input,
            output,
            uri,
            resource_list,
            list,
            xui,
            packages,
        } => {
            let resource_list = match (resource_list, list, xui) {
                (Some(reference), _, _) => reference,
                (None, Some(list), Some(xui)) => {
                    DocumentSelector::resource_lists(xui).list_reference(&list)
                }
                _ => anyhow::bail!("either --resource-list or --list with --xui is required"),
            };
            let mut service = Service::new(uri, resource_list);
            service.packages = packages;
            cmd_rls_add(input.as_deref(), &output, service)?;
        }
        Commands::RlsPath { xui, document, root } => {
            cmd_rls_path(xui, document, root.as_deref());
        }
    }

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("xcap_cli={level},xcap_rls={level},xcap_xml={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_services(input: &Path) -> Result<RlsServices> {
    let data = fs::read(input).context("Failed to read input file")?;
    let document = RlsDocument::parse(&data).context("Failed to parse rls-services document")?;
    let services = document.services();
    document.release();
    Ok(services)
}

fn cmd_rls_list(input: &Path, json: bool) -> Result<()> {
    let services = read_services(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&services)?);
        return Ok(());
    }

    for service in &services {
        println!(
            "{}\t{}\t{}",
            service.uri().unwrap_or("-"),
            service.resource_list().unwrap_or("-"),
            service.packages().join(",")
        );
    }

    println!("\nTotal: {} services", services.len());

    Ok(())
}

fn cmd_rls_normalize(input: &Path, output: &Path, legacy: bool) -> Result<()> {
    println!("Normalizing: {} -> {}", input.display(), output.display());

    let services = read_services(input)?;
    let options = if legacy {
        EncodeOptions::legacy()
    } else {
        EncodeOptions::default()
    };

    let xml = rls::encode_services(&services, &options).context("Failed to encode services")?;
    fs::write(output, xml).context("Failed to write output file")?;

    println!("Wrote {} services", services.len());

    Ok(())
}

fn cmd_rls_add(input: Option<&Path>, output: &Path, service: Service) -> Result<()> {
    let mut services = match input {
        Some(path) => read_services(path)?,
        None => RlsServices::new(),
    };

    if let Some(uri) = service.uri() {
        if services.find_by_uri(uri).is_some() {
            tracing::warn!(uri, "a service with this URI already exists");
        }
    }

    services.push(service);

    let xml = services.to_xml().context("Failed to encode services")?;
    fs::write(output, xml).context("Failed to write output file")?;

    println!("Wrote {} services to {}", services.len(), output.display());

    Ok(())
}

fn cmd_rls_path(xui: Option<String>, document: String, root: Option<&str>) {
    let selector = match xui {
        Some(xui) => DocumentSelector::rls_services(xui),
        None => DocumentSelector::global(),
    }
    .with_document(document);

    match root {
        Some(root) => println!("{}", selector.to_url(root)),
        None => println!("{}", selector.path()),
    }
}
