//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::epsg;
use crate::skos::mapping;
use crate::utils::http;
use clap::Parser;
use tracing;

/// Default URI of the GDA94 geodetic CRS definition in the EPSG register.
const DEFAULT_CONCEPT_URI: &str = "http://www.opengis.net/def/crs/EPSG/0/4283";
/// Default URI of the EPSG CRS register index.
const DEFAULT_INDEX_URI: &str = "http://www.opengis.net/def/crs/EPSG/0";

/// Convert EPSG coordinate reference system registry entries
/// into SKOS descriptions, printed to stdout as Turtle.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// epsg-skos cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Describe a single CRS definition as a `skos:Concept`
    Concept {
        /// URI of the GML document to convert.
        #[arg(short, long, default_value_t = String::from(DEFAULT_CONCEPT_URI))]
        uri: String,
    },
    /// Describe the register index as a `skos:ConceptScheme`
    Scheme {
        /// URI of the register index to convert.
        #[arg(short, long, default_value_t = String::from(DEFAULT_INDEX_URI))]
        uri: String,
    },
}

/// Diagnostics go to stderr; stdout carries only the serialized graph.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main entrypoint to application
///
/// # Errors
/// Does not currently error; an unrecoverable conversion failure is logged
/// and terminates the process with exit code 1.
pub fn run() -> std::io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();

    let result = match cli.subcommands {
        Subcommands::Concept { uri } => convert_concept(&uri),
        Subcommands::Scheme { uri } => convert_scheme(&uri),
    };
    let turtle = match result {
        Ok(turtle) => turtle,
        Err(err) => {
            tracing::error!("error: conversion failed: {err:#}");
            std::process::exit(1);
        }
    };
    print!("{turtle}");
    Ok(())
}

/// Fetch one CRS definition and describe it as a `skos:Concept`.
fn convert_concept(uri: &str) -> anyhow::Result<String> {
    tracing::info!("Fetching CRS definition from {uri}");
    let gml = http::fetch(uri)?;
    let record = epsg::concept::extract(&gml)?;
    let graph = mapping::concept_graph(uri, &record)?;
    graph.to_turtle(mapping::CONCEPT_PREFIXES)
}

/// Fetch the register index and describe it as a `skos:ConceptScheme`.
fn convert_scheme(uri: &str) -> anyhow::Result<String> {
    tracing::info!("Fetching register index from {uri}");
    let index = http::fetch(uri)?;
    let record = epsg::index::extract(&index);
    let graph = mapping::scheme_graph(&record)?;
    graph.to_turtle(mapping::SCHEME_PREFIXES)
}
