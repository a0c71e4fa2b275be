//! Utility modules shared by the converters.

/// Running the CLI.
pub mod cli;
/// Fetching registry documents over HTTP.
pub mod http;
