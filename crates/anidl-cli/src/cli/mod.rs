//! CLI for the anidl string and URL utilities.

mod commands;

use anidl_core::config;
use anidl_core::utils::{QueryParams, QueryValue};
use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    parse_pair, parse_params, run_check_url, run_clean_name, run_decompose, run_join, run_merge,
    run_pad, run_safe_name, run_slug,
};

/// Top-level CLI for anidl.
#[derive(Debug, Parser)]
#[command(name = "anidl")]
#[command(about = "anidl: string and URL helpers for scraping anime listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Strip characters that are illegal in file names.
    SafeName {
        /// Text to sanitize.
        text: String,
    },

    /// Zero-pad an episode number.
    Pad {
        /// Number (as text) to pad.
        num: String,
        /// Target width (default from config, normally 3).
        #[arg(long, value_name = "N")]
        width: Option<usize>,
    },

    /// Merge two `k=v,k=v` parameter lists; keys in RIGHT win.
    Merge {
        #[arg(value_parser = parse_params)]
        left: QueryParams,
        #[arg(value_parser = parse_params)]
        right: QueryParams,
    },

    /// Split a URL into its base and query parameters.
    Decompose {
        /// URL to split.
        url: String,
    },

    /// Append KEY=VALUE parameters to a base URL.
    Join {
        /// Base URL without a query string.
        base: String,
        /// Parameters; these override `default_query` from the config.
        #[arg(value_parser = parse_pair, value_name = "KEY=VALUE")]
        params: Vec<(String, QueryValue)>,
    },

    /// Remove (SUB)/(DUB) tags from a title.
    CleanName {
        /// Display name from the listing.
        name: String,
    },

    /// Build a URL slug from a title.
    Slug {
        /// Display name from the listing.
        name: String,
    },

    /// Check that a string is an http(s) URL (schemes configurable).
    CheckUrl {
        /// Candidate URL.
        url: String,
    },
}

impl CliCommand {
    /// Parses arguments and runs the command. `Ok(false)` means the command ran but reported failure.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::SafeName { text } => run_safe_name(&text),
            CliCommand::Pad { num, width } => run_pad(&cfg, &num, width)?,
            CliCommand::Merge { left, right } => run_merge(&left, &right),
            CliCommand::Decompose { url } => run_decompose(&url),
            CliCommand::Join { base, params } => run_join(&cfg, &base, params),
            CliCommand::CleanName { name } => run_clean_name(&name),
            CliCommand::Slug { name } => run_slug(&name),
            CliCommand::CheckUrl { url } => return run_check_url(&cfg, &url),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests;
