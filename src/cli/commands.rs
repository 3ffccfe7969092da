//! CLI command definitions for page-forge.
//!
//! `generate` runs a prompt through the full boundary and prints the
//! response envelope as JSON; `classify` shows how a prompt resolves
//! without generating anything.

use std::fs;
use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::api::{self, GenerateRequest};
use crate::classify::{business_type_of, colors_of, industry_of};
use crate::error::GenerationError;
use crate::generator::Synthesizer;
use crate::taxonomy::{BusinessType, Industry};

/// Marketing page content generator.
#[derive(Parser)]
#[command(name = "page-forge")]
#[command(about = "Generate a complete marketing-page content document from a one-line prompt")]
#[command(version)]
#[command(
    long_about = "page-forge classifies a short product description into an industry and \
business type, detects color preferences, and assembles a full page document from \
per-industry template tables.\n\nExample usage:\n  page-forge generate --prompt \
\"A SaaS tool for project management\" --seed 42"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a page content document from a prompt.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Show how a prompt classifies without generating a document.
    Classify(ClassifyArgs),
}

/// Arguments for `page-forge generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Product description to generate from.
    #[arg(short, long)]
    pub prompt: String,

    /// Industry hint (kebab-case label, e.g. "saas", "real-estate").
    #[arg(long)]
    pub industry: Option<String>,

    /// Business-type hint (kebab-case label, e.g. "b2b", "one-time").
    #[arg(long)]
    pub business_type: Option<String>,

    /// Seed for reproducible tagline and design-variation picks.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the response JSON to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Emit compact single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `page-forge classify`.
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Product description to classify.
    #[arg(short, long)]
    pub prompt: String,

    /// Emit the result as JSON instead of plain text.
    #[arg(short, long)]
    pub json: bool,
}

/// Parses CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses and runs in one step.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli())
}

/// Runs an already-parsed CLI invocation.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Classify(args) => run_classify(args),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let request = GenerateRequest {
        prompt: args.prompt,
        industry: parse_industry(args.industry.as_deref())?,
        business_type: parse_business_type(args.business_type.as_deref())?,
    };

    let response = match args.seed {
        Some(seed) => api::handle_with(&mut Synthesizer::seeded(seed), &request),
        None => api::handle(&request),
    };

    let rendered = if args.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };

    match args.output {
        Some(path) => {
            fs::write(Path::new(&path), &rendered)?;
            info!(%path, "wrote response");
        }
        None => println!("{rendered}"),
    }

    if !response.success {
        anyhow::bail!(
            "generation failed: {}",
            response.error.unwrap_or_else(|| "unknown error".to_string())
        );
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyReport {
    industry: Industry,
    business_type: BusinessType,
    colors: Vec<String>,
}

fn run_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let report = ClassifyReport {
        industry: industry_of(&args.prompt),
        business_type: business_type_of(&args.prompt),
        colors: colors_of(&args.prompt)
            .iter()
            .map(|color| color.name().to_string())
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("industry:      {}", report.industry);
        println!("business type: {}", report.business_type);
        println!(
            "colors:        {}",
            if report.colors.is_empty() {
                "(none)".to_string()
            } else {
                report.colors.join(", ")
            }
        );
    }
    Ok(())
}

fn parse_industry(label: Option<&str>) -> Result<Option<Industry>, GenerationError> {
    label
        .map(|slug| {
            Industry::from_slug(slug)
                .ok_or_else(|| GenerationError::UnknownIndustry(slug.to_string()))
        })
        .transpose()
}

fn parse_business_type(label: Option<&str>) -> Result<Option<BusinessType>, GenerationError> {
    label
        .map(|slug| {
            BusinessType::from_slug(slug)
                .ok_or_else(|| GenerationError::UnknownBusinessType(slug.to_string()))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_industry_accepts_known_slugs() {
        assert_eq!(
            parse_industry(Some("real-estate")).expect("valid label"),
            Some(Industry::RealEstate)
        );
        assert_eq!(parse_industry(None).expect("absent is fine"), None);
    }

    #[test]
    fn parse_industry_rejects_unknown_slugs() {
        let error = parse_industry(Some("fintech")).expect_err("unknown label");
        assert!(matches!(error, GenerationError::UnknownIndustry(_)));
    }

    #[test]
    fn parse_business_type_round_trips() {
        assert_eq!(
            parse_business_type(Some("one-time")).expect("valid label"),
            Some(BusinessType::OneTime)
        );
        let error = parse_business_type(Some("b2b2c")).expect_err("unknown label");
        assert!(matches!(error, GenerationError::UnknownBusinessType(_)));
    }

    #[test]
    fn cli_parses_generate_invocation() {
        let cli = Cli::try_parse_from([
            "page-forge",
            "generate",
            "--prompt",
            "a travel planner",
            "--seed",
            "7",
            "--compact",
        ])
        .expect("valid invocation");
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.prompt, "a travel planner");
                assert_eq!(args.seed, Some(7));
                assert!(args.compact);
            }
            _ => panic!("expected generate subcommand"),
        }
    }
}
