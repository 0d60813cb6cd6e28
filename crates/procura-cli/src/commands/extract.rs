//! Extract command - structured fields from quote files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::info;

use procura_core::extraction::rules::format_usd;
use procura_core::extraction::{QuoteExtractor, RuleBasedExtractor};
use procura_core::models::config::TermsDetection;
use procura_core::models::quote::ExtractedQuote;

use super::config::load_config;
use super::input::load_quotes;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Quote files (.txt) or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Only accept explicitly labeled payment terms
    #[arg(long)]
    strict_terms: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let quotes = load_quotes(&args.inputs, &config.drafting.created_by)?;

    let mut extractor = RuleBasedExtractor::from_config(&config.extraction);
    if args.strict_terms {
        extractor = extractor.with_terms_detection(TermsDetection::Strict);
    }
    let extracted = extractor.extract_all(&quotes)?;

    info!(
        "Extracted {} quotes in {:?}",
        extracted.len(),
        start.elapsed()
    );

    let output = format_quotes(&extracted, args.format)?;
    write_output(&output, args.output.as_ref())
}

/// Print to stdout or write to a file.
pub fn write_output(output: &str, path: Option<&PathBuf>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)?;
            eprintln!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output),
    }
    Ok(())
}

pub fn format_quotes(quotes: &[ExtractedQuote], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(quotes)?),
        OutputFormat::Csv => format_csv(quotes),
        OutputFormat::Text => Ok(format_text(quotes)),
    }
}

fn format_csv(quotes: &[ExtractedQuote]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "id",
        "vendor",
        "price_usd",
        "delivery_days",
        "terms",
        "confidence",
        "issues",
    ])?;

    for quote in quotes {
        wtr.write_record([
            &quote.id,
            &quote.vendor,
            &quote.price_usd.to_string(),
            &quote.delivery_days.to_string(),
            &quote.terms,
            &quote.confidence.to_string(),
            &quote.issues().join("; "),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(quotes: &[ExtractedQuote]) -> String {
    let mut output = String::new();

    for quote in quotes {
        output.push_str(&format!("Quote {}: {}\n", quote.id, quote.vendor));
        output.push_str(&format!("  Price:      {}\n", format_usd(quote.price_usd)));
        if quote.has_delivery() {
            output.push_str(&format!("  Delivery:   {} days\n", quote.delivery_days));
        } else {
            output.push_str("  Delivery:   unknown\n");
        }
        output.push_str(&format!("  Terms:      {}\n", quote.terms));
        output.push_str(&format!(
            "  Confidence: {}% ({})\n",
            quote.confidence,
            quote.confidence_level().display()
        ));
        for issue in quote.issues() {
            output.push_str(&format!("  ! {}\n", issue));
        }
        output.push('\n');
    }

    output
}
