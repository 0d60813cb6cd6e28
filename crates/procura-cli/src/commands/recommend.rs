//! Recommend command - compare quotes and pick a vendor.

use clap::Args;
use console::style;

use procura_core::extraction::rules::format_usd;
use procura_core::extraction::{QuoteExtractor, RuleBasedExtractor};
use procura_core::models::quote::{ConfidenceLevel, ExtractedQuote};
use procura_core::recommend::{QuoteComparison, VendorRecommender};

use super::config::load_config;
use super::input::load_quotes;

/// Arguments for the recommend command.
#[derive(Args)]
pub struct RecommendArgs {
    /// Quote files (.txt) or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Minimum confidence for a quote to compete on price
    #[arg(long)]
    min_confidence: Option<u8>,

    /// Print the comparison as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RecommendArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let quotes = load_quotes(&args.inputs, &config.drafting.created_by)?;

    let extracted = RuleBasedExtractor::from_config(&config.extraction).extract_all(&quotes)?;

    let mut recommender = VendorRecommender::from_config(&config.recommendation);
    if let Some(min_confidence) = args.min_confidence {
        recommender = recommender.with_min_confidence(min_confidence);
    }

    let comparison = QuoteComparison::from_quotes(&extracted, &recommender);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print_comparison(&extracted, &comparison, recommender.min_confidence());
    }

    Ok(())
}

/// Print a side-by-side table with the recommended quote marked.
pub fn print_comparison(
    quotes: &[ExtractedQuote],
    comparison: &QuoteComparison,
    min_confidence: u8,
) {
    println!(
        "{:<3} {:<10} {:<30} {:>14} {:>9} {:<20} {:>10}",
        "", "ID", "Vendor", "Price", "Delivery", "Terms", "Confidence"
    );

    for quote in quotes {
        let recommended = comparison.recommended_id.as_deref() == Some(quote.id.as_str());
        let marker = if recommended { "★" } else { "" };
        let delivery = if quote.has_delivery() {
            format!("{} days", quote.delivery_days)
        } else {
            "-".to_string()
        };
        let confidence = format!("{}%", quote.confidence);
        let confidence = match quote.confidence_level() {
            ConfidenceLevel::High => style(confidence).green(),
            ConfidenceLevel::Medium => style(confidence).yellow(),
            ConfidenceLevel::Low => style(confidence).red(),
        };

        println!(
            "{:<3} {:<10} {:<30} {:>14} {:>9} {:<20} {:>10}",
            marker,
            quote.id,
            quote.vendor,
            format_usd(quote.price_usd),
            delivery,
            quote.terms,
            confidence
        );
    }

    println!();
    println!("Best price:         {}", format_usd(comparison.best_price));
    println!("Fastest delivery:   {} days", comparison.fastest_delivery);
    println!("Average confidence: {}%", comparison.average_confidence);

    let recommended = comparison
        .recommended_id
        .as_deref()
        .and_then(|id| quotes.iter().find(|q| q.id == id));

    if let Some(quote) = recommended {
        println!();
        println!(
            "{} Recommended: {} ({}) at {}",
            style("✓").green(),
            quote.vendor,
            quote.id,
            format_usd(quote.price_usd)
        );
        if !quote.meets_threshold(min_confidence) {
            println!(
                "{} No quote reached {}% confidence; falling back to the first quote.",
                style("⚠").yellow(),
                min_confidence
            );
        }
    }
}
