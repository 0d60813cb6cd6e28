//! Demo command - full workflow on the built-in quotes.

use clap::Args;
use console::style;

use procura_core::recommend::{QuoteComparison, VendorRecommender};
use procura_core::session::QuoteSession;

use super::config::load_config;
use super::recommend::print_comparison;

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Approve the drafted purchase order
    #[arg(long)]
    approve: bool,

    /// Print the session result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: DemoArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut session = QuoteSession::new(&config);

    session.load_demo_data();
    session.analyze()?;

    let recommended = session
        .recommended()
        .map(|q| q.id.clone())
        .ok_or_else(|| anyhow::anyhow!("No vendor could be recommended"))?;
    session.select_vendor(&recommended)?;
    session.draft_purchase_order()?;
    if args.approve {
        session.approve_purchase_order()?;
    }

    let po = session
        .purchase_order()
        .ok_or_else(|| anyhow::anyhow!("No purchase order drafted"))?;

    if args.json {
        let result = serde_json::json!({
            "quotes": session.extracted(),
            "purchaseOrder": po,
            "activityLog": session.activity_log(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", style("Quote comparison").bold());
    let recommender = VendorRecommender::from_config(&config.recommendation);
    let comparison = QuoteComparison::from_quotes(session.extracted(), &recommender);
    print_comparison(
        session.extracted(),
        &comparison,
        config.recommendation.min_confidence,
    );

    println!();
    println!("{}", style("Purchase order").bold());
    println!("{}", serde_json::to_string_pretty(po)?);

    println!();
    println!("{}", style("Activity log").bold());
    for entry in session.activity_log() {
        println!(
            "  {} {:<20} {:<10} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.action,
            entry.user,
            entry.details.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
