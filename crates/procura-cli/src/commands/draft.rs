//! Draft command - purchase order for the recommended or chosen vendor.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use procura_core::extraction::rules::format_usd;
use procura_core::session::QuoteSession;

use super::config::load_config;
use super::extract::write_output;
use super::input::load_quotes;

/// Arguments for the draft command.
#[derive(Args)]
pub struct DraftArgs {
    /// Quote files (.txt) or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Quote id (file stem) to order from instead of the recommendation
    #[arg(long)]
    vendor: Option<String>,

    /// Approve the purchase order after drafting
    #[arg(long)]
    approve: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: DraftArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mut session = QuoteSession::new(&config);

    for quote in load_quotes(&args.inputs, &config.drafting.created_by)? {
        session.add_quote(quote)?;
    }
    session.analyze()?;

    let vendor_id = match args.vendor {
        Some(id) => id,
        None => session
            .recommended()
            .map(|q| q.id.clone())
            .ok_or_else(|| anyhow::anyhow!("No vendor could be recommended"))?,
    };

    let selected = session.select_vendor(&vendor_id)?;
    info!("Drafting purchase order for {}", selected.vendor);

    session.draft_purchase_order()?;
    if args.approve {
        session.approve_purchase_order()?;
    }

    let po = session
        .purchase_order()
        .ok_or_else(|| anyhow::anyhow!("No purchase order drafted"))?;

    eprintln!(
        "{} {} for {} totalling {} ({})",
        style("✓").green(),
        po.po_number,
        po.vendor.vendor,
        format_usd(po.total()),
        po.status
    );

    write_output(&serde_json::to_string_pretty(po)?, args.output.as_ref())
}
