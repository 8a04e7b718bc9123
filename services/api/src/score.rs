use clap::Args;
use receipt_points::error::AppError;
use receipt_points::scoring::rules::{
    items_points, purchase_date_points, purchase_time_points, receipt_total_points,
    retailer_name_points,
};
use receipt_points::scoring::{is_valid, Receipt, ReceiptServiceError, ScoringRule};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    pub(crate) receipt: PathBuf,
    /// Print only the total, without the per-rule breakdown
    #[arg(long)]
    pub(crate) total_only: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { receipt, total_only } = args;

    let raw = fs::read_to_string(&receipt)?;
    let receipt: Receipt =
        serde_json::from_str(&raw).map_err(|_| ReceiptServiceError::MalformedPayload)?;

    if !is_valid(&receipt) {
        return Err(ReceiptServiceError::InvalidReceipt.into());
    }

    let breakdown: [(&str, ScoringRule); 5] = [
        ("retailer name", retailer_name_points),
        ("receipt total", receipt_total_points),
        ("items", items_points),
        ("purchase date", purchase_date_points),
        ("purchase time", purchase_time_points),
    ];

    let mut total = 0u64;
    for (label, rule) in breakdown {
        let points = rule(&receipt);
        total += points;
        if !total_only {
            println!("{label}: {points}");
        }
    }
    println!("total: {total}");

    Ok(())
}
