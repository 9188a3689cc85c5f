//! Quote assembly.

use chrono::NaiveDate;
use ps_project::QuoteFile;
use ps_reference::{FixedCost, fixed_costs};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::session::Session;
use crate::snapshot::Snapshot;

/// Commercial terms printed at the foot of every quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteTerms {
    pub payment: Vec<&'static str>,
    pub delivery: &'static str,
    pub taxes: Vec<String>,
}

impl QuoteTerms {
    pub fn standard(gst_percent: f64) -> Self {
        Self {
            payment: vec![
                "50% advance along with the Purchase Order",
                "40% against Proforma Invoice before Dispatch",
                "10% within one week of Erection and Commissioning of the plant",
            ],
            delivery: "Within 6-8 weeks from the date of receipt of a technically and \
                       commercially correct purchase order.",
            taxes: vec![
                format!("GST: @ {gst_percent}% extra as applicable"),
                "Octroi, freight, loading/unloading and transit insurance extra as per actual."
                    .to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    /// Short reference derived from the quote input.
    pub reference: String,
    /// Formatted `dd-mm-YYYY`.
    pub date: String,
    pub name: String,
    pub snapshot: Snapshot,
    pub fixed_costs: Vec<FixedCost>,
    /// ₹/day across all complete dosing entries.
    pub chemical_daily_cost: f64,
    pub gst_percent: f64,
    /// GST on `total_with_fixed` (₹).
    pub gst_amount: f64,
    pub grand_total: f64,
    pub terms: QuoteTerms,
}

impl Quote {
    pub fn assemble(file: &QuoteFile, session: &Session, date: NaiveDate) -> Self {
        let snapshot = session.snapshot();
        let gst_percent = ps_core::numeric::non_negative(file.terms.gst_percent);
        let subtotal = snapshot.totals.total_with_fixed;
        let gst_amount = subtotal * gst_percent / 100.0;

        let reference = compute_quote_reference(file);
        tracing::debug!(reference = %reference, subtotal, gst_amount, "quote assembled");

        Self {
            reference: short_reference(&reference),
            date: date.format("%d-%m-%Y").to_string(),
            name: file.name.clone(),
            chemical_daily_cost: snapshot.dosing_summary.total_daily_cost,
            fixed_costs: fixed_costs().to_vec(),
            gst_percent,
            gst_amount,
            grand_total: subtotal + gst_amount,
            terms: QuoteTerms::standard(gst_percent),
            snapshot,
        }
    }
}

/// SHA-256 over the canonical JSON of the quote input.
pub fn compute_quote_reference(file: &QuoteFile) -> String {
    let mut hasher = Sha256::new();

    let file_json = serde_json::to_string(file).unwrap_or_default();
    hasher.update(file_json.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

fn short_reference(hash: &str) -> String {
    let head: String = hash.chars().take(10).collect();
    format!("PS-{}", head.to_ascii_uppercase())
}
