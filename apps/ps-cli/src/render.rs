//! Plain-text rendering of snapshots and quotes.

use ps_app::{Quote, Snapshot};
use ps_reference::{Industry, IndustryStandard, SuggestedChemical};
use ps_sizing::DosingAgent;

pub fn standards(
    industry: Industry,
    s: &IndustryStandard,
    chemicals: &[SuggestedChemical],
) -> String {
    let mut out = format!("Standard values: {}\n", industry.display_name());
    out.push_str(&format!("  BOD:         {} mg/L\n", s.bod_mg_l));
    out.push_str(&format!("  COD:         {} mg/L\n", s.cod_mg_l));
    out.push_str(&format!("  TSS:         {} mg/L\n", s.tss_mg_l));
    out.push_str(&format!("  pH:          {} - {}\n", s.ph.min, s.ph.max));
    out.push_str(&format!("  Oil/Grease:  {} mg/L\n", s.oil_grease_mg_l));
    out.push_str(&format!("  Nitrogen:    {} mg/L\n", s.nitrogen_mg_l));

    out.push_str("\nSuggested chemicals:\n");
    if chemicals.is_empty() {
        out.push_str("  No chemical data available\n");
    }
    for c in chemicals {
        out.push_str(&format!(
            "  {:<26} {:>6} ppm  ₹{}/kg\n",
            c.chemical.display_name(),
            c.default_concentration_ppm,
            c.unit_price()
        ));
    }
    out
}

pub fn sizing(snap: &Snapshot) -> String {
    let mut out = format!("Treatment: {}\n", snap.train.description());
    out.push_str(&format!(
        "Capacity: {} m³/day  Flow rate: {:.2} m³/hr  Peak flow: {:.2} m³/hr\n",
        snap.params.capacity_m3_per_day, snap.flow_rate, snap.peak_flow
    ));
    if let Some(name) = snap.industry_name {
        out.push_str(&format!("Industry: {}\n", name));
    }
    out.push_str(&parameters(snap));

    out.push_str("\nTank details:\n");
    out.push_str(&format!("  {:<26} {:>12}  {}\n", "Tank", "Volume (m³)", "L×B×H (m)"));
    for row in &snap.tanks {
        out.push_str(&format!(
            "  {:<26} {:>12.2}  {}×{:.2}×{}\n",
            row.name, row.volume_m3, row.length_m, row.breadth_m, row.height_m
        ));
    }

    out.push_str("\nSludge:\n");
    match &snap.sludge {
        Some(s) => {
            out.push_str(&format!(
                "  Total sludge:  {:.2} kg/day\n",
                s.total_sludge_kg_per_day
            ));
            out.push_str(&format!(
                "  Liquid sludge: {:.2} L/day\n",
                s.liquid_sludge_l_per_day
            ));
        }
        None => out.push_str("  No standard values available\n"),
    }
    out
}

/// Influent values, with the standard limit and a verdict when the industry
/// has standards.
pub fn parameters(snap: &Snapshot) -> String {
    let mut out = String::from("\nIndustry parameters:\n");
    if snap.compliance.is_empty() {
        let p = &snap.params;
        out.push_str(&format!("  BOD:          {} mg/L\n", p.bod_mg_l));
        out.push_str(&format!("  COD:          {} mg/L\n", p.cod_mg_l));
        out.push_str(&format!("  TSS:          {} mg/L\n", p.tss_mg_l));
        out.push_str(&format!("  pH:           {}\n", p.ph));
        out.push_str(&format!("  Oil & Grease: {} mg/L\n", p.oil_grease_mg_l));
        out.push_str(&format!("  Nitrogen:     {} mg/L\n", p.nitrogen_mg_l));
        out.push_str("  No standard values available\n");
        return out;
    }

    out.push_str(&format!(
        "  {:<14} {:>14} {:>16}  {}\n",
        "Parameter", "Current Value", "Standard Limit", "Status"
    ));
    for check in &snap.compliance {
        let current = format!("{} {}", check.current, check.unit);
        let limit = format!("{} {}", check.limit, check.unit);
        let status = if check.compliant { "OK" } else { "EXCEEDS" };
        out.push_str(&format!(
            "  {:<14} {:>14} {:>16}  {}\n",
            check.name,
            current.trim_end(),
            limit.trim_end(),
            status
        ));
    }
    out
}

pub fn recommendations(doses: &[(DosingAgent, f64)]) -> String {
    let mut out = String::from("\nRecommended doses:\n");
    if doses.is_empty() {
        out.push_str("  None (no standards or pump flow)\n");
    }
    for (agent, dose) in doses {
        out.push_str(&format!("  {:<18} {:.3}\n", agent.display_name(), dose));
    }
    out
}

pub fn quote(q: &Quote) -> String {
    let snap = &q.snapshot;
    let mut out = format!("QUOTATION {}    Date: {}\n", q.reference, q.date);
    out.push_str(&format!("{}\n", q.name));

    let client = &snap.client;
    for (label, value) in [
        ("Client", &client.name),
        ("Company", &client.company),
        ("Email", &client.email),
        ("Phone", &client.phone),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("{}: {}\n", label, value));
        }
    }

    out.push('\n');
    out.push_str(&sizing(snap));

    out.push_str("\nEquipment details:\n");
    for item in snap.equipment.equipment() {
        let basis = item.size_basis();
        out.push_str(&format!(
            "  {:<30} {:>3}  {:>14}  ({}, {:.2} {})\n",
            item.name,
            item.quantity,
            rupees(item.total_price),
            item.rule.label(),
            item.size,
            basis.unit()
        ));
    }

    out.push_str("\nFixed costs:\n");
    for cost in &q.fixed_costs {
        out.push_str(&format!("  {:<30}      {:>14}\n", cost.name, rupees(cost.price)));
    }

    if !snap.dosing.is_empty() {
        out.push_str("\nChemical dosing:\n");
        for d in &snap.dosing {
            out.push_str(&format!(
                "  {:<26} {:>7} ppm  {:>8.2} kg/day  {:>12}/day\n",
                d.chemical.display_name(),
                d.concentration_ppm,
                d.daily_quantity(),
                rupees(d.daily_cost())
            ));
        }
    }

    let totals = &snap.totals;
    out.push_str("\nCost breakdown:\n");
    out.push_str(&format!("  Equipment cost        {:>14}\n", rupees(totals.equipment_only_subtotal)));
    out.push_str(&format!("  Fixed costs           {:>14}\n", rupees(totals.fixed_subtotal)));
    out.push_str(&format!("  Total cost            {:>14}\n", rupees(totals.total_with_fixed)));
    out.push_str(&format!(
        "  GST @ {:<5}%          {:>14}\n",
        q.gst_percent,
        rupees(q.gst_amount)
    ));
    out.push_str(&format!("  Grand total           {:>14}\n", rupees(q.grand_total)));
    out.push_str(&format!(
        "  Chemical cost         {:>14}/day\n",
        rupees(q.chemical_daily_cost)
    ));

    out.push_str("\nTerms & Conditions\nPAYMENT TERMS:\n");
    for line in &q.terms.payment {
        out.push_str(&format!("  • {}\n", line));
    }
    out.push_str(&format!("DELIVERY:\n  {}\n", q.terms.delivery));
    out.push_str("TAXES, DUTIES & LEVIES:\n");
    for line in &q.terms.taxes {
        out.push_str(&format!("  • {}\n", line));
    }
    out
}

/// ₹ with two decimals and comma thousands separators.
fn rupees(value: f64) -> String {
    let raw = format!("{:.2}", value.abs());
    let (int, frac) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}₹{}.{}", sign, grouped, frac)
}
