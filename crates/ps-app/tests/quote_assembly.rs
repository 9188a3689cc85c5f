use chrono::NaiveDate;
use ps_app::{Quote, session_from_file};
use ps_core::{Tolerances, nearly_equal};
use ps_project::from_yaml_str;
use ps_reference::fixed_costs_total;

const QUOTE_YAML: &str = r#"
version: 1
name: Sunrise Textiles ETP
client:
  name: R. Iyer
  company: Sunrise Textiles
plant:
  plant_type: ETP
  industry: Textile
  capacity_m3_per_day: 1000
  bod_mg_l: 300
  cod_mg_l: 900
  tss_mg_l: 400
  ph: 6.0
treatment: Biological
equipment:
  - id: uf_system
    quantity: 2
chemicals:
  - chemical: PAC
    concentration_ppm: 800
    pump_flow_l_per_hr: 10
    operation_hours: 8
"#;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

#[test]
fn quote_totals_include_gst() {
    let file = from_yaml_str(QUOTE_YAML).unwrap();
    let session = session_from_file(&file);
    let quote = Quote::assemble(&file, &session, date());

    let tol = Tolerances::default();
    let subtotal = quote.snapshot.totals.total_with_fixed;
    assert!(subtotal > fixed_costs_total());
    assert_eq!(quote.gst_percent, 18.0);
    assert!(nearly_equal(quote.gst_amount, subtotal * 0.18, tol));
    assert!(nearly_equal(quote.grand_total, subtotal * 1.18, tol));
    assert!(nearly_equal(quote.chemical_daily_cost, 4160.0, tol));
    assert_eq!(quote.fixed_costs.len(), 5);
}

#[test]
fn quote_metadata() {
    let file = from_yaml_str(QUOTE_YAML).unwrap();
    let session = session_from_file(&file);
    let quote = Quote::assemble(&file, &session, date());

    assert_eq!(quote.date, "14-03-2026");
    assert!(quote.reference.starts_with("PS-"));
    assert_eq!(quote.reference.len(), 13);
    assert_eq!(quote.snapshot.client.company, "Sunrise Textiles");
    assert_eq!(quote.name, "Sunrise Textiles ETP");

    let again = Quote::assemble(&file, &session, date());
    assert_eq!(quote, again);
}

#[test]
fn quote_serializes() {
    let file = from_yaml_str(QUOTE_YAML).unwrap();
    let quote = Quote::assemble(&file, &session_from_file(&file), date());
    let yaml = serde_yaml::to_string(&quote).unwrap();
    assert!(yaml.contains("grand_total"));
    let json = serde_json::to_string(&quote).unwrap();
    assert!(json.contains("\"reference\""));
    assert!(json.contains("\"compliance\""));
}

#[test]
fn quote_compares_influent_with_standard() {
    let file = from_yaml_str(QUOTE_YAML).unwrap();
    let quote = Quote::assemble(&file, &session_from_file(&file), date());
    let checks = &quote.snapshot.compliance;
    assert_eq!(checks.len(), 6);
    let bod = checks.iter().find(|c| c.name == "BOD").unwrap();
    assert_eq!(bod.current, 300.0);
    assert!(!bod.compliant);
    let ph = checks.iter().find(|c| c.name == "pH").unwrap();
    assert!(ph.compliant);
}
