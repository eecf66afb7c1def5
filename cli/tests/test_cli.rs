//! End-to-end tests for the `medcost` binary
//!
//! Exit codes: 0 on success, 2 for invalid or missing parameters, 1 for
//! every other failure.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn medcost() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_medcost"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn catalog_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

// ---------------------------------------------------------------------------
// Success
// ---------------------------------------------------------------------------

#[test]
fn test_normalize_prints_canonical_speciality() {
    let output = medcost().args(["normalize", "heart", "specialist"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Cardiology");
}

#[test]
fn test_estimate_json() {
    let output = medcost()
        .args(["estimate", "Dengue", "--city", "Ahmedabad", "--type", "government", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let estimate: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // 8000 × 1.05 × 0.5 = 4200
    assert_eq!(estimate["predicted_disease"], "Dengue");
    assert_eq!(estimate["low"], 3570);
    assert_eq!(estimate["high"], 4830);
}

#[test]
fn test_tables_fingerprint_is_sha256_hex() {
    let output = medcost().args(["tables", "--fingerprint"]).output().unwrap();

    assert!(output.status.success());
    let fingerprint = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert_eq!(fingerprint.len(), 64);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_search_empty_catalog_succeeds() {
    let catalog = catalog_file("[]");
    let output = medcost()
        .args(["search", "--speciality", "ENT", "--city", "Delhi", "--catalog"])
        .arg(catalog.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "No hospitals found");
}

// ---------------------------------------------------------------------------
// Validation failures exit with 2
// ---------------------------------------------------------------------------

#[test]
fn test_search_without_speciality_exits_2() {
    let catalog = catalog_file("[]");
    let output = medcost()
        .args(["search", "--city", "Delhi", "--catalog"])
        .arg(catalog.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("speciality"));
}

#[test]
fn test_search_negative_budget_exits_2() {
    let catalog = catalog_file("[]");
    let output = medcost()
        .args(["search", "--speciality", "ENT", "--city", "Delhi", "--budget=-5", "--catalog"])
        .arg(catalog.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// Other failures exit with 1
// ---------------------------------------------------------------------------

#[test]
fn test_missing_catalog_file_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = medcost()
        .args(["search", "--speciality", "ENT", "--city", "Delhi", "--catalog"])
        .arg(dir.path().join("missing.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_malformed_record_exits_1() {
    let catalog = catalog_file(
        r#"[{"name": "Bad", "city": "Delhi", "specialities": ["ENT"], "base_cost_factor": -1.0}]"#,
    );
    let output = medcost()
        .args(["search", "--speciality", "ENT", "--city", "Delhi", "--catalog"])
        .arg(catalog.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Bad"));
}

#[test]
fn test_invalid_pricing_file_exits_1() {
    let pricing = catalog_file("not json");
    let output = medcost()
        .args(["tables", "--fingerprint", "--pricing"])
        .arg(pricing.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
