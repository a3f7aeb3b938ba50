//! Integration tests for scenario files on disk

use std::fs;
use std::path::Path;

use cup_economics::dashboard::ProjectionSnapshot;
use cup_economics::scenario::{self, ScenarioError};
use cup_economics::Inputs;
use tempfile::TempDir;

/// Create a directory with two valid scenarios, one broken file and a
/// non-scenario file that must be ignored
fn create_scenario_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    let base = temp.path();

    fs::write(
        base.join("downtown.json"),
        r#"{"sales": {"pricePerCup": 6000, "cupsPerDay": 80}}"#,
    )
    .unwrap();

    fs::create_dir(base.join("kiosks")).unwrap();
    fs::write(
        base.join("kiosks/campus.json"),
        r#"{"sales": {"pricePerCup": 1000}, "fixedCosts": {"totalMonthlyFixed": 500000}}"#,
    )
    .unwrap();
    fs::write(base.join("kiosks/broken.json"), "{ not json").unwrap();
    fs::write(base.join("notes.txt"), "price ideas").unwrap();

    temp
}

#[test]
fn load_reads_partial_scenario() {
    let temp = create_scenario_dir();
    let inputs = scenario::load(&temp.path().join("downtown.json")).unwrap();

    assert_eq!(inputs.sales.price_per_cup, 6000.0);
    assert_eq!(inputs.sales.cups_per_day, 80.0);
    assert_eq!(inputs.sales.days_per_month, 26.0);
    assert_eq!(inputs.capital, Inputs::default().capital);
}

#[test]
fn load_missing_file_is_io_error() {
    let err = scenario::load(Path::new("/nonexistent/scenario.json")).unwrap_err();
    assert!(matches!(err, ScenarioError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/scenario.json"));
}

#[test]
fn find_scenario_files_only_returns_json() {
    let temp = create_scenario_dir();
    let files = scenario::find_scenario_files(temp.path());
    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(temp.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["downtown.json", "kiosks/broken.json", "kiosks/campus.json"]);
}

#[test]
fn evaluate_dir_counts_errors_without_failing() {
    let temp = create_scenario_dir();
    let (rows, stats) = scenario::evaluate_dir(temp.path());

    assert_eq!(stats.evaluated, 2);
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.to_string(), "Evaluated 2 scenarios. Errors: 1");

    let downtown = &rows[0];
    assert!(downtown.path.ends_with("downtown.json"));
    // 80 * 26 cups at 6000 - 1580
    assert_eq!(downtown.result.monthly_profit, 2080.0 * 4420.0);
    assert!(downtown.result.is_profitable());

    let campus = &rows[1];
    assert!(campus.path.ends_with("campus.json"));
    assert!(!campus.result.is_profitable());
    assert_eq!(campus.result.roi_months, f64::INFINITY);
}

#[test]
fn overrides_apply_on_top_of_a_file() {
    let temp = create_scenario_dir();
    let mut inputs = scenario::load(&temp.path().join("kiosks/campus.json")).unwrap();
    scenario::apply_override(&mut inputs, "sales.pricePerCup=5000").unwrap();

    let r = inputs.compute();
    assert_eq!(r.net_monthly_profit, 1300.0 * 3420.0 - 500_000.0);
}

#[test]
fn snapshot_round_trips_inputs_through_scenario_loader() {
    let mut inputs = Inputs::default();
    inputs.sales.cups_per_day = 75.0;
    let snapshot = ProjectionSnapshot::new(&inputs, &inputs.compute());

    let mut json = serde_json::to_value(snapshot).unwrap();
    // A saved projection carries results the loader does not accept
    json.as_object_mut().unwrap().remove("results");

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("saved.json");
    fs::write(&path, json.to_string()).unwrap();

    assert_eq!(scenario::load(&path).unwrap(), inputs);
}
