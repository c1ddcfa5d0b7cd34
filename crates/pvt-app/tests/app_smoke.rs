//! Case file → curve → export, through the service layer.

use pvt_app::{plot_series, run_case, write_curve_csv, AppError};
use pvt_project::{default_case, save_case, ReferenceDef};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn run_case_with_relative_reference() {
    let dir = scratch_dir("pvt_app_smoke_reference");
    std::fs::write(
        dir.join("lab.csv"),
        "Pressure,FVF\n6500,1.95\n5868,1.96\n4000,1.60\n",
    )
    .unwrap();

    let mut case = default_case();
    case.sweep.sample_count = 200;
    case.reference = Some(ReferenceDef::new("lab.csv"));
    let case_path = dir.join("case.yaml");
    save_case(&case_path, &case).unwrap();

    let report = run_case(&case_path).unwrap();
    assert_eq!(report.name.as_deref(), Some("Example well"));
    assert_eq!(report.curve.len(), 200);
    assert_eq!(report.reference.as_ref().map(|r| r.len()), Some(3));

    let series = plot_series(&report);
    assert_eq!(series.reference.unwrap().x_values, vec![6500.0, 5868.0, 4000.0]);
}

#[test]
fn run_case_reports_missing_reference_columns() {
    let dir = scratch_dir("pvt_app_smoke_bad_columns");
    std::fs::write(dir.join("lab.csv"), "P,Bo\n6500,1.95\n").unwrap();

    let mut case = default_case();
    case.reference = Some(ReferenceDef::new("lab.csv"));
    let case_path = dir.join("case.json");
    save_case(&case_path, &case).unwrap();

    let err = run_case(&case_path).unwrap_err();
    assert!(matches!(err, AppError::Reference { .. }));
    assert!(err.to_string().contains("lab.csv"));
}

#[test]
fn export_writes_every_sample() {
    let dir = scratch_dir("pvt_app_smoke_export");
    let mut case = default_case();
    case.sweep.sample_count = 10;
    let case_path = dir.join("case.yaml");
    save_case(&case_path, &case).unwrap();

    let report = run_case(&case_path).unwrap();
    let out = dir.join("curve.csv");
    write_curve_csv(&out, &report.curve).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 11);
    assert!(text.starts_with("pressure_psia,"));
}
