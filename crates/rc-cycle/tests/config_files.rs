//! Shipped configuration files load, validate and run.

use rc_cycle::{CycleConfig, CycleError, run_all};
use rc_fluids::LinearFluidModel;
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

#[test]
fn reference_yaml_matches_builtin_reference() {
    let config = CycleConfig::load_yaml(&demo("reference.yaml")).unwrap();
    assert_eq!(config, CycleConfig::reference());
}

#[test]
fn reference_yaml_runs() {
    let config = CycleConfig::load_yaml(&demo("reference.yaml")).unwrap();
    let reports = run_all(&LinearFluidModel::propellants(), &config).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.thrust.thrust.value > 0.0));
}

#[test]
fn save_then_load() {
    let path = std::env::temp_dir().join(format!("rc-cycle-{}.yaml", std::process::id()));
    let config = CycleConfig::reference();
    config.save_yaml(&path).unwrap();
    let loaded = CycleConfig::load_yaml(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, config);
}

#[test]
fn missing_file_is_io_error() {
    let err = CycleConfig::load_yaml(&demo("does-not-exist.yaml")).unwrap_err();
    assert!(matches!(err, CycleError::Io(_)));
}
