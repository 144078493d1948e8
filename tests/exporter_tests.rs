//! 导出功能集成测试

mod common;

use applog_analysis::applog::LogAnalyzer;
use applog_analysis::config::{Config, CsvConfig, JsonConfig};
use applog_analysis::exporter::{SyncExporter, SyncMultiExporter};
use applog_analysis::process::{build_exporters, process_log_file};
use std::fs;
use tempfile::TempDir;

#[cfg(feature = "exporter-csv")]
#[test]
fn test_csv_export_of_sample() {
    use applog_analysis::exporter::SyncCsvExporter;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let stmt_path = temp_dir.path().join("statements.csv");
    let err_path = temp_dir.path().join("errors.csv");

    let result = LogAnalyzer::default().analyze_str(common::SAMPLE_APPLOG_CONTENT);
    let mut exporter = SyncCsvExporter::new(&stmt_path, &err_path).unwrap();
    exporter.export_result(&result).unwrap();
    exporter.finalize().unwrap();

    let statements = fs::read_to_string(&stmt_path).unwrap();
    // 表头 + 3 条语句
    assert_eq!(statements.lines().count(), 4);
    assert!(statements.contains(
        "\"INSERT INTO ORDERS (ORDER_ID, USER_ID, AMOUNT) VALUES ('A-001', 42, 19.99)\""
    ));

    let errors = fs::read_to_string(&err_path).unwrap();
    assert!(errors.contains("2024-03-05 09:16:11,OR2001,Failed to register order A-001,"));

    let stats = exporter.get_stats();
    assert_eq!(stats.exported_statements, 3);
    assert_eq!(stats.exported_errors, 1);
}

#[cfg(feature = "exporter-json")]
#[test]
fn test_json_export_of_sample() {
    use applog_analysis::exporter::SyncJsonExporter;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_path = temp_dir.path().join("out.json");

    let result = LogAnalyzer::default().analyze_str(common::SAMPLE_APPLOG_CONTENT);
    let mut exporter = SyncJsonExporter::new(&out_path).unwrap();
    exporter.export_result(&result).unwrap();
    exporter.finalize().unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    let statements = value["statements"].as_array().unwrap();
    assert_eq!(statements.len(), 3);
    assert_eq!(statements[0]["originating_function"], "countPending");
    assert_eq!(statements[2]["screen_id"], "MU0101");
    assert_eq!(value["errors"][0]["screen_id"], "OR2001");
}

#[test]
fn test_build_exporters_from_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    assert!(build_exporters(&config.export).unwrap().is_empty());

    config.export.csv = Some(CsvConfig {
        statements_path: temp_dir.path().join("s.csv").to_string_lossy().into_owned(),
        errors_path: temp_dir.path().join("e.csv").to_string_lossy().into_owned(),
    });
    config.export.json = Some(JsonConfig {
        out_path: temp_dir.path().join("o.json").to_string_lossy().into_owned(),
    });

    let multi: SyncMultiExporter = build_exporters(&config.export).unwrap();
    let expected = usize::from(cfg!(feature = "exporter-csv"))
        + usize::from(cfg!(feature = "exporter-json"));
    assert_eq!(multi.len(), expected);
}

#[test]
fn test_csv_target_in_missing_dir_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log = common::create_sample_log(&temp_dir);

    let mut config = Config::default();
    config.export.csv = Some(CsvConfig {
        statements_path: temp_dir.path().join("no/such/s.csv").to_string_lossy().into_owned(),
        errors_path: temp_dir.path().join("no/such/e.csv").to_string_lossy().into_owned(),
    });

    let outcome = process_log_file(&log, &config);
    if cfg!(feature = "exporter-csv") {
        assert!(outcome.is_err());
    } else {
        assert!(outcome.is_ok());
    }
}
