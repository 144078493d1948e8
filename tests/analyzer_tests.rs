//! 日志解析集成测试

mod common;

use applog_analysis::applog::LogAnalyzer;
use applog_analysis::config::AnalysisOptions;
use tempfile::TempDir;

#[test]
fn test_end_to_end_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = common::create_test_log(&temp_dir, "simple.log", common::SIMPLE_LOG_CONTENT);

    let result = LogAnalyzer::default().analyze_file(&path).unwrap();
    assert_eq!(result.statements.len(), 1);
    assert!(result.errors.is_empty());

    let entry = &result.statements[0];
    assert_eq!(entry.command_kind, "SELECT");
    assert_eq!(entry.final_sql, "SELECT * FROM USERS WHERE ID = 7");
    assert_eq!(entry.parameter_values, vec!["7"]);
    assert_eq!(entry.originating_function, "findUser");
    assert_eq!(entry.timestamp, "2024-01-01 10:00:00");
}

#[test]
fn test_sample_statements() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = common::create_sample_log(&temp_dir);
    let result = LogAnalyzer::default().analyze_file(&path).unwrap();

    let functions: Vec<_> = result
        .statements
        .iter()
        .map(|e| e.originating_function.as_str())
        .collect();
    assert_eq!(functions, vec!["countPending", "insert", "selectById"]);

    let count = &result.statements[0];
    assert_eq!(count.final_sql, count.template_sql);
    assert!(count.parameter_values.is_empty());
    assert_eq!(count.screen_id, None);

    let insert = &result.statements[1];
    assert_eq!(insert.command_kind, "INSERT");
    assert_eq!(
        insert.final_sql,
        "INSERT INTO ORDERS (ORDER_ID, USER_ID, AMOUNT) VALUES ('A-001', 42, 19.99)"
    );
    assert_eq!(insert.screen_id.as_deref(), Some("OR2001"));

    let select = &result.statements[2];
    assert_eq!(
        select.final_sql,
        "SELECT ID, NAME FROM USERS WHERE ID = 42 AND STATUS = 'ACTIVE'"
    );
    assert_eq!(select.screen_id.as_deref(), Some("MU0101"));
    assert_eq!(select.timestamp, "2024-03-05 09:15:00");
}

#[test]
fn test_sample_error_block() {
    let result = LogAnalyzer::default().analyze_str(common::SAMPLE_APPLOG_CONTENT);
    assert_eq!(result.errors.len(), 1);

    let error = &result.errors[0];
    assert_eq!(error.timestamp, "2024-03-05 09:16:11");
    assert_eq!(error.summary, "Failed to register order A-001");
    assert_eq!(error.screen_id.as_deref(), Some("OR2001"));
    // 触发行 + 3 行续行
    assert_eq!(error.details.lines().count(), 4);
    assert!(error.details.ends_with("(OrderController.java:41)"));
}

#[test]
fn test_substituted_statements_have_no_placeholders() {
    let result = LogAnalyzer::default().analyze_str(common::SAMPLE_APPLOG_CONTENT);
    for entry in result.statements.iter().filter(|e| !e.parameter_values.is_empty()) {
        assert!(!entry.final_sql.contains('?'), "{}", entry.final_sql);
    }
}

#[test]
fn test_results_sorted_descending() {
    let result = LogAnalyzer::default().analyze_str(common::SAMPLE_APPLOG_CONTENT);
    let stamps: Vec<_> = result
        .statements
        .iter()
        .map(|e| e.timestamp.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_numeric_quoting_depends_on_declared_type() {
    let log = "\
2024-01-01 10:00:00 DEBUG --- [t-1] c.x.M.a : ==> Preparing: SELECT ? , ?
2024-01-01 10:00:00 DEBUG --- [t-1] c.x.M.a : ==> Parameters: 42(Integer), 42(String)
";
    let result = LogAnalyzer::default().analyze_str(log);
    assert_eq!(result.statements[0].final_sql, "SELECT 42 , '42'");
}

#[test]
fn test_multiple_blocks_in_window_yield_multiple_entries() {
    let log = "\
2024-01-01 10:00:00 DEBUG --- [t-1] c.x.M.a : ==> Parameters: 1(Integer)
2024-01-01 10:00:00 DEBUG --- [t-1] c.x.M.a : ==> Preparing: DELETE FROM T WHERE ID = ?
2024-01-01 10:00:00 DEBUG --- [t-1] c.x.M.a : ==> Parameters: 2(Integer)
";
    let result = LogAnalyzer::default().analyze_str(log);
    let sqls: Vec<_> = result.statements.iter().map(|e| e.final_sql.as_str()).collect();
    // 同一时间戳，保持窗口扫描顺序
    assert_eq!(sqls, vec!["DELETE FROM T WHERE ID = 1", "DELETE FROM T WHERE ID = 2"]);
}

#[test]
fn test_fallback_ignores_thread() {
    let log = "\
2024-01-01 10:00:00 DEBUG --- [t-1] c.x.M.a : ==> Preparing: SELECT * FROM T WHERE ID = ?
x
x
x
x
x
x
2024-01-01 10:00:00 DEBUG --- [t-9] c.x.M.a : ==> Parameters: 5(Integer)
";
    // 窗口 ±6 覆盖不到第 7 行，兜底向后 5 行也不够
    let result = LogAnalyzer::default().analyze_str(log);
    assert_eq!(result.statements[0].final_sql, "SELECT * FROM T WHERE ID = ?");

    let wider = LogAnalyzer::new(AnalysisOptions {
        parameter_window: 2,
        fallback_lookahead: 7,
        ..Default::default()
    });
    let result = wider.analyze_str(log);
    assert_eq!(result.statements[0].final_sql, "SELECT * FROM T WHERE ID = 5");
}

#[test]
fn test_lenient_decoding() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut bytes =
        b"2024-01-01 10:00:00 DEBUG --- [t-1] c.x.M.a : ==> Preparing: SELECT 1 FROM DUAL"
            .to_vec();
    bytes.extend_from_slice(&[0xFF, 0xFE, b'\n']);
    let path = common::create_test_log_bytes(&temp_dir, "bad.log", &bytes);

    let result = LogAnalyzer::default().analyze_file(&path).unwrap();
    assert_eq!(result.statements.len(), 1);
    assert_eq!(result.statements[0].final_sql, "SELECT 1 FROM DUAL");
}

#[test]
fn test_missing_file_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = LogAnalyzer::default()
        .analyze_file(temp_dir.path().join("missing.log"))
        .unwrap_err();
    assert!(err.is_read_error());
    assert!(err.to_string().contains("missing.log"));
}

#[test]
fn test_independent_runs() {
    let analyzer = LogAnalyzer::default();
    let first = analyzer.analyze_str(common::SAMPLE_APPLOG_CONTENT);
    // 第二次解析不能继承第一次的线程画面
    let second = analyzer.analyze_str(
        "2024-03-05 10:00:00 DEBUG --- [nio-8080-exec-2] c.e.M.a : ==> Preparing: SELECT 1\n",
    );
    assert_eq!(first.statements[1].screen_id.as_deref(), Some("OR2001"));
    assert_eq!(second.statements[0].screen_id, None);
}
