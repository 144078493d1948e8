use crate::applog::{AnalysisResult, LogAnalyzer};
use crate::config::{Config, ExportConfig};
use crate::exporter::{ExportStats, SyncMultiExporter};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::{Duration, Instant};

// 提炼复杂返回类型，避免 clippy::type_complexity 警告
type ProcessResult = (AnalysisResult, Vec<(String, ExportStats)>, Duration);

/// 按配置解析单个日志文件。
///
/// # Errors
/// 文件无法读取时返回 `Err(anyhow::Error)`，错误信息包含文件路径。
pub fn analyze_log_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<AnalysisResult> {
    let path = path.as_ref();
    let analyzer = LogAnalyzer::new(config.analysis);
    let result = analyzer
        .analyze_file(path)
        .with_context(|| format!("解析日志文件失败: {}", path.display()))?;

    #[cfg(feature = "logging")]
    tracing::info!(
        "文件 {} 解析完成: {} 条语句, {} 个错误块",
        path.display(),
        result.statements.len(),
        result.errors.len()
    );
    Ok(result)
}

/// 根据 `[export]` 配置构建导出器集合。
///
/// 未启用对应 feature 的导出器配置会被忽略并记录警告。
///
/// # Errors
/// 输出文件无法创建时返回错误。
pub fn build_exporters(export: &ExportConfig) -> Result<SyncMultiExporter> {
    #[allow(unused_mut)]
    let mut multi = SyncMultiExporter::new();

    if let Some(csv) = &export.csv {
        #[cfg(feature = "exporter-csv")]
        {
            let exporter =
                crate::exporter::SyncCsvExporter::new(&csv.statements_path, &csv.errors_path)
                    .with_context(|| {
                        format!("无法创建 CSV 输出文件: {}", csv.statements_path)
                    })?;
            multi.add_exporter(exporter);
        }
        #[cfg(not(feature = "exporter-csv"))]
        {
            let _ = csv;
            #[cfg(feature = "logging")]
            tracing::warn!("配置了 CSV 导出，但未启用 exporter-csv 功能");
        }
    }

    if let Some(json) = &export.json {
        #[cfg(feature = "exporter-json")]
        {
            let exporter = crate::exporter::SyncJsonExporter::new(&json.out_path)?;
            multi.add_exporter(exporter);
        }
        #[cfg(not(feature = "exporter-json"))]
        {
            let _ = json;
            #[cfg(feature = "logging")]
            tracing::warn!("配置了 JSON 导出，但未启用 exporter-json 功能");
        }
    }

    Ok(multi)
}

/// 解析日志文件并写出所有已配置的导出目标。
///
/// # 返回
/// * `Ok((解析结果, 各导出器统计, 总耗时))`
///
/// # 行为说明
/// - 单个导出器失败不会中断其他导出器，失败次数记入其统计
/// - 未配置任何导出器时只做解析
pub fn process_log_file<P: AsRef<Path>>(path: P, config: &Config) -> Result<ProcessResult> {
    let start = Instant::now();
    let result = analyze_log_file(&path, config)?;

    let mut exporters = build_exporters(&config.export)?;
    if !exporters.is_empty() {
        exporters.export_result(&result);
        exporters.finalize_all();
    }
    let stats = exporters.get_all_stats();

    let elapsed = start.elapsed();
    #[cfg(feature = "logging")]
    tracing::debug!("处理总耗时: {elapsed:.2?}");
    Ok((result, stats, elapsed))
}
