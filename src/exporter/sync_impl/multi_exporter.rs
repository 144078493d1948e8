//! 同步多导出器管理模块

use super::SyncExporter;
use crate::applog::types::AnalysisResult;
use crate::exporter::ExportStats;

/// 同步多导出器管理器
///
/// 单个导出器失败只记入它自己的统计，不影响其他导出器。
pub struct SyncMultiExporter {
    exporters: Vec<Box<dyn SyncExporter>>,
    stats: Vec<ExportStats>,
}

impl SyncMultiExporter {
    /// 创建新的同步多导出器
    pub fn new() -> Self {
        Self { exporters: Vec::new(), stats: Vec::new() }
    }

    /// 添加导出器
    pub fn add_exporter<E>(&mut self, exporter: E)
    where
        E: SyncExporter + 'static,
    {
        self.exporters.push(Box::new(exporter));
        self.stats.push(ExportStats::new());
    }

    pub fn len(&self) -> usize {
        self.exporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exporters.is_empty()
    }

    /// 将解析结果导出到所有导出器
    pub fn export_result(&mut self, result: &AnalysisResult) {
        for (exporter, stats) in self.exporters.iter_mut().zip(self.stats.iter_mut()) {
            match exporter.export_result(result) {
                Ok(()) => {
                    stats.exported_statements += result.statements.len();
                    stats.exported_errors += result.errors.len();
                }
                Err(e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("导出器 {} 导出失败: {}", exporter.name(), e);
                    #[cfg(not(feature = "logging"))]
                    let _ = e;
                    stats.failed_batches += 1;
                }
            }
        }
    }

    /// 完成所有导出器
    pub fn finalize_all(&mut self) {
        for (exporter, stats) in self.exporters.iter_mut().zip(self.stats.iter_mut()) {
            match exporter.finalize() {
                Ok(()) => stats.finish(),
                Err(e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("导出器 {} 完成失败: {}", exporter.name(), e);
                    #[cfg(not(feature = "logging"))]
                    let _ = e;
                    stats.failed_batches += 1;
                }
            }
        }
    }

    /// 获取所有导出器的统计信息
    pub fn get_all_stats(&self) -> Vec<(String, ExportStats)> {
        self.exporters
            .iter()
            .zip(self.stats.iter())
            .map(|(exporter, stats)| (exporter.name().to_string(), stats.clone()))
            .collect()
    }
}

impl Default for SyncMultiExporter {
    fn default() -> Self {
        Self::new()
    }
}
