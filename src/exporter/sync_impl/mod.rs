//! 同步导出器实现模块

use crate::applog::types::{AnalysisResult, ErrorEntry, StatementEntry};
use crate::error::Result;
use crate::exporter::ExportStats;

/// 同步数据导出器的统一接口
pub trait SyncExporter {
    /// 导出器名称
    fn name(&self) -> &str;

    /// 导出语句
    fn export_statements(&mut self, entries: &[StatementEntry]) -> Result<()>;

    /// 导出错误块
    fn export_errors(&mut self, entries: &[ErrorEntry]) -> Result<()>;

    /// 导出完整的解析结果
    fn export_result(&mut self, result: &AnalysisResult) -> Result<()> {
        self.export_statements(&result.statements)?;
        self.export_errors(&result.errors)
    }

    /// 完成导出，清理资源
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }

    /// 获取导出统计信息
    fn get_stats(&self) -> ExportStats {
        ExportStats::default()
    }
}

#[cfg(feature = "exporter-csv")]
pub mod csv;
#[cfg(feature = "exporter-json")]
pub mod json;
pub mod multi_exporter;

#[cfg(feature = "exporter-csv")]
pub use csv::SyncCsvExporter;
#[cfg(feature = "exporter-json")]
pub use json::SyncJsonExporter;
pub use multi_exporter::SyncMultiExporter;
