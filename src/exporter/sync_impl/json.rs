//! JSON 导出器实现 (同步版本)
//!
//! 条目先缓存在内存中，`finalize` 时一次写出：
//!
//! ```json
//! {"exported_at": "...", "statements": [...], "errors": [...]}
//! ```

use super::SyncExporter;
use crate::applog::types::{ErrorEntry, StatementEntry};
use crate::error::Result;
use crate::exporter::ExportStats;
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct JsonDocument<'a> {
    exported_at: String,
    statements: &'a [StatementEntry],
    errors: &'a [ErrorEntry],
}

/// 同步 JSON 导出器
pub struct SyncJsonExporter {
    path: PathBuf,
    statements: Vec<StatementEntry>,
    errors: Vec<ErrorEntry>,
    stats: ExportStats,
}

impl SyncJsonExporter {
    /// 创建新的同步 JSON 导出器
    ///
    /// 文件在 `finalize` 时才创建。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            statements: Vec::new(),
            errors: Vec::new(),
            stats: ExportStats::new(),
        })
    }
}

impl SyncExporter for SyncJsonExporter {
    fn name(&self) -> &str {
        "JSON"
    }

    fn export_statements(&mut self, entries: &[StatementEntry]) -> Result<()> {
        self.statements.extend_from_slice(entries);
        self.stats.exported_statements += entries.len();
        Ok(())
    }

    fn export_errors(&mut self, entries: &[ErrorEntry]) -> Result<()> {
        self.errors.extend_from_slice(entries);
        self.stats.exported_errors += entries.len();
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        let document = JsonDocument {
            exported_at: chrono::Local::now().to_rfc3339(),
            statements: &self.statements,
            errors: &self.errors,
        };

        let file = std::fs::File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        self.stats.finish();

        #[cfg(feature = "logging")]
        tracing::info!("JSON导出完成 {}: {}", self.path.display(), self.stats);
        Ok(())
    }

    fn get_stats(&self) -> ExportStats {
        self.stats.clone()
    }
}
