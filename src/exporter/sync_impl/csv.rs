//! CSV 导出器实现 (同步版本)
//!
//! 语句和错误分别写入两个文件。

use super::SyncExporter;
use crate::applog::types::{ErrorEntry, StatementEntry};
use crate::error::Result;
use crate::exporter::ExportStats;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const STATEMENT_HEADER: &str =
    "timestamp,screen_id,command_kind,function,parameter_values,template_sql,final_sql\n";
const ERROR_HEADER: &str = "timestamp,screen_id,summary,details\n";

/// 同步 CSV 导出器
pub struct SyncCsvExporter {
    statements: BufWriter<File>,
    errors: BufWriter<File>,
    stats: ExportStats,
}

impl SyncCsvExporter {
    /// 创建新的同步 CSV 导出器，立即写入两个文件的表头
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        statements_path: P,
        errors_path: Q,
    ) -> Result<Self> {
        let mut statements = BufWriter::new(File::create(statements_path)?);
        let mut errors = BufWriter::new(File::create(errors_path)?);
        statements.write_all(STATEMENT_HEADER.as_bytes())?;
        errors.write_all(ERROR_HEADER.as_bytes())?;

        Ok(Self { statements, errors, stats: ExportStats::new() })
    }

    /// 转义 CSV 字段
    fn escape_csv_field(field: &str) -> String {
        if field.contains(',')
            || field.contains('"')
            || field.contains('\n')
            || field.contains('\r')
        {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_statement(entry: &StatementEntry) -> String {
        let fields = [
            Self::escape_csv_field(&entry.timestamp),
            Self::escape_csv_field(entry.screen_id.as_deref().unwrap_or("")),
            Self::escape_csv_field(&entry.command_kind),
            Self::escape_csv_field(&entry.originating_function),
            Self::escape_csv_field(&entry.parameter_values.join(", ")),
            Self::escape_csv_field(&entry.template_sql),
            Self::escape_csv_field(&entry.final_sql),
        ];
        format!("{}\n", fields.join(","))
    }

    fn format_error(entry: &ErrorEntry) -> String {
        let fields = [
            Self::escape_csv_field(&entry.timestamp),
            Self::escape_csv_field(entry.screen_id.as_deref().unwrap_or("")),
            Self::escape_csv_field(&entry.summary),
            Self::escape_csv_field(&entry.details),
        ];
        format!("{}\n", fields.join(","))
    }
}

impl SyncExporter for SyncCsvExporter {
    fn name(&self) -> &str {
        "CSV"
    }

    fn export_statements(&mut self, entries: &[StatementEntry]) -> Result<()> {
        for entry in entries {
            self.statements.write_all(Self::format_statement(entry).as_bytes())?;
        }
        self.stats.exported_statements += entries.len();

        #[cfg(feature = "logging")]
        tracing::debug!("CSV导出语句: {} 条", entries.len());
        Ok(())
    }

    fn export_errors(&mut self, entries: &[ErrorEntry]) -> Result<()> {
        for entry in entries {
            self.errors.write_all(Self::format_error(entry).as_bytes())?;
        }
        self.stats.exported_errors += entries.len();

        #[cfg(feature = "logging")]
        tracing::debug!("CSV导出错误: {} 条", entries.len());
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.statements.flush()?;
        self.errors.flush()?;
        self.stats.finish();

        #[cfg(feature = "logging")]
        tracing::info!("CSV导出完成: {}", self.stats);
        Ok(())
    }

    fn get_stats(&self) -> ExportStats {
        self.stats.clone()
    }
}
