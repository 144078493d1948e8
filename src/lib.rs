//! 应用调试日志分析库
//!
//! 从 MyBatis 风格的应用调试日志中重建 SQL 语句：
//! 将 `Preparing:` 模板与附近的 `Parameters:` 行配对，代入参数得到最终 SQL，
//! 关联屏幕编号，并抽取 ERROR 块。
//!
//! ```no_run
//! use applog_analysis::prelude::*;
//!
//! let analyzer = LogAnalyzer::default();
//! let result = analyzer.analyze_file("app.log")?;
//! for entry in &result.statements {
//!     println!("{} {}", entry.timestamp, entry.final_sql);
//! }
//! # Ok::<(), applog_analysis::AppLogError>(())
//! ```

pub mod applog;
pub mod config;
pub mod error;
pub mod exporter;
#[cfg(feature = "logging")]
pub mod logging;
pub mod process;

pub use config::{AnalysisOptions, Config};
pub use error::{AppLogError, Result};

/// 常用类型的便捷导入
pub mod prelude {
    pub use crate::applog::{
        AnalysisResult, EntryFilter, ErrorEntry, FieldMapping, LogAnalyzer, StatementEntry,
        pretty_sql,
    };
    pub use crate::config::{AnalysisOptions, Config};
    pub use crate::error::{AppLogError, Result};
    pub use crate::exporter::{ExportStats, SyncExporter, SyncMultiExporter};
}
