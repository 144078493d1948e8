//! 数据导出模块
//!
//! 将解析结果（语句与错误）导出为 CSV / JSON 文件

pub mod stats;
pub use stats::ExportStats;

pub mod sync_impl;

#[cfg(feature = "exporter-csv")]
pub use sync_impl::SyncCsvExporter;
#[cfg(feature = "exporter-json")]
pub use sync_impl::SyncJsonExporter;
pub use sync_impl::{SyncExporter, SyncMultiExporter};

