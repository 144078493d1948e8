//! 应用日志解析模块
//!
//! 将持久层框架的调试日志还原为可读的 SQL 语句和错误块

pub mod analyzer;
pub mod classifier;
pub mod correlator;
pub mod error_block;
pub mod field_mapper;
pub mod filter;
pub mod formatter;
pub mod io;
pub mod params;
pub mod reconstructor;
pub mod types;

// 重新导出核心类型和函数
pub use analyzer::LogAnalyzer;
pub use correlator::ThreadContext;
pub use field_mapper::map_fields;
pub use filter::EntryFilter;
pub use formatter::pretty_sql;
pub use types::{
    AnalysisResult, ErrorEntry, FieldMapping, LogLine, ParameterToken,
    StatementEntry,
};
