//! 配置管理模块
//!
//! 提供统一的配置文件读取和管理功能

use crate::error::{AppLogError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 主配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 日志配置
    #[serde(default)]
    pub log: LogSection,
    /// 解析参数
    #[serde(default)]
    pub analysis: AnalysisOptions,
    /// 导出配置
    #[serde(default)]
    pub export: ExportConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// 是否启用控制台输出
    pub enable_stdout: bool,
    /// 日志输出目录，为空时不写文件
    pub log_dir: Option<String>,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self { enable_stdout: true, log_dir: None, level: "info".to_string() }
    }
}

/// 解析引擎参数
///
/// 一般无需修改默认值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// 语句行前后查找 `Parameters:` 行的半径（行数）
    pub parameter_window: usize,
    /// 窗口内无参数块时向后兜底查找的行数
    pub fallback_lookahead: usize,
    /// 语句行前后查找画面 ID 的半径（行数）
    pub screen_window: usize,
    /// 字段映射反向查找标识符的字符数
    pub field_lookback_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            parameter_window: 6,
            fallback_lookahead: 5,
            screen_window: 5,
            field_lookback_chars: 80,
        }
    }
}

/// 导出配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// CSV 导出配置
    #[serde(default)]
    pub csv: Option<CsvConfig>,
    /// JSON 导出配置
    #[serde(default)]
    pub json: Option<JsonConfig>,
}

/// CSV 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvConfig {
    /// 语句输出文件路径
    pub statements_path: String,
    /// 错误输出文件路径
    pub errors_path: String,
}

/// JSON 导出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonConfig {
    /// 输出文件路径
    pub out_path: String,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// 从字符串加载配置
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        match self.log.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(AppLogError::config(format!(
                    "无效的日志级别: {}",
                    self.log.level
                )));
            }
        }

        if self.analysis.parameter_window == 0 {
            return Err(AppLogError::config("参数查找窗口不能为0"));
        }

        if self.export.csv.is_none() && self.export.json.is_none() {
            #[cfg(feature = "logging")]
            tracing::debug!("没有配置任何导出格式");
        }

        Ok(())
    }
}
