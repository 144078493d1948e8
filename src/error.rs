//! 错误类型定义
//!
//! 这个模块定义了库中使用的所有错误类型，使用 thiserror 提供丰富的错误信息。
//!
//! 日志解析本身是宽松的：单行缺少分隔符或标记只会被跳过，不会产生错误。
//! 只有读取文件失败这类致命问题才会以 `AppLogError` 返回给调用方。

use std::path::PathBuf;

/// 应用日志分析的结果类型
pub type Result<T> = std::result::Result<T, AppLogError>;

/// 应用日志分析错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppLogError {
    /// 读取日志文件失败（致命，整个解析中止）
    #[error("无法读取日志文件 {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 配置文件反序列化错误
    #[error("配置解析错误: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// 配置文件序列化错误
    #[error("配置序列化错误: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON 序列化错误（仅在启用 exporter-json feature 时可用）
    #[cfg(feature = "exporter-json")]
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 日志错误（仅在启用 logging feature 时可用）
    #[cfg(feature = "logging")]
    #[error("日志错误: {0}")]
    Log(#[from] crate::logging::LogError),

    /// 其他错误
    #[error("未知错误: {0}")]
    Other(String),
}

impl AppLogError {
    /// 创建一个读取文件错误
    pub fn read_file<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        let path = path.into();
        #[cfg(feature = "logging")]
        tracing::error!("读取文件失败 {}: {}", path.display(), source);
        Self::ReadFile { path, source }
    }

    /// 创建一个配置错误
    pub fn config<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        tracing::error!("配置错误: {}", message);
        Self::Config(message)
    }

    /// 创建一个其他类型错误
    pub fn other<S: Into<String>>(message: S) -> Self {
        let message = message.into();
        #[cfg(feature = "logging")]
        tracing::error!("未知错误: {}", message);
        Self::Other(message)
    }

    /// 检查是否为读取文件错误
    pub fn is_read_error(&self) -> bool {
        matches!(self, AppLogError::ReadFile { .. })
    }

    /// 检查是否为 IO 错误（包括读取文件错误）
    pub fn is_io_error(&self) -> bool {
        matches!(self, AppLogError::Io(_) | AppLogError::ReadFile { .. })
    }

    /// 检查是否为配置错误
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AppLogError::Config(_)
                | AppLogError::TomlDe(_)
                | AppLogError::TomlSer(_)
        )
    }

    /// 检查是否为其他错误
    pub fn is_other_error(&self) -> bool {
        matches!(self, AppLogError::Other(_))
    }
}
