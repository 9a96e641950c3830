use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 严格模式下必需的输入文件不存在
    #[error("缺少必需的输入文件: {} (绝对路径: {})", .path.display(), .absolute.display())]
    MissingInput { path: PathBuf, absolute: PathBuf },

    /// 读取文件失败（权限不足、非 UTF-8 内容等）
    #[error("读取文件失败 ({}): {}", .path.display(), .source)]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 写入输出文件失败
    #[error("写入文件失败 ({}): {}", .path.display(), .source)]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 无法识别的缺失文件策略
    #[error("无法识别的缺失文件策略: '{value}' (可选: strict / lenient)")]
    UnknownPolicy { value: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
