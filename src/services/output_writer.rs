//! 结果写入服务
//!
//! 只负责把结果写成文本文件，不关心结果如何计算

use crate::error::{AppError, AppResult};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 结果写入服务
///
/// 每个输出文件一次性整体写入：条目以 `\n` 连接，末尾不加换行，
/// 空结果写出空文件。
pub struct OutputWriter {
    base_dir: PathBuf,
}

impl OutputWriter {
    /// 以当前目录为基准创建
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }

    /// 使用自定义基准目录创建
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: dir.into(),
        }
    }

    /// 写入一组条目，返回实际写入的路径
    ///
    /// # 参数
    /// - `path`: 输出文件路径（相对路径基于 `base_dir`）
    /// - `items`: 待写入的条目
    pub fn write<T: Display>(&self, path: &Path, items: &[T]) -> AppResult<PathBuf> {
        let target = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        };

        let content = join_lines(items);
        debug!("写入 {} 条到 {}", items.len(), target.display());

        fs::write(&target, content).map_err(|e| AppError::write_failed(&target, e))?;
        Ok(target)
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// 以换行连接条目，不带末尾换行
pub fn join_lines<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
