//! # Lesson Diff
//!
//! 对比已学材料与新课程材料，找出从未出现过的汉字、词语和短语
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 输入内容、集合与差集结果
//! - `loaders` - 按缺失文件策略读取七个输入文件
//!
//! ### ② 业务能力层（Services）
//! - `extractor` - 提取汉字、归一化单元
//! - `set_builder` - 构建基线集合与候选集合
//! - `differencer` - 候选减基线
//! - `OutputWriter` - 写出结果文件
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/pipeline` - 一次完整运行
//! - `orchestrator/app` - 启动与统计输出
//!
//! ## 已知限制
//!
//! 只识别 U+4E00–U+9FFF 基本区汉字，扩展区中的罕用字不会被统计。

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{Config, MissingFilePolicy};
pub use error::{AppError, AppResult};
pub use models::{DiffResult, LessonMaterials};
pub use orchestrator::{run_pipeline, App, RunReport};
pub use services::{extract_chinese_chars, normalize_unit};
