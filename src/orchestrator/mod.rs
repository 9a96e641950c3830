//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 持有配置
//! - 输出启动信息和最终统计
//!
//! ### `pipeline` - 单次运行流程
//! - 解析输入路径，按策略处理缺失文件
//! - 调用 services 构建集合、计算差集、写出结果
//!
//! ## 层次关系
//!
//! ```text
//! app
//!     ↓
//! pipeline (一次完整运行)
//!     ↓
//! models::loaders (读取输入)  +  services (提取 / 集合 / 差集 / 写出)
//! ```

pub mod app;
pub mod pipeline;

pub use app::App;
pub use pipeline::{run_pipeline, RunReport};
