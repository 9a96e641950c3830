//! 应用入口 - 编排层
//!
//! 持有配置，负责启动日志、调用流程并输出最终统计。

use crate::config::Config;
use crate::orchestrator::pipeline::{run_pipeline, RunReport};
use crate::utils::logging;
use anyhow::{Context, Result};
use tracing::debug;

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);
        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> Result<RunReport> {
        let report = run_pipeline(&self.config).with_context(|| {
            format!(
                "处理课程材料失败 (工作目录: {})",
                self.config.work_dir.display()
            )
        })?;

        if self.config.verbose_logging {
            log_new_units(&report);
        }

        logging::print_final_stats(&report, self.config.sample_size);

        Ok(report)
    }
}

fn log_new_units(report: &RunReport) {
    for word in &report.diff.new_words {
        debug!("新词语: {}", word);
    }
    for phrase in &report.diff.new_phrases {
        debug!("新短语: {}", phrase);
    }
}
