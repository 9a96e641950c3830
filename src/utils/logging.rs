//! 日志工具模块
//!
//! 提供日志初始化以及格式化输出的辅助函数

use crate::config::Config;
use crate::models::ResolvedInput;
use crate::orchestrator::RunReport;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 默认级别为 `lesson_diff=info`，可通过 `RUST_LOG` 覆盖。重复调用是安全的。
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("lesson_diff=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 课程生词提取");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📁 工作目录: {}", config.work_dir.display());
    info!("🛡️ 缺失文件策略: {}", config.missing_file_policy);
    info!("{}", "=".repeat(60));
}

/// 记录每个输入文件的绝对路径及是否存在
pub fn log_inputs(inputs: &[ResolvedInput]) {
    info!("📄 输入文件:");
    for input in inputs {
        if input.present {
            info!("  ✓ {}: {}", input.label, input.absolute.display());
        } else {
            warn!("  ✗ {}: {} (不存在)", input.label, input.absolute.display());
        }
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `report`: 运行结果
/// - `sample_size`: 展示的新汉字数量
pub fn print_final_stats(report: &RunReport, sample_size: usize) {
    let diff = &report.diff;

    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "📚 基线: 汉字 {}, 词语 {}, 短语 {} | 候选汉字 {}",
        report.baseline_character_count,
        report.baseline_word_count,
        report.baseline_phrase_count,
        report.candidate_character_count
    );
    info!(
        "- 新汉字已写入: {} ({} 个)",
        report.characters_path.display(),
        diff.new_characters.len()
    );
    info!(
        "- 新词语已写入: {} ({} 个)",
        report.words_path.display(),
        diff.new_words.len()
    );
    info!(
        "- 新短语已写入: {} ({} 个)",
        report.phrases_path.display(),
        diff.new_phrases.len()
    );
    if let Some(path) = &report.baseline_dump_path {
        info!(
            "- 基线汉字已写入: {} ({} 个)",
            path.display(),
            report.baseline_character_count
        );
    }
    if !diff.new_characters.is_empty() && sample_size > 0 {
        info!("🔤 新汉字示例: {}", sample_chars(&diff.new_characters, sample_size));
    }
    info!("{}", "=".repeat(60));
}

/// 取前 `max_len` 个字符用于日志展示，超出部分以省略号表示
///
/// # 参数
/// - `chars`: 字符列表
/// - `max_len`: 最大数量
pub fn sample_chars(chars: &[char], max_len: usize) -> String {
    let shown: String = chars.iter().take(max_len).collect();
    if chars.len() > max_len {
        shown + "..."
    } else {
        shown
    }
}
