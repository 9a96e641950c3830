//! 单次运行的完整流程
//!
//! 解析路径 → （严格模式）检查输入 → 读取 → 构建基线 → 构建候选 → 差集 → 写出。
//! 所有状态都通过参数和返回值传递，严格模式下的缺失检查先于任何读写。

use crate::config::{Config, MissingFilePolicy};
use crate::error::AppResult;
use crate::models::{
    check_required_inputs, load_lesson_materials, resolve_inputs, DiffResult, ResolvedInput,
};
use crate::services::{build_baseline, build_candidates, diff_all, OutputWriter};
use crate::utils::logging;
use std::path::PathBuf;
use tracing::info;

/// 运行结果汇总
#[derive(Debug, Clone)]
pub struct RunReport {
    pub policy: MissingFilePolicy,
    pub inputs: Vec<ResolvedInput>,
    pub baseline_character_count: usize,
    pub baseline_word_count: usize,
    pub baseline_phrase_count: usize,
    pub candidate_character_count: usize,
    pub diff: DiffResult,
    /// 新汉字 / 新词语 / 新短语的输出路径
    pub characters_path: PathBuf,
    pub words_path: PathBuf,
    pub phrases_path: PathBuf,
    /// 仅在开启基线导出时存在
    pub baseline_dump_path: Option<PathBuf>,
}

impl RunReport {
    /// 本次运行中缺失（按空处理）的输入
    pub fn missing_inputs(&self) -> impl Iterator<Item = &ResolvedInput> {
        self.inputs.iter().filter(|input| !input.present)
    }
}

/// 执行一次完整的差集计算并写出所有结果
pub fn run_pipeline(config: &Config) -> AppResult<RunReport> {
    let inputs = resolve_inputs(config);
    logging::log_inputs(&inputs);

    if config.missing_file_policy == MissingFilePolicy::Strict {
        check_required_inputs(&inputs)?;
    }

    let materials = load_lesson_materials(config)?;

    let baseline = build_baseline(&materials);
    info!(
        "📚 基线: 汉字 {} 个, 词语 {} 个, 短语 {} 个",
        baseline.characters.len(),
        baseline.words.len(),
        baseline.phrases.len()
    );

    let candidates = build_candidates(&materials);
    info!(
        "🆕 候选: 汉字 {} 个, 词语 {} 行, 短语 {} 行",
        candidates.characters.len(),
        candidates.words.len(),
        candidates.phrases.len()
    );

    let diff = diff_all(&candidates, &baseline);

    let writer = OutputWriter::with_base_dir(&config.work_dir);
    let outputs = &config.outputs;
    let characters_path = writer.write(&outputs.characters, &diff.new_characters)?;
    let words_path = writer.write(&outputs.words, &diff.new_words)?;
    let phrases_path = writer.write(&outputs.phrases, &diff.new_phrases)?;

    let baseline_dump_path = if config.write_baseline_dump {
        let all: Vec<char> = baseline.characters.iter().copied().collect();
        let path = writer.write(&outputs.baseline_characters, &all)?;
        info!("🔎 基线汉字已导出: {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(RunReport {
        policy: config.missing_file_policy,
        inputs,
        baseline_character_count: baseline.characters.len(),
        baseline_word_count: baseline.words.len(),
        baseline_phrase_count: baseline.phrases.len(),
        candidate_character_count: candidates.characters.len(),
        diff,
        characters_path,
        words_path,
        phrases_path,
        baseline_dump_path,
    })
}
