use crate::config::{Config, MissingFilePolicy};
use crate::error::{AppError, AppResult};
use crate::models::lesson::{LessonMaterials, ResolvedInput};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// 解析全部七个输入文件的位置与存在状态（按文件表顺序）
pub fn resolve_inputs(config: &Config) -> Vec<ResolvedInput> {
    config
        .inputs
        .entries()
        .into_iter()
        .map(|(label, path)| {
            let resolved = config.resolve(path);
            let absolute = std::path::absolute(&resolved).unwrap_or_else(|_| resolved.clone());
            ResolvedInput {
                label,
                path: path.to_path_buf(),
                present: resolved.exists(),
                absolute,
            }
        })
        .collect()
}

/// 严格模式的前置检查：遇到第一个缺失的输入即返回错误
pub fn check_required_inputs(inputs: &[ResolvedInput]) -> AppResult<()> {
    match inputs.iter().find(|input| !input.present) {
        Some(missing) => Err(AppError::MissingInput {
            path: missing.path.clone(),
            absolute: missing.absolute.clone(),
        }),
        None => Ok(()),
    }
}

/// 以 UTF-8 读取整个文件
///
/// 文件不存在时：宽松模式返回空串，严格模式返回 `MissingInput`。
pub fn read_text(path: &Path, policy: MissingFilePolicy) -> AppResult<String> {
    if !path.exists() {
        return match policy {
            MissingFilePolicy::Lenient => {
                debug!("输入文件不存在，按空文件处理: {}", path.display());
                Ok(String::new())
            }
            MissingFilePolicy::Strict => Err(AppError::MissingInput {
                path: path.to_path_buf(),
                absolute: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
            }),
        };
    }

    let content = fs::read_to_string(path).map_err(|e| AppError::read_failed(path, e))?;
    debug!("已读取 {} ({} 字节)", path.display(), content.len());
    Ok(content)
}

/// 读取文件中去除首尾空白后的非空行
pub fn read_lines(path: &Path, policy: MissingFilePolicy) -> AppResult<Vec<String>> {
    let text = read_text(path, policy)?;
    Ok(split_lines(&text))
}

/// 行分隔符：`\r\n`、`\n`、单独的 `\r`、`\x0b`、`\x0c`、`\x1c`–`\x1e`、
/// U+0085、U+2028 与 U+2029
fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]")
            .expect("换行正则表达式无效")
    })
}

/// 按行切分，去除首尾空白并丢弃空行
pub fn split_lines(text: &str) -> Vec<String> {
    line_break_re()
        .split(text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 读取一次运行所需的全部输入
pub fn load_lesson_materials(config: &Config) -> AppResult<LessonMaterials> {
    let policy = config.missing_file_policy;
    let inputs = &config.inputs;
    let lines = |path: &Path| read_lines(&config.resolve(path), policy);

    Ok(LessonMaterials {
        prior_anki_lines: lines(inputs.prior_anki_characters.as_path())?,
        prior_lesson_char_lines: lines(inputs.prior_lesson_characters.as_path())?,
        prior_lesson_word_lines: lines(inputs.prior_lesson_words.as_path())?,
        prior_lesson_phrase_lines: lines(inputs.prior_lesson_phrases.as_path())?,
        new_lesson_word_lines: lines(inputs.new_lesson_words.as_path())?,
        new_lesson_phrase_lines: lines(inputs.new_lesson_phrases.as_path())?,
        new_lesson_dump: read_text(&config.resolve(&inputs.new_lesson_dump), policy)?,
    })
}
