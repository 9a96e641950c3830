use crate::error::{AppResult, ConfigError};
use std::fmt;
use std::path::{Path, PathBuf};

// ========== 固定文件名表 ==========

pub const PRIOR_ANKI_CHARACTERS: &str = "prior_anki_characters.txt";
pub const PRIOR_LESSON_CHARACTERS: &str = "prior_lesson_characters.txt";
pub const PRIOR_LESSON_WORDS: &str = "prior_lesson_words.txt";
pub const PRIOR_LESSON_PHRASES: &str = "prior_lesson_phrases.txt";

pub const NEW_LESSON_WORDS: &str = "new_lesson_words.txt";
pub const NEW_LESSON_PHRASES: &str = "new_lesson_phrases.txt";
pub const NEW_LESSON_DUMP: &str = "new_lesson_dump.txt";

pub const OUTPUT_CHARACTERS: &str = "output_characters.txt";
pub const OUTPUT_WORDS: &str = "output_words.txt";
pub const OUTPUT_PHRASES: &str = "output_phrases.txt";
pub const DEBUG_BASELINE_CHARACTERS: &str = "debug_baseline_characters.txt";

/// 输入文件缺失时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFilePolicy {
    /// 任一输入缺失即终止，不产生任何输出
    Strict,
    /// 缺失的输入视为空文件
    #[default]
    Lenient,
}

static POLICY_ALIASES: phf::Map<&'static str, MissingFilePolicy> = phf::phf_map! {
    "strict" => MissingFilePolicy::Strict,
    "fail-fast" => MissingFilePolicy::Strict,
    "严格" => MissingFilePolicy::Strict,
    "lenient" => MissingFilePolicy::Lenient,
    "tolerant" => MissingFilePolicy::Lenient,
    "宽松" => MissingFilePolicy::Lenient,
};

impl MissingFilePolicy {
    /// 从字符串解析策略（忽略大小写与首尾空白）
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let key = s.trim().to_lowercase();
        POLICY_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ConfigError::UnknownPolicy {
                value: s.to_string(),
            })
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            MissingFilePolicy::Strict => "strict",
            MissingFilePolicy::Lenient => "lenient",
        }
    }
}

impl fmt::Display for MissingFilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 七个输入文件的路径
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPaths {
    /// 长期词汇记录（如 Anki 牌组导出）
    pub prior_anki_characters: PathBuf,
    pub prior_lesson_characters: PathBuf,
    pub prior_lesson_words: PathBuf,
    pub prior_lesson_phrases: PathBuf,
    pub new_lesson_words: PathBuf,
    pub new_lesson_phrases: PathBuf,
    /// 新课程原始文本，逐字扫描而非逐行
    pub new_lesson_dump: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            prior_anki_characters: PathBuf::from(PRIOR_ANKI_CHARACTERS),
            prior_lesson_characters: PathBuf::from(PRIOR_LESSON_CHARACTERS),
            prior_lesson_words: PathBuf::from(PRIOR_LESSON_WORDS),
            prior_lesson_phrases: PathBuf::from(PRIOR_LESSON_PHRASES),
            new_lesson_words: PathBuf::from(NEW_LESSON_WORDS),
            new_lesson_phrases: PathBuf::from(NEW_LESSON_PHRASES),
            new_lesson_dump: PathBuf::from(NEW_LESSON_DUMP),
        }
    }
}

impl InputPaths {
    /// 按文件表顺序列出所有输入，附带日志用的中文标签
    pub fn entries(&self) -> [(&'static str, &Path); 7] {
        [
            ("长期词汇记录", self.prior_anki_characters.as_path()),
            ("已学课程汉字", self.prior_lesson_characters.as_path()),
            ("已学课程词语", self.prior_lesson_words.as_path()),
            ("已学课程短语", self.prior_lesson_phrases.as_path()),
            ("新课程词语", self.new_lesson_words.as_path()),
            ("新课程短语", self.new_lesson_phrases.as_path()),
            ("新课程全文", self.new_lesson_dump.as_path()),
        ]
    }
}

/// 四个输出文件的路径
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub characters: PathBuf,
    pub words: PathBuf,
    pub phrases: PathBuf,
    /// 仅在 `write_baseline_dump` 开启时写入
    pub baseline_characters: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            characters: PathBuf::from(OUTPUT_CHARACTERS),
            words: PathBuf::from(OUTPUT_WORDS),
            phrases: PathBuf::from(OUTPUT_PHRASES),
            baseline_characters: PathBuf::from(DEBUG_BASELINE_CHARACTERS),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 文件表中相对路径的基准目录
    pub work_dir: PathBuf,
    pub inputs: InputPaths,
    pub outputs: OutputPaths,
    /// 输入缺失时的处理策略
    pub missing_file_policy: MissingFilePolicy,
    /// 是否额外输出完整的基线汉字集合
    pub write_baseline_dump: bool,
    /// 汇总日志中展示的新汉字数量
    pub sample_size: usize,
    /// 是否逐条输出新单元
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            inputs: InputPaths::default(),
            outputs: OutputPaths::default(),
            missing_file_policy: MissingFilePolicy::default(),
            write_baseline_dump: false,
            sample_size: 20,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 以指定目录为基准的默认配置
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        let missing_file_policy = match std::env::var("MISSING_FILE_POLICY") {
            Ok(v) => MissingFilePolicy::parse(&v)?,
            Err(_) => default.missing_file_policy,
        };

        Ok(Self {
            work_dir: std::env::var("LESSON_WORK_DIR").map(PathBuf::from).unwrap_or(default.work_dir),
            missing_file_policy,
            write_baseline_dump: std::env::var("WRITE_BASELINE_DUMP").ok().and_then(|v| v.parse().ok()).unwrap_or(default.write_baseline_dump),
            sample_size: std::env::var("SAMPLE_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.sample_size),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            ..default
        })
    }

    /// 将文件表中的路径解析到工作目录下
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.work_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_aliases() {
        assert_eq!(MissingFilePolicy::parse("strict").unwrap(), MissingFilePolicy::Strict);
        assert_eq!(MissingFilePolicy::parse(" Fail-Fast ").unwrap(), MissingFilePolicy::Strict);
        assert_eq!(MissingFilePolicy::parse("严格").unwrap(), MissingFilePolicy::Strict);
        assert_eq!(MissingFilePolicy::parse("LENIENT").unwrap(), MissingFilePolicy::Lenient);
        assert_eq!(MissingFilePolicy::parse("宽松").unwrap(), MissingFilePolicy::Lenient);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let err = MissingFilePolicy::parse("sometimes").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPolicy { value } if value == "sometimes"));
    }

    #[test]
    fn test_default_file_table() {
        let config = Config::default();
        assert_eq!(config.missing_file_policy, MissingFilePolicy::Lenient);
        assert!(!config.write_baseline_dump);

        let names: Vec<_> = config
            .inputs
            .entries()
            .iter()
            .map(|(_, p)| p.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                PRIOR_ANKI_CHARACTERS,
                PRIOR_LESSON_CHARACTERS,
                PRIOR_LESSON_WORDS,
                PRIOR_LESSON_PHRASES,
                NEW_LESSON_WORDS,
                NEW_LESSON_PHRASES,
                NEW_LESSON_DUMP,
            ]
        );
    }

    #[test]
    fn test_resolve_joins_relative_paths_only() {
        let config = Config::with_work_dir("/lessons/week3");
        assert_eq!(
            config.resolve(Path::new(OUTPUT_WORDS)),
            PathBuf::from("/lessons/week3/output_words.txt")
        );
        assert_eq!(
            config.resolve(Path::new("/tmp/elsewhere.txt")),
            PathBuf::from("/tmp/elsewhere.txt")
        );
    }
}
