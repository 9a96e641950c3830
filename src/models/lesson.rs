//! 课程输入数据

use std::path::PathBuf;

/// 单个输入文件的解析结果（用于日志汇总）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// 中文标签，如 "已学课程词语"
    pub label: &'static str,
    /// 配置中的路径
    pub path: PathBuf,
    /// 解析后的绝对路径
    pub absolute: PathBuf,
    pub present: bool,
}

/// 一次运行所需的全部输入内容
///
/// 行类输入已去除首尾空白并丢弃空行；`new_lesson_dump` 保留原文。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonMaterials {
    pub prior_anki_lines: Vec<String>,
    pub prior_lesson_char_lines: Vec<String>,
    pub prior_lesson_word_lines: Vec<String>,
    pub prior_lesson_phrase_lines: Vec<String>,
    pub new_lesson_word_lines: Vec<String>,
    pub new_lesson_phrase_lines: Vec<String>,
    pub new_lesson_dump: String,
}
