//! 汉字 / 词语 / 短语集合及差集结果

use std::collections::{BTreeSet, HashSet};

/// 已知单元的基线集合，构建后不再修改
#[derive(Debug, Clone, Default)]
pub struct BaselineSets {
    /// 所有旧材料中出现过的汉字
    pub characters: BTreeSet<char>,
    /// 归一化后的已知词语
    pub words: HashSet<String>,
    /// 归一化后的已知短语
    pub phrases: HashSet<String>,
}

/// 新课程中出现的候选单元
///
/// 词语与短语保留文件中的顺序（可能重复），去重交给差集阶段完成。
#[derive(Debug, Clone, Default)]
pub struct CandidateSets {
    pub characters: BTreeSet<char>,
    pub words: Vec<String>,
    pub phrases: Vec<String>,
}

/// 候选减去基线后的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// 按码位升序
    pub new_characters: Vec<char>,
    /// 按首次出现顺序
    pub new_words: Vec<String>,
    /// 按首次出现顺序
    pub new_phrases: Vec<String>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.new_characters.is_empty() && self.new_words.is_empty() && self.new_phrases.is_empty()
    }
}
