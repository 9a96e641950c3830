//! 差集计算：候选减去基线

use crate::models::{BaselineSets, CandidateSets, DiffResult};
use crate::services::extractor::normalize_unit;
use std::collections::{BTreeSet, HashSet};

/// 新汉字，按码位升序且无重复
pub fn diff_characters(candidates: &BTreeSet<char>, baseline: &BTreeSet<char>) -> Vec<char> {
    candidates.difference(baseline).copied().collect()
}

/// 新词语或新短语
///
/// 按输入顺序遍历：归一化为空、已在基线中、或本次已输出过的单元都会被跳过，
/// 因此结果保留首次出现的顺序。
pub fn diff_units<S: AsRef<str>>(lines: &[S], baseline: &HashSet<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for line in lines {
        let unit = normalize_unit(line.as_ref());
        if unit.is_empty() || baseline.contains(&unit) || seen.contains(&unit) {
            continue;
        }
        seen.insert(unit.clone());
        result.push(unit);
    }

    result
}

pub fn diff_all(candidates: &CandidateSets, baseline: &BaselineSets) -> DiffResult {
    DiffResult {
        new_characters: diff_characters(&candidates.characters, &baseline.characters),
        new_words: diff_units(&candidates.words, &baseline.words),
        new_phrases: diff_units(&candidates.phrases, &baseline.phrases),
    }
}
