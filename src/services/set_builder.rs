//! 基线集合与候选集合的构建

use crate::models::{BaselineSets, CandidateSets, LessonMaterials};
use crate::services::extractor::{extract_chinese_chars, normalize_unit};
use std::collections::{BTreeSet, HashSet};

/// 多行文本中出现过的全部汉字
pub fn chinese_chars_from_lines<S: AsRef<str>>(lines: &[S]) -> BTreeSet<char> {
    lines
        .iter()
        .flat_map(|line| extract_chinese_chars(line.as_ref()))
        .collect()
}

/// 将多行文本归一化后收集为集合，空单元被跳过
pub fn normalized_units<'a, I>(lines: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    lines
        .into_iter()
        .map(|line| normalize_unit(line))
        .filter(|unit| !unit.is_empty())
        .collect()
}

/// 构建基线集合
///
/// 汉字基线取自全部四个旧来源，词语与短语基线只取各自的专门列表：
/// 认识一个字不代表认识包含它的短语。
pub fn build_baseline(materials: &LessonMaterials) -> BaselineSets {
    let mut characters = BTreeSet::new();
    characters.extend(chinese_chars_from_lines(&materials.prior_anki_lines));
    characters.extend(chinese_chars_from_lines(&materials.prior_lesson_char_lines));
    characters.extend(chinese_chars_from_lines(&materials.prior_lesson_word_lines));
    characters.extend(chinese_chars_from_lines(&materials.prior_lesson_phrase_lines));

    let words = normalized_units(
        materials
            .prior_anki_lines
            .iter()
            .chain(&materials.prior_lesson_word_lines),
    );
    let phrases = normalized_units(&materials.prior_lesson_phrase_lines);

    BaselineSets {
        characters,
        words,
        phrases,
    }
}

/// 构建候选集合
///
/// 候选汉字来自新课程全文以及新词语、新短语列表中的所有汉字。
pub fn build_candidates(materials: &LessonMaterials) -> CandidateSets {
    let mut characters: BTreeSet<char> = extract_chinese_chars(&materials.new_lesson_dump)
        .into_iter()
        .collect();
    characters.extend(chinese_chars_from_lines(&materials.new_lesson_word_lines));
    characters.extend(chinese_chars_from_lines(&materials.new_lesson_phrase_lines));

    CandidateSets {
        characters,
        words: materials.new_lesson_word_lines.clone(),
        phrases: materials.new_lesson_phrase_lines.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_baseline_characters_union_all_prior_sources() {
        let materials = LessonMaterials {
            prior_anki_lines: lines(&["一"]),
            prior_lesson_char_lines: lines(&["二"]),
            prior_lesson_word_lines: lines(&["三四"]),
            prior_lesson_phrase_lines: lines(&["五 (wǔ)"]),
            new_lesson_dump: "六".to_string(),
            ..Default::default()
        };
        let baseline = build_baseline(&materials);
        assert_eq!(
            baseline.characters.into_iter().collect::<String>(),
            "一三二五四"
        );
    }

    #[test]
    fn test_baseline_words_from_anki_and_prior_words_only() {
        let materials = LessonMaterials {
            prior_anki_lines: lines(&["你好 nǐ hǎo", "hello"]),
            prior_lesson_char_lines: lines(&["学生"]),
            prior_lesson_word_lines: lines(&["老师!"]),
            prior_lesson_phrase_lines: lines(&["早上好"]),
            ..Default::default()
        };
        let baseline = build_baseline(&materials);

        let mut words: Vec<_> = baseline.words.iter().cloned().collect();
        words.sort();
        assert_eq!(words, vec!["你好", "老师"]);
        assert!(!baseline.words.contains("学生"));
        assert!(!baseline.words.contains(""));
    }

    #[test]
    fn test_baseline_phrases_from_prior_phrases_only() {
        let materials = LessonMaterials {
            prior_anki_lines: lines(&["早上好"]),
            prior_lesson_phrase_lines: lines(&["晚安 (wǎn ān)", "---"]),
            ..Default::default()
        };
        let baseline = build_baseline(&materials);
        assert_eq!(baseline.phrases.len(), 1);
        assert!(baseline.phrases.contains("晚安"));
    }

    #[test]
    fn test_candidate_characters_include_word_and_phrase_lists() {
        let materials = LessonMaterials {
            new_lesson_dump: "我在学习".to_string(),
            new_lesson_word_lines: lines(&["中文"]),
            new_lesson_phrase_lines: lines(&["好久不见"]),
            ..Default::default()
        };
        let candidates = build_candidates(&materials);
        for c in "我在学习中文好久不见".chars() {
            assert!(candidates.characters.contains(&c), "缺少 {}", c);
        }
        assert_eq!(candidates.words, vec!["中文"]);
        assert_eq!(candidates.phrases, vec!["好久不见"]);
    }
}
